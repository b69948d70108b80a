//! Player stats
//!
//! The player is not an entity of any region: it travels between them, so its
//! stats live on the game and its position lives on the active region.

use crate::data::PlayerConfig;
use crate::ecs::{FoodKind, Loot};

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub health: f32,
    pub gold: u32,
    /// Visibility radius used for revelation sweeps
    pub line_of_sight: u32,
    pub starvation_rate: f32,
    pub wall_damage: i32,
    pub enemy_damage: i32,
    pub points_per_food: f32,
    pub points_per_soda: f32,
}

impl PlayerStats {
    pub fn new(config: &PlayerConfig, line_of_sight: u32) -> Self {
        Self {
            health: config.health,
            gold: 0,
            line_of_sight,
            starvation_rate: config.starvation_rate,
            wall_damage: config.wall_damage,
            enemy_damage: config.enemy_damage,
            points_per_food: config.points_per_food,
            points_per_soda: config.points_per_soda,
        }
    }

    /// Every move attempt costs food
    pub fn starve(&mut self) {
        self.health -= self.starvation_rate;
    }

    pub fn lose_health(&mut self, amount: f32) {
        self.health -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Apply collected loot, returns health gained
    pub fn collect(&mut self, loot: Loot) -> f32 {
        match loot {
            Loot::Food(FoodKind::Ration) => {
                self.health += self.points_per_food;
                self.points_per_food
            }
            Loot::Food(FoodKind::Soda) => {
                self.health += self.points_per_soda;
                self.points_per_soda
            }
            Loot::Gold(amount) => {
                self.gold += amount;
                0.0
            }
        }
    }
}
