//! Tile content and placement
//!
//! Decides what occupies a freshly generated coordinate.

use serde::{Deserialize, Serialize};

use super::dice::{pick_variant, Dice};
use crate::data::{ContentOdds, EnemyConfig, GameConfig, Palette};
use crate::ecs::{Chest, Enemy, FoodKind, Position, Wall};

/// What occupies a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileContent {
    /// Walkable ground, nothing on it
    Floor,
    Wall(Wall),
    /// Portal between overworld and dungeon
    Door,
    Chest(Chest),
    Enemy(Enemy),
    Food(FoodKind),
    Gold(u32),
    /// Not generated
    Empty,
}

impl TileContent {
    /// Category used for palette lookup; `None` for Floor and Empty
    pub fn kind(&self) -> Option<ContentKind> {
        match self {
            TileContent::Wall(_) => Some(ContentKind::Wall),
            TileContent::Door => Some(ContentKind::Door),
            TileContent::Chest(_) => Some(ContentKind::Chest),
            TileContent::Enemy(_) => Some(ContentKind::Enemy),
            TileContent::Food(_) | TileContent::Gold(_) => Some(ContentKind::Food),
            TileContent::Floor | TileContent::Empty => None,
        }
    }

    /// Does this content stop the player from walking onto its tile
    pub fn blocks_movement(&self) -> bool {
        match self {
            TileContent::Wall(_) | TileContent::Enemy(_) => true,
            TileContent::Chest(chest) => !chest.opened,
            _ => false,
        }
    }
}

/// Content categories that have art variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    Wall,
    Door,
    Chest,
    Enemy,
    Food,
}

impl Palette {
    pub fn variants(&self, kind: ContentKind) -> u32 {
        match kind {
            ContentKind::Wall => self.wall,
            ContentKind::Door => self.door,
            ContentKind::Chest => self.chest,
            ContentKind::Enemy => self.enemy,
            ContentKind::Food => self.food,
        }
    }
}

/// Result of a placement decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub content: TileContent,
    pub variant: u32,
    /// Category that was chosen but had no variants configured
    pub starved: Option<ContentKind>,
}

impl Placement {
    pub fn floor() -> Self {
        Self {
            content: TileContent::Floor,
            variant: 0,
            starved: None,
        }
    }

    /// Attach a variant of the content's category, degrading to Floor if the
    /// palette for it is empty
    pub fn with_variant(content: TileContent, palette: &Palette, dice: &mut impl Dice) -> Self {
        let Some(kind) = content.kind() else {
            return Self { content, variant: 0, starved: None };
        };
        match pick_variant(palette.variants(kind), dice) {
            Some(variant) => Self { content, variant, starved: None },
            None => Self { starved: Some(kind), ..Self::floor() },
        }
    }
}

/// Probabilistic content decisions for newly generated tiles
#[derive(Debug, Clone)]
pub struct ContentPlacer {
    odds: ContentOdds,
    palette: Palette,
    wall_hp: i32,
    enemy: EnemyConfig,
}

impl ContentPlacer {
    pub fn new(odds: ContentOdds, palette: Palette, wall_hp: i32, enemy: EnemyConfig) -> Self {
        Self { odds, palette, wall_hp, enemy }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.odds, config.palette, config.wall.hp, config.enemy)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Decide what goes on `pos`.
    ///
    /// The player's own tile is always Floor and consumes no rolls. Elsewhere
    /// the trials run in order and the first hit wins; each is an independent
    /// fresh roll, so they are not a normalized distribution.
    pub fn decide(&self, pos: Position, player: Position, dice: &mut impl Dice) -> Placement {
        if pos == player {
            return Placement::floor();
        }

        let content = if self.odds.wall.hits(dice) {
            TileContent::Wall(Wall::new(self.wall_hp))
        } else if self.odds.door.hits(dice) {
            TileContent::Door
        } else if self.odds.chest.hits(dice) {
            TileContent::Chest(Chest::default())
        } else if self.odds.enemy.hits(dice) {
            TileContent::Enemy(self.fresh_enemy())
        } else {
            return Placement::floor();
        };

        Placement::with_variant(content, &self.palette, dice)
    }

    fn fresh_enemy(&self) -> Enemy {
        Enemy {
            hp: self.enemy.hp,
            damage: self.enemy.damage,
            move_ticks: self.enemy.move_ticks,
            skip_next_turn: false,
        }
    }
}
