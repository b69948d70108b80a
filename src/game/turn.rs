//! Enemy roster
//!
//! The enemies that take part in the enemies-act phase of the active region.

use hecs::Entity;

/// Enemies in the order they act
#[derive(Debug, Clone, Default)]
pub struct EnemyRoster {
    turn_order: Vec<Entity>,
    /// Completed enemy phases
    round: u32,
}

impl EnemyRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the roster with the given enemies
    pub fn fill(&mut self, enemies: Vec<Entity>) {
        self.turn_order = enemies;
    }

    /// Add a newly revealed enemy at the back of the order
    pub fn add(&mut self, entity: Entity) {
        if !self.turn_order.contains(&entity) {
            self.turn_order.push(entity);
        }
    }

    /// Remove an entity from the roster (slain, despawned)
    pub fn remove(&mut self, entity: Entity) -> bool {
        match self.turn_order.iter().position(|&e| e == entity) {
            Some(pos) => {
                self.turn_order.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.turn_order.clear();
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.turn_order.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.turn_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turn_order.is_empty()
    }

    pub fn enemies(&self) -> &[Entity] {
        &self.turn_order
    }

    /// Mark an enemy phase as finished
    pub fn finish_round(&mut self) {
        self.round += 1;
    }

    pub fn round(&self) -> u32 {
        self.round
    }
}
