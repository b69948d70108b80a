//! ECS Components
//!
//! Components attached to the entities a region spawns for its tiles.

use serde::{Deserialize, Serialize};

// ============================================================================
// Position
// ============================================================================

/// Integer grid coordinate. The only key used to address tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by a delta
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance to another position
    pub fn distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chebyshev distance (allows diagonal)
    pub fn chebyshev_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

// ============================================================================
// Markers
// ============================================================================

/// Occupant stops the player from stepping onto its tile
#[derive(Debug, Clone, Copy, Default)]
pub struct BlocksMovement;

/// Which art variant of its category this entity was spawned with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant(pub u32);

/// A door tile. Stepping onto it moves the player between overworld and dungeon.
#[derive(Debug, Clone, Copy, Default)]
pub struct Portal;

// ============================================================================
// Destructibles & containers
// ============================================================================

/// Wall that can be chopped down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    pub hp: i32,
    /// Has been hit at least once (shows the damaged sprite)
    pub damaged: bool,
}

impl Wall {
    pub fn new(hp: i32) -> Self {
        Self { hp, damaged: false }
    }

    /// Apply damage, returns true if the wall crumbled
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.damaged = true;
        self.hp -= amount;
        self.hp <= 0
    }
}

/// Something lying in a chest or on the ground that the player can collect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Loot {
    Food(FoodKind),
    Gold(u32),
}

/// A chest. Loot is only rolled when it is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Chest {
    pub opened: bool,
    pub loot: Option<Loot>,
}

// ============================================================================
// Pickups
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodKind {
    Ration,
    Soda,
}

/// Edible pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub kind: FoodKind,
}

/// Gold pile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gold {
    pub amount: u32,
}

// ============================================================================
// Enemies
// ============================================================================

/// Hostile occupant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub hp: i32,
    /// Health taken from the player per attack
    pub damage: i32,
    /// Ticks to wait after this enemy acts before the next one does
    pub move_ticks: u32,
    /// Enemies act every other turn
    pub skip_next_turn: bool,
}

impl Enemy {
    /// Apply damage, returns true if the enemy died
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.hp -= amount;
        self.hp <= 0
    }
}
