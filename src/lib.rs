//! Tales of Wonder - procedural world revelation
//!
//! The overworld is generated as the player's line of sight uncovers it.
//! Doors lead into dungeons that exist only for the length of a visit.

pub mod data;
pub mod ecs;
pub mod entities;
pub mod game;
pub mod world;

// Re-export commonly used types
pub use data::GameConfig;
pub use ecs::Position;
pub use game::{Game, GameState, RegionLifecycle, RegionState};
pub use world::{Region, TileContent, WorldRevealer};
