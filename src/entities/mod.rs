//! Entity creation and interaction

pub mod chests;
pub mod enemies;
pub mod player;
pub mod spawn;
pub mod walls;

pub use chests::{open_chest, roll_loot, take_pickup};
pub use enemies::{enemy_turn, hit_enemy, EnemyAction, EnemyHit};
pub use player::PlayerStats;
pub use spawn::{blocks_movement, content_of, spawn_content};
pub use walls::{damage_wall, WallHit};
