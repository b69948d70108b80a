//! Game module - Core game logic and state management

mod lifecycle;
mod state;
mod transition;
mod turn;

pub use lifecycle::{InvariantViolation, RegionLifecycle, RegionState};
pub use state::{Collidable, Game, GameError, GameState, Interaction, MoveOutcome, TileEvent};
pub use transition::{TransitionPending, TransitionQueue};
pub use turn::EnemyRoster;
