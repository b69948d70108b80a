//! Entity Component System module
//!
//! Components for the entities that occupy generated tiles.

pub mod components;

pub use components::*;
