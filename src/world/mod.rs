//! World module
//!
//! Regions, their grid index, and the lazy line-of-sight world generator.

pub mod circle;
pub mod content;
pub mod dice;
pub mod grid;
pub mod region;
pub mod reveal;

pub use circle::circle;
pub use content::{ContentKind, ContentPlacer, Placement, TileContent};
pub use dice::{Chance, Dice};
pub use grid::GridIndex;
pub use region::{Region, RegionKind};
pub use reveal::{Revealed, WorldRevealer};
