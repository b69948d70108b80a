//! Grid index
//!
//! Sparse record of which coordinates of a region have been generated.

use std::collections::HashSet;

use crate::ecs::Position;

/// Set of generated coordinates. Only grows while its region lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridIndex {
    visited: HashSet<Position>,
}

impl GridIndex {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.visited.contains(&pos)
    }

    /// Mark a coordinate as generated. Returns true if it was not already.
    #[inline]
    pub fn mark_visited(&mut self, pos: Position) -> bool {
        self.visited.insert(pos)
    }

    /// Forget everything. Only used when a region is (re)built.
    pub fn clear(&mut self) {
        self.visited.clear();
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.visited.iter()
    }
}
