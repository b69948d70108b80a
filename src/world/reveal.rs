//! Line of sight revelation
//!
//! The world is generated lazily: whatever the player can see for the first
//! time is rolled and placed, everything already generated is left alone.

use hecs::Entity;

use super::circle::circle;
use super::content::{ContentPlacer, TileContent};
use super::dice::Dice;
use super::region::Region;
use crate::ecs::Position;

/// A tile generated by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revealed {
    pub pos: Position,
    pub content: TileContent,
    /// Entity spawned for non-Floor content
    pub entity: Option<Entity>,
}

/// Generates newly visible tiles around the player
#[derive(Debug, Clone)]
pub struct WorldRevealer {
    placer: ContentPlacer,
}

impl WorldRevealer {
    pub fn new(placer: ContentPlacer) -> Self {
        Self { placer }
    }

    pub fn placer(&self) -> &ContentPlacer {
        &self.placer
    }

    /// Sweep circles of radius `0..visibility_radius` around `player` and
    /// generate every coordinate not yet in the region's grid.
    ///
    /// Safe to call on every move: coordinates already generated (including
    /// points shared between neighbouring radii) are skipped, so a repeat call
    /// from the same spot does nothing.
    pub fn reveal(
        &self,
        region: &mut Region,
        player: Position,
        visibility_radius: u32,
        dice: &mut impl Dice,
    ) -> Vec<Revealed> {
        region.set_player_pos(player);
        let mut revealed = Vec::new();

        for radius in 0..visibility_radius {
            for pos in circle(player, radius) {
                if !region.grid_mut().mark_visited(pos) {
                    continue;
                }

                let placement = self.placer.decide(pos, player, dice);
                if let Some(kind) = placement.starved {
                    log::warn!(
                        "No {:?} variants configured, placed floor at ({}, {}) instead",
                        kind, pos.x, pos.y
                    );
                }

                let entity = region.place(pos, &placement);
                revealed.push(Revealed {
                    pos,
                    content: placement.content,
                    entity,
                });
            }
        }

        if !revealed.is_empty() {
            log::debug!(
                "Revealed {} tiles around ({}, {}), {:?} region now has {}",
                revealed.len(),
                player.x,
                player.y,
                region.kind(),
                region.grid().len()
            );
        }
        revealed
    }
}
