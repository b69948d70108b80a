//! Overworld ⇄ dungeon lifecycle
//!
//! The overworld lives for the whole game and is only hidden while the player
//! is underground. A dungeon is built from scratch on every entry and dropped
//! on exit, so nothing of it survives a revisit.

use thiserror::Error;

use super::turn::EnemyRoster;
use crate::ecs::Position;
use crate::world::{Region, RegionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionState {
    InOverworld,
    InDungeon,
}

impl RegionState {
    /// Where a portal leads from here
    pub fn other(self) -> Self {
        match self {
            RegionState::InOverworld => RegionState::InDungeon,
            RegionState::InDungeon => RegionState::InOverworld,
        }
    }
}

/// Transition requested from the wrong state. Always a caller bug.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("invariant violation: cannot enter a dungeon while already in one")]
    AlreadyInDungeon,
    #[error("invariant violation: cannot exit a dungeon while in the overworld")]
    NotInDungeon,
}

/// Owns both regions and the roster of enemies that act in the active one
pub struct RegionLifecycle {
    overworld: Region,
    dungeon: Option<Region>,
    dungeon_origin: Position,
    roster: EnemyRoster,
}

impl RegionLifecycle {
    /// Build the overworld seeded at `overworld_start`
    pub fn new(overworld_start: Position, dungeon_origin: Position) -> Self {
        let mut overworld = Region::new(RegionKind::Overworld);
        overworld.build_initial(overworld_start);
        Self {
            overworld,
            dungeon: None,
            dungeon_origin,
            roster: EnemyRoster::new(),
        }
    }

    pub fn state(&self) -> RegionState {
        if self.dungeon.is_some() {
            RegionState::InDungeon
        } else {
            RegionState::InOverworld
        }
    }

    pub fn active(&self) -> &Region {
        self.dungeon.as_ref().unwrap_or(&self.overworld)
    }

    pub fn active_mut(&mut self) -> &mut Region {
        self.dungeon.as_mut().unwrap_or(&mut self.overworld)
    }

    pub fn overworld(&self) -> &Region {
        &self.overworld
    }

    pub fn dungeon(&self) -> Option<&Region> {
        self.dungeon.as_ref()
    }

    pub fn roster(&self) -> &EnemyRoster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut EnemyRoster {
        &mut self.roster
    }

    /// Player position in the active region's frame
    pub fn player_pos(&self) -> Position {
        self.active().player_pos()
    }

    /// Hide the overworld and build a fresh dungeon with the player at its origin
    pub fn enter_dungeon(&mut self) -> Result<(), InvariantViolation> {
        if self.dungeon.is_some() {
            return Err(InvariantViolation::AlreadyInDungeon);
        }

        self.overworld.set_active(false);
        self.roster.clear();

        let mut dungeon = Region::new(RegionKind::Dungeon);
        dungeon.build_initial(self.dungeon_origin);
        self.dungeon = Some(dungeon);
        self.refill_roster();

        log::info!(
            "Entered dungeon, overworld position ({}, {}) saved",
            self.overworld.player_pos().x,
            self.overworld.player_pos().y
        );
        Ok(())
    }

    /// Destroy the dungeon and return the player to where they left the overworld
    pub fn exit_dungeon(&mut self) -> Result<(), InvariantViolation> {
        let Some(dungeon) = self.dungeon.take() else {
            return Err(InvariantViolation::NotInDungeon);
        };
        log::info!("Exited dungeon, discarding {} generated tiles", dungeon.grid().len());
        drop(dungeon);

        self.roster.clear();
        self.overworld.set_active(true);
        self.refill_roster();
        Ok(())
    }

    /// Enemies already standing in the newly active region resume acting
    fn refill_roster(&mut self) {
        let enemies = self.active().enemies();
        self.roster.fill(enemies);
    }
}
