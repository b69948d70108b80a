//! Delayed region transitions
//!
//! Stepping on a portal does not swap regions immediately: the player settles
//! on the tile first. While a transition is pending every other trigger and
//! every move is refused.

use super::lifecycle::RegionState;

/// A region swap waiting for its tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionPending {
    pub target: RegionState,
    pub ready_at: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TransitionQueue {
    pending: Option<TransitionPending>,
}

impl TransitionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a transition `delay` ticks after `now`. Refused (returns
    /// false) while another one is in flight.
    pub fn schedule(&mut self, target: RegionState, now: u64, delay: u64) -> bool {
        if self.pending.is_some() {
            log::debug!("Ignoring transition to {:?}, one is already pending", target);
            return false;
        }
        self.pending = Some(TransitionPending {
            target,
            ready_at: now + delay,
        });
        true
    }

    /// Guard flag: a transition has been triggered and not yet applied
    pub fn in_transit(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<TransitionPending> {
        self.pending
    }

    /// Pop the pending transition once its tick has come
    pub fn take_ready(&mut self, now: u64) -> Option<TransitionPending> {
        match self.pending {
            Some(pending) if now >= pending.ready_at => self.pending.take(),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
