//! Random source for content placement
//!
//! Placement only ever asks for "a number in `0..sides`". Keeping that behind a
//! trait lets tests script exact rolls while gameplay uses any `rand::Rng`.

use rand::Rng;
use serde::{Deserialize, Serialize};

pub trait Dice {
    /// Uniform roll in `0..sides`. `sides` must be at least 1.
    fn roll(&mut self, sides: u32) -> u32;
}

impl<R: Rng + ?Sized> Dice for R {
    fn roll(&mut self, sides: u32) -> u32 {
        self.gen_range(0..sides)
    }
}

/// A "one in N" trial: roll `0..N`, hit on exactly 1.
///
/// `0` disables the trial. `1` can never hit and is rejected by config validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chance {
    pub one_in: u32,
}

impl Chance {
    pub const NEVER: Chance = Chance { one_in: 0 };

    pub const fn one_in(one_in: u32) -> Self {
        Self { one_in }
    }

    /// Run the trial. Disabled chances consume no roll.
    pub fn hits(self, dice: &mut impl Dice) -> bool {
        self.one_in != 0 && dice.roll(self.one_in) == 1
    }

    pub fn is_valid(self) -> bool {
        self.one_in != 1
    }
}

/// Pick one of `count` variants. Returns `None` for an empty set; a single
/// variant is chosen without rolling.
pub fn pick_variant(count: u32, dice: &mut impl Dice) -> Option<u32> {
    match count {
        0 => None,
        1 => Some(0),
        n => Some(dice.roll(n)),
    }
}
