//! Destructible walls

use crate::data::{Palette, WallConfig};
use crate::ecs::{FoodKind, Position, Wall};
use crate::world::{Dice, Placement, Region, TileContent};

/// Outcome of hitting a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallHit {
    Damaged { hp: i32 },
    /// The wall is gone; it may have left food behind
    Crumbled { dropped: Option<FoodKind> },
}

/// Chop at the wall on `pos`. Returns `None` if there is no wall there.
pub fn damage_wall(
    region: &mut Region,
    pos: Position,
    amount: i32,
    config: &WallConfig,
    palette: &Palette,
    dice: &mut impl Dice,
) -> Option<WallHit> {
    let entity = region.occupant_at(pos)?;
    {
        let mut wall = region.world_mut().get::<&mut Wall>(entity).ok()?;
        if !wall.take_damage(amount) {
            return Some(WallHit::Damaged { hp: wall.hp });
        }
    }

    region.remove_occupant(pos);

    let mut dropped = None;
    if config.food_drop.hits(dice) {
        let kind = if dice.roll(2) == 0 { FoodKind::Ration } else { FoodKind::Soda };
        let placement = Placement::with_variant(TileContent::Food(kind), palette, dice);
        match placement.starved {
            Some(category) => log::warn!(
                "No {:?} variants configured, wall at ({}, {}) dropped nothing",
                category, pos.x, pos.y
            ),
            None => {
                region.place(pos, &placement);
                dropped = Some(kind);
            }
        }
    }

    log::debug!("Wall at ({}, {}) crumbled, dropped {:?}", pos.x, pos.y, dropped);
    Some(WallHit::Crumbled { dropped })
}
