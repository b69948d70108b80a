//! Chests and ground pickups
//!
//! A chest blocks movement until it is bumped open. Its loot is only rolled at
//! that moment, then sits in the open chest until the player walks onto it.

use crate::ecs::{BlocksMovement, Chest, Food, FoodKind, Gold, Loot, Position};
use crate::world::{Dice, Region};

/// Roll what an opened chest holds
pub fn roll_loot(gold_per_pile: u32, dice: &mut impl Dice) -> Loot {
    match dice.roll(3) {
        0 => Loot::Food(FoodKind::Ration),
        1 => Loot::Food(FoodKind::Soda),
        _ => Loot::Gold(gold_per_pile),
    }
}

/// Open the chest on `pos`. Returns the rolled loot, or `None` if there is no
/// unopened chest there.
pub fn open_chest(region: &mut Region, pos: Position, gold_per_pile: u32, dice: &mut impl Dice) -> Option<Loot> {
    let entity = region.occupant_at(pos)?;
    let loot = {
        let mut chest = region.world_mut().get::<&mut Chest>(entity).ok()?;
        if chest.opened {
            return None;
        }
        let loot = roll_loot(gold_per_pile, dice);
        *chest = Chest { opened: true, loot: Some(loot) };
        loot
    };

    if region.world_mut().remove_one::<BlocksMovement>(entity).is_err() {
        log::warn!("Chest at ({}, {}) was not blocking", pos.x, pos.y);
    }
    log::debug!("Opened chest at ({}, {}): {:?}", pos.x, pos.y, loot);
    Some(loot)
}

/// Collect whatever can be picked up on `pos`: loot lying in an open chest,
/// or a food/gold pickup on the ground (which is consumed).
pub fn take_pickup(region: &mut Region, pos: Position) -> Option<Loot> {
    let entity = region.occupant_at(pos)?;

    if let Ok(mut chest) = region.world_mut().get::<&mut Chest>(entity) {
        return if chest.opened { chest.loot.take() } else { None };
    }

    let loot = {
        let world = region.world();
        if let Ok(food) = world.get::<&Food>(entity) {
            Loot::Food(food.kind)
        } else if let Ok(gold) = world.get::<&Gold>(entity) {
            Loot::Gold(gold.amount)
        } else {
            return None;
        }
    };
    region.remove_occupant(pos);
    Some(loot)
}
