//! Enemy combat and turns
//!
//! Enemies do not path. On their turn they strike if the player stands next to
//! them, and they only act every other turn.

use hecs::Entity;

use crate::ecs::{Enemy, Position};
use crate::world::Region;

/// Outcome of the player striking an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyHit {
    Wounded { hp: i32 },
    Slain { entity: Entity },
}

/// What an enemy did with its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAction {
    /// Resting this turn
    Skipped,
    /// Player out of reach
    Idle,
    Attacked { damage: i32 },
}

/// Strike the enemy on `pos`. A slain enemy is despawned.
pub fn hit_enemy(region: &mut Region, pos: Position, amount: i32) -> Option<EnemyHit> {
    let entity = region.occupant_at(pos)?;
    {
        let mut enemy = region.world_mut().get::<&mut Enemy>(entity).ok()?;
        if !enemy.take_damage(amount) {
            return Some(EnemyHit::Wounded { hp: enemy.hp });
        }
    }
    region.remove_occupant(pos);
    log::debug!("Enemy at ({}, {}) slain", pos.x, pos.y);
    Some(EnemyHit::Slain { entity })
}

/// Run one enemy's turn against the player at `player`.
///
/// Returns `None` if the entity is no longer an enemy in this region, along
/// with how many ticks to wait before the next enemy acts.
pub fn enemy_turn(region: &mut Region, entity: Entity, player: Position) -> Option<(EnemyAction, u32)> {
    let world = region.world_mut();
    let pos = *world.get::<&Position>(entity).ok()?;
    let mut enemy = world.get::<&mut Enemy>(entity).ok()?;

    let action = if enemy.skip_next_turn {
        enemy.skip_next_turn = false;
        EnemyAction::Skipped
    } else {
        enemy.skip_next_turn = true;
        if pos.distance(&player) == 1 {
            EnemyAction::Attacked { damage: enemy.damage }
        } else {
            EnemyAction::Idle
        }
    };
    Some((action, enemy.move_ticks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Placement, RegionKind, TileContent};

    fn region_with_enemy(pos: Position, hp: i32) -> (Region, Entity) {
        let mut region = Region::new(RegionKind::Dungeon);
        region.build_initial(Position::ORIGIN);
        region.grid_mut().mark_visited(pos);
        let enemy = Enemy { hp, damage: 10, move_ticks: 2, skip_next_turn: false };
        let entity = region
            .place(pos, &Placement { content: TileContent::Enemy(enemy), variant: 0, starved: None })
            .unwrap();
        (region, entity)
    }

    #[test]
    fn test_enemy_dies_at_zero_hp() {
        let pos = Position::new(1, 0);
        let (mut region, entity) = region_with_enemy(pos, 2);

        assert_eq!(hit_enemy(&mut region, pos, 1), Some(EnemyHit::Wounded { hp: 1 }));
        assert_eq!(hit_enemy(&mut region, pos, 1), Some(EnemyHit::Slain { entity }));
        assert_eq!(region.content_at(pos), TileContent::Floor);
        assert!(region.enemies().is_empty());
        assert_eq!(hit_enemy(&mut region, pos, 1), None);
    }

    #[test]
    fn test_adjacent_enemy_attacks_every_other_turn() {
        let (mut region, entity) = region_with_enemy(Position::new(1, 0), 3);
        let player = Position::ORIGIN;

        assert_eq!(enemy_turn(&mut region, entity, player), Some((EnemyAction::Attacked { damage: 10 }, 2)));
        assert_eq!(enemy_turn(&mut region, entity, player), Some((EnemyAction::Skipped, 2)));
        assert_eq!(enemy_turn(&mut region, entity, player), Some((EnemyAction::Attacked { damage: 10 }, 2)));
    }

    #[test]
    fn test_distant_or_diagonal_enemy_idles() {
        let (mut region, entity) = region_with_enemy(Position::new(1, 1), 3);
        assert_eq!(enemy_turn(&mut region, entity, Position::ORIGIN), Some((EnemyAction::Idle, 2)));
    }

    #[test]
    fn test_despawned_enemy_has_no_turn() {
        let pos = Position::new(0, 1);
        let (mut region, entity) = region_with_enemy(pos, 1);
        hit_enemy(&mut region, pos, 5);
        assert_eq!(enemy_turn(&mut region, entity, Position::ORIGIN), None);
    }
}
