//! Turning placement decisions into entities and back

use hecs::{Entity, World};

use crate::ecs::{BlocksMovement, Chest, Enemy, Food, Gold, Portal, Position, Variant, Wall};
use crate::world::{Placement, TileContent};

/// Spawn the entity for a placement. Floor and Empty spawn nothing.
pub fn spawn_content(world: &mut World, pos: Position, placement: &Placement) -> Option<Entity> {
    let variant = Variant(placement.variant);
    let entity = match placement.content {
        TileContent::Floor | TileContent::Empty => return None,
        TileContent::Wall(wall) => world.spawn((pos, wall, variant, BlocksMovement)),
        TileContent::Door => world.spawn((pos, Portal, variant)),
        TileContent::Chest(chest) if chest.opened => world.spawn((pos, chest, variant)),
        TileContent::Chest(chest) => world.spawn((pos, chest, variant, BlocksMovement)),
        TileContent::Enemy(enemy) => world.spawn((pos, enemy, variant, BlocksMovement)),
        TileContent::Food(kind) => world.spawn((pos, Food { kind }, variant)),
        TileContent::Gold(amount) => world.spawn((pos, Gold { amount }, variant)),
    };
    Some(entity)
}

/// Read an entity's components back as tile content
pub fn content_of(world: &World, entity: Entity) -> TileContent {
    if let Ok(wall) = world.get::<&Wall>(entity) {
        return TileContent::Wall(*wall);
    }
    if world.get::<&Portal>(entity).is_ok() {
        return TileContent::Door;
    }
    if let Ok(chest) = world.get::<&Chest>(entity) {
        return TileContent::Chest(*chest);
    }
    if let Ok(enemy) = world.get::<&Enemy>(entity) {
        return TileContent::Enemy(*enemy);
    }
    if let Ok(food) = world.get::<&Food>(entity) {
        return TileContent::Food(food.kind);
    }
    if let Ok(gold) = world.get::<&Gold>(entity) {
        return TileContent::Gold(gold.amount);
    }
    TileContent::Floor
}

/// Does this entity stop movement onto its tile
pub fn blocks_movement(world: &World, entity: Entity) -> bool {
    world.get::<&BlocksMovement>(entity).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::FoodKind;

    fn placement(content: TileContent) -> Placement {
        Placement { content, variant: 1, starved: None }
    }

    #[test]
    fn test_floor_spawns_nothing() {
        let mut world = World::new();
        assert!(spawn_content(&mut world, Position::ORIGIN, &Placement::floor()).is_none());
        assert_eq!(world.len(), 0);
    }

    #[test]
    fn test_content_survives_spawn() {
        let mut world = World::new();
        let contents = [
            TileContent::Wall(Wall::new(4)),
            TileContent::Door,
            TileContent::Chest(Chest::default()),
            TileContent::Food(FoodKind::Soda),
            TileContent::Gold(10),
        ];
        for content in contents {
            let entity = spawn_content(&mut world, Position::new(1, 2), &placement(content)).unwrap();
            assert_eq!(content_of(&world, entity), content);
            assert_eq!(*world.get::<&Variant>(entity).unwrap(), Variant(1));
            assert_eq!(blocks_movement(&world, entity), content.blocks_movement());
        }
    }

    #[test]
    fn test_opened_chest_does_not_block() {
        let mut world = World::new();
        let chest = Chest { opened: true, loot: None };
        let entity = spawn_content(&mut world, Position::ORIGIN, &placement(TileContent::Chest(chest))).unwrap();
        assert!(!blocks_movement(&world, entity));
    }
}
