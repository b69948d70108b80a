//! Regions
//!
//! An independently owned tile space: the overworld, or one dungeon visit.

use std::collections::HashMap;

use hecs::{Entity, World};

use super::content::{Placement, TileContent};
use super::grid::GridIndex;
use crate::ecs::{Enemy, Position};
use crate::entities::{content_of, spawn_content};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Lives for the whole game
    Overworld,
    /// Built on entry, dropped on exit
    Dungeon,
}

/// Generated tiles of one region plus the entities standing on them
pub struct Region {
    kind: RegionKind,
    grid: GridIndex,
    world: World,
    /// At most one entity per coordinate
    occupants: HashMap<Position, Entity>,
    active: bool,
    player_pos: Position,
}

impl Region {
    pub fn new(kind: RegionKind) -> Self {
        Self {
            kind,
            grid: GridIndex::new(),
            world: World::new(),
            occupants: HashMap::new(),
            active: true,
            player_pos: Position::ORIGIN,
        }
    }

    /// Reset the region to a single generated Floor tile at `seed`, with the
    /// player standing on it
    pub fn build_initial(&mut self, seed: Position) {
        self.grid.clear();
        self.world.clear();
        self.occupants.clear();
        self.grid.mark_visited(seed);
        self.player_pos = seed;
        log::info!("Built {:?} region seeded at ({}, {})", self.kind, seed.x, seed.y);
    }

    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn player_pos(&self) -> Position {
        self.player_pos
    }

    pub fn set_player_pos(&mut self, pos: Position) {
        self.player_pos = pos;
    }

    pub fn grid(&self) -> &GridIndex {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut GridIndex {
        &mut self.grid
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Register a placement on a generated tile, spawning its entity.
    /// Returns the spawned entity, or `None` for plain Floor.
    pub fn place(&mut self, pos: Position, placement: &Placement) -> Option<Entity> {
        debug_assert!(self.grid.contains(pos), "placing on ungenerated tile {:?}", pos);
        self.remove_occupant(pos);
        let entity = spawn_content(&mut self.world, pos, placement)?;
        self.occupants.insert(pos, entity);
        Some(entity)
    }

    pub fn occupant_at(&self, pos: Position) -> Option<Entity> {
        self.occupants.get(&pos).copied()
    }

    /// Despawn whatever stands on `pos`. The tile itself stays generated.
    pub fn remove_occupant(&mut self, pos: Position) -> Option<Entity> {
        let entity = self.occupants.remove(&pos)?;
        if self.world.despawn(entity).is_err() {
            log::warn!("Occupant at ({}, {}) was already despawned", pos.x, pos.y);
        }
        Some(entity)
    }

    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }

    /// Content of a coordinate. `Empty` if it was never generated.
    pub fn content_at(&self, pos: Position) -> TileContent {
        if !self.grid.contains(pos) {
            return TileContent::Empty;
        }
        match self.occupants.get(&pos) {
            Some(&entity) => content_of(&self.world, entity),
            None => TileContent::Floor,
        }
    }

    /// Every generated coordinate with its content, sorted by position
    pub fn snapshot(&self) -> Vec<(Position, TileContent)> {
        let mut tiles: Vec<_> = self.grid.iter().map(|&pos| (pos, self.content_at(pos))).collect();
        tiles.sort_unstable_by_key(|(pos, _)| *pos);
        tiles
    }

    /// Live enemies, sorted by position
    pub fn enemies(&self) -> Vec<Entity> {
        let mut enemies: Vec<(Position, Entity)> = self
            .world
            .query::<(&Position, &Enemy)>()
            .iter()
            .map(|(entity, (pos, _))| (*pos, entity))
            .collect();
        enemies.sort_unstable_by_key(|(pos, _)| *pos);
        enemies.into_iter().map(|(_, entity)| entity).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{Chest, Wall};

    fn wall_placement() -> Placement {
        Placement {
            content: TileContent::Wall(Wall::new(4)),
            variant: 2,
            starved: None,
        }
    }

    #[test]
    fn test_build_initial_seeds_one_floor_tile() {
        let mut region = Region::new(RegionKind::Dungeon);
        region.build_initial(Position::new(0, 0));

        assert_eq!(region.grid().len(), 1);
        assert_eq!(region.content_at(Position::ORIGIN), TileContent::Floor);
        assert_eq!(region.content_at(Position::new(1, 0)), TileContent::Empty);
        assert_eq!(region.player_pos(), Position::ORIGIN);
    }

    #[test]
    fn test_rebuild_discards_everything() {
        let mut region = Region::new(RegionKind::Overworld);
        region.build_initial(Position::ORIGIN);
        let pos = Position::new(1, 0);
        region.grid_mut().mark_visited(pos);
        region.place(pos, &wall_placement());

        region.build_initial(Position::new(5, 5));
        assert_eq!(region.grid().len(), 1);
        assert_eq!(region.occupant_count(), 0);
        assert_eq!(region.world().len(), 0);
    }

    #[test]
    fn test_place_and_remove_occupant() {
        let mut region = Region::new(RegionKind::Overworld);
        region.build_initial(Position::ORIGIN);
        let pos = Position::new(0, 1);
        region.grid_mut().mark_visited(pos);

        let entity = region.place(pos, &wall_placement()).unwrap();
        assert_eq!(region.occupant_at(pos), Some(entity));
        assert_eq!(region.content_at(pos), TileContent::Wall(Wall::new(4)));

        assert_eq!(region.remove_occupant(pos), Some(entity));
        assert_eq!(region.content_at(pos), TileContent::Floor);
        assert!(!region.world().contains(entity));
    }

    #[test]
    fn test_place_replaces_existing_occupant() {
        let mut region = Region::new(RegionKind::Overworld);
        region.build_initial(Position::ORIGIN);
        let pos = Position::new(2, 0);
        region.grid_mut().mark_visited(pos);

        let first = region.place(pos, &wall_placement()).unwrap();
        let chest = Placement {
            content: TileContent::Chest(Chest::default()),
            variant: 0,
            starved: None,
        };
        region.place(pos, &chest);

        assert!(!region.world().contains(first));
        assert_eq!(region.occupant_count(), 1);
        assert!(matches!(region.content_at(pos), TileContent::Chest(_)));
    }
}
