//! Game state machine
//!
//! Ties the player, the regions, the revealer and the tick-driven phases
//! together. Everything runs on the caller's thread, one action or tick at a
//! time.

use std::collections::VecDeque;

use hecs::Entity;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use super::lifecycle::{InvariantViolation, RegionLifecycle, RegionState};
use super::transition::{TransitionPending, TransitionQueue};
use crate::data::GameConfig;
use crate::ecs::{Loot, Position};
use crate::entities::{
    blocks_movement, damage_wall, enemy_turn, hit_enemy, open_chest, take_pickup, EnemyAction,
    EnemyHit, PlayerStats, WallHit,
};
use crate::world::{ContentPlacer, TileContent, WorldRevealer};

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Lifecycle(#[from] InvariantViolation),
}

/// Overall game state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameState {
    Playing,
    /// Player ran out of health
    GameOver { tick: u64 },
}

/// Whose turn it is
#[derive(Debug, Clone, PartialEq)]
enum TurnPhase {
    PlayerTurn,
    /// Enemies act one after another; `next_at` is when the next one may
    EnemiesActing { queue: VecDeque<Entity>, next_at: u64 },
}

/// What stands in the way of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collidable {
    Wall,
    Enemy,
    Chest,
    Empty,
}

impl Collidable {
    /// Classify the blocking occupant of a tile in the active region
    fn at(lifecycle: &RegionLifecycle, pos: Position) -> Self {
        let region = lifecycle.active();
        let Some(entity) = region.occupant_at(pos) else {
            return Collidable::Empty;
        };
        if !blocks_movement(region.world(), entity) {
            return Collidable::Empty;
        }
        match region.content_at(pos) {
            TileContent::Wall(_) => Collidable::Wall,
            TileContent::Enemy(_) => Collidable::Enemy,
            TileContent::Chest(_) => Collidable::Chest,
            _ => Collidable::Empty,
        }
    }
}

/// Result of bumping into a blocking tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Wall(WallHit),
    Enemy(EnemyHit),
    /// Loot rolled by opening a chest
    Chest(Loot),
    /// The blocker was gone by the time it was acted on
    Nothing,
}

/// Something that happened on the tile the player stepped onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileEvent {
    /// A portal was consumed and a transition scheduled
    PortalEntered { target: RegionState },
    Collected(Loot),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Not the player's turn, a transition is pending, or the game is over
    Refused,
    Moved {
        to: Position,
        revealed: usize,
        event: Option<TileEvent>,
    },
    Interacted(Interaction),
}

/// The main game struct that holds all game data
pub struct Game {
    config: GameConfig,
    state: GameState,
    lifecycle: RegionLifecycle,
    revealer: WorldRevealer,
    player: PlayerStats,
    transit: TransitionQueue,
    phase: TurnPhase,
    /// Ticks elapsed since the game started
    tick: u64,
    rng: StdRng,
}

impl Game {
    /// Create a game and reveal the overworld around the starting position
    pub fn new(config: GameConfig, rng: StdRng) -> Self {
        let lifecycle = RegionLifecycle::new(config.world.overworld_start, config.world.dungeon_origin);
        let revealer = WorldRevealer::new(ContentPlacer::from_config(&config));
        let player = PlayerStats::new(&config.player, config.world.visibility_radius);

        let mut game = Self {
            config,
            state: GameState::Playing,
            lifecycle,
            revealer,
            player,
            transit: TransitionQueue::new(),
            phase: TurnPhase::PlayerTurn,
            tick: 0,
            rng,
        };
        let start = game.lifecycle.player_pos();
        let revealed = game.reveal_active(start);
        log::info!("Tales of Wonder begins, {} tiles in sight", revealed);
        game
    }

    pub fn from_entropy(config: GameConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player(&self) -> &PlayerStats {
        &self.player
    }

    pub fn lifecycle(&self) -> &RegionLifecycle {
        &self.lifecycle
    }

    pub fn region_state(&self) -> RegionState {
        self.lifecycle.state()
    }

    pub fn player_position(&self) -> Position {
        self.lifecycle.player_pos()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn in_transit(&self) -> bool {
        self.transit.in_transit()
    }

    pub fn pending_transition(&self) -> Option<TransitionPending> {
        self.transit.pending()
    }

    pub fn is_players_turn(&self) -> bool {
        self.phase == TurnPhase::PlayerTurn
    }

    /// Can a move be attempted right now
    pub fn accepts_input(&self) -> bool {
        self.state == GameState::Playing && self.is_players_turn() && !self.in_transit()
    }

    /// Attempt to move one tile. Horizontal input wins over vertical.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        let (dx, dy) = if dx != 0 { (dx.signum(), 0) } else { (0, dy.signum()) };
        if (dx, dy) == (0, 0) || !self.accepts_input() {
            return MoveOutcome::Refused;
        }

        self.player.starve();

        let target = self.lifecycle.player_pos().offset(dx, dy);
        let outcome = match Collidable::at(&self.lifecycle, target) {
            Collidable::Empty => self.step_to(target),
            blocker => MoveOutcome::Interacted(self.on_blocked(target, blocker)),
        };

        self.end_player_turn();
        outcome
    }

    /// Advance one tick: apply a due transition, then let the next enemy act
    pub fn tick(&mut self) -> Result<(), GameError> {
        self.tick += 1;
        if let Some(pending) = self.transit.take_ready(self.tick) {
            self.apply_transition(pending)?;
        }
        self.advance_enemies();
        Ok(())
    }

    /// Tick until the player may act again, at most `max_ticks` times.
    /// Returns the number of ticks spent.
    pub fn settle(&mut self, max_ticks: u64) -> Result<u64, GameError> {
        let mut spent = 0;
        while spent < max_ticks && self.state == GameState::Playing && !self.accepts_input() {
            self.tick()?;
            spent += 1;
        }
        Ok(spent)
    }

    fn step_to(&mut self, target: Position) -> MoveOutcome {
        let revealed = self.reveal_active(target);

        let region = self.lifecycle.active_mut();
        let event = match region.content_at(target) {
            TileContent::Door => {
                region.remove_occupant(target);
                let destination = self.lifecycle.state().other();
                self.transit
                    .schedule(destination, self.tick, self.config.timing.transition_delay);
                log::info!("Portal at ({}, {}) leads {:?}", target.x, target.y, destination);
                Some(TileEvent::PortalEntered { target: destination })
            }
            TileContent::Food(_) | TileContent::Gold(_) | TileContent::Chest(_) => {
                take_pickup(region, target).map(|loot| {
                    self.player.collect(loot);
                    TileEvent::Collected(loot)
                })
            }
            _ => None,
        };

        MoveOutcome::Moved { to: target, revealed, event }
    }

    /// Movement was blocked: act on whatever is in the way
    fn on_blocked(&mut self, target: Position, blocker: Collidable) -> Interaction {
        let region = self.lifecycle.active_mut();
        let interaction = match blocker {
            Collidable::Wall => damage_wall(
                region,
                target,
                self.player.wall_damage,
                &self.config.wall,
                &self.config.palette,
                &mut self.rng,
            )
            .map(Interaction::Wall),
            Collidable::Enemy => {
                let hit = hit_enemy(region, target, self.player.enemy_damage);
                if let Some(EnemyHit::Slain { entity }) = hit {
                    self.lifecycle.roster_mut().remove(entity);
                }
                hit.map(Interaction::Enemy)
            }
            Collidable::Chest => {
                open_chest(region, target, self.config.player.gold_per_pile, &mut self.rng)
                    .map(Interaction::Chest)
            }
            Collidable::Empty => None,
        };
        interaction.unwrap_or(Interaction::Nothing)
    }

    fn end_player_turn(&mut self) {
        if self.check_game_over() {
            return;
        }
        let queue: VecDeque<Entity> = self.lifecycle.roster().enemies().iter().copied().collect();
        let mut delay = self.config.timing.turn_delay;
        if queue.is_empty() {
            delay += self.config.timing.turn_delay;
        }
        self.phase = TurnPhase::EnemiesActing {
            queue,
            next_at: self.tick + delay,
        };
    }

    fn advance_enemies(&mut self) {
        let TurnPhase::EnemiesActing { queue, next_at } = &mut self.phase else {
            return;
        };

        let mut finished = false;
        while self.tick >= *next_at && self.state == GameState::Playing {
            let Some(entity) = queue.pop_front() else {
                finished = true;
                break;
            };
            let player_pos = self.lifecycle.player_pos();
            match enemy_turn(self.lifecycle.active_mut(), entity, player_pos) {
                Some((action, wait)) => {
                    if let EnemyAction::Attacked { damage } = action {
                        self.player.lose_health(damage as f32);
                        log::debug!("Enemy hits the player for {}, health {}", damage, self.player.health);
                        if self.player.is_dead() {
                            self.state = GameState::GameOver { tick: self.tick };
                            log::info!("The End: player fell at tick {}", self.tick);
                        }
                    }
                    *next_at += u64::from(wait);
                }
                None => {
                    self.lifecycle.roster_mut().remove(entity);
                }
            }
        }

        if finished {
            self.lifecycle.roster_mut().finish_round();
            self.phase = TurnPhase::PlayerTurn;
        }
    }

    fn apply_transition(&mut self, pending: TransitionPending) -> Result<(), GameError> {
        match pending.target {
            RegionState::InDungeon => self.lifecycle.enter_dungeon()?,
            RegionState::InOverworld => self.lifecycle.exit_dungeon()?,
        }
        // enemies of the region we left must not act in the new one
        self.phase = TurnPhase::PlayerTurn;

        let arrival = self.lifecycle.player_pos();
        self.reveal_active(arrival);
        log::info!("Transition to {:?} applied at tick {}", pending.target, self.tick);
        Ok(())
    }

    /// Reveal the active region around `at`, enrolling any enemies that appear
    fn reveal_active(&mut self, at: Position) -> usize {
        let radius = self.player.line_of_sight;
        let revealed = self
            .revealer
            .reveal(self.lifecycle.active_mut(), at, radius, &mut self.rng);

        let roster = self.lifecycle.roster_mut();
        for tile in &revealed {
            if let (TileContent::Enemy(_), Some(entity)) = (tile.content, tile.entity) {
                roster.add(entity);
            }
        }
        revealed.len()
    }

    fn check_game_over(&mut self) -> bool {
        if self.player.is_dead() && self.state == GameState::Playing {
            self.state = GameState::GameOver { tick: self.tick };
            log::info!("The End: player starved at tick {}", self.tick);
        }
        self.state != GameState::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ContentOdds;
    use crate::ecs::{Chest, Enemy, FoodKind, Wall};
    use crate::world::{Chance, Placement, RegionKind};

    /// Config that generates nothing but floor
    fn quiet_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.odds = ContentOdds {
            wall: Chance::NEVER,
            door: Chance::NEVER,
            chest: Chance::NEVER,
            enemy: Chance::NEVER,
        };
        config.wall.food_drop = Chance::NEVER;
        config
    }

    fn quiet_game() -> Game {
        Game::new(quiet_config(), StdRng::seed_from_u64(1))
    }

    fn put(game: &mut Game, pos: Position, content: TileContent) -> Option<Entity> {
        let region = game.lifecycle.active_mut();
        region.grid_mut().mark_visited(pos);
        let entity = region.place(pos, &Placement { content, variant: 0, starved: None });
        if let (TileContent::Enemy(_), Some(e)) = (content, entity) {
            game.lifecycle.roster_mut().add(e);
        }
        entity
    }

    #[test]
    fn test_new_game_reveals_start() {
        let game = quiet_game();
        let overworld = game.lifecycle().overworld();
        // radii 0, 1, 2
        assert_eq!(overworld.grid().len(), 13);
        assert_eq!(game.player_position(), Position::ORIGIN);
        assert!(game.accepts_input());
    }

    #[test]
    fn test_move_reveals_and_hands_turn_to_enemies() {
        let mut game = quiet_game();
        let outcome = game.try_move(1, 0);

        assert!(matches!(outcome, MoveOutcome::Moved { to, revealed, event: None } if to == Position::new(1, 0) && revealed > 0));
        assert_eq!(game.player_position(), Position::new(1, 0));
        assert_eq!(game.player().health, 99.5);
        assert!(!game.accepts_input());
        assert_eq!(game.try_move(1, 0), MoveOutcome::Refused);

        // no enemies: two turn delays
        assert_eq!(game.settle(10).unwrap(), 2);
        assert!(game.accepts_input());
    }

    #[test]
    fn test_horizontal_input_wins() {
        let mut game = quiet_game();
        game.try_move(-1, 1);
        assert_eq!(game.player_position(), Position::new(-1, 0));
    }

    #[test]
    fn test_bumping_wall_chops_it() {
        let mut game = quiet_game();
        put(&mut game, Position::new(1, 0), TileContent::Wall(Wall::new(2)));

        assert_eq!(game.try_move(1, 0), MoveOutcome::Interacted(Interaction::Wall(WallHit::Damaged { hp: 1 })));
        assert_eq!(game.player_position(), Position::ORIGIN);
        game.settle(10).unwrap();

        assert_eq!(
            game.try_move(1, 0),
            MoveOutcome::Interacted(Interaction::Wall(WallHit::Crumbled { dropped: None }))
        );
        game.settle(10).unwrap();
        assert!(matches!(game.try_move(1, 0), MoveOutcome::Moved { .. }));
    }

    #[test]
    fn test_chest_opens_then_loot_is_collected() {
        let mut game = quiet_game();
        let pos = Position::new(0, 1);
        put(&mut game, pos, TileContent::Chest(Chest::default()));

        let MoveOutcome::Interacted(Interaction::Chest(loot)) = game.try_move(0, 1) else {
            panic!("expected chest to open");
        };
        assert_eq!(game.player_position(), Position::ORIGIN);
        game.settle(10).unwrap();

        let outcome = game.try_move(0, 1);
        assert!(matches!(
            outcome,
            MoveOutcome::Moved { to, event: Some(TileEvent::Collected(collected)), .. } if to == pos && collected == loot
        ));
        match loot {
            Loot::Gold(amount) => assert_eq!(game.player().gold, amount),
            Loot::Food(_) => assert!(game.player().health > 99.0),
        }
    }

    #[test]
    fn test_food_pickup_restores_health() {
        let mut game = quiet_game();
        put(&mut game, Position::new(1, 0), TileContent::Food(FoodKind::Ration));

        let outcome = game.try_move(1, 0);
        assert!(matches!(outcome, MoveOutcome::Moved { event: Some(TileEvent::Collected(Loot::Food(FoodKind::Ration))), .. }));
        assert_eq!(game.player().health, 109.5);
        assert_eq!(game.lifecycle().active().content_at(Position::new(1, 0)), TileContent::Floor);
    }

    #[test]
    fn test_enemy_attacks_adjacent_player() {
        let mut game = quiet_game();
        let enemy = Enemy { hp: 3, damage: 10, move_ticks: 1, skip_next_turn: false };
        put(&mut game, Position::new(2, 0), TileContent::Enemy(enemy));

        game.try_move(1, 0);
        game.settle(10).unwrap();
        assert_eq!(game.player().health, 89.5);
        assert_eq!(game.lifecycle().roster().round(), 1);
    }

    #[test]
    fn test_slain_enemy_leaves_roster() {
        let mut game = quiet_game();
        let enemy = Enemy { hp: 1, damage: 10, move_ticks: 1, skip_next_turn: true };
        let pos = Position::new(1, 0);
        put(&mut game, pos, TileContent::Enemy(enemy));
        assert_eq!(game.lifecycle().roster().len(), 1);

        let outcome = game.try_move(1, 0);
        assert!(matches!(outcome, MoveOutcome::Interacted(Interaction::Enemy(EnemyHit::Slain { .. }))));
        assert!(game.lifecycle().roster().is_empty());
        assert_eq!(game.lifecycle().active().content_at(pos), TileContent::Floor);
    }

    #[test]
    fn test_portal_round_trip() {
        let mut game = quiet_game();
        let door = Position::new(1, 0);
        put(&mut game, door, TileContent::Door);
        let overworld_before = {
            let mut snapshot = game.lifecycle().overworld().snapshot();
            // the portal is consumed on entry
            for (pos, content) in snapshot.iter_mut() {
                if *pos == door {
                    *content = TileContent::Floor;
                }
            }
            snapshot
        };

        let outcome = game.try_move(1, 0);
        assert!(matches!(
            outcome,
            MoveOutcome::Moved { event: Some(TileEvent::PortalEntered { target: RegionState::InDungeon }), .. }
        ));
        assert!(game.in_transit());
        assert_eq!(game.region_state(), RegionState::InOverworld);

        game.settle(20).unwrap();
        assert_eq!(game.region_state(), RegionState::InDungeon);
        assert_eq!(game.player_position(), Position::ORIGIN);
        assert_eq!(game.lifecycle().active().kind(), RegionKind::Dungeon);
        assert!(game.accepts_input());
        // overworld position is kept while underground
        assert_eq!(game.lifecycle().overworld().player_pos(), door);

        let exit = Position::new(0, -1);
        put(&mut game, exit, TileContent::Door);
        game.try_move(0, -1);
        game.settle(20).unwrap();

        assert_eq!(game.region_state(), RegionState::InOverworld);
        assert_eq!(game.player_position(), door);
        assert!(game.lifecycle().dungeon().is_none());
        let after: Vec<_> = game
            .lifecycle()
            .overworld()
            .snapshot()
            .into_iter()
            .filter(|(pos, _)| overworld_before.iter().any(|(p, _)| p == pos))
            .collect();
        assert_eq!(after, overworld_before);
    }

    #[test]
    fn test_moves_refused_while_in_transit() {
        let mut game = quiet_game();
        put(&mut game, Position::new(1, 0), TileContent::Door);
        game.try_move(1, 0);

        game.tick().unwrap();
        game.tick().unwrap();
        // enemy phase is over but the portal has not fired yet
        assert!(game.is_players_turn());
        assert!(game.in_transit());
        assert_eq!(game.try_move(1, 0), MoveOutcome::Refused);
    }

    #[test]
    fn test_starvation_ends_game() {
        let mut config = quiet_config();
        config.player.health = 1.0;
        let mut game = Game::new(config, StdRng::seed_from_u64(2));

        game.try_move(1, 0);
        game.settle(5).unwrap();
        assert_eq!(game.state(), GameState::Playing);
        game.try_move(1, 0);
        assert_eq!(game.state(), GameState::GameOver { tick: game.tick_count() });
        assert_eq!(game.try_move(1, 0), MoveOutcome::Refused);
    }
}
