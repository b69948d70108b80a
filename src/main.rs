//! Tales of Wonder - Entry Point
//!
//! Headless autoplay: wanders the player around for a number of moves and
//! reports what the world revealed along the way.
//!
//! Usage: `tales-of-wonder [steps] [seed]`

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tales_of_wonder::game::{Game, GameState, MoveOutcome, TileEvent};
use tales_of_wonder::GameConfig;

const DEFAULT_STEPS: u32 = 200;
/// Upper bound on ticks spent waiting for a single turn to come back
const MAX_SETTLE_TICKS: u64 = 1_000;

const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Tales of Wonder v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let steps = match args.next() {
        Some(arg) => arg.parse::<u32>().with_context(|| format!("invalid step count {:?}", arg))?,
        None => DEFAULT_STEPS,
    };
    let seed = args
        .next()
        .map(|arg| arg.parse::<u64>().with_context(|| format!("invalid seed {:?}", arg)))
        .transpose()?;

    let config = GameConfig::load_or_default();
    let (rng, mut walker) = match seed {
        Some(s) => (StdRng::seed_from_u64(s), StdRng::seed_from_u64(s.wrapping_add(1))),
        None => (StdRng::from_entropy(), StdRng::from_entropy()),
    };
    let mut game = Game::new(config, rng);

    let mut portals = 0;
    let mut moves = 0;
    for _ in 0..steps {
        let (dx, dy) = DIRECTIONS[walker.gen_range(0..DIRECTIONS.len())];
        if let MoveOutcome::Moved { event: Some(TileEvent::PortalEntered { .. }), .. } = game.try_move(dx, dy) {
            portals += 1;
        }
        moves += 1;

        game.settle(MAX_SETTLE_TICKS)?;
        if matches!(game.state(), GameState::GameOver { .. }) {
            break;
        }
    }

    let lifecycle = game.lifecycle();
    println!("moves:            {}", moves);
    println!("ticks:            {}", game.tick_count());
    println!("region:           {:?}", game.region_state());
    println!("position:         ({}, {})", game.player_position().x, game.player_position().y);
    println!("overworld tiles:  {}", lifecycle.overworld().grid().len());
    if let Some(dungeon) = lifecycle.dungeon() {
        println!("dungeon tiles:    {}", dungeon.grid().len());
    }
    println!("portals taken:    {}", portals);
    println!("health:           {:.1}", game.player().health);
    println!("gold:             {}", game.player().gold);
    println!("state:            {:?}", game.state());

    log::info!("Tales of Wonder shut down cleanly");
    Ok(())
}
