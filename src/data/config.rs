//! Game configuration
//!
//! Loads tunables from a RON file, with fallback to the built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ecs::Position;
use crate::world::dice::Chance;

/// Default file looked up relative to the working directory
pub const CONFIG_FILE: &str = "assets/config.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// All tunables of the world engine and the game loop around it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub odds: ContentOdds,
    pub palette: Palette,
    pub wall: WallConfig,
    pub enemy: EnemyConfig,
    pub player: PlayerConfig,
    pub timing: TimingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Number of concentric circles revealed around the player
    pub visibility_radius: u32,
    /// Where the overworld is seeded and the player starts
    pub overworld_start: Position,
    /// Where every dungeon is seeded and the player arrives
    pub dungeon_origin: Position,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            visibility_radius: 3,
            overworld_start: Position::ORIGIN,
            dungeon_origin: Position::ORIGIN,
        }
    }
}

/// Ordered first-match-wins trials run for every new tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentOdds {
    pub wall: Chance,
    pub door: Chance,
    pub chest: Chance,
    pub enemy: Chance,
}

impl Default for ContentOdds {
    fn default() -> Self {
        Self {
            wall: Chance::one_in(3),
            door: Chance::one_in(20),
            chest: Chance::one_in(20),
            enemy: Chance::one_in(50),
        }
    }
}

/// How many art variants exist per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub wall: u32,
    pub door: u32,
    pub chest: u32,
    pub enemy: u32,
    pub food: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: 8,
            door: 1,
            chest: 1,
            enemy: 2,
            food: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    pub hp: i32,
    /// Chance a crumbling wall leaves food behind
    pub food_drop: Chance,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            hp: 4,
            food_drop: Chance::one_in(2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub hp: i32,
    pub damage: i32,
    pub move_ticks: u32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            hp: 3,
            damage: 10,
            move_ticks: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub health: f32,
    /// Health lost on every move attempt
    pub starvation_rate: f32,
    pub wall_damage: i32,
    pub enemy_damage: i32,
    pub points_per_food: f32,
    pub points_per_soda: f32,
    pub gold_per_pile: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            health: 100.0,
            starvation_rate: 0.5,
            wall_damage: 1,
            enemy_damage: 1,
            points_per_food: 10.0,
            points_per_soda: 20.0,
            gold_per_pile: 10,
        }
    }
}

/// Delays, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Pause before the enemies act after a player turn
    pub turn_delay: u64,
    /// Time spent standing on a portal before the region swaps
    pub transition_delay: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            turn_delay: 1,
            transition_delay: 5,
        }
    }
}

impl GameConfig {
    /// Load from the first config file found, or fall back to defaults
    pub fn load_or_default() -> Self {
        for path in candidate_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => {
                    log::info!("Config loaded from {:?}", path);
                    return config;
                }
                Err(e) => log::warn!("{}. Using defaults.", e),
            }
        }
        log::info!("No config file found, using defaults");
        Self::default()
    }

    /// Load and validate a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty RON
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let odds = [
            ("odds.wall", self.odds.wall),
            ("odds.door", self.odds.door),
            ("odds.chest", self.odds.chest),
            ("odds.enemy", self.odds.enemy),
            ("wall.food_drop", self.wall.food_drop),
        ];
        for (name, chance) in odds {
            if !chance.is_valid() {
                return Err(ConfigError::Invalid(format!(
                    "{} is one in 1, which can never hit (use 0 to disable)",
                    name
                )));
            }
        }
        if self.wall.hp <= 0 {
            return Err(ConfigError::Invalid("wall.hp must be positive".into()));
        }
        if self.enemy.hp <= 0 {
            return Err(ConfigError::Invalid("enemy.hp must be positive".into()));
        }
        if self.player.health <= 0.0 {
            return Err(ConfigError::Invalid("player.health must be positive".into()));
        }
        Ok(())
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    use directories::ProjectDirs;

    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(proj_dirs) = ProjectDirs::from("com", "talesofwonder", "TalesOfWonder") {
        paths.push(proj_dirs.config_dir().join("config.ron"));
    }
    paths
}
