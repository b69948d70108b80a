//! Data loading and external configuration
//!
//! Tunables live in a RON file so probabilities and delays can be changed
//! without rebuilding.

pub mod config;

pub use config::{
    ConfigError, ContentOdds, EnemyConfig, GameConfig, Palette, PlayerConfig, TimingConfig,
    WallConfig, WorldConfig,
};
