//! Simulation tuning parameters
//!
//! Defaults mirror the classic layout; a session may override them with a
//! JSON file. Unknown or missing fields fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Rect;

/// Per-session tuning for the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Arena bounds (display surface size)
    pub arena_width: f32,
    pub arena_height: f32,
    /// Ball diameter
    pub ball_size: f32,
    /// Distance the ball travels per tick
    pub speed: f32,
    /// The static island obstacle
    pub island: Rect,
    /// Seed for the randomized launch heading
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            ball_size: BALL_SIZE,
            speed: BALL_SPEED,
            island: Rect::new(ISLAND_X, ISLAND_Y, ISLAND_W, ISLAND_H),
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Load a config from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }
}
