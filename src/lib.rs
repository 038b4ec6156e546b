//! Island Pong - a minimal gesture-driven arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collision, reflection, game state)
//! - `config`: Data-driven tuning with JSON load
//! - `error`: Recoverable simulation error types
//!
//! Rendering, gesture capture and frame scheduling are external
//! collaborators: they write paddle targets in and read [`sim::Frame`]s out.
//! Coordinates are absolute, top-left origin, Y increasing downward.

pub mod config;
pub mod error;
pub mod sim;

pub use config::SimConfig;
pub use error::{ConfigError, SimError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const TICK_DT: f32 = 1.0 / 60.0;

    /// Ball diameter (the bounding box is BALL_SIZE x BALL_SIZE)
    pub const BALL_SIZE: f32 = 25.0;
    /// Distance the ball travels per tick
    pub const BALL_SPEED: f32 = 10.0;
    /// Ball spawn point
    pub const BALL_START_X: f32 = 200.0;
    pub const BALL_START_Y: f32 = 200.0;

    /// Island obstacle rectangle
    pub const ISLAND_X: f32 = 134.0;
    pub const ISLAND_Y: f32 = 11.0;
    pub const ISLAND_W: f32 = 127.0;
    pub const ISLAND_H: f32 = 37.0;

    /// Paddle height; width is half the arena width
    pub const PADDLE_H: f32 = 37.0;
    /// Distance from the arena's bottom edge to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 100.0;

    /// Default arena bounds, overridden per session by the display surface
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 800.0;
}

/// Scale a vector to unit magnitude.
///
/// A zero vector has no heading to extract; fail fast instead of letting a
/// NaN leak into the simulation, where it would silently freeze or teleport
/// the ball with no diagnostic.
#[inline]
pub fn normalize(v: Vec2) -> Result<Vec2, SimError> {
    let magnitude = v.length();
    if magnitude == 0.0 {
        return Err(SimError::DegenerateVector);
    }
    Ok(v / magnitude)
}
