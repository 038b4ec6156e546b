//! Game state and core simulation types
//!
//! All state that must be persisted for determinism lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::SimConfig;
use crate::consts::*;
use crate::normalize;

/// The moving ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the ball's bounding box
    pub pos: Vec2,
    /// Unit travel heading
    pub dir: Vec2,
    /// Diameter (the bounding box is size x size)
    pub size: f32,
}

impl Ball {
    /// Spawn at the fixed start point with a randomized heading.
    ///
    /// Heading components are drawn from (0, 1), so the launch always points
    /// down-right.
    pub fn spawn(rng: &mut Pcg32, size: f32) -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            dir: random_unit_direction(rng),
            size,
        }
    }
}

/// Draw a random unit heading with both components positive.
///
/// A degenerate all-zero draw has measure zero but would poison the heading
/// with NaN; re-roll instead of unwrapping.
pub fn random_unit_direction(rng: &mut Pcg32) -> Vec2 {
    loop {
        let v = Vec2::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
        if let Ok(unit) = normalize(v) {
            return unit;
        }
    }
}

/// The player's paddle. Only X moves; Y is fixed for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub w: f32,
    pub h: f32,
}

impl Paddle {
    /// Fresh paddle for an arena: half the arena wide, centered, a fixed
    /// offset above the bottom edge
    pub fn new(arena_width: f32, arena_height: f32) -> Self {
        Self {
            pos: Vec2::new(arena_width / 4.0, arena_height - PADDLE_BOTTOM_OFFSET),
            w: arena_width / 2.0,
            h: PADDLE_H,
        }
    }

    /// The paddle's bounding box for collision tests
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.w, self.h)
    }

    /// Maximum legal X for the left edge
    pub fn max_x(&self, arena_width: f32) -> f32 {
        (arena_width - self.w).max(0.0)
    }

    /// Apply an externally supplied target X. The input collaborator is
    /// expected to clamp, but its values are never trusted: an out-of-range
    /// target could let the ball tunnel past logic that assumes the paddle
    /// is in bounds, so we re-clamp here.
    pub fn set_target_x(&mut self, target: f32, arena_width: f32) {
        let clamped = target.clamp(0.0, self.max_x(arena_width));
        if clamped != target {
            log::debug!("paddle target {target} out of range, clamped to {clamped}");
        }
        self.pos.x = clamped;
    }
}

/// Score counter and terminal flag
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u32,
    pub game_over: bool,
}

impl ScoreState {
    /// One island contact. Pure counter: no upper bound, no decay.
    /// Paddle contacts do not score.
    pub fn on_island_contact(&mut self) {
        self.score += 1;
    }

    /// One-way transition; invoking it again is a no-op
    pub fn set_game_over(&mut self) {
        self.game_over = true;
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Arena bounds; may change if the display surface resizes
    pub arena_width: f32,
    pub arena_height: f32,
    /// Distance the ball travels per tick
    pub speed: f32,
    /// The static island obstacle
    pub island: Rect,
    pub ball: Ball,
    pub paddle: Paddle,
    pub score: ScoreState,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new session state from config
    pub fn new(config: &SimConfig) -> Self {
        let mut rng = RngState::new(config.seed).to_rng();
        Self {
            seed: config.seed,
            arena_width: config.arena_width,
            arena_height: config.arena_height,
            speed: config.speed,
            island: config.island,
            ball: Ball::spawn(&mut rng, config.ball_size),
            paddle: Paddle::new(config.arena_width, config.arena_height),
            score: ScoreState::default(),
            time_ticks: 0,
        }
    }

    /// Adopt new arena bounds after a display resize. The paddle is
    /// re-clamped so it stays legal under the new width.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.arena_width = width;
        self.arena_height = height;
        let x = self.paddle.pos.x;
        self.paddle.set_target_x(x, width);
    }
}
