//! Fixed timestep simulation tick
//!
//! Advances the ball one step, resolves wall, island and paddle contacts,
//! and emits a render-ready frame. Distance per tick is the fixed `speed`
//! constant - there is no delta-time correction, so cadence deviations in
//! the external driver directly distort perceived ball speed.

use glam::Vec2;
use serde::Serialize;

use super::collision::{
    Surface, crosses_horizontal_bound, crosses_vertical_bound, impact_side, overlaps_rect, reflect,
};
use super::rect::Rect;
use super::state::GameState;
use crate::config::SimConfig;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest paddle target X from the gesture collaborator; `None` leaves
    /// the paddle where it is
    pub paddle_target_x: Option<f32>,
}

/// Render-ready snapshot emitted once per tick
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Frame {
    pub ball_pos: Vec2,
    pub paddle_pos: Vec2,
    pub island: Rect,
    pub score: u32,
    pub game_over: bool,
}

/// Advance the game state by one fixed timestep.
///
/// The candidate position is projected from the tick's starting state; every
/// contact test below reads that same candidate, so wall and rect
/// reflections are not chained within a tick. Each flip negates one axis of
/// a working heading, and flips stack: a corner tick may flip both axes.
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Last value wins; any earlier gesture samples between ticks are
    // already gone by the time we run
    if let Some(target) = input.paddle_target_x {
        state.paddle.set_target_x(target, state.arena_width);
    }

    if state.score.game_over {
        // Terminal: the ball persists but stops advancing
        return;
    }

    state.time_ticks += 1;

    let ball_size = state.ball.size;
    let current = state.ball.pos;
    let candidate = current + state.ball.dir * state.speed;
    let mut dir = state.ball.dir;

    // Wall reflection: each crossed axis flips independently
    if crosses_vertical_bound(candidate.y, ball_size, state.arena_height) {
        dir = reflect(dir, Surface::Horizontal);
    }
    if crosses_horizontal_bound(candidate.x, ball_size, state.arena_width) {
        dir = reflect(dir, Surface::Vertical);
    }

    // Island contact: overlap is predicted one tick ahead from the original
    // heading, while classification reads the current X - not the candidate
    if overlaps_rect(candidate, ball_size, &state.island) {
        dir = reflect(dir, impact_side(current.x, &state.island));
        state.score.on_island_contact();
    }

    // Paddle contact: same procedure, no score
    let paddle_rect = state.paddle.rect();
    if overlaps_rect(candidate, ball_size, &paddle_rect) {
        dir = reflect(dir, impact_side(current.x, &paddle_rect));
    }

    // Recompute from the original position with the final heading. When the
    // prediction fired a tick early the committed position may briefly sit
    // outside the arena; the reflected heading brings it back next tick.
    state.ball.dir = dir;
    state.ball.pos = current + dir * state.speed;
}

/// Fixed-cadence facade around [`GameState`].
///
/// Owns the session state plus a last-value-wins paddle target cell written
/// by the input collaborator between ticks. Single-threaded: a tick must
/// finish before the next starts, and frames may be read at any time
/// without mutating state.
#[derive(Debug, Clone)]
pub struct Simulation {
    state: GameState,
    paddle_target: Option<f32>,
}

impl Simulation {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            state: GameState::new(config),
            paddle_target: None,
        }
    }

    /// Record the latest paddle target X. If several gesture updates land
    /// between ticks only the most recent is observed.
    pub fn set_paddle_target(&mut self, x: f32) {
        self.paddle_target = Some(x);
    }

    /// Adopt new arena bounds after a display resize
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }

    /// End the session. One-way and idempotent; the frame stays renderable.
    pub fn end_game(&mut self) {
        self.state.score.set_game_over();
    }

    /// Run one fixed step and emit the resulting frame
    pub fn tick(&mut self) -> Frame {
        let input = TickInput {
            paddle_target_x: self.paddle_target.take(),
        };
        tick(&mut self.state, &input);
        self.frame()
    }

    /// Snapshot without stepping; rendering may read between ticks
    pub fn frame(&self) -> Frame {
        Frame {
            ball_pos: self.state.ball.pos,
            paddle_pos: self.state.paddle.pos,
            island: self.state.island,
            score: self.state.score.score,
            game_over: self.state.score.game_over,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
