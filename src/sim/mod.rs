//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or input-capture dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Surface, impact_side, overlaps_rect, reflect};
pub use rect::Rect;
pub use state::{Ball, GameState, Paddle, RngState, ScoreState, random_unit_direction};
pub use tick::{Frame, Simulation, TickInput, tick};
