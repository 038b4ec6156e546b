//! Simulation error types
//!
//! The error taxonomy is deliberately narrow. Every variant is a local,
//! recoverable condition: callers clamp or re-randomize and the simulation
//! keeps producing a renderable state every tick.

use thiserror::Error;

/// Errors raised by the simulation core
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// Normalization of a zero-magnitude vector - there is no heading to
    /// extract, and dividing through would produce NaN
    #[error("cannot normalize a zero-magnitude vector")]
    DegenerateVector,
}

/// Errors from loading a [`SimConfig`](crate::SimConfig) file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
