//! Error types for configuration and model updates.

use crevasse_arena::ArenaError;
use crevasse_core::StateError;
use crevasse_grid::GridError;
use thiserror::Error;

/// Errors from loading or validating a [`FractureConfig`](crate::FractureConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
    /// The configuration text is not valid TOML for this schema.
    #[error("failed to parse config TOML: {source}")]
    Toml {
        /// The underlying parse error.
        #[from]
        source: toml::de::Error,
    },
    /// A parameter is outside its admissible range.
    #[error("invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Configuration key.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// What the value must satisfy.
        reason: &'static str,
    },
}

/// Errors returned by [`FractureDensity`](crate::FractureDensity).
///
/// All of these are detected before any cell is touched; a failed call
/// leaves the published state unchanged.
#[derive(Debug, Error)]
pub enum FractureError {
    /// The time step is negative or not finite.
    #[error("time step must be finite and >= 0, got {dt}")]
    InvalidTimeStep {
        /// Offending time step in seconds.
        dt: f64,
    },
    /// An input field does not live on the model grid.
    #[error("input '{name}' has shape {actual:?}, model grid is {expected:?}")]
    InputShape {
        /// Name of the input.
        name: &'static str,
        /// Grid shape `(mx, my)`.
        expected: (usize, usize),
        /// Shape of the supplied array.
        actual: (usize, usize),
    },
    /// The flow-law exponent is not a positive finite number.
    #[error("flow-law exponent must be finite and > 0, got {exponent}")]
    InvalidExponent {
        /// Offending exponent.
        exponent: f64,
    },
    /// Configuration rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Grid construction or shape error.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// Reading or writing persisted state failed.
    #[error(transparent)]
    State(#[from] StateError),
    /// Publish lifecycle misuse.
    #[error(transparent)]
    Arena(#[from] ArenaError),
}
