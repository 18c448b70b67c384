//! Errors from run-summary configuration.

use thiserror::Error;

/// Errors detected while loading or validating a [`RunSummaryConfig`](crate::RunSummaryConfig).
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The configuration file could not be read.
    #[error("failed to read run summary config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid TOML or has unknown keys.
    #[error("failed to parse run summary config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The time unit name is empty.
    #[error("time_unit_name must not be empty")]
    EmptyTimeUnit,

    /// A log10 scale factor is outside the printable single-digit range.
    #[error("{name} must lie in -9..=9, got {value}")]
    ScaleOutOfRange {
        /// Offending key.
        name: &'static str,
        /// Configured value.
        value: i32,
    },

    /// The length of one time unit is not a positive finite number.
    #[error("seconds_per_time_unit must be finite and > 0, got {value}")]
    InvalidTimeUnitLength {
        /// Configured value.
        value: f64,
    },
}
