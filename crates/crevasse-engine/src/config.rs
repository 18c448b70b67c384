//! Run-summary configuration.

use std::path::Path;

use serde::Deserialize;

use crate::error::SummaryError;

/// Seconds in one year of 365.2422 days.
pub const SECONDS_PER_YEAR: f64 = 3.155_692_597_47e7;

fn default_time_unit_name() -> String {
    "years".to_string()
}

fn default_seconds_per_time_unit() -> f64 {
    SECONDS_PER_YEAR
}

// ── RunSummaryConfig ──────────────────────────────────────────────

/// Units and scales of the run summary.
///
/// Loaded from a `[run_summary]` table. Defaults report time in years,
/// volume in km³ and area in km².
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSummaryConfig {
    /// Name printed for the time unit. Default: `"years"`.
    #[serde(default = "default_time_unit_name")]
    pub time_unit_name: String,

    /// Length of one time unit in seconds. Default: one year.
    #[serde(default = "default_seconds_per_time_unit")]
    pub seconds_per_time_unit: f64,

    /// Volume is reported in units of `10^k km³`. Default: 0.
    #[serde(default)]
    pub volume_scale_factor_log10: i32,

    /// Area is reported in units of `10^k km²`. Default: 0.
    #[serde(default)]
    pub area_scale_factor_log10: i32,
}

impl Default for RunSummaryConfig {
    fn default() -> Self {
        Self {
            time_unit_name: default_time_unit_name(),
            seconds_per_time_unit: default_seconds_per_time_unit(),
            volume_scale_factor_log10: 0,
            area_scale_factor_log10: 0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    run_summary: RunSummaryConfig,
}

impl RunSummaryConfig {
    /// Load from a TOML file containing a `[run_summary]` table.
    pub fn from_file(path: &Path) -> Result<Self, SummaryError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse TOML text containing a `[run_summary]` table.
    pub fn parse(text: &str) -> Result<Self, SummaryError> {
        let file: ConfigFile = toml::from_str(text)?;
        file.run_summary.validate()?;
        Ok(file.run_summary)
    }

    /// Check the configuration for printable values.
    pub fn validate(&self) -> Result<(), SummaryError> {
        if self.time_unit_name.trim().is_empty() {
            return Err(SummaryError::EmptyTimeUnit);
        }
        if !(self.seconds_per_time_unit.is_finite() && self.seconds_per_time_unit > 0.0) {
            return Err(SummaryError::InvalidTimeUnitLength {
                value: self.seconds_per_time_unit,
            });
        }
        for (name, value) in [
            ("volume_scale_factor_log10", self.volume_scale_factor_log10),
            ("area_scale_factor_log10", self.area_scale_factor_log10),
        ] {
            if !(-9..=9).contains(&value) {
                return Err(SummaryError::ScaleOutOfRange { name, value });
            }
        }
        Ok(())
    }

    /// `10^k` volume divisor.
    pub fn volume_scale(&self) -> f64 {
        10f64.powi(self.volume_scale_factor_log10)
    }

    /// `10^k` area divisor.
    pub fn area_scale(&self) -> f64 {
        10f64.powi(self.area_scale_factor_log10)
    }

    /// Convert seconds to the configured time unit.
    pub fn to_time_units(&self, seconds: f64) -> f64 {
        seconds / self.seconds_per_time_unit
    }
}
