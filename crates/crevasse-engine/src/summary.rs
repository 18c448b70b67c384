//! The run summary printed to the log as the model steps.
//!
//! A summary is a flag line followed by an `S` line:
//!
//! ```text
//!  [flags] (dt=0.50000 in 2 substeps; av dt_sub_mass_cont=0.25000)
//! S 12.500:    0.00150    0.01000          0.00000        365.24220
//! ```
//!
//! Mass-continuity sub-steps are batched by a [`SummaryAccumulator`] until
//! the caller asks for a summary; `P` and `U` prototype lines naming the
//! columns and their units are printed once at the start of a run.

use crevasse_core::Velocity;
use crevasse_grid::{Array2D, Grid2D, Scalar};
use tracing::info;

use crate::config::RunSummaryConfig;

// ── SummaryAccumulator ────────────────────────────────────────────

/// Sub-step batching between two printed summaries.
///
/// The flag string of the first sub-step of a batch is kept; later flags
/// are ignored until [`flush`](Self::flush) starts a new batch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryAccumulator {
    flags: String,
    substeps: u32,
    dt_sum: f64,
}

impl SummaryAccumulator {
    /// An empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sub-step of `dt` seconds with the given process flags.
    ///
    /// Steps with `dt <= 0` capture flags but are not counted.
    pub fn record(&mut self, flags: &str, dt: f64) {
        if self.substeps == 0 {
            self.flags = flags.to_string();
        }
        if dt > 0.0 {
            self.substeps += 1;
            self.dt_sum += dt;
        }
    }

    /// Counted sub-steps in the current batch.
    pub fn substeps(&self) -> u32 {
        self.substeps
    }

    /// Total duration of the current batch, in seconds.
    pub fn dt_sum(&self) -> f64 {
        self.dt_sum
    }

    /// Flags captured at the start of the batch.
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Close the batch: the captured flags followed by the step summary,
    /// `dt_sum` converted by `to_units`.
    pub fn flush(&mut self, to_units: impl Fn(f64) -> f64) -> String {
        let major_dt = to_units(self.dt_sum);
        let mut line = std::mem::take(&mut self.flags);
        if self.substeps <= 1 {
            line.push_str(&format!(" (dt={major_dt:.5})"));
        } else {
            let n = self.substeps;
            let average = major_dt / f64::from(n);
            line.push_str(&format!(
                " (dt={major_dt:.5} in {n} substeps; av dt_sub_mass_cont={average:.5})"
            ));
        }
        self.substeps = 0;
        self.dt_sum = 0.0;
        line
    }
}

// ── SummarySample ─────────────────────────────────────────────────

/// Quantities reported on one `S` line, in SI units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SummarySample {
    /// Model time (s).
    pub time: f64,
    /// Ice volume (m³).
    pub volume: f64,
    /// Ice-covered area (m²).
    pub area: f64,
    /// Maximum diffusivity (m² s⁻¹).
    pub max_diffusivity: f64,
    /// Maximum sliding speed, `max(|u|, |v|)` (m s⁻¹).
    pub max_velocity: f64,
}

impl SummarySample {
    /// Measure volume, area and sliding speed from the model fields.
    ///
    /// Only cells with positive thickness count towards the volume, the
    /// area and the maximum speed.
    pub fn from_fields(
        grid: &Grid2D,
        time: f64,
        thickness: &Scalar,
        velocity: &Array2D<Velocity>,
        max_diffusivity: f64,
    ) -> Self {
        let cell_area = grid.cell_area();
        let mut volume = 0.0;
        let mut area = 0.0;
        let mut max_velocity = 0.0_f64;
        for (i, j) in grid.points() {
            let h = thickness.at(i, j);
            if h > 0.0 {
                volume += h * cell_area;
                area += cell_area;
                let Velocity { u, v } = velocity.at(i, j);
                max_velocity = max_velocity.max(u.abs()).max(v.abs());
            }
        }
        Self {
            time,
            volume,
            area,
            max_diffusivity,
            max_velocity,
        }
    }
}

// ── SummaryPrinter ────────────────────────────────────────────────

/// Formats and logs the run summary.
///
/// Every line is emitted with `tracing::info!` and also returned so the
/// caller can route it elsewhere.
#[derive(Clone, Debug, Default)]
pub struct SummaryPrinter {
    config: RunSummaryConfig,
    batch: SummaryAccumulator,
}

fn scale_label(log10: i32, blank: &'static str) -> String {
    if log10 == 0 {
        blank.to_string()
    } else {
        format!("10^{log10}_")
    }
}

impl SummaryPrinter {
    /// A printer with the given units and scales.
    pub fn new(config: RunSummaryConfig) -> Self {
        Self {
            config,
            batch: SummaryAccumulator::new(),
        }
    }

    /// Units and scales in use.
    pub fn config(&self) -> &RunSummaryConfig {
        &self.config
    }

    /// The current sub-step batch.
    pub fn batch(&self) -> &SummaryAccumulator {
        &self.batch
    }

    /// The `P` and `U` lines naming the `S` columns and their units.
    pub fn prototype(&self) -> [String; 2] {
        let units = &self.config.time_unit_name;
        let vol = scale_label(self.config.volume_scale_factor_log10, "     ");
        let area = scale_label(self.config.area_scale_factor_log10, "   ");
        let lines = [
            "P         time:       ivol      iarea  max_diffusivity  max_sliding_vel".to_string(),
            format!("U         {units}   {vol}km^3  {area}km^2         m^2 s^-1           m/{units}"),
        ];
        for line in &lines {
            info!("{line}");
        }
        lines
    }

    /// Record a sub-step of `dt` seconds with its process flags, without
    /// printing.
    pub fn record(&mut self, flags: &str, dt: f64) {
        self.batch.record(flags, dt);
    }

    /// Record a final sub-step and print the batch summary.
    ///
    /// Returns the flag line (omitted when `dt <= 0`, as nothing was done)
    /// followed by the `S` line. The batch is reset.
    pub fn summarize(&mut self, flags: &str, dt: f64, sample: &SummarySample) -> Vec<String> {
        self.batch.record(flags, dt);
        let config = &self.config;
        let flag_line = self.batch.flush(|s| config.to_time_units(s));

        let mut lines = Vec::with_capacity(2);
        if dt > 0.0 {
            info!("{flag_line}");
            lines.push(flag_line);
        }
        let s_line = self.s_line(sample);
        info!("{s_line}");
        lines.push(s_line);
        lines
    }

    /// Format one `S` line.
    pub fn s_line(&self, sample: &SummarySample) -> String {
        let c = &self.config;
        let time = c.to_time_units(sample.time);
        let volume = sample.volume / (c.volume_scale() * 1.0e9);
        let area = sample.area / (c.area_scale() * 1.0e6);
        let velocity = sample.max_velocity * c.seconds_per_time_unit;
        format!(
            "S {time:.3}:   {volume:8.5}  {area:9.5}     {:12.5}     {velocity:12.5}",
            sample.max_diffusivity
        )
    }
}
