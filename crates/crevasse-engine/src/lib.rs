//! Run-level reporting for Crevasse simulations.
//!
//! The time-stepping driver lives outside this workspace; this crate
//! supplies the pieces it reports through:
//!
//! - [`count_cfl_violations`] checks a velocity field against the
//!   advective CFL limit of a step.
//! - [`SummaryAccumulator`] batches mass-continuity sub-steps between
//!   printed summaries.
//! - [`SummaryPrinter`] formats the `P`/`U` prototype lines and the `S`
//!   lines of the run summary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cfl;
pub mod config;
pub mod error;
pub mod summary;

pub use cfl::{cfl_flag, count_cfl_violations};
pub use config::RunSummaryConfig;
pub use error::SummaryError;
pub use summary::{SummaryAccumulator, SummaryPrinter, SummarySample};
