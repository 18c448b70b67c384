//! Fracture-density evolution for ice shelves.
//!
//! Evolves a scalar fracture density `D ∈ [0, 1]` and the time since
//! fracturing over a structured grid. Each update combines:
//!
//! 1. an initiation criterion ([`StressCriterion`]) from deviatoric stress
//! 2. upwind advection of the old density ([`AdvectionScheme`])
//! 3. growth ([`GrowthLaw`]) and healing ([`HealingLaw`])
//! 4. clipping and boundary overrides ([`BoundaryRules`])
//! 5. age advection and reset, and flow enhancement
//!
//! Flags in [`FractureConfig`] are resolved once per call into an
//! [`UpdatePlan`], which the per-cell kernel [`update_cell`] consumes.
//! [`FractureDensity`] drives the kernel over the grid in parallel and
//! publishes the result atomically.
//!
//! # References
//!
//! Albrecht, T. and Levermann, A. (2012), Fracture field for large-scale
//! ice dynamics, J. Glaciol. 58(207), 165–176.
//!
//! Albrecht, T. and Levermann, A. (2014), Fracture-induced softening for
//! large-scale ice dynamics, The Cryosphere 8, 587–605.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advection;
pub mod age;
pub mod boundary;
pub mod cell;
pub mod config;
pub mod criterion;
pub mod diagnostics;
pub mod enhancement;
pub mod error;
pub mod fields;
pub mod growth;
pub mod healing;
pub mod inputs;
pub mod model;
pub mod plan;

pub use advection::{AdvectionScheme, Sector};
pub use boundary::BoundaryRules;
pub use cell::{update_cell, CellInputs, CellOutput};
pub use config::FractureConfig;
pub use criterion::{PrincipalStresses, StressCriterion};
pub use diagnostics::DiagnosticSource;
pub use error::{ConfigError, FractureError};
pub use growth::{GrowthLaw, GrowthParams};
pub use healing::HealingLaw;
pub use inputs::{FlowInputs, StepInputs, StressBalance};
pub use model::{FractureDensity, FractureDensityBuilder, FractureState, UpdateReport};
pub use plan::UpdatePlan;
