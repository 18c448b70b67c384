//! Crevasse: fracture-density evolution for ice shelves.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Crevasse sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use crevasse::prelude::*;
//!
//! let grid = Grid2D::new(8, 6, 1.0e3, 1.0e3).unwrap();
//! let mut model = FractureDensity::new(grid);
//!
//! // A floating shelf under uniform tension.
//! let velocity = Array2D::filled(&grid, Velocity::new(1.0e-6, 0.0));
//! let thickness = Scalar::filled(&grid, 300.0);
//! let cell_type = Array2D::filled(&grid, CellType::FloatingIce);
//! let bc_mask = Scalar::new(&grid);
//! let hardness = Scalar::filled(&grid, 1.0e8);
//! let strain_rates = Array2D::filled(&grid, PrincipalStrainRates::new(1.0e-9, 0.0));
//! let stresses = Array2D::filled(&grid, DeviatoricStress::new(1.0e5, 0.0, 0.0));
//!
//! let inputs = StepInputs {
//!     flow: FlowInputs {
//!         velocity: &velocity,
//!         thickness: &thickness,
//!         cell_type: &cell_type,
//!         bc_mask: &bc_mask,
//!         hardness: &hardness,
//!     },
//!     strain_rates: &strain_rates,
//!     stresses: &stresses,
//! };
//! let report = model.update(8.64e5, &inputs).unwrap();
//! assert_eq!(report.generation, Generation(1));
//! assert!(model.density().at(3, 3) > 0.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `crevasse-core` | value types, field metadata, service traits |
//! | [`grid`] | `crevasse-grid` | grid, halo arrays, stencils |
//! | [`arena`] | `crevasse-arena` | ping-pong time levels |
//! | [`fracture`] | `crevasse-fracture` | the fracture-density model |
//! | [`engine`] | `crevasse-engine` | run summary and CFL checks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Value types, field metadata and service traits (`crevasse-core`).
pub use crevasse_core as types;

/// Structured grid, halo arrays and stencils (`crevasse-grid`).
pub use crevasse_grid as grid;

/// Double-buffered time levels (`crevasse-arena`).
pub use crevasse_arena as arena;

/// The fracture-density model (`crevasse-fracture`).
///
/// [`fracture::FractureDensity`] is the entry point; its parameters are a
/// [`fracture::FractureConfig`].
pub use crevasse_fracture as fracture;

/// Run-summary reporting and CFL checks (`crevasse-engine`).
pub use crevasse_engine as engine;

/// Common imports for typical Crevasse usage.
pub mod prelude {
    // Core types and traits
    pub use crevasse_core::{
        CellType, DeviatoricStress, FieldDef, FlowLaw, Generation, GlenFlowLaw,
        PrincipalStrainRates, StateReader, StateWriter, Velocity,
    };

    // Grid
    pub use crevasse_grid::{Array2D, EdgeBehavior, Grid2D, Scalar};

    // Model
    pub use crevasse_fracture::{
        DiagnosticSource, FlowInputs, FractureConfig, FractureDensity, FractureError,
        StepInputs, StressBalance, UpdateReport,
    };

    // Reporting
    pub use crevasse_engine::{RunSummaryConfig, SummaryPrinter, SummarySample};
}
