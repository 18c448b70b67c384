//! Core types and traits for the Crevasse fracture-density model.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! per-cell value types consumed from the stress-balance and geometry
//! collaborators, field metadata descriptors, error types, and the service
//! traits through which the model talks to the flow law and to persisted
//! state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod field;
pub mod id;
pub mod tensor;
pub mod traits;

pub use cell::CellType;
pub use error::StateError;
pub use field::{FieldDef, FieldKind, ValidRange};
pub use id::Generation;
pub use tensor::{DeviatoricStress, PrincipalStrainRates, Velocity};
pub use traits::{FlowLaw, GlenFlowLaw, StateReader, StateWriter};
