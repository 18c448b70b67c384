//! Service traits for the external collaborators of the fracture model.

use crate::error::StateError;
use crate::field::FieldDef;

/// The ice flow law, as far as the fracture model needs it.
///
/// Hardness is consumed as a per-cell field; only the creep exponent is
/// queried from the flow law itself.
pub trait FlowLaw: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Glen-type stress exponent `n`.
    fn exponent(&self) -> f64;
}

/// Isothermal Glen flow law with a fixed exponent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlenFlowLaw {
    exponent: f64,
}

impl GlenFlowLaw {
    /// A Glen law with exponent `n`.
    pub const fn new(exponent: f64) -> Self {
        Self { exponent }
    }
}

impl Default for GlenFlowLaw {
    fn default() -> Self {
        Self::new(3.0)
    }
}

impl FlowLaw for GlenFlowLaw {
    fn name(&self) -> &str {
        "glen"
    }

    fn exponent(&self) -> f64 {
        self.exponent
    }
}

/// Read access to named fields of a persisted state source.
///
/// Implemented by restart and bootstrap readers. Values are the interior
/// cells of the grid in row-major order (`j * mx + i`). Returns `None` if
/// the source does not contain the field.
pub trait StateReader {
    /// Read a field by name.
    fn read_field(&self, name: &str) -> Option<&[f64]>;
}

/// Write access to a persisted state sink.
///
/// Implemented by checkpoint writers. The definition carries the metadata
/// (long name, units, valid range) the sink should attach to the variable.
pub trait StateWriter {
    /// Define and write a field.
    fn write_field(&mut self, def: &FieldDef, values: &[f64]) -> Result<(), StateError>;
}
