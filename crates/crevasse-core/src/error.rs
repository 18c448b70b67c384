//! Error types shared across the workspace.

use thiserror::Error;

/// Errors from reading or writing persisted model state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    /// A required field is absent from the state source.
    #[error("field '{name}' not found in state source")]
    MissingField {
        /// Name of the missing field.
        name: String,
    },
    /// A field has a different number of cells than the model grid.
    #[error("field '{name}' has {actual} values, grid needs {expected}")]
    LengthMismatch {
        /// Name of the offending field.
        name: String,
        /// Number of cells on the model grid.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
    /// The state sink refused the write.
    #[error("could not write field '{name}': {reason}")]
    WriteFailed {
        /// Name of the field being written.
        name: String,
        /// Description supplied by the sink.
        reason: String,
    },
}
