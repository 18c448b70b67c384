//! Arena-specific error types.

use thiserror::Error;

/// Errors from driving the publish lifecycle out of order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// `replace()` was called while a step was open.
    #[error("replace() called while a step is in progress")]
    StepInProgress,
    /// `publish()` was called without a preceding `begin_step()`.
    #[error("publish() called without a preceding begin_step()")]
    NoStepInProgress,
    /// A buffer was replaced with one whose shape does not match.
    #[error("buffer shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Shape of the resident buffers.
        expected: (usize, usize),
        /// Shape of the offered buffer.
        actual: (usize, usize),
    },
}
