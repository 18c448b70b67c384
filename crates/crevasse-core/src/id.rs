//! Strongly-typed identifiers.

use std::fmt;

/// Counts published time levels of the persisted model state.
///
/// Incremented each time an update publishes its staging buffers. A
/// restart, bootstrap or explicit initialisation also publishes, so two
/// readers holding the same generation have seen identical state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation following this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
