//! Named diagnostic fields.

use crevasse_grid::Scalar;
use indexmap::IndexMap;

/// A component exposing read-only fields by name.
///
/// The map preserves reporting order.
pub trait DiagnosticSource {
    /// Name → field, in reporting order.
    fn diagnostics(&self) -> IndexMap<&'static str, &Scalar>;
}
