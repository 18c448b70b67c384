//! Field descriptors: names, units and valid-range contracts.

/// Classification of a field's per-cell layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A single floating-point value per cell.
    Scalar,
    /// A fixed-size tuple of floating-point values per cell.
    Vector {
        /// Number of components (2 for strain-rate eigenvalues, 3 for stress).
        dims: u32,
    },
}

impl FieldKind {
    /// Returns the number of f64 storage slots this kind requires per cell.
    pub fn components(&self) -> u32 {
        match self {
            Self::Scalar => 1,
            Self::Vector { dims } => *dims,
        }
    }
}

/// Declared `[valid_min, valid_max]` range of a field.
///
/// This is a metadata contract attached to persisted and diagnostic fields,
/// not a runtime assertion. Either end may be open.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValidRange {
    /// Inclusive lower bound, if any.
    pub min: Option<f64>,
    /// Inclusive upper bound, if any.
    pub max: Option<f64>,
}

impl ValidRange {
    /// No bounds in either direction.
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    /// Closed range `[min, max]`.
    pub const fn closed(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Half-open range `[min, ∞)`.
    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Whether `value` satisfies the declared range. NaN never does.
    pub fn contains(&self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        self.min.is_none_or(|lo| value >= lo) && self.max.is_none_or(|hi| value <= hi)
    }
}

/// Definition of a named grid field.
///
/// Carries the metadata that external writers attach to the field when it
/// is checkpointed or exported as a diagnostic.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDef {
    /// Short variable name (e.g. `"fracture_density"`).
    pub name: String,
    /// Human-readable description.
    pub long_name: String,
    /// Per-cell layout.
    pub kind: FieldKind,
    /// Optional unit annotation (e.g. `"second^-1"`).
    pub units: Option<String>,
    /// Declared valid range.
    pub valid_range: ValidRange,
}

impl FieldDef {
    /// A scalar field with the given name and description, no units and no bounds.
    pub fn scalar(name: impl Into<String>, long_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            long_name: long_name.into(),
            kind: FieldKind::Scalar,
            units: None,
            valid_range: ValidRange::UNBOUNDED,
        }
    }

    /// Set the unit annotation.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Set the declared valid range.
    pub fn with_range(mut self, range: ValidRange) -> Self {
        self.valid_range = range;
        self
    }

    /// Set the per-cell layout.
    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }
}
