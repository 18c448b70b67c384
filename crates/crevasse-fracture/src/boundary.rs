//! Clipping and boundary overrides.

use crevasse_core::CellType;

/// Boundary rules applied after the physics of each cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundaryRules {
    /// Evolve fracture density on grounded ice.
    pub include_grounded_ice: bool,
    /// Density imposed on grounded boundary-condition cells.
    pub boundary_value: f64,
    /// Hold density at its old value.
    pub constant_density: bool,
}

/// Which override, if any, replaces a cell's computed state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Override {
    /// Keep the computed state.
    None,
    /// Grounded boundary-condition cell: density is the boundary value,
    /// derived fields are neutral.
    GroundedBoundary,
    /// Ice-free cell or outermost ring of the domain: everything neutral.
    Exterior,
}

impl BoundaryRules {
    /// Select the override for a cell. Later stages take precedence, so
    /// an ice-free grounded cell with `bc_mask` set is `Exterior`.
    pub fn classify(&self, cell: CellType, bc_mask: f64, domain_edge: bool) -> Override {
        if cell.ice_free() || domain_edge {
            Override::Exterior
        } else if cell.grounded() && !self.include_grounded_ice && bc_mask > 0.5 {
            Override::GroundedBoundary
        } else {
            Override::None
        }
    }
}

/// Clip `new` to `[0, 1]`; a NaN falls back to `old`, itself clipped.
pub fn clip_damage(new: f64, old: f64) -> f64 {
    if new.is_nan() {
        if old.is_nan() {
            0.0
        } else {
            old.clamp(0.0, 1.0)
        }
    } else {
        new.clamp(0.0, 1.0)
    }
}
