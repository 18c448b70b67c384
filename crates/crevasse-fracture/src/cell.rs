//! The per-cell update kernel.
//!
//! [`update_cell`] is a pure function of the old-state neighbourhood and
//! the cell's inputs. The sequence inside one cell is fixed:
//!
//! 1. criterion from the stress tensor
//! 2. advection of the old density
//! 3. growth, decided against the advected density
//! 4. healing, weighted by the old density
//! 5. clip to `[0, 1]`
//! 6. diagnostics and age on icy cells
//! 7. boundary overrides (grounded boundary, then exterior)
//! 8. constant-density override
//! 9. flow enhancement from the final density

use crevasse_core::{CellType, DeviatoricStress, PrincipalStrainRates, Velocity};
use crevasse_grid::{Box3, Star};
use tracing::warn;

use crate::advection::angle_degrees;
use crate::age;
use crate::boundary::{clip_damage, Override};
use crate::enhancement::flow_enhancement;
use crate::plan::UpdatePlan;

/// What one cell reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellInputs {
    /// Column index, for diagnostics only.
    pub i: usize,
    /// Row index, for diagnostics only.
    pub j: usize,
    /// Old density around the cell.
    pub damage: Box3<f64>,
    /// Old age around the cell.
    pub age: Star<f64>,
    /// Velocity at the cell.
    pub velocity: Velocity,
    /// Principal strain rates at the cell.
    pub strain: PrincipalStrainRates,
    /// Deviatoric stress at the cell.
    pub stress: DeviatoricStress,
    /// Ice hardness.
    pub hardness: f64,
    /// Ice thickness.
    pub thickness: f64,
    /// Classification.
    pub cell_type: CellType,
    /// Boundary-condition mask.
    pub bc_mask: f64,
    /// Cell lies on the outermost ring of the domain.
    pub domain_edge: bool,
}

/// What one cell writes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellOutput {
    /// New fracture density.
    pub damage: f64,
    /// New fracture age.
    pub age: f64,
    /// Growth-rate diagnostic.
    pub growth_rate: f64,
    /// Healing-rate diagnostic.
    pub healing_rate: f64,
    /// Toughness diagnostic.
    pub toughness: f64,
    /// Flow-enhancement diagnostic.
    pub flow_enhancement: f64,
    /// The eight-sector scheme found no sector for this cell.
    pub degenerate: bool,
    /// Fracturing was initiated at this (icy, non-overridden) cell.
    pub initiated: bool,
}

impl CellOutput {
    /// Neutral state with the given density.
    fn neutral(damage: f64, degenerate: bool) -> Self {
        Self {
            damage,
            age: 0.0,
            growth_rate: 0.0,
            healing_rate: 0.0,
            toughness: 0.0,
            flow_enhancement: 1.0,
            degenerate,
            initiated: false,
        }
    }
}

/// Advance one cell by `dt` seconds on a grid with spacings `dx`, `dy`.
pub fn update_cell(plan: &UpdatePlan, dt: f64, dx: f64, dy: f64, c: &CellInputs) -> CellOutput {
    let d_old = c.damage.center();

    let measure = plan.criterion.evaluate(&c.stress);

    let advected = plan.advection.flux(&c.damage, c.velocity, dx, dy);
    if advected.degenerate {
        warn!(
            i = c.i,
            j = c.j,
            angle_deg = angle_degrees(c.velocity.u, c.velocity.v),
            u = c.velocity.u,
            v = c.velocity.v,
            "velocity matches no advection sector; flux set to zero"
        );
    }
    let mut damage = d_old - advected.flux * dt;

    let initiated = plan.growth.initiates(measure);
    let growth_rate = if initiated {
        plan.growth.rate(c.strain.e1, damage)
    } else {
        0.0
    };
    damage = plan.growth.grow(
        damage,
        measure,
        c.strain,
        c.thickness,
        c.hardness,
        plan.exponent,
        dt,
    );

    let icy = c.cell_type.icy();
    let healing = if icy {
        plan.healing.rate(c.strain.e1, d_old)
    } else {
        None
    };
    if let Some(rate) = healing {
        damage += rate * dt;
    }

    damage = clip_damage(damage, d_old);

    // Ice-free cells always classify as Exterior, so `None` implies icy.
    let rule = plan
        .boundary
        .classify(c.cell_type, c.bc_mask, c.domain_edge);
    let mut out = match rule {
        Override::Exterior => CellOutput::neutral(0.0, advected.degenerate),
        Override::GroundedBoundary => {
            CellOutput::neutral(plan.boundary.boundary_value, advected.degenerate)
        }
        Override::None => {
            let aged = if initiated {
                0.0
            } else {
                age::advance(&c.age, c.velocity, dt, dx, dy)
            };
            CellOutput {
                damage,
                age: age::sanitize(aged),
                growth_rate,
                healing_rate: healing.unwrap_or(0.0),
                toughness: measure,
                flow_enhancement: 1.0,
                degenerate: advected.degenerate,
                initiated,
            }
        }
    };

    if plan.boundary.constant_density {
        out.damage = d_old;
    }

    if rule == Override::None {
        out.flow_enhancement =
            flow_enhancement(out.damage, plan.softening_lower_limit, plan.exponent);
    }

    out
}
