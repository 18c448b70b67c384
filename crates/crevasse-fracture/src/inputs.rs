//! Per-call inputs and the stress-balance seam.

use crevasse_core::{CellType, DeviatoricStress, FlowLaw, PrincipalStrainRates, Velocity};
use crevasse_grid::{Array2D, Grid2D, Scalar};

use crate::error::FractureError;

/// Geometry and flow fields supplied by the ice-dynamics collaborators.
///
/// Borrowed for the duration of one update; never modified.
#[derive(Clone, Copy, Debug)]
pub struct FlowInputs<'a> {
    /// Horizontal ice velocity (m s⁻¹).
    pub velocity: &'a Array2D<Velocity>,
    /// Ice thickness (m).
    pub thickness: &'a Scalar,
    /// Cell classification.
    pub cell_type: &'a Array2D<CellType>,
    /// Boundary-condition mask; values above 0.5 mark boundary cells.
    pub bc_mask: &'a Scalar,
    /// Ice hardness `B` (Pa s^(1/n)).
    pub hardness: &'a Scalar,
}

/// Everything one update reads besides the model's own state.
#[derive(Clone, Copy, Debug)]
pub struct StepInputs<'a> {
    /// Geometry and flow fields.
    pub flow: FlowInputs<'a>,
    /// Principal horizontal strain rates.
    pub strain_rates: &'a Array2D<PrincipalStrainRates>,
    /// Deviatoric stresses.
    pub stresses: &'a Array2D<DeviatoricStress>,
}

fn check(name: &'static str, actual: (usize, usize), grid: &Grid2D) -> Result<(), FractureError> {
    if actual == grid.shape() {
        Ok(())
    } else {
        Err(FractureError::InputShape {
            name,
            expected: grid.shape(),
            actual,
        })
    }
}

impl FlowInputs<'_> {
    /// `Err(FractureError::InputShape)` naming the first input not on `grid`.
    pub fn check_shape(&self, grid: &Grid2D) -> Result<(), FractureError> {
        check("velocity", self.velocity.shape(), grid)?;
        check("thickness", self.thickness.shape(), grid)?;
        check("cell_type", self.cell_type.shape(), grid)?;
        check("bc_mask", self.bc_mask.shape(), grid)?;
        check("hardness", self.hardness.shape(), grid)
    }
}

impl StepInputs<'_> {
    /// `Err(FractureError::InputShape)` naming the first input not on `grid`.
    pub fn check_shape(&self, grid: &Grid2D) -> Result<(), FractureError> {
        self.flow.check_shape(grid)?;
        check("strain_rates", self.strain_rates.shape(), grid)?;
        check("stresses", self.stresses.shape(), grid)
    }
}

/// Supplies strain rates and stresses derived from the velocity field.
///
/// Implemented by the stress-balance solver. Implementations write every
/// interior cell of `out`; ice-free cells conventionally receive zeros.
pub trait StressBalance {
    /// Principal horizontal strain rates, `e1 >= e2`.
    fn principal_strain_rates(
        &self,
        grid: &Grid2D,
        velocity: &Array2D<Velocity>,
        cell_type: &Array2D<CellType>,
        out: &mut Array2D<PrincipalStrainRates>,
    );

    /// Vertically averaged deviatoric stresses.
    fn deviatoric_stresses(
        &self,
        grid: &Grid2D,
        flow_law: &dyn FlowLaw,
        velocity: &Array2D<Velocity>,
        hardness: &Scalar,
        cell_type: &Array2D<CellType>,
        out: &mut Array2D<DeviatoricStress>,
    );
}
