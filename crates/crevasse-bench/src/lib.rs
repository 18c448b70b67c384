//! Benchmark profiles for the Crevasse fracture-density model.
//!
//! - [`reference_profile`]: 100x100 grid (10K cells)
//! - [`stress_profile`]: 316x316 grid (~100K cells)
//!
//! Both profiles describe a shelf flowing around a central point, so the
//! eight-sector scheme visits every sector, with a tensile stress band
//! across the middle rows where fracturing initiates.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use crevasse_core::{DeviatoricStress, PrincipalStrainRates, Velocity};
use crevasse_fracture::{FractureConfig, FractureDensity, FractureError};
use crevasse_grid::{Array2D, Scalar};
use crevasse_test_utils::{Shelf, ShelfBuilder};

/// Time step used by the profiles: ten days, within the CFL limit of the
/// profile velocities.
pub const PROFILE_DT: f64 = 8.64e5;

/// Shelf inputs and a model ready to step.
pub struct Profile {
    /// Input fields.
    pub shelf: Shelf,
    /// Model with a seeded damage field.
    pub model: FractureDensity,
}

/// 100x100 reference profile.
pub fn reference_profile(config: FractureConfig) -> Result<Profile, FractureError> {
    profile(100, config)
}

/// 316x316 stress profile.
pub fn stress_profile(config: FractureConfig) -> Result<Profile, FractureError> {
    profile(316, config)
}

/// Square profile of side `n` cells.
pub fn profile(n: usize, config: FractureConfig) -> Result<Profile, FractureError> {
    let mut shelf = ShelfBuilder::new(n, n).grounded_columns(2).build();
    let grid = shelf.grid;
    let centre = n as f64 / 2.0;

    // Rigid rotation, about 11 km/yr at the corners.
    let omega = 5.0e-4 / (n as f64 * grid.dx());
    shelf.velocity = Array2D::from_fn(&grid, |i, j| {
        let x = (i as f64 - centre) * grid.dx();
        let y = (j as f64 - centre) * grid.dy();
        Velocity::new(-omega * y, omega * x)
    });
    shelf.stresses = Array2D::from_fn(&grid, |_, j| {
        let band = 1.0 - ((j as f64 - centre) / centre).abs();
        DeviatoricStress::new(1.5e5 * band, -2.0e4, 3.0e4 * band)
    });
    shelf.strain_rates = Array2D::from_fn(&grid, |i, _| {
        PrincipalStrainRates::new(1.0e-9 * (1.0 + i as f64 / n as f64), -1.0e-10)
    });

    let mut model = FractureDensity::builder(grid).config(config).build()?;
    let density = Scalar::from_fn(&grid, |i, j| ((i * 7 + j * 13) % 10) as f64 / 20.0);
    model.initialize_from(&density, &Scalar::new(&grid))?;
    Ok(Profile { shelf, model })
}
