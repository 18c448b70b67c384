//! Time since fracturing.

use crevasse_core::Velocity;
use crevasse_grid::Star;

/// Advect the age field one step and add `dt`.
///
/// Per-axis first-order upwind on the four-point star of the old age,
/// independent of the scheme used for density.
pub fn advance(a: &Star<f64>, vel: Velocity, dt: f64, dx: f64, dy: f64) -> f64 {
    let Velocity { u, v } = vel;
    let ddx = if u < 0.0 { a.e - a.c } else { a.c - a.w };
    let ddy = if v < 0.0 { a.n - a.c } else { a.c - a.s };
    a.c - dt * u * ddx / dx - dt * v * ddy / dy + dt
}

/// Clip to `[0, ∞)`, mapping NaN to zero.
pub fn sanitize(age: f64) -> f64 {
    if age.is_nan() {
        0.0
    } else {
        age.max(0.0)
    }
}
