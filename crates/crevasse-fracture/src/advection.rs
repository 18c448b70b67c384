//! Upwind advection of fracture density.
//!
//! Both schemes return the flux divergence `u·∂D/∂x + v·∂D/∂y` at a cell,
//! evaluated from the old density field. The caller subtracts
//! `flux · dt` from the new density.

use crevasse_core::Velocity;
use crevasse_grid::Box3;

/// Upwind scheme used to advect fracture density.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdvectionScheme {
    /// Independent first-order upwind difference along each axis.
    #[default]
    SimpleUpwind,
    /// Direction-aware scheme that picks one of eight sectors of the
    /// velocity plane and differences along the matching diagonal cells.
    EightSector,
}

/// One of the eight sectors of the `(u, v)` plane.
///
/// Sectors are tested in declaration order and the first match wins.
/// With `r = dx / dy`:
///
/// | Sector | Condition |
/// |---|---|
/// | `S1` | `u >= r·v` and `v >= 0` |
/// | `S2` | `u <= r·v` and `u >= 0` |
/// | `S3` | `u >= −r·v` and `u <= 0` |
/// | `S4` | `u <= −r·v` and `v >= 0` |
/// | `S5` | `u <= r·v` and `v <= 0` |
/// | `S6` | `u >= r·v` and `u <= 0` |
/// | `S7` | `u <= −r·v` and `u >= 0` |
/// | `S8` | `u >= −r·v` and `v <= 0` |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Sector {
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    S8,
}

impl Sector {
    /// All sectors in test order.
    pub const ALL: [Sector; 8] = [
        Sector::S1,
        Sector::S2,
        Sector::S3,
        Sector::S4,
        Sector::S5,
        Sector::S6,
        Sector::S7,
        Sector::S8,
    ];

    /// Whether `(u, v)` satisfies this sector's condition on a grid with
    /// spacings `dx`, `dy`.
    pub fn contains(self, u: f64, v: f64, dx: f64, dy: f64) -> bool {
        let rv = dx * v / dy;
        match self {
            Self::S1 => u >= rv && v >= 0.0,
            Self::S2 => u <= rv && u >= 0.0,
            Self::S3 => u >= -rv && u <= 0.0,
            Self::S4 => u <= -rv && v >= 0.0,
            Self::S5 => u <= rv && v <= 0.0,
            Self::S6 => u >= rv && u <= 0.0,
            Self::S7 => u <= -rv && u >= 0.0,
            Self::S8 => u >= -rv && v <= 0.0,
        }
    }

    /// The first sector containing `(u, v)`, or `None` if no comparison
    /// holds (only possible when a component is NaN).
    pub fn classify(u: f64, v: f64, dx: f64, dy: f64) -> Option<Sector> {
        Self::ALL.into_iter().find(|s| s.contains(u, v, dx, dy))
    }

    /// Flux divergence for this sector.
    ///
    /// `d.at(di, dj)` is the old density at `(i + di, j + dj)`.
    pub fn flux(self, d: &Box3<f64>, u: f64, v: f64, dx: f64, dy: f64) -> f64 {
        let c = d.center();
        match self {
            Self::S1 => u * (c - d.at(-1, 0)) / dx + v * (d.at(-1, 0) - d.at(-1, -1)) / dy,
            Self::S2 => u * (d.at(0, -1) - d.at(-1, -1)) / dx + v * (c - d.at(0, -1)) / dy,
            Self::S3 => -u * (d.at(0, -1) - d.at(1, -1)) / dx + v * (c - d.at(0, -1)) / dy,
            Self::S4 => -u * (c - d.at(1, 0)) / dx + v * (d.at(1, 0) - d.at(1, -1)) / dy,
            Self::S5 => -u * (c - d.at(1, 0)) / dx - v * (d.at(1, 0) - d.at(1, 1)) / dy,
            Self::S6 => -u * (d.at(0, 1) - d.at(1, 1)) / dx - v * (c - d.at(0, 1)) / dy,
            Self::S7 => u * (d.at(0, 1) - d.at(-1, 1)) / dx - v * (c - d.at(0, 1)) / dy,
            Self::S8 => u * (c - d.at(-1, 0)) / dx - v * (d.at(-1, 0) - d.at(-1, 1)) / dy,
        }
    }
}

/// Result of advecting one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Advected {
    /// Flux divergence (s⁻¹).
    pub flux: f64,
    /// Sector used by the eight-sector scheme; `None` for the simple
    /// scheme.
    pub sector: Option<Sector>,
    /// The eight-sector scheme found no sector; `flux` is zero.
    pub degenerate: bool,
}

impl AdvectionScheme {
    /// Flux divergence at the centre of `d` for velocity `vel`.
    pub fn flux(self, d: &Box3<f64>, vel: Velocity, dx: f64, dy: f64) -> Advected {
        let Velocity { u, v } = vel;
        match self {
            Self::SimpleUpwind => Advected {
                flux: simple_upwind(d, u, v, dx, dy),
                sector: None,
                degenerate: false,
            },
            Self::EightSector => match Sector::classify(u, v, dx, dy) {
                Some(sector) => Advected {
                    flux: sector.flux(d, u, v, dx, dy),
                    sector: Some(sector),
                    degenerate: false,
                },
                None => Advected {
                    flux: 0.0,
                    sector: None,
                    degenerate: true,
                },
            },
        }
    }
}

/// First-order upwind along each axis independently.
pub fn simple_upwind(d: &Box3<f64>, u: f64, v: f64, dx: f64, dy: f64) -> f64 {
    let s = d.star();
    let ddx = if u < 0.0 { s.e - s.c } else { s.c - s.w };
    let ddy = if v < 0.0 { s.n - s.c } else { s.c - s.s };
    u * ddx / dx + v * ddy / dy
}

/// Local flow angle `atan(v / u)` in degrees, as reported for
/// degenerate cells.
pub fn angle_degrees(u: f64, v: f64) -> f64 {
    (v / u).atan().to_degrees()
}
