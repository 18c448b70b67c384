//! Per-cell kinematic and stress values supplied by the stress balance.

/// Horizontal ice velocity at a cell centre, in m/s.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    /// x component.
    pub u: f64,
    /// y component.
    pub v: f64,
}

impl Velocity {
    /// Construct from components.
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// Whether both components are finite.
    pub fn is_finite(&self) -> bool {
        self.u.is_finite() && self.v.is_finite()
    }
}

/// Principal components of the horizontal strain-rate tensor, in 1/s.
///
/// By convention `e1 >= e2`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrincipalStrainRates {
    /// Major eigenvalue.
    pub e1: f64,
    /// Minor eigenvalue.
    pub e2: f64,
}

impl PrincipalStrainRates {
    /// Construct from eigenvalues.
    pub const fn new(e1: f64, e2: f64) -> Self {
        Self { e1, e2 }
    }

    /// Effective strain rate `sqrt(e1² + e2² − e1·e2)`.
    pub fn effective(&self) -> f64 {
        (self.e1 * self.e1 + self.e2 * self.e2 - self.e1 * self.e2).sqrt()
    }
}

/// Symmetric 2×2 deviatoric stress tensor, in Pa.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeviatoricStress {
    /// Normal stress in x.
    pub xx: f64,
    /// Normal stress in y.
    pub yy: f64,
    /// Shear stress.
    pub xy: f64,
}

impl DeviatoricStress {
    /// Construct from components.
    pub const fn new(xx: f64, yy: f64, xy: f64) -> Self {
        Self { xx, yy, xy }
    }

    /// Isotropic tensor `diag(s, s)`.
    pub const fn isotropic(s: f64) -> Self {
        Self {
            xx: s,
            yy: s,
            xy: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_strain_rate_uniaxial() {
        let e = PrincipalStrainRates::new(2e-9, 0.0);
        assert!((e.effective() - 2e-9).abs() < 1e-24);
    }

    #[test]
    fn effective_strain_rate_equal_biaxial() {
        // e1 = e2 = a  =>  sqrt(a² + a² − a²) = a
        let e = PrincipalStrainRates::new(3e-10, 3e-10);
        assert!((e.effective() - 3e-10).abs() < 1e-24);
    }

    #[test]
    fn velocity_finiteness() {
        assert!(Velocity::new(1.0, -2.0).is_finite());
        assert!(!Velocity::new(f64::NAN, 0.0).is_finite());
        assert!(!Velocity::new(0.0, f64::INFINITY).is_finite());
    }
}
