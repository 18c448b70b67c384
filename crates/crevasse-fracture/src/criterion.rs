//! Fracture-initiation stress measures.
//!
//! Each criterion reduces the 2×2 deviatoric stress tensor to one scalar.
//! Fracturing starts where that scalar exceeds the initiation threshold,
//! and the scalar itself is reported as the fracture toughness.

use std::f64::consts::PI;
use std::ops::RangeInclusive;

use crevasse_core::DeviatoricStress;

/// Friction coefficient between crack faces.
pub const CRACK_FACE_FRICTION: f64 = 0.1;

/// Half-length of the precursor crack (m); 20 cm initial depth.
pub const CRACK_HALF_LENGTH: f64 = 0.64 / PI;

/// Precursor crack angles β (degrees) sampled by the LEFM criterion.
pub const LEFM_ANGLES: RangeInclusive<u32> = 46..=90;

/// Which stress measure drives fracture initiation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StressCriterion {
    /// von Mises effective stress.
    #[default]
    VonMises,
    /// Maximum shear stress; more stringent than von Mises.
    MaxShear,
    /// Mixed-mode linear elastic fracture mechanics with crack-face friction.
    Lefm,
}

impl StressCriterion {
    /// Evaluate the criterion for one cell.
    pub fn evaluate(self, stress: &DeviatoricStress) -> f64 {
        let p = PrincipalStresses::from_stress(stress);
        match self {
            Self::VonMises => p.von_mises(),
            Self::MaxShear => p.max_shear(),
            Self::Lefm => p.lefm(),
        }
    }
}

/// Principal horizontal stresses, `t1 >= t2` (Pa).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrincipalStresses {
    /// Major principal stress.
    pub t1: f64,
    /// Minor principal stress.
    pub t2: f64,
}

impl PrincipalStresses {
    /// Eigenvalues of the symmetric tensor `[[xx, xy], [xy, yy]]`.
    pub fn from_stress(s: &DeviatoricStress) -> Self {
        let mean = 0.5 * (s.xx + s.yy);
        let radius = (0.25 * (s.xx - s.yy).powi(2) + s.xy.powi(2)).sqrt();
        Self {
            t1: mean + radius,
            t2: mean - radius,
        }
    }

    /// `sqrt(t1² + t2² − t1·t2)`.
    pub fn von_mises(&self) -> f64 {
        (self.t1.powi(2) + self.t2.powi(2) - self.t1 * self.t2).sqrt()
    }

    /// `max(|t1|, |t2|, |t1 − t2|)`.
    pub fn max_shear(&self) -> f64 {
        self.t1
            .abs()
            .max(self.t2.abs())
            .max((self.t1 - self.t2).abs())
    }

    /// Largest mode-I equivalent stress intensity over [`LEFM_ANGLES`].
    ///
    /// The running maximum starts at zero, so a fully compressive state
    /// yields `0.0`.
    pub fn lefm(&self) -> f64 {
        LEFM_ANGLES
            .map(|beta| self.lefm_sample(beta).ksi)
            .fold(0.0, f64::max)
    }

    /// Evaluate the LEFM relations for a single precursor angle.
    pub fn lefm_sample(&self, beta_deg: u32) -> LefmSample {
        let beta = f64::from(beta_deg).to_radians();
        let (t1, t2) = (self.t1, self.t2);

        let normal = 0.5 * (t1 + t2) - (t1 - t2) * (2.0 * beta).cos();
        let mut shear = 0.5 * (t1 - t2) * (2.0 * beta).sin();

        // Compressive crack faces: Coulomb friction opposes sliding.
        let friction = CRACK_FACE_FRICTION * normal;
        if friction < 0.0 {
            if shear.abs() <= friction.abs() {
                shear = 0.0;
            } else if shear > 0.0 {
                shear += friction;
            } else {
                shear -= friction;
            }
        }

        let root = (PI * CRACK_HALF_LENGTH).sqrt();
        let k1 = normal * root;
        let k2 = shear * root;

        let theta0 = if k2 == 0.0 {
            0.0
        } else {
            -2.0 * (((k1.powi(2) + 8.0 * k2.powi(2)).sqrt() - k1) / (4.0 * k2)).atan()
        };
        let half = 0.5 * theta0;
        let ksi = half.cos() * (k1 * half.cos().powi(2) - 1.5 * k2 * theta0.sin());

        LefmSample {
            beta_deg,
            normal,
            shear,
            k1,
            k2,
            theta0,
            ksi,
        }
    }
}

/// Intermediate LEFM quantities at one precursor angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LefmSample {
    /// Precursor crack angle β in degrees.
    pub beta_deg: u32,
    /// Normal stress on the crack face (Pa).
    pub normal: f64,
    /// Shear stress on the crack face after friction (Pa).
    pub shear: f64,
    /// Mode-I stress intensity factor.
    pub k1: f64,
    /// Mode-II stress intensity factor.
    pub k2: f64,
    /// Crack propagation angle θ0 (radians).
    pub theta0: f64,
    /// Equivalent mode-I stress intensity.
    pub ksi: f64,
}
