//! Fracture growth laws.

use crevasse_core::PrincipalStrainRates;

/// Ratio of the fractured to the unfractured strain-rate threshold
/// scale in the Borstad relation (mean value of Borstad et al. 2016).
pub const BORSTAD_KAPPA: f64 = 2.8;

/// How fracture density grows once initiated.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GrowthLaw {
    /// `D += γ · e1 · (1 − D) · dt` where the criterion exceeds σcr.
    #[default]
    ThresholdLinear,
    /// Closed-form damage from the effective strain rate (Borstad et
    /// al. 2016), applied where the ice is thicker than `min_thickness`.
    ///
    /// The new density replaces the advected one outright; it is a
    /// quasi-equilibrium relation and is not scaled by the time step.
    Borstad {
        /// Minimum ice thickness (m).
        min_thickness: f64,
    },
}

/// Growth law plus the constants it needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthParams {
    /// Growth constant γ.
    pub gamma: f64,
    /// Initiation threshold σcr (Pa).
    pub sigma_cr: f64,
    /// Selected law.
    pub law: GrowthLaw,
}

impl GrowthParams {
    /// Whether `measure` initiates fracturing.
    pub fn initiates(&self, measure: f64) -> bool {
        measure > self.sigma_cr
    }

    /// Linear growth rate `γ · e1 · (1 − D)` (s⁻¹).
    pub fn rate(&self, e1: f64, damage: f64) -> f64 {
        self.gamma * e1 * (1.0 - damage)
    }

    /// Advance `damage` (already advected) by one step.
    ///
    /// `measure` is the initiation criterion; `thickness`, `hardness`
    /// and `exponent` are only consulted by the Borstad law.
    pub fn grow(
        &self,
        damage: f64,
        measure: f64,
        strain: PrincipalStrainRates,
        thickness: f64,
        hardness: f64,
        exponent: f64,
        dt: f64,
    ) -> f64 {
        match self.law {
            GrowthLaw::ThresholdLinear => {
                if self.initiates(measure) {
                    damage + self.rate(strain.e1, damage) * dt
                } else {
                    damage
                }
            }
            GrowthLaw::Borstad { min_thickness } => {
                if thickness > min_thickness {
                    borstad(self.sigma_cr, hardness, strain, damage, exponent).unwrap_or(damage)
                } else {
                    damage
                }
            }
        }
    }
}

/// Damage implied by the Borstad relation, or `None` if the cell is
/// below its fracture threshold.
///
/// With `ee` the effective strain rate and `e0 = (σcr / B)^n` the
/// threshold of intact ice, fracture forms when `ee > e0` and the
/// effective stress `B · ee^(1/n) · (1 − D)` exceeds the degraded
/// threshold `σcr · exp((e0 − ee) / (e0 (κ − 1)))`.
pub fn borstad(
    sigma_cr: f64,
    hardness: f64,
    strain: PrincipalStrainRates,
    damage: f64,
    exponent: f64,
) -> Option<f64> {
    let ee = strain.effective();
    let e0 = (sigma_cr / hardness).powf(exponent);
    let ex = ((e0 - ee) / (e0 * (BORSTAD_KAPPA - 1.0))).exp();
    let threshold = sigma_cr * ex;
    let stress = hardness * ee.powf(1.0 / exponent) * (1.0 - damage);
    if stress > threshold && ee > e0 {
        Some(1.0 - ex * (ee / e0).powf(-1.0 / exponent))
    } else {
        None
    }
}
