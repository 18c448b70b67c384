//! Strain-rate driven fracture healing.

/// Healing law parameters.
///
/// Healing is a decrement: with the default sign conventions the
/// returned rates are `<= 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HealingLaw {
    /// Healing constant γh.
    pub rate: f64,
    /// Strain-rate threshold (s⁻¹).
    pub threshold: f64,
    /// Heal at `γh · (−threshold)` everywhere, ignoring the strain rate.
    pub constant: bool,
    /// Scale by the intact fraction `1 − D_old`.
    pub weighted: bool,
}

impl HealingLaw {
    /// Per-second change in fracture density at an icy cell, or `None`
    /// where healing does not apply.
    ///
    /// `damage_old` is the density at the start of the step.
    pub fn rate(&self, e1: f64, damage_old: f64) -> Option<f64> {
        let base = if self.constant {
            self.rate * -self.threshold
        } else if e1 < self.threshold {
            self.rate * (e1 - self.threshold).min(0.0)
        } else {
            return None;
        };
        Some(if self.weighted {
            base * (1.0 - damage_old)
        } else {
            base
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn law() -> HealingLaw {
        HealingLaw {
            rate: 0.5,
            threshold: 2.0e-10,
            constant: false,
            weighted: false,
        }
    }

    #[test]
    fn no_healing_above_threshold() {
        assert_eq!(law().rate(3.0e-10, 0.5), None);
        assert_eq!(law().rate(2.0e-10, 0.5), None);
    }

    #[test]
    fn healing_below_threshold_is_proportional() {
        let r = law().rate(0.0, 0.5).unwrap();
        assert!((r - -1.0e-10).abs() < 1e-24);
    }

    #[test]
    fn constant_healing_ignores_strain_rate() {
        let l = HealingLaw {
            constant: true,
            ..law()
        };
        assert_eq!(l.rate(1.0, 0.0), Some(0.5 * -2.0e-10));
        assert_eq!(l.rate(-1.0, 0.0), Some(0.5 * -2.0e-10));
    }

    #[test]
    fn weighting_uses_old_density() {
        let l = HealingLaw {
            weighted: true,
            constant: true,
            ..law()
        };
        assert_eq!(l.rate(0.0, 1.0), Some(0.0 * -1.0e-10));
        let half = l.rate(0.0, 0.5).unwrap();
        assert!((half - -0.5e-10).abs() < 1e-24);
    }

    #[test]
    fn zero_constant_never_heals() {
        let l = HealingLaw {
            rate: 0.0,
            ..law()
        };
        assert_eq!(l.rate(-1.0, 0.2), Some(0.0));
    }
}
