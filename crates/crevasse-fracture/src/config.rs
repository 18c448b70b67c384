//! Fracture-density parameters and their TOML representation.
//!
//! [`FractureConfig`] carries every tunable of the model with defaults
//! taken from the published parameterisation. Keys may be given either
//! by their Rust names or by the short names used in existing model
//! configuration files (`gamma`, `gamma_h`, `phi0`, `constant_fd`,
//! `fd2d_scheme`, ...).
//!
//! ```toml
//! [fracture_density]
//! gamma = 1.0
//! initiation_threshold = 70000.0
//! lefm = true
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::advection::AdvectionScheme;
use crate::boundary::BoundaryRules;
use crate::criterion::StressCriterion;
use crate::error::ConfigError;
use crate::growth::{GrowthLaw, GrowthParams};
use crate::healing::HealingLaw;
use crate::plan::UpdatePlan;

fn default_growth_constant() -> f64 {
    1.0
}

fn default_initiation_threshold() -> f64 {
    70_000.0
}

fn default_healing_threshold() -> f64 {
    2.0e-10
}

fn default_softening_lower_limit() -> f64 {
    1.0
}

fn default_borstad_min_thickness() -> f64 {
    10.0
}

/// Parameters of the fracture-density model.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FractureConfig {
    /// Fracture growth constant γ (dimensionless).
    #[serde(default = "default_growth_constant", alias = "gamma")]
    pub growth_constant: f64,

    /// Stress threshold σcr for fracture initiation (Pa).
    #[serde(default = "default_initiation_threshold")]
    pub initiation_threshold: f64,

    /// Healing rate constant γh (dimensionless).
    #[serde(default, alias = "gamma_h")]
    pub healing_constant: f64,

    /// Strain-rate threshold below which healing applies (s⁻¹).
    #[serde(default = "default_healing_threshold")]
    pub healing_threshold: f64,

    /// Residual softness of fully fractured ice, in `[0, 1]`.
    /// `1.0` disables fracture softening.
    #[serde(default = "default_softening_lower_limit")]
    pub softening_lower_limit: f64,

    /// Evolve fracture density on grounded ice too.
    #[serde(default)]
    pub include_grounded_ice: bool,

    /// Fracture density imposed on grounded boundary-condition cells.
    #[serde(default, alias = "phi0")]
    pub boundary_value: f64,

    /// Heal at the constant rate `γh · (−threshold)` regardless of strain rate.
    #[serde(default)]
    pub constant_healing: bool,

    /// Scale healing by the intact fraction `1 − D`.
    #[serde(default)]
    pub fracture_weighted_healing: bool,

    /// Use the maximum-shear-stress initiation criterion.
    #[serde(default)]
    pub max_shear_stress: bool,

    /// Use the mixed-mode fracture-mechanics initiation criterion.
    /// Takes precedence over `max_shear_stress`.
    #[serde(default)]
    pub lefm: bool,

    /// Hold fracture density fixed; diagnostics are still computed.
    #[serde(default, alias = "constant_fd")]
    pub constant_density: bool,

    /// Use the eight-sector upwind scheme instead of the per-axis one.
    #[serde(default, alias = "fd2d_scheme")]
    pub eight_sector_advection: bool,

    /// Replace linear growth by the closed-form damage relation of
    /// Borstad et al. (2016).
    #[serde(default)]
    pub borstad_limit: bool,

    /// Ice thinner than this (m) is skipped by the Borstad relation.
    #[serde(
        default = "default_borstad_min_thickness",
        alias = "ice_free_thickness_standard"
    )]
    pub borstad_min_thickness: f64,
}

impl Default for FractureConfig {
    fn default() -> Self {
        Self {
            growth_constant: default_growth_constant(),
            initiation_threshold: default_initiation_threshold(),
            healing_constant: 0.0,
            healing_threshold: default_healing_threshold(),
            softening_lower_limit: default_softening_lower_limit(),
            include_grounded_ice: false,
            boundary_value: 0.0,
            constant_healing: false,
            fracture_weighted_healing: false,
            max_shear_stress: false,
            lefm: false,
            constant_density: false,
            eight_sector_advection: false,
            borstad_limit: false,
            borstad_min_thickness: default_borstad_min_thickness(),
        }
    }
}

/// On-disk layout: parameters live under a `[fracture_density]` table.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    fracture_density: FractureConfig,
}

fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}

fn unit_interval(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must lie in [0, 1]",
        })
    }
}

impl FractureConfig {
    /// Load from a TOML file containing a `[fracture_density]` table.
    ///
    /// A file without the table yields the defaults. The result is
    /// validated before it is returned.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse TOML text containing a `[fracture_density]` table.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;
        file.fracture_density.validate()?;
        Ok(file.fracture_density)
    }

    /// Check every parameter against its admissible range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("growth_constant", self.growth_constant)?;
        finite("initiation_threshold", self.initiation_threshold)?;
        finite("healing_constant", self.healing_constant)?;
        finite("healing_threshold", self.healing_threshold)?;
        finite("borstad_min_thickness", self.borstad_min_thickness)?;
        unit_interval("softening_lower_limit", self.softening_lower_limit)?;
        unit_interval("boundary_value", self.boundary_value)?;
        if self.borstad_min_thickness < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "borstad_min_thickness",
                value: self.borstad_min_thickness,
                reason: "must be >= 0",
            });
        }
        if self.borstad_limit && self.initiation_threshold <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "initiation_threshold",
                value: self.initiation_threshold,
                reason: "must be > 0 when borstad_limit is set",
            });
        }
        Ok(())
    }

    /// The initiation criterion selected by the flags.
    ///
    /// LEFM wins when both `lefm` and `max_shear_stress` are set.
    pub fn criterion(&self) -> StressCriterion {
        match (self.lefm, self.max_shear_stress) {
            (true, _) => StressCriterion::Lefm,
            (false, true) => StressCriterion::MaxShear,
            (false, false) => StressCriterion::VonMises,
        }
    }

    /// Warn about flag combinations where one flag is ignored.
    ///
    /// Called when a configuration is installed into a model, not per
    /// update.
    pub fn warn_on_conflicts(&self) {
        if self.lefm && self.max_shear_stress {
            warn!("both lefm and max_shear_stress are set; using lefm");
        }
    }

    /// Resolve flags into the strategy set used for one update.
    ///
    /// `exponent` is the flow-law exponent `n`.
    pub fn resolve(&self, exponent: f64) -> Result<UpdatePlan, ConfigError> {
        self.validate()?;
        let law = if self.borstad_limit {
            GrowthLaw::Borstad {
                min_thickness: self.borstad_min_thickness,
            }
        } else {
            GrowthLaw::ThresholdLinear
        };
        Ok(UpdatePlan {
            criterion: self.criterion(),
            advection: if self.eight_sector_advection {
                AdvectionScheme::EightSector
            } else {
                AdvectionScheme::SimpleUpwind
            },
            growth: GrowthParams {
                gamma: self.growth_constant,
                sigma_cr: self.initiation_threshold,
                law,
            },
            healing: HealingLaw {
                rate: self.healing_constant,
                threshold: self.healing_threshold,
                constant: self.constant_healing,
                weighted: self.fracture_weighted_healing,
            },
            boundary: BoundaryRules {
                include_grounded_ice: self.include_grounded_ice,
                boundary_value: self.boundary_value,
                constant_density: self.constant_density,
            },
            softening_lower_limit: self.softening_lower_limit,
            exponent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_parameters() {
        let c = FractureConfig::default();
        assert_eq!(c.growth_constant, 1.0);
        assert_eq!(c.initiation_threshold, 70_000.0);
        assert_eq!(c.healing_constant, 0.0);
        assert_eq!(c.healing_threshold, 2.0e-10);
        assert_eq!(c.softening_lower_limit, 1.0);
        assert_eq!(c.borstad_min_thickness, 10.0);
        assert!(!c.lefm && !c.max_shear_stress && !c.constant_density);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_text_yields_defaults() {
        assert_eq!(FractureConfig::parse("").unwrap(), FractureConfig::default());
        assert_eq!(
            FractureConfig::parse("[fracture_density]\n").unwrap(),
            FractureConfig::default()
        );
    }

    #[test]
    fn short_key_aliases_are_accepted() {
        let c = FractureConfig::parse(
            r#"
            [fracture_density]
            gamma = 0.5
            gamma_h = 0.1
            phi0 = 0.2
            constant_fd = true
            fd2d_scheme = true
            ice_free_thickness_standard = 25.0
            "#,
        )
        .unwrap();
        assert_eq!(c.growth_constant, 0.5);
        assert_eq!(c.healing_constant, 0.1);
        assert_eq!(c.boundary_value, 0.2);
        assert!(c.constant_density);
        assert!(c.eight_sector_advection);
        assert_eq!(c.borstad_min_thickness, 25.0);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = FractureConfig::parse("[fracture_density]\ngama = 2.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = FractureConfig::parse("[fracture_density]\nphi0 = 1.5\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "boundary_value",
                ..
            }
        ));

        let c = FractureConfig {
            softening_lower_limit: -0.1,
            ..FractureConfig::default()
        };
        assert!(c.validate().is_err());

        let c = FractureConfig {
            growth_constant: f64::NAN,
            ..FractureConfig::default()
        };
        assert!(c.validate().is_err());

        let c = FractureConfig {
            borstad_min_thickness: -1.0,
            ..FractureConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn borstad_needs_positive_threshold() {
        let c = FractureConfig {
            borstad_limit: true,
            initiation_threshold: 0.0,
            ..FractureConfig::default()
        };
        assert!(c.validate().is_err());
        let c = FractureConfig {
            initiation_threshold: 0.0,
            ..FractureConfig::default()
        };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn lefm_wins_over_max_shear() {
        let c = FractureConfig {
            lefm: true,
            max_shear_stress: true,
            ..FractureConfig::default()
        };
        assert_eq!(c.criterion(), StressCriterion::Lefm);
        let c = FractureConfig {
            max_shear_stress: true,
            ..FractureConfig::default()
        };
        assert_eq!(c.criterion(), StressCriterion::MaxShear);
        assert_eq!(
            FractureConfig::default().criterion(),
            StressCriterion::VonMises
        );
    }

    #[test]
    fn resolve_maps_flags_to_strategies() {
        let c = FractureConfig {
            eight_sector_advection: true,
            borstad_limit: true,
            borstad_min_thickness: 50.0,
            constant_healing: true,
            ..FractureConfig::default()
        };
        let plan = c.resolve(3.0).unwrap();
        assert_eq!(plan.advection, AdvectionScheme::EightSector);
        assert_eq!(
            plan.growth.law,
            GrowthLaw::Borstad {
                min_thickness: 50.0
            }
        );
        assert!(plan.healing.constant);
        assert_eq!(plan.exponent, 3.0);
    }
}
