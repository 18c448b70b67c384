//! The per-call strategy set.

use crate::advection::AdvectionScheme;
use crate::boundary::BoundaryRules;
use crate::criterion::StressCriterion;
use crate::growth::GrowthParams;
use crate::healing::HealingLaw;

/// Configuration flags resolved into concrete strategies.
///
/// Built once per update by [`FractureConfig::resolve`] and shared by
/// every cell, so the inner loop never consults raw flags.
///
/// [`FractureConfig::resolve`]: crate::FractureConfig::resolve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpdatePlan {
    /// Initiation criterion.
    pub criterion: StressCriterion,
    /// Damage advection scheme.
    pub advection: AdvectionScheme,
    /// Growth law and its constants.
    pub growth: GrowthParams,
    /// Healing law.
    pub healing: HealingLaw,
    /// Boundary overrides.
    pub boundary: BoundaryRules,
    /// Residual softness of fully fractured ice.
    pub softening_lower_limit: f64,
    /// Flow-law exponent `n`.
    pub exponent: f64,
}
