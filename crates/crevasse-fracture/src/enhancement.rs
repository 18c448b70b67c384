//! Fracture-induced flow enhancement.

/// Softness multiplier for fractured ice.
///
/// `softening = (1 − (1 − r)·D)^(−n)`, reported as `1 / softening^(1/n)`
/// where `r` is the residual softness of fully fractured ice and `n` the
/// flow-law exponent.
pub fn flow_enhancement(damage: f64, softening_lower_limit: f64, exponent: f64) -> f64 {
    let softening = (1.0 - (1.0 - softening_lower_limit) * damage).powf(-exponent);
    1.0 / softening.powf(1.0 / exponent)
}
