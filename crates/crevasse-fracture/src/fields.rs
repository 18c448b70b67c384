//! Field names and metadata.

use crevasse_core::{FieldDef, ValidRange};

/// Fracture density, persisted.
pub const FRACTURE_DENSITY: &str = "fracture_density";
/// Time since fracturing, persisted.
pub const FRACTURE_AGE: &str = "fracture_age";
/// Growth-rate diagnostic.
pub const FRACTURE_GROWTH_RATE: &str = "fracture_growth_rate";
/// Healing-rate diagnostic.
pub const FRACTURE_HEALING_RATE: &str = "fracture_healing_rate";
/// Flow-enhancement diagnostic.
pub const FRACTURE_FLOW_ENHANCEMENT: &str = "fracture_flow_enhancement";
/// Toughness diagnostic.
pub const FRACTURE_TOUGHNESS: &str = "fracture_toughness";

/// `fracture_density`: dimensionless, in `[0, 1]`.
pub fn density() -> FieldDef {
    FieldDef::scalar(FRACTURE_DENSITY, "fracture density in ice shelf")
        .with_units("1")
        .with_range(ValidRange::closed(0.0, 1.0))
}

/// `fracture_age`: seconds, `>= 0`.
pub fn age() -> FieldDef {
    FieldDef::scalar(FRACTURE_AGE, "age since fracturing")
        .with_units("seconds")
        .with_range(ValidRange::at_least(0.0))
}

/// `fracture_growth_rate`: s⁻¹, `>= 0`.
pub fn growth_rate() -> FieldDef {
    FieldDef::scalar(FRACTURE_GROWTH_RATE, "fracture growth rate")
        .with_units("second^-1")
        .with_range(ValidRange::at_least(0.0))
}

/// `fracture_healing_rate`: s⁻¹.
pub fn healing_rate() -> FieldDef {
    FieldDef::scalar(FRACTURE_HEALING_RATE, "fracture healing rate").with_units("second^-1")
}

/// `fracture_flow_enhancement`: dimensionless.
pub fn flow_enhancement() -> FieldDef {
    FieldDef::scalar(
        FRACTURE_FLOW_ENHANCEMENT,
        "fracture-induced flow enhancement",
    )
}

/// `fracture_toughness`: Pa.
pub fn toughness() -> FieldDef {
    FieldDef::scalar(FRACTURE_TOUGHNESS, "fracture toughness").with_units("Pa")
}

/// Principal strain-rate inputs, `eigen1` then `eigen2`.
pub fn strain_rates() -> [FieldDef; 2] {
    [
        FieldDef::scalar(
            "eigen1",
            "major principal component of horizontal strain-rate",
        )
        .with_units("second^-1"),
        FieldDef::scalar(
            "eigen2",
            "minor principal component of horizontal strain-rate",
        )
        .with_units("second^-1"),
    ]
}

/// Deviatoric stress inputs, `sigma_xx`, `sigma_yy`, `sigma_xy`.
pub fn deviatoric_stresses() -> [FieldDef; 3] {
    [
        FieldDef::scalar("sigma_xx", "deviatoric stress in x direction").with_units("Pa"),
        FieldDef::scalar("sigma_yy", "deviatoric stress in y direction").with_units("Pa"),
        FieldDef::scalar("sigma_xy", "deviatoric shear stress").with_units("Pa"),
    ]
}

/// Persisted model state, in write order.
pub fn model_state() -> [FieldDef; 2] {
    [density(), age()]
}

/// The six fields exposed as diagnostics, in reporting order.
pub fn diagnostics() -> [FieldDef; 6] {
    [
        density(),
        growth_rate(),
        healing_rate(),
        flow_enhancement(),
        age(),
        toughness(),
    ]
}
