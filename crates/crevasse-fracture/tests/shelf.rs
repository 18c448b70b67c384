//! End-to-end updates on small ice-shelf scenarios.

use crevasse_core::{CellType, DeviatoricStress, Generation, PrincipalStrainRates, Velocity};
use crevasse_fracture::enhancement::flow_enhancement;
use crevasse_fracture::{
    DiagnosticSource, FractureConfig, FractureDensity, PrincipalStresses, StressCriterion,
};
use crevasse_grid::{EdgeBehavior, Scalar};
use crevasse_test_utils::{FixedStressBalance, ShelfBuilder};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn model_with(config: FractureConfig, grid: crevasse_grid::Grid2D) -> FractureDensity {
    FractureDensity::builder(grid).config(config).build().unwrap()
}

#[test]
fn blob_is_carried_downstream() {
    init_tracing();
    let shelf = ShelfBuilder::new(12, 5).velocity(1.0, 0.0).build();
    let mut model = FractureDensity::new(shelf.grid);
    let density = Scalar::from_fn(&shelf.grid, |i, j| if (i, j) == (3, 2) { 1.0 } else { 0.0 });
    model
        .initialize_from(&density, &Scalar::new(&shelf.grid))
        .unwrap();

    // Courant number 0.5.
    for _ in 0..4 {
        model.update(500.0, &shelf.inputs()).unwrap();
    }

    let d = model.density();
    let mass = d.sum_interior();
    let moment: f64 = shelf
        .grid
        .points()
        .map(|(i, j)| i as f64 * d.at(i, j))
        .sum();
    assert!((mass - 1.0).abs() < 1e-12, "mass {mass}");
    assert!((moment / mass - 5.0).abs() < 1e-9);
    assert_eq!(d.at(3, 2), 0.5_f64.powi(4));
    assert_eq!(d.at(2, 2), 0.0);
    assert_eq!(model.generation(), Generation(5));
}

#[test]
fn eight_sector_scheme_carries_blob_diagonally() {
    let shelf = ShelfBuilder::new(9, 9).velocity(1.0, 1.0).build();
    let config = FractureConfig {
        eight_sector_advection: true,
        ..FractureConfig::default()
    };
    let mut model = model_with(config, shelf.grid);
    let density = Scalar::from_fn(&shelf.grid, |i, j| if (i, j) == (2, 2) { 1.0 } else { 0.0 });
    model
        .initialize_from(&density, &Scalar::new(&shelf.grid))
        .unwrap();

    // Along the S1/S2 ray the update reduces to a pure diagonal shift.
    let report = model.update(1000.0, &shelf.inputs()).unwrap();
    assert_eq!(report.degenerate_cells, 0);
    assert_eq!(model.density().at(2, 2), 0.0);
    assert_eq!(model.density().at(3, 3), 1.0);
}

#[test]
fn exterior_cells_are_neutral() {
    let mut shelf = ShelfBuilder::new(6, 5)
        .stress(2.0e5, 0.0, 0.0)
        .strain(1.0e-8, 0.0)
        .build();
    shelf.set_cell_type(3, 2, CellType::IceFreeOcean);
    let config = FractureConfig {
        softening_lower_limit: 0.2,
        ..FractureConfig::default()
    };
    let mut model = model_with(config, shelf.grid);
    let report = model.update(1.0e6, &shelf.inputs()).unwrap();

    // 4 × 3 interior minus the ice-free cell.
    assert_eq!(report.initiated_cells, 11);
    for (i, j) in shelf.grid.points() {
        let exterior = shelf.grid.is_domain_edge(i, j) || (i, j) == (3, 2);
        if exterior {
            assert_eq!(model.density().at(i, j), 0.0);
            assert_eq!(model.age().at(i, j), 0.0);
            assert_eq!(model.growth_rate().at(i, j), 0.0);
            assert_eq!(model.toughness().at(i, j), 0.0);
            assert_eq!(model.flow_enhancement().at(i, j), 1.0);
        } else {
            assert!((model.density().at(i, j) - 0.01).abs() < 1e-12);
            assert_eq!(model.toughness().at(i, j), 2.0e5);
            assert!(model.flow_enhancement().at(i, j) < 1.0);
        }
    }
}

#[test]
fn grounded_boundary_takes_boundary_value() {
    let shelf = ShelfBuilder::new(6, 5)
        .grounded_columns(2)
        .stress(2.0e5, 0.0, 0.0)
        .build();
    let config = FractureConfig {
        boundary_value: 0.2,
        ..FractureConfig::default()
    };
    let mut model = model_with(config.clone(), shelf.grid);
    model.update(1.0e6, &shelf.inputs()).unwrap();
    assert_eq!(model.density().at(1, 2), 0.2);
    assert_eq!(model.growth_rate().at(1, 2), 0.0);
    assert_eq!(model.flow_enhancement().at(1, 2), 1.0);
    // The ring wins over the boundary mask.
    assert_eq!(model.density().at(0, 2), 0.0);

    let evolving = FractureConfig {
        include_grounded_ice: true,
        ..config
    };
    let mut model = model_with(evolving, shelf.grid);
    model.update(1.0e6, &shelf.inputs()).unwrap();
    assert!((model.density().at(1, 2) - 1.0e-3).abs() < 1e-12);
}

#[test]
fn constant_density_still_reports_diagnostics() {
    let shelf = ShelfBuilder::new(5, 5).stress(2.0e5, 0.0, 0.0).build();
    let config = FractureConfig {
        constant_density: true,
        softening_lower_limit: 0.5,
        ..FractureConfig::default()
    };
    let mut model = model_with(config, shelf.grid);
    model
        .initialize_from(&Scalar::filled(&shelf.grid, 0.3), &Scalar::new(&shelf.grid))
        .unwrap();
    model.update(1.0e6, &shelf.inputs()).unwrap();

    assert!(model.density().interior().all(|d| d == 0.3));
    assert_eq!(model.toughness().at(2, 2), 2.0e5);
    assert!((model.growth_rate().at(2, 2) - 1.0e-9 * 0.7).abs() < 1e-21);
    let expected = flow_enhancement(0.3, 0.5, 3.0);
    assert!((model.flow_enhancement().at(2, 2) - expected).abs() < 1e-12);
}

#[test]
fn stress_balance_supplies_strain_and_stress() {
    let shelf = ShelfBuilder::new(6, 5).build();
    let balance = FixedStressBalance::new(
        PrincipalStrainRates::new(1.0e-9, -1.0e-10),
        DeviatoricStress::new(1.0e5, 0.0, 0.0),
    );
    let mut model = FractureDensity::new(shelf.grid);
    let report = model
        .update_with_stress_balance(1.0e6, &shelf.flow_inputs(), &balance)
        .unwrap();
    assert_eq!(balance.calls(), 2);
    assert_eq!(report.initiated_cells, 12);
    assert_eq!(model.toughness().at(2, 2), 1.0e5);
}

#[test]
fn lefm_configured_from_toml() {
    let config = FractureConfig::parse(
        r#"
        [fracture_density]
        lefm = true
        max_shear_stress = true
        initiation_threshold = 1.0e4
        "#,
    )
    .unwrap();
    assert_eq!(config.criterion(), StressCriterion::Lefm);

    let stress = DeviatoricStress::new(1.5e5, -2.0e4, 3.0e4);
    let shelf = ShelfBuilder::new(5, 5)
        .stress(stress.xx, stress.yy, stress.xy)
        .build();
    let mut model = model_with(config, shelf.grid);
    model.update(1.0e5, &shelf.inputs()).unwrap();
    let expected = PrincipalStresses::from_stress(&stress).lefm();
    assert!(expected > 0.0);
    assert!((model.toughness().at(2, 2) - expected).abs() <= 1e-9 * expected);
}

#[test]
fn nan_velocity_is_reported_as_degenerate() {
    init_tracing();
    let mut shelf = ShelfBuilder::new(5, 5).velocity(0.1, 0.0).build();
    shelf.velocity.set(2, 2, Velocity::new(f64::NAN, 0.0));
    let config = FractureConfig {
        eight_sector_advection: true,
        ..FractureConfig::default()
    };
    let mut model = model_with(config, shelf.grid);
    let report = model.update(100.0, &shelf.inputs()).unwrap();
    assert_eq!(report.degenerate_cells, 1);
    assert_eq!(model.density().at(2, 2), 0.0);
    assert_eq!(model.age().at(2, 2), 0.0);
    assert!(model.density().interior().all(|d| (0.0..=1.0).contains(&d)));
}

fn run_with_edge(edge: EdgeBehavior, eight_sector: bool) -> (Vec<f64>, Vec<f64>) {
    let shelf = ShelfBuilder::new(7, 6)
        .edge(edge)
        .velocity(0.3, -0.2)
        .stress(2.0e5, 0.0, 0.0)
        .build();
    let config = FractureConfig {
        eight_sector_advection: eight_sector,
        ..FractureConfig::default()
    };
    let mut model = model_with(config, shelf.grid);
    let density = Scalar::from_fn(&shelf.grid, |i, j| ((3 * i + 5 * j) % 7) as f64 / 7.0);
    let age = Scalar::from_fn(&shelf.grid, |i, j| (i * j) as f64 * 1.0e4);
    model.initialize_from(&density, &age).unwrap();
    // Courant numbers 0.3 and 0.2.
    for _ in 0..3 {
        model.update(1.0e3, &shelf.inputs()).unwrap();
    }
    (
        model.density().interior_to_vec(),
        model.age().interior_to_vec(),
    )
}

#[test]
fn edge_behavior_never_reaches_model_output() {
    for eight_sector in [false, true] {
        let wrap = run_with_edge(EdgeBehavior::Wrap, eight_sector);
        assert_eq!(run_with_edge(EdgeBehavior::Clamp, eight_sector), wrap);
        assert_eq!(run_with_edge(EdgeBehavior::Absorb, eight_sector), wrap);
        // The outer ring is neutral and the interior has evolved.
        assert_eq!(wrap.0[0], 0.0);
        assert_eq!(wrap.0[6], 0.0);
        assert!(wrap.0.iter().any(|&d| d > 0.0 && d < 1.0));
    }
}
