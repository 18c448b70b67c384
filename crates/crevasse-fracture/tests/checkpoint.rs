//! Restart, bootstrap and checkpoint writing through a state store.

use crevasse_core::{Generation, StateError};
use crevasse_fracture::{fields, FractureDensity, FractureError};
use crevasse_grid::Scalar;
use crevasse_test_utils::{MemoryStore, ShelfBuilder};

#[test]
fn write_then_restart_restores_state() {
    let shelf = ShelfBuilder::new(6, 4).stress(2.0e5, 0.0, 0.0).build();
    let mut model = FractureDensity::new(shelf.grid);
    model.update(1.0e6, &shelf.inputs()).unwrap();
    model.update(1.0e6, &shelf.inputs()).unwrap();

    let mut store = MemoryStore::new();
    model.write_model_state(&mut store).unwrap();
    assert_eq!(store.field_count(), 2);
    let def = store.def(fields::FRACTURE_AGE).unwrap();
    assert_eq!(def.units.as_deref(), Some("seconds"));

    let mut restarted = FractureDensity::new(shelf.grid);
    let generation = restarted.restart(&store).unwrap();
    assert_eq!(generation, Generation(1));
    assert_eq!(restarted.density(), model.density());
    assert_eq!(restarted.age(), model.age());
}

#[test]
fn restart_requires_both_fields() {
    let shelf = ShelfBuilder::new(4, 4).build();
    let mut store = MemoryStore::new();
    store.set_field(fields::FRACTURE_DENSITY, vec![0.1; 16]);
    let mut model = FractureDensity::new(shelf.grid);
    match model.restart(&store) {
        Err(FractureError::State(StateError::MissingField { name })) => {
            assert_eq!(name, fields::FRACTURE_AGE);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(model.generation(), Generation(0));
}

#[test]
fn bootstrap_defaults_missing_fields() {
    let shelf = ShelfBuilder::new(4, 4).build();
    let mut store = MemoryStore::new();
    let mut density = vec![0.25; 16];
    density[5] = 3.0;
    store.set_field(fields::FRACTURE_DENSITY, density);

    let mut model = FractureDensity::new(shelf.grid);
    model.bootstrap(&store).unwrap();
    assert_eq!(model.density().at(0, 0), 0.25);
    // Index 5 is (1, 1); out-of-range input is clipped.
    assert_eq!(model.density().at(1, 1), 1.0);
    assert!(model.age().interior().all(|a| a == 0.0));

    let mut empty = FractureDensity::new(shelf.grid);
    empty.bootstrap(&MemoryStore::new()).unwrap();
    assert_eq!(empty.density(), &Scalar::new(&shelf.grid));
}

#[test]
fn wrong_length_is_rejected() {
    let shelf = ShelfBuilder::new(4, 4).build();
    let mut store = MemoryStore::new();
    store.set_field(fields::FRACTURE_DENSITY, vec![0.0; 15]);
    store.set_field(fields::FRACTURE_AGE, vec![0.0; 16]);
    let mut model = FractureDensity::new(shelf.grid);
    assert!(matches!(
        model.restart(&store),
        Err(FractureError::State(StateError::LengthMismatch {
            expected: 16,
            actual: 15,
            ..
        }))
    ));
}

#[test]
fn write_failure_propagates() {
    let shelf = ShelfBuilder::new(4, 4).build();
    let model = FractureDensity::new(shelf.grid);
    let mut store = MemoryStore::read_only();
    assert!(matches!(
        model.write_model_state(&mut store),
        Err(FractureError::State(StateError::WriteFailed { .. }))
    ));
}
