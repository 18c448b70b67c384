//! Test utilities and in-memory services for Crevasse development.
//!
//! Provides a [`MemoryStore`] implementing [`StateReader`] and
//! [`StateWriter`], a [`FixedStressBalance`] that hands out uniform
//! strain rates and stresses, and the [`ShelfBuilder`] scaffold for
//! constructing ice-shelf scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crevasse_core::{
    CellType, DeviatoricStress, FieldDef, FlowLaw, PrincipalStrainRates, StateError, StateReader,
    StateWriter, Velocity,
};
use crevasse_fracture::StressBalance;
use crevasse_grid::{Array2D, Grid2D, Scalar};

pub use fixtures::{Shelf, ShelfBuilder};

/// In-memory checkpoint.
///
/// Backed by a `HashMap<String, Vec<f64>>`. Writes record the
/// [`FieldDef`] alongside the data so tests can inspect metadata.
#[derive(Default)]
pub struct MemoryStore {
    fields: HashMap<String, Vec<f64>>,
    defs: HashMap<String, FieldDef>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses every write.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Pre-populate a field for restart or bootstrap tests.
    pub fn set_field(&mut self, name: impl Into<String>, data: Vec<f64>) {
        self.fields.insert(name.into(), data);
    }

    /// Read back a written field.
    pub fn get_field(&self, name: &str) -> Option<&[f64]> {
        self.fields.get(name).map(|v| v.as_slice())
    }

    /// Metadata recorded with the last write of `name`.
    pub fn def(&self, name: &str) -> Option<&FieldDef> {
        self.defs.get(name)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl StateReader for MemoryStore {
    fn read_field(&self, name: &str) -> Option<&[f64]> {
        self.get_field(name)
    }
}

impl StateWriter for MemoryStore {
    fn write_field(&mut self, def: &FieldDef, values: &[f64]) -> Result<(), StateError> {
        if self.read_only {
            return Err(StateError::WriteFailed {
                name: def.name.clone(),
                reason: "store is read-only".into(),
            });
        }
        self.fields.insert(def.name.clone(), values.to_vec());
        self.defs.insert(def.name.clone(), def.clone());
        Ok(())
    }
}

/// Stress balance returning the same strain rates and stresses on every
/// icy cell and zeros elsewhere.
pub struct FixedStressBalance {
    pub strain: PrincipalStrainRates,
    pub stress: DeviatoricStress,
    calls: AtomicUsize,
}

impl FixedStressBalance {
    pub fn new(strain: PrincipalStrainRates, stress: DeviatoricStress) -> Self {
        Self {
            strain,
            stress,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times either service method was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl StressBalance for FixedStressBalance {
    fn principal_strain_rates(
        &self,
        grid: &Grid2D,
        _velocity: &Array2D<Velocity>,
        cell_type: &Array2D<CellType>,
        out: &mut Array2D<PrincipalStrainRates>,
    ) {
        self.calls.fetch_add(1, Ordering::Relaxed);
        for (i, j) in grid.points() {
            let value = if cell_type.at(i, j).icy() {
                self.strain
            } else {
                PrincipalStrainRates::default()
            };
            out.set(i, j, value);
        }
    }

    fn deviatoric_stresses(
        &self,
        grid: &Grid2D,
        _flow_law: &dyn FlowLaw,
        _velocity: &Array2D<Velocity>,
        _hardness: &Scalar,
        cell_type: &Array2D<CellType>,
        out: &mut Array2D<DeviatoricStress>,
    ) {
        self.calls.fetch_add(1, Ordering::Relaxed);
        for (i, j) in grid.points() {
            let value = if cell_type.at(i, j).icy() {
                self.stress
            } else {
                DeviatoricStress::default()
            };
            out.set(i, j, value);
        }
    }
}
