//! The fracture-density model.
//!
//! [`FractureDensity`] owns the persisted density and age fields plus
//! four derived diagnostics, double-buffered in a [`PingPong`]. Each
//! [`update`](FractureDensity::update) reads the published time level,
//! computes every cell in parallel into the staging level, and publishes
//! only once the whole pass has finished.

use std::sync::Arc;

use crevasse_arena::{PingPong, TimeLevel};
use crevasse_core::{
    DeviatoricStress, FlowLaw, Generation, GlenFlowLaw, PrincipalStrainRates,
    StateError, StateReader, StateWriter,
};
use crevasse_grid::{Array2D, Grid2D, Scalar};
use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::boundary::clip_damage;
use crate::cell::{update_cell, CellInputs, CellOutput};
use crate::config::FractureConfig;
use crate::diagnostics::DiagnosticSource;
use crate::error::FractureError;
use crate::fields;
use crate::inputs::{FlowInputs, StepInputs, StressBalance};

/// One time level of model state.
#[derive(Clone, Debug, PartialEq)]
pub struct FractureState {
    /// Fracture density, in `[0, 1]`.
    pub density: Scalar,
    /// Time since fracturing (s), `>= 0`.
    pub age: Scalar,
    /// Growth-rate diagnostic (s⁻¹).
    pub growth_rate: Scalar,
    /// Healing-rate diagnostic (s⁻¹).
    pub healing_rate: Scalar,
    /// Flow-enhancement diagnostic.
    pub flow_enhancement: Scalar,
    /// Toughness diagnostic (Pa).
    pub toughness: Scalar,
}

impl FractureState {
    /// Intact, zero-age state on `grid`.
    pub fn new(grid: &Grid2D) -> Self {
        Self {
            density: Scalar::new(grid),
            age: Scalar::new(grid),
            growth_rate: Scalar::new(grid),
            healing_rate: Scalar::new(grid),
            flow_enhancement: Scalar::filled(grid, 1.0),
            toughness: Scalar::new(grid),
        }
    }
}

impl TimeLevel for FractureState {
    fn shape(&self) -> (usize, usize) {
        self.density.shape()
    }
}

/// Summary of one update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpdateReport {
    /// Generation published by the update.
    pub generation: Generation,
    /// Cells where the eight-sector scheme found no sector.
    pub degenerate_cells: usize,
    /// Icy cells where fracturing was initiated.
    pub initiated_cells: usize,
    /// Largest fracture density after the update.
    pub max_density: f64,
}

/// Builder for [`FractureDensity`].
///
/// Defaults: [`FractureConfig::default`] and a Glen flow law with `n = 3`.
pub struct FractureDensityBuilder {
    grid: Grid2D,
    config: FractureConfig,
    flow_law: Arc<dyn FlowLaw>,
}

impl FractureDensityBuilder {
    /// Set the model parameters.
    pub fn config(mut self, config: FractureConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the flow law supplying the exponent `n`.
    pub fn flow_law(mut self, flow_law: Arc<dyn FlowLaw>) -> Self {
        self.flow_law = flow_law;
        self
    }

    /// Build the model with intact, zero-age state.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the configuration fails validation or the flow-law
    /// exponent is not a positive finite number.
    pub fn build(self) -> Result<FractureDensity, FractureError> {
        self.config.validate()?;
        self.config.warn_on_conflicts();
        check_exponent(self.flow_law.exponent())?;
        Ok(FractureDensity {
            state: PingPong::new(FractureState::new(&self.grid)),
            grid: self.grid,
            config: self.config,
            flow_law: self.flow_law,
        })
    }
}

fn check_exponent(exponent: f64) -> Result<(), FractureError> {
    if exponent.is_finite() && exponent > 0.0 {
        Ok(())
    } else {
        Err(FractureError::InvalidExponent { exponent })
    }
}

/// Fracture-density evolution on a structured grid.
pub struct FractureDensity {
    grid: Grid2D,
    config: FractureConfig,
    flow_law: Arc<dyn FlowLaw>,
    state: PingPong<FractureState>,
}

impl FractureDensity {
    /// A model with default parameters and intact, zero-age state.
    pub fn new(grid: Grid2D) -> Self {
        Self {
            state: PingPong::new(FractureState::new(&grid)),
            grid,
            config: FractureConfig::default(),
            flow_law: Arc::new(GlenFlowLaw::default()),
        }
    }

    /// Start configuring a model on `grid`.
    pub fn builder(grid: Grid2D) -> FractureDensityBuilder {
        FractureDensityBuilder {
            grid,
            config: FractureConfig::default(),
            flow_law: Arc::new(GlenFlowLaw::default()),
        }
    }

    /// The model grid.
    pub fn grid(&self) -> &Grid2D {
        &self.grid
    }

    /// Current parameters.
    pub fn config(&self) -> &FractureConfig {
        &self.config
    }

    /// Replace the parameters; takes effect at the next update.
    ///
    /// # Errors
    ///
    /// Returns `Err` and keeps the current parameters if `config` fails
    /// validation.
    pub fn set_config(&mut self, config: FractureConfig) -> Result<(), FractureError> {
        config.validate()?;
        config.warn_on_conflicts();
        self.config = config;
        Ok(())
    }

    /// The flow law.
    pub fn flow_law(&self) -> &dyn FlowLaw {
        self.flow_law.as_ref()
    }

    /// Generation of the published state.
    pub fn generation(&self) -> Generation {
        self.state.generation()
    }

    /// The published state.
    pub fn state(&self) -> &FractureState {
        self.state.published()
    }

    /// Fracture density.
    pub fn density(&self) -> &Scalar {
        &self.state().density
    }

    /// Time since fracturing.
    pub fn age(&self) -> &Scalar {
        &self.state().age
    }

    /// Growth-rate diagnostic.
    pub fn growth_rate(&self) -> &Scalar {
        &self.state().growth_rate
    }

    /// Healing-rate diagnostic.
    pub fn healing_rate(&self) -> &Scalar {
        &self.state().healing_rate
    }

    /// Flow-enhancement diagnostic.
    pub fn flow_enhancement(&self) -> &Scalar {
        &self.state().flow_enhancement
    }

    /// Toughness diagnostic.
    pub fn toughness(&self) -> &Scalar {
        &self.state().toughness
    }

    /// Reset density and age to zero.
    ///
    /// # Errors
    ///
    /// Returns `Err` only if the state buffers have lost their shape.
    pub fn initialize(&mut self) -> Result<Generation, FractureError> {
        let n = self.grid.cell_count();
        self.install(vec![0.0; n], vec![0.0; n])
    }

    /// Copy density and age from existing fields on the model grid.
    ///
    /// Values outside the persisted bounds are clipped.
    ///
    /// # Errors
    ///
    /// Returns `Err(FractureError::Grid)` if either field is not on the
    /// model grid.
    pub fn initialize_from(
        &mut self,
        density: &Scalar,
        age: &Scalar,
    ) -> Result<Generation, FractureError> {
        density.check_shape(&self.grid)?;
        age.check_shape(&self.grid)?;
        self.install(density.interior_to_vec(), age.interior_to_vec())
    }

    /// Load density and age from a checkpoint. Both fields are required.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either field is missing or has the wrong length.
    pub fn restart(&mut self, source: &dyn StateReader) -> Result<Generation, FractureError> {
        info!("restarting the fracture density model");
        let density = self.read_required(source, fields::FRACTURE_DENSITY)?;
        let age = self.read_required(source, fields::FRACTURE_AGE)?;
        self.install(density, age)
    }

    /// Load density and age from an input file, defaulting missing
    /// fields to zero.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a field is present with the wrong length.
    pub fn bootstrap(&mut self, source: &dyn StateReader) -> Result<Generation, FractureError> {
        info!("bootstrapping the fracture density model");
        let n = self.grid.cell_count();
        let density = self
            .read_optional(source, fields::FRACTURE_DENSITY)?
            .unwrap_or_else(|| vec![0.0; n]);
        let age = self
            .read_optional(source, fields::FRACTURE_AGE)?
            .unwrap_or_else(|| vec![0.0; n]);
        self.install(density, age)
    }

    /// Write density and age, with metadata, to a checkpoint.
    ///
    /// # Errors
    ///
    /// Returns `Err(FractureError::State)` if `sink` rejects a field.
    pub fn write_model_state(&self, sink: &mut dyn StateWriter) -> Result<(), FractureError> {
        let [density_def, age_def] = fields::model_state();
        sink.write_field(&density_def, &self.density().interior_to_vec())?;
        sink.write_field(&age_def, &self.age().interior_to_vec())?;
        Ok(())
    }

    fn read_optional(
        &self,
        source: &dyn StateReader,
        name: &str,
    ) -> Result<Option<Vec<f64>>, FractureError> {
        let Some(values) = source.read_field(name) else {
            return Ok(None);
        };
        let expected = self.grid.cell_count();
        if values.len() != expected {
            return Err(StateError::LengthMismatch {
                name: name.to_string(),
                expected,
                actual: values.len(),
            }
            .into());
        }
        Ok(Some(values.to_vec()))
    }

    fn read_required(&self, source: &dyn StateReader, name: &str) -> Result<Vec<f64>, FractureError> {
        self.read_optional(source, name)?.ok_or_else(|| {
            StateError::MissingField {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// Sanitise and publish row-major density and age values.
    fn install(&mut self, density: Vec<f64>, age: Vec<f64>) -> Result<Generation, FractureError> {
        let mut clipped = 0usize;
        let density: Vec<f64> = density
            .into_iter()
            .map(|d| {
                let c = clip_damage(d, 0.0);
                if c != d {
                    clipped += 1;
                }
                c
            })
            .collect();
        let age: Vec<f64> = age
            .into_iter()
            .map(|a| {
                let c = crate::age::sanitize(a);
                if c != a {
                    clipped += 1;
                }
                c
            })
            .collect();
        if clipped > 0 {
            warn!(clipped, "loaded fracture state had out-of-range values; clipped");
        }
        let next = FractureState {
            density: Scalar::from_interior(&self.grid, density)?,
            age: Scalar::from_interior(&self.grid, age)?,
            ..self.state().clone()
        };
        Ok(self.state.replace(next)?)
    }

    /// Advance the model by `dt` seconds.
    ///
    /// # Errors
    ///
    /// Returns `Err` without touching the state if `dt` is negative or not
    /// finite, an input does not match the grid, the configuration is
    /// invalid, or the flow-law exponent is unusable.
    pub fn update(&mut self, dt: f64, inputs: &StepInputs<'_>) -> Result<UpdateReport, FractureError> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(FractureError::InvalidTimeStep { dt });
        }
        inputs.check_shape(&self.grid)?;
        let exponent = self.flow_law.exponent();
        check_exponent(exponent)?;
        let plan = self.config.resolve(exponent)?;

        debug!(
            gamma = self.config.growth_constant,
            sigma_cr = self.config.initiation_threshold,
            gamma_h = self.config.healing_constant,
            healing_threshold = self.config.healing_threshold,
            softening_lower_limit = self.config.softening_lower_limit,
            "fracture density parameters"
        );

        let grid = &self.grid;
        let (mx, my) = grid.shape();
        let (dx, dy) = (grid.dx(), grid.dy());
        let edge = grid.edge_behavior();

        let guard = self.state.begin_step();
        let old = guard.old;

        let outputs: Vec<CellOutput> = (0..my)
            .into_par_iter()
            .flat_map_iter(|j| {
                (0..mx).map(move |i| {
                    let cell = CellInputs {
                        i,
                        j,
                        damage: old.density.box3(i, j),
                        age: old.age.star(i, j),
                        velocity: inputs.flow.velocity.at(i, j),
                        strain: inputs.strain_rates.at(i, j),
                        stress: inputs.stresses.at(i, j),
                        hardness: inputs.flow.hardness.at(i, j),
                        thickness: inputs.flow.thickness.at(i, j),
                        cell_type: inputs.flow.cell_type.at(i, j),
                        bc_mask: inputs.flow.bc_mask.at(i, j),
                        domain_edge: grid.is_domain_edge(i, j),
                    };
                    update_cell(&plan, dt, dx, dy, &cell)
                })
            })
            .collect();

        let new = guard.new;
        let mut degenerate_cells = 0;
        let mut initiated_cells = 0;
        let mut max_density = 0.0_f64;
        for (k, out) in outputs.iter().enumerate() {
            let (i, j) = grid.coords(k);
            new.density.set(i, j, out.damage);
            new.age.set(i, j, out.age);
            new.growth_rate.set(i, j, out.growth_rate);
            new.healing_rate.set(i, j, out.healing_rate);
            new.flow_enhancement.set(i, j, out.flow_enhancement);
            new.toughness.set(i, j, out.toughness);
            degenerate_cells += usize::from(out.degenerate);
            initiated_cells += usize::from(out.initiated);
            max_density = max_density.max(out.damage);
        }
        new.density.fill_halo(edge);
        new.age.fill_halo(edge);

        let generation = self.state.publish()?;
        if degenerate_cells > 0 {
            warn!(degenerate_cells, "advection fell back to zero flux");
        }
        Ok(UpdateReport {
            generation,
            degenerate_cells,
            initiated_cells,
            max_density,
        })
    }

    /// Ask `stress_balance` for strain rates and stresses, then update.
    ///
    /// # Errors
    ///
    /// As [`update`](Self::update), plus a shape check on `flow` before
    /// the stress balance runs.
    pub fn update_with_stress_balance(
        &mut self,
        dt: f64,
        flow: &FlowInputs<'_>,
        stress_balance: &dyn StressBalance,
    ) -> Result<UpdateReport, FractureError> {
        flow.check_shape(&self.grid)?;
        let mut strain_rates = Array2D::<PrincipalStrainRates>::new(&self.grid);
        let mut stresses = Array2D::<DeviatoricStress>::new(&self.grid);
        stress_balance.principal_strain_rates(
            &self.grid,
            flow.velocity,
            flow.cell_type,
            &mut strain_rates,
        );
        stress_balance.deviatoric_stresses(
            &self.grid,
            self.flow_law.as_ref(),
            flow.velocity,
            flow.hardness,
            flow.cell_type,
            &mut stresses,
        );
        let inputs = StepInputs {
            flow: *flow,
            strain_rates: &strain_rates,
            stresses: &stresses,
        };
        self.update(dt, &inputs)
    }
}

impl DiagnosticSource for FractureDensity {
    fn diagnostics(&self) -> IndexMap<&'static str, &Scalar> {
        let s = self.state();
        IndexMap::from([
            (fields::FRACTURE_DENSITY, &s.density),
            (fields::FRACTURE_GROWTH_RATE, &s.growth_rate),
            (fields::FRACTURE_HEALING_RATE, &s.healing_rate),
            (fields::FRACTURE_FLOW_ENHANCEMENT, &s.flow_enhancement),
            (fields::FRACTURE_AGE, &s.age),
            (fields::FRACTURE_TOUGHNESS, &s.toughness),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crevasse_core::{CellType, Velocity};

    struct Fields {
        velocity: Array2D<Velocity>,
        thickness: Scalar,
        cell_type: Array2D<CellType>,
        bc_mask: Scalar,
        hardness: Scalar,
        strain: Array2D<PrincipalStrainRates>,
        stress: Array2D<DeviatoricStress>,
    }

    impl Fields {
        fn shelf(grid: &Grid2D) -> Self {
            Self {
                velocity: Array2D::new(grid),
                thickness: Scalar::filled(grid, 300.0),
                cell_type: Array2D::filled(grid, CellType::FloatingIce),
                bc_mask: Scalar::new(grid),
                hardness: Scalar::filled(grid, 1.0e8),
                strain: Array2D::filled(grid, PrincipalStrainRates::new(1.0e-9, 0.0)),
                stress: Array2D::new(grid),
            }
        }

        fn inputs(&self) -> StepInputs<'_> {
            StepInputs {
                flow: FlowInputs {
                    velocity: &self.velocity,
                    thickness: &self.thickness,
                    cell_type: &self.cell_type,
                    bc_mask: &self.bc_mask,
                    hardness: &self.hardness,
                },
                strain_rates: &self.strain,
                stresses: &self.stress,
            }
        }
    }

    fn grid() -> Grid2D {
        Grid2D::new(5, 4, 1.0e3, 1.0e3).unwrap()
    }

    #[derive(Debug)]
    struct BadLaw;

    impl FlowLaw for BadLaw {
        fn name(&self) -> &str {
            "bad"
        }
        fn exponent(&self) -> f64 {
            0.0
        }
    }

    #[test]
    fn builder_validates() {
        let bad = FractureConfig {
            boundary_value: 2.0,
            ..FractureConfig::default()
        };
        assert!(matches!(
            FractureDensity::builder(grid()).config(bad).build(),
            Err(FractureError::Config(_))
        ));
        assert!(matches!(
            FractureDensity::builder(grid()).flow_law(Arc::new(BadLaw)).build(),
            Err(FractureError::InvalidExponent { .. })
        ));
        let model = FractureDensity::builder(grid()).build().unwrap();
        assert_eq!(model.flow_law().exponent(), 3.0);
    }

    #[test]
    fn new_model_is_intact() {
        let model = FractureDensity::new(grid());
        assert_eq!(model.generation(), Generation(0));
        assert_eq!(model.density().max_interior(), Some(0.0));
        assert!(model.flow_enhancement().interior().all(|e| e == 1.0));
    }

    #[test]
    fn invalid_dt_leaves_state_untouched() {
        let g = grid();
        let mut model = FractureDensity::new(g);
        let f = Fields::shelf(&g);
        for dt in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                model.update(dt, &f.inputs()),
                Err(FractureError::InvalidTimeStep { .. })
            ));
        }
        assert_eq!(model.generation(), Generation(0));
    }

    #[test]
    fn input_shape_mismatch_is_named() {
        let g = grid();
        let mut model = FractureDensity::new(g);
        let mut f = Fields::shelf(&g);
        f.hardness = Scalar::new(&Grid2D::new(3, 3, 1.0, 1.0).unwrap());
        match model.update(1.0, &f.inputs()) {
            Err(FractureError::InputShape { name, expected, actual }) => {
                assert_eq!(name, "hardness");
                assert_eq!(expected, (5, 4));
                assert_eq!(actual, (3, 3));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(model.generation(), Generation(0));
    }

    #[test]
    fn update_publishes_next_generation() {
        let g = grid();
        let mut model = FractureDensity::new(g);
        let mut f = Fields::shelf(&g);
        f.stress = Array2D::filled(&g, DeviatoricStress::new(1.0e5, 0.0, 0.0));
        let report = model.update(1.0e7, &f.inputs()).unwrap();
        assert_eq!(report.generation, Generation(1));
        assert_eq!(model.generation(), Generation(1));
        // 3 × 2 interior cells away from the outer ring.
        assert_eq!(report.initiated_cells, 6);
        assert_eq!(report.degenerate_cells, 0);
        let d = model.density().at(2, 2);
        assert!((d - 1.0e-9 * 1.0e7).abs() < 1e-12);
        assert_eq!(report.max_density, d);
        assert_eq!(model.density().at(0, 2), 0.0);
        assert_eq!(model.toughness().at(2, 2), 1.0e5);
    }

    #[test]
    fn initialize_from_clips_out_of_range_values() {
        let g = grid();
        let mut model = FractureDensity::new(g);
        let density = Scalar::from_fn(&g, |i, _| i as f64 - 1.0);
        let age = Scalar::filled(&g, f64::NAN);
        model.initialize_from(&density, &age).unwrap();
        assert_eq!(model.density().at(0, 0), 0.0);
        assert_eq!(model.density().at(1, 0), 0.0);
        assert_eq!(model.density().at(2, 0), 1.0);
        assert_eq!(model.density().at(4, 0), 1.0);
        assert!(model.age().interior().all(|a| a == 0.0));
        assert_eq!(model.generation(), Generation(1));

        model.initialize().unwrap();
        assert_eq!(model.density().max_interior(), Some(0.0));
        assert_eq!(model.generation(), Generation(2));
    }

    struct WarnCounter(Arc<std::sync::atomic::AtomicUsize>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCounter {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            }
        }
    }

    #[test]
    fn conflicting_criteria_warn_once_per_install() {
        use tracing_subscriber::layer::SubscriberExt;

        let warnings = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));
        tracing::subscriber::with_default(subscriber, || {
            let g = grid();
            let both = FractureConfig {
                lefm: true,
                max_shear_stress: true,
                ..FractureConfig::default()
            };
            let mut model = FractureDensity::builder(g).config(both.clone()).build().unwrap();
            let f = Fields::shelf(&g);
            for _ in 0..4 {
                model.update(1.0, &f.inputs()).unwrap();
            }
            assert_eq!(warnings.load(std::sync::atomic::Ordering::Relaxed), 1);

            model.set_config(both).unwrap();
            model.update(1.0, &f.inputs()).unwrap();
            assert_eq!(warnings.load(std::sync::atomic::Ordering::Relaxed), 2);

            model.set_config(FractureConfig::default()).unwrap();
            assert_eq!(warnings.load(std::sync::atomic::Ordering::Relaxed), 2);
        });
    }

    #[test]
    fn loaded_state_seeds_the_next_step() {
        let g = grid();
        let mut model = FractureDensity::new(g);
        let f = Fields::shelf(&g);
        model.update(1.0, &f.inputs()).unwrap();
        model
            .initialize_from(&Scalar::filled(&g, 0.25), &Scalar::new(&g))
            .unwrap();
        assert_eq!(model.generation(), Generation(2));
        // dt = 0 keeps the loaded interior value.
        model.update(0.0, &f.inputs()).unwrap();
        assert_eq!(model.density().at(2, 2), 0.25);
        assert_eq!(model.generation(), Generation(3));
    }

    #[test]
    fn diagnostics_are_ordered() {
        let model = FractureDensity::new(grid());
        let names: Vec<_> = model.diagnostics().keys().copied().collect();
        let expected: Vec<_> = fields::diagnostics().into_iter().map(|d| d.name).collect();
        assert_eq!(names, expected);
    }
}
