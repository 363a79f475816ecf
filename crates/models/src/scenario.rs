//! A complete, self-describing simulation run.
//!
//! A [`Scenario`] bundles a model, its initial state, and the horizon
//! settings. With the `serde` feature it can be loaded from any serde format;
//! omitted `dt` and `max_t` fall back to the [`Horizon`] defaults.
//!
//! ```toml
//! max_t = 30.0
//!
//! [model.plants]
//! m = [0.1, 0.1]
//! # ... one entry per plant for every column
//!
//! [model.competition]
//! u = 1.0
//! X = 1.0
//!
//! [initial]
//! Y = [0.5, 0.5]
//! B = [0.1, 0.1]
//! ```

use pollen_core::{Blend, DerivativeOf, Model, StepIntegrable};
use pollen_observers::Trajectory;
use pollen_solvers::transient::{self, Horizon, HorizonError, Method};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DimensionError, Flowers, Landscape, OnePlant, OnePlantSeason, Proportions, Rates, Sample,
    SinglePlant, simulate,
};

/// A model together with everything needed to run it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scenario<M, S> {
    #[cfg_attr(feature = "serde", serde(default = "default_dt"))]
    pub dt: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_max_t"))]
    pub max_t: f64,
    pub model: M,
    pub initial: S,
}

/// Single plant with constant inflow.
pub type PlantScenario = Scenario<OnePlant, Flowers>;

/// Single plant with a seasonal inflow pulse.
pub type SeasonScenario = Scenario<OnePlantSeason, Flowers>;

/// Multi-plant landscape.
pub type LandscapeScenario = Scenario<Landscape, Proportions>;

/// Errors that can occur when running a [`Scenario`].
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Horizon(#[from] HorizonError),

    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error("simulation failed")]
    Solve(#[from] transient::Error),
}

/// Models that can check an initial state before a run.
pub trait CheckInitial<S> {
    /// # Errors
    ///
    /// Returns an error if `initial` does not fit the model.
    fn check_initial(&self, initial: &S) -> Result<(), DimensionError>;
}

impl<R> CheckInitial<Flowers> for SinglePlant<R> {
    fn check_initial(&self, _initial: &Flowers) -> Result<(), DimensionError> {
        Ok(())
    }
}

impl CheckInitial<Proportions> for Landscape {
    fn check_initial(&self, initial: &Proportions) -> Result<(), DimensionError> {
        self.check_state(initial)
    }
}

#[cfg(feature = "serde")]
fn default_dt() -> f64 {
    Horizon::default().dt()
}

#[cfg(feature = "serde")]
fn default_max_t() -> f64 {
    Horizon::default().max_t()
}

impl<M, S> Scenario<M, S> {
    /// Creates a scenario with the default horizon.
    pub fn new(model: M, initial: S) -> Self {
        let horizon = Horizon::default();
        Self {
            dt: horizon.dt(),
            max_t: horizon.max_t(),
            model,
            initial,
        }
    }

    /// Replaces the step size and stop time.
    #[must_use]
    pub fn with_horizon(self, dt: f64, max_t: f64) -> Self {
        Self { dt, max_t, ..self }
    }

    /// Validates `dt` and `max_t`.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is out of range.
    pub fn horizon(&self) -> Result<Horizon, HorizonError> {
        Horizon::new(self.dt, self.max_t)
    }

    /// Validates the scenario and simulates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the horizon or initial state is invalid, or if the
    /// model fails during integration.
    pub fn run(&self, method: Method) -> Result<Trajectory<S>, ScenarioError>
    where
        M: Model<Input = Sample<S>> + CheckInitial<S>,
        M::Output: Rates<State = S> + Clone,
        S: StepIntegrable<f64> + Clone,
        DerivativeOf<S, f64>: Blend,
    {
        let horizon = self.horizon()?;
        self.model.check_initial(&self.initial)?;

        Ok(simulate(&self.model, self.initial.clone(), &horizon, method)?)
    }
}
