//! Shared fixtures for the fixed-step solver tests.

use std::{cell::Cell, convert::Infallible};

use pollen_core::{DerivativeOf, Model, OdeProblem, StepIntegrable};

/// State: the level of a single tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Level(pub f64);

impl StepIntegrable<f64> for Level {
    type Derivative = f64;

    fn step(&self, derivative: f64, dt: f64) -> Self {
        Level(self.0 + derivative * dt)
    }
}

/// Model input: tank level and time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Tank {
    pub level: f64,
    pub time: f64,
}

impl Tank {
    pub(crate) fn at_start(level: f64) -> Self {
        Self { level, time: 0.0 }
    }
}

/// Model whose output is the rate of change of the tank level.
///
/// Counts how many times it is called.
pub(crate) struct Inflow<F> {
    rate: F,
    calls: Cell<usize>,
}

impl<F: Fn(&Tank) -> f64> Inflow<F> {
    pub(crate) fn new(rate: F) -> Self {
        Self {
            rate,
            calls: Cell::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<F: Fn(&Tank) -> f64> Model for Inflow<F> {
    type Input = Tank;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Tank) -> Result<f64, Infallible> {
        self.calls.set(self.calls.get() + 1);
        Ok((self.rate)(input))
    }
}

/// Problem that integrates the tank level.
pub(crate) struct TankProblem;

impl OdeProblem for TankProblem {
    type Input = Tank;
    type Output = f64;
    type State = Level;
    type Error = Infallible;

    fn state(&self, input: &Tank) -> Result<Level, Infallible> {
        Ok(Level(input.level))
    }

    fn derivative(
        &self,
        _input: &Tank,
        output: &f64,
    ) -> Result<DerivativeOf<Level, f64>, Infallible> {
        Ok(*output)
    }

    fn build_input(&self, _base: &Tank, state: &Level, time: f64) -> Result<Tank, Infallible> {
        Ok(Tank {
            level: state.0,
            time,
        })
    }
}
