//! Core traits and types for the Pollen framework.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! plant-pollinator models build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OdeProblem`] — adapts a model to a time integrator by extracting a state
//!   from model input and a derivative from model output
//! - [`StepIntegrable`] and [`Blend`] — how states are stepped and how
//!   derivatives are combined, keeping integrators independent of state shape

mod model;
mod observer;
mod ode;
mod step;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use ode::OdeProblem;
pub use step::{Blend, DerivativeOf, StepIntegrable};
