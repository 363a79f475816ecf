//! Capability traits for solver-agnostic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer only states what it needs from an event.
//!
//! # Event traits
//!
//! - [`HasTime`] — events that carry a simulation time
//! - [`HasState`] — events that carry the integrated state
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use pollen_core::Observer;
//! use pollen_observers::traits::{CanStopEarly, HasTime};
//!
//! struct Deadline {
//!     time: f64,
//! }
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for Deadline {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() >= self.time).then(A::stop_early)
//!     }
//! }
//! ```

use pollen_solvers::transient;

/// An event that carries a simulation time.
pub trait HasTime {
    /// Returns the simulation time of this event.
    fn time(&self) -> f64;
}

/// An event that carries the integrated state.
pub trait HasState {
    type State;

    /// Returns the state at this event.
    fn state(&self) -> &Self::State;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<S, I, O> HasTime for transient::Event<S, I, O> {
    fn time(&self) -> f64 {
        self.time
    }
}

impl<S, I, O> HasState for transient::Event<S, I, O> {
    type State = S;

    fn state(&self) -> &S {
        &self.state
    }
}

impl CanStopEarly for transient::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
