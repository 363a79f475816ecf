//! Fixed-step solvers for ODE problems.
//!
//! Both schemes in this module advance an [`OdeProblem`] from `t = 0` to the
//! end of a [`Horizon`] with a uniform step size. They share one driving loop
//! and differ only in how a single step is computed:
//!
//! - [`euler`] — forward Euler, one model call per step
//! - [`rk4`] — classical fourth-order Runge-Kutta, four model calls per step
//!
//! There is no error estimation or step-size adaptation. The state type is
//! opaque to the solvers: it only needs to implement [`StepIntegrable`], and
//! for RK4 its derivative must implement [`Blend`].
//!
//! # Example
//!
//! ```ignore
//! use pollen_solvers::transient::{self, Horizon, Method};
//!
//! let horizon = Horizon::new(0.1, 90.0)?;
//! let solution = transient::solve(Method::Rk4, &model, &problem, initial, &horizon, ())?;
//! ```
//!
//! [`OdeProblem`]: pollen_core::OdeProblem
//! [`StepIntegrable`]: pollen_core::StepIntegrable
//! [`Blend`]: pollen_core::Blend

mod action;
mod error;
mod event;
mod horizon;
mod integrate;
mod solution;

#[cfg(test)]
mod test_utils;

pub mod euler;
pub mod rk4;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use horizon::{Horizon, HorizonError, Step};
pub use solution::{Solution, Status};

use pollen_core::{Blend, DerivativeOf, Model, Observer, OdeProblem};

/// Explicit stepping scheme used by [`solve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    /// Classical fourth-order Runge-Kutta.
    #[default]
    Rk4,

    /// Forward Euler.
    Euler,
}

/// Integrates an ODE problem over a horizon with the selected scheme.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve<M, P, Obs>(
    method: Method,
    model: &M,
    problem: &P,
    initial: M::Input,
    horizon: &Horizon,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::State: Clone,
    DerivativeOf<P::State, f64>: Blend,
    Obs: Observer<Event<P::State, M::Input, M::Output>, Action>,
{
    match method {
        Method::Rk4 => rk4::solve(model, problem, initial, horizon, observer),
        Method::Euler => euler::solve(model, problem, initial, horizon, observer),
    }
}
