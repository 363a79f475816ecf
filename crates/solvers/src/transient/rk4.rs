//! Classical fourth-order Runge-Kutta scheme.
//!
//! ```text
//! k1 = f(t,          y)
//! k2 = f(t + dt/2,   y + dt/2 * k1)
//! k3 = f(t + dt/2,   y + dt/2 * k2)
//! k4 = f(t + dt,     y + dt * k3)
//!
//! y_{n+1} = y_n + dt/6 * (k1 + 2*k2 + 2*k3 + k4)
//! ```
//!
//! Every stage rebuilds the model input and calls the model, so quantities
//! the model derives from the whole state (such as coupling between plants)
//! are recomputed at each stage. `k1` reuses the evaluation made at the end
//! of the previous step.

use pollen_core::{Blend, DerivativeOf, Model, Observer, OdeProblem, StepIntegrable};

use super::{Action, Error, Event, Horizon, Solution, Step, integrate::integrate};

/// Integrates an ODE problem using classical fourth-order Runge-Kutta.
///
/// The observer receives an [`Event`] for the initial sample and after each
/// completed step, and may return [`Action::StopEarly`] to terminate.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve<M, P, Obs>(
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
    integrate(
        model,
        problem,
        initial,
        horizon,
        observer,
        |current, state, time, step| {
            let Step { index, dt, .. } = *step;
            let half = 0.5 * dt;
            let at = |slope, delta: f64| {
                stage(model, problem, &current.input, state, slope, delta, time + delta, index)
            };

            let k1 = problem
                .derivative(&current.input, &current.output)
                .map_err(Error::problem(index))?;
            let k2 = at(k1.clone(), half)?;
            let k3 = at(k2.clone(), half)?;
            let k4 = at(k3.clone(), dt)?;

            let slope = (k1 + (k2 + k3) * 2.0 + k4) * (1.0 / 6.0);
            Ok(state.step(slope, dt))
        },
    )
}

/// Integrates an ODE problem using classical Runge-Kutta without observation.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    horizon: &Horizon,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::State: Clone,
    DerivativeOf<P::State, f64>: Blend,
{
    solve(model, problem, initial, horizon, ())
}

/// Evaluates the derivative at `state + slope * delta`, at time `time`, as
/// part of step `index`.
#[allow(clippy::too_many_arguments)]
fn stage<M, P>(
    model: &M,
    problem: &P,
    base: &M::Input,
    state: &P::State,
    slope: DerivativeOf<P::State, f64>,
    delta: f64,
    time: f64,
    index: usize,
) -> Result<DerivativeOf<P::State, f64>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
{
    let stage_state = state.step(slope, delta);
    let input = problem
        .build_input(base, &stage_state, time)
        .map_err(Error::problem(index))?;
    let output = model.call(&input).map_err(Error::model(index))?;
    problem.derivative(&input, &output).map_err(Error::problem(index))
}
