//! Forward Euler scheme.
//!
//! ```text
//! state_{n+1} = state_n + derivative_n * dt
//! ```
//!
//! The derivative at the start of each step comes from the model evaluation
//! already made at that sample, so each step costs one model call.

use pollen_core::{Model, Observer, OdeProblem, StepIntegrable};

use super::{Action, Error, Event, Horizon, Solution, integrate::integrate};

/// Integrates an ODE problem using forward Euler.
///
/// # Algorithm
///
/// 1. Call the model with the initial input and emit step 0 at `t = 0`.
/// 2. For each step of the horizon:
///    - Compute the derivative from the current input and output.
///    - Step the state forward: `state + derivative * dt`.
///    - Build the next input from the stepped state at the step's end time.
///    - Call the model to get the next output.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the final sample.
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
    Obs: Observer<Event<P::State, M::Input, M::Output>, Action>,
{
    integrate(
        model,
        problem,
        initial,
        horizon,
        observer,
        |current, state, _time, step| {
            let derivative = problem
                .derivative(&current.input, &current.output)
                .map_err(Error::problem(step.index))?;
            Ok(state.step(derivative, step.dt))
        },
    )
}

/// Integrates an ODE problem using forward Euler without observation.
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
{
    solve(model, problem, initial, horizon, ())
}
