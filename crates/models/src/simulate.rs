use pollen_core::{Blend, DerivativeOf, Model, StepIntegrable};
use pollen_observers::Trajectory;
use pollen_solvers::transient::{self, Horizon, Method};

use crate::{Dynamics, Rates, Sample};

/// Integrates a flower-state model from `initial` at `t = 0` across `horizon`
/// and records every sample.
///
/// The returned trajectory holds the initial state followed by one state per
/// completed step, in increasing time order. Runs are deterministic: calling
/// this twice with the same arguments yields identical trajectories.
///
/// # Errors
///
/// Returns an error if the model fails at any sample. None of the models in
/// this crate can fail.
#[tracing::instrument(skip_all, fields(method = ?method, dt = horizon.dt(), max_t = horizon.max_t()))]
pub fn simulate<M, S>(
    model: &M,
    initial: S,
    horizon: &Horizon,
    method: Method,
) -> Result<Trajectory<S>, transient::Error>
where
    M: Model<Input = Sample<S>>,
    M::Output: Rates<State = S> + Clone,
    S: StepIntegrable<f64> + Clone,
    DerivativeOf<S, f64>: Blend,
{
    let problem = Dynamics::<M::Output>::new();
    let mut trajectory = Trajectory::with_capacity(horizon.len() + 1);

    let solution = transient::solve(
        method,
        model,
        &problem,
        Sample::new(0.0, initial),
        horizon,
        &mut trajectory,
    )?;

    tracing::debug!(
        samples = trajectory.len(),
        final_time = solution.time,
        "simulation finished"
    );

    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{Flowers, OnePlant, resource::Constant, single::tests::params};

    #[test]
    fn records_initial_sample_and_every_step() {
        let plant = OnePlant::new(params(), Constant(1.0));
        let horizon = Horizon::new(0.25, 1.0).unwrap();

        let trajectory = simulate(&plant, Flowers::default(), &horizon, Method::Rk4).unwrap();

        assert_eq!(trajectory.times(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(trajectory.states()[0], Flowers::default());
    }

    #[test]
    fn euler_records_the_same_times() {
        let plant = OnePlant::new(params(), Constant(1.0));
        let horizon = Horizon::new(0.1, 0.35).unwrap();

        let rk4 = simulate(&plant, Flowers::default(), &horizon, Method::Rk4).unwrap();
        let euler = simulate(&plant, Flowers::default(), &horizon, Method::Euler).unwrap();

        assert_eq!(rk4.times(), euler.times());
        assert_relative_eq!(*rk4.times().last().unwrap(), 0.35, epsilon = 1e-12);
    }
}
