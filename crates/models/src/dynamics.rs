use std::{convert::Infallible, marker::PhantomData};

use pollen_core::{DerivativeOf, OdeProblem, StepIntegrable};

use crate::Sample;

/// Model outputs that carry the time derivative of a state.
pub trait Rates {
    type State: StepIntegrable<f64>;

    /// The derivative of the state at the evaluated sample.
    fn derivative(&self) -> DerivativeOf<Self::State, f64>;
}

/// ODE problem for any flower-state model.
///
/// The model input is a [`Sample`] of the state, and the model output
/// implements [`Rates`]. Stepping just replaces the sample's state and time.
#[derive(Debug)]
pub struct Dynamics<O> {
    _output: PhantomData<fn() -> O>,
}

impl<O> Dynamics<O> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            _output: PhantomData,
        }
    }
}

impl<O> Default for Dynamics<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> OdeProblem for Dynamics<O>
where
    O: Rates,
    O::State: Clone,
{
    type Input = Sample<O::State>;
    type Output = O;
    type State = O::State;
    type Error = Infallible;

    fn state(&self, input: &Sample<O::State>) -> Result<O::State, Infallible> {
        Ok(input.state.clone())
    }

    fn derivative(
        &self,
        _input: &Sample<O::State>,
        output: &O,
    ) -> Result<DerivativeOf<O::State, f64>, Infallible> {
        Ok(output.derivative())
    }

    fn build_input(
        &self,
        _base: &Sample<O::State>,
        state: &O::State,
        time: f64,
    ) -> Result<Sample<O::State>, Infallible> {
        Ok(Sample::new(time, state.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pollen_core::Model;

    use crate::{
        Flowers, OnePlant, PlantRates, resource::Constant, single::tests::params,
    };

    #[test]
    fn adapts_single_plant_model() {
        let plant = OnePlant::new(params(), Constant(1.0));
        let problem = Dynamics::<PlantRates>::new();
        let input = Sample::new(0.5, Flowers::new(2.0, 1.0, 3.0));

        let output = plant.call(&input).unwrap();

        assert_eq!(problem.state(&input).unwrap(), input.state);
        assert_eq!(
            problem.derivative(&input, &output).unwrap(),
            output.derivative
        );

        let next = problem
            .build_input(&input, &Flowers::new(1.0, 1.0, 1.0), 0.6)
            .unwrap();
        assert_eq!(next, Sample::new(0.6, Flowers::new(1.0, 1.0, 1.0)));
    }
}
