use crate::{DerivativeOf, StepIntegrable};

/// Defines an ODE (ordinary differential equation) problem to be integrated.
///
/// An ODE problem extracts a state from model input, computes the derivative
/// from model input and output, and reconstructs model input from a stepped
/// state at a given time. This lets generic fixed-step integrators drive any
/// model whose state implements [`StepIntegrable`], whether that state is a
/// handful of scalars or a matrix of per-plant proportions.
///
/// Time is a plain `f64`. Integrators compute sample times themselves and pass
/// them to [`build_input`](OdeProblem::build_input) as absolute values, so
/// problems never accumulate time on their own.
pub trait OdeProblem {
    type Input;
    type Output;
    type State: StepIntegrable<f64>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extracts the state from model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be extracted from the input.
    fn state(&self, input: &Self::Input) -> Result<Self::State, Self::Error>;

    /// Computes the derivative of the state from model input and output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<DerivativeOf<Self::State, f64>, Self::Error>;

    /// Builds model input from a state at absolute time `time`.
    ///
    /// `base` is the input the state was stepped from. Integrators call this
    /// both for accepted steps and for the intermediate stages of multi-stage
    /// schemes.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from the state.
    fn build_input(
        &self,
        base: &Self::Input,
        state: &Self::State,
        time: f64,
    ) -> Result<Self::Input, Self::Error>;
}
