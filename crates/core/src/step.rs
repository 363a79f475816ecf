use std::ops::{Add, Mul};

/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait enables generic ODE solvers to work with the type by
/// stepping it via `derivative * delta`, where the derivative is with respect
/// to `Delta`. Solvers in this workspace integrate over time with
/// `Delta = f64`.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

/// Derivatives that can be combined linearly.
///
/// Multi-stage schemes such as classical Runge-Kutta blend several stage
/// derivatives into one weighted slope before stepping the state. Any type
/// that is `Clone` and supports `+` and scaling by `f64` qualifies.
pub trait Blend: Clone + Add<Output = Self> + Mul<f64, Output = Self> {}

impl<T> Blend for T where T: Clone + Add<Output = T> + Mul<f64, Output = T> {}

#[cfg(test)]
mod tests {
    use super::*;

    // Scalar state and derivative
    #[derive(Debug, PartialEq)]
    struct Stock(f64);

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Flow(f64);

    impl StepIntegrable<f64> for Stock {
        type Derivative = Flow;

        fn step(&self, derivative: Flow, delta: f64) -> Self {
            Stock(self.0 + derivative.0 * delta)
        }
    }

    impl Add for Flow {
        type Output = Flow;

        fn add(self, rhs: Flow) -> Flow {
            Flow(self.0 + rhs.0)
        }
    }

    impl Mul<f64> for Flow {
        type Output = Flow;

        fn mul(self, rhs: f64) -> Flow {
            Flow(self.0 * rhs)
        }
    }

    // Vector state and derivative
    #[derive(Debug, PartialEq)]
    struct Counts(Vec<f64>);
    struct Rates(Vec<f64>);

    impl StepIntegrable<f64> for Counts {
        type Derivative = Rates;

        fn step(&self, derivative: Rates, delta: f64) -> Self {
            let next = self
                .0
                .iter()
                .zip(derivative.0.iter())
                .map(|(s, d)| s + d * delta)
                .collect();
            Counts(next)
        }
    }

    fn average<D: Blend>(a: D, b: D) -> D {
        (a + b) * 0.5
    }

    #[test]
    fn step_scalar_state() {
        let next = Stock(0.0).step(Flow(2.0), 0.5);
        assert_eq!(next, Stock(1.0));
    }

    #[test]
    fn step_vector_state() {
        let state = Counts(vec![1.0, 2.0, 3.0]);
        let rates = Rates(vec![0.1, 0.2, 0.3]);

        let next = state.step(rates, 10.0);

        assert_eq!(next, Counts(vec![2.0, 4.0, 6.0]));
    }

    #[test]
    fn blend_combines_derivatives() {
        assert_eq!(average(Flow(1.0), Flow(3.0)), Flow(2.0));
        assert_eq!(average(1.0_f64, 4.0), 2.5);
    }
}
