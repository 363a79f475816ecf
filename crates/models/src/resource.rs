//! Resource inflow into the non-colonized flower pool.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Time-dependent inflow `R(t)` of new non-colonized flowers.
pub trait Resource {
    /// Inflow rate at time `time`.
    fn inflow(&self, time: f64) -> f64;
}

/// Constant inflow `R`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Constant(pub f64);

impl Resource for Constant {
    fn inflow(&self, _time: f64) -> f64 {
        self.0
    }
}

/// Seasonal inflow shaped as a Weibull hazard curve.
///
/// ```text
/// R(t) = R̂ * (k/λ) * ((t+t0)/λ)^(k-1) * exp(-((t+t0)/λ)^k)
/// ```
///
/// For `k > 1` this is a single pulse that rises from zero and decays. The
/// phase offset `t0` shifts the pulse relative to `t = 0`; values making
/// `t + t0` negative are outside the curve's domain and yield NaN for
/// non-integer `k`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeibullPulse {
    /// Total inflow scale `R̂`.
    pub r_hat: f64,
    /// Phase offset `t0`.
    pub t0: f64,
    /// Shape `k`.
    pub k: f64,
    /// Scale `λ`.
    pub lambda: f64,
}

impl Resource for WeibullPulse {
    fn inflow(&self, time: f64) -> f64 {
        let Self {
            r_hat,
            t0,
            k,
            lambda,
        } = *self;

        let x = (time + t0) / lambda;
        r_hat * (k / lambda) * x.powf(k - 1.0) * (-x.powf(k)).exp()
    }
}
