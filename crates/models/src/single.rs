//! Single-plant models with absolute flower counts.
//!
//! Both variants share the same dynamics and differ only in the resource
//! inflow `R`:
//!
//! - [`OnePlant`] — constant inflow
//! - [`OnePlantSeason`] — seasonal Weibull pulse
//!
//! ```text
//! F     = Y + B + N
//! P     = visitation(F, B)
//! Λ     = (P/F) / (L_0 + P/F)
//! dY/dt = transfer_y * N - m*Y
//! dB/dt = transfer_b * N - m*B
//! dN/dt = R(t) - N * (m + transfer_y + transfer_b)
//! ```
//!
//! The flower total `F` must be positive. Nothing checks it; `F = 0` produces
//! NaN.

use std::convert::Infallible;

use pollen_core::Model;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Flowers, Sample,
    dynamics::Rates,
    flowers::FlowerRates,
    pollination::{Attraction, Dispersal, pressure},
    resource::{Constant, Resource, WeibullPulse},
};

/// Biological constants of a single plant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SinglePlantParams {
    /// Mortality rate `m`, applied to every flower state.
    pub m: f64,
    /// Pollination-pressure half saturation `L_0`.
    pub l_0: f64,
    pub dispersal: Dispersal,
    pub attraction: Attraction,
}

/// Single-plant flower dynamics with resource inflow `R`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SinglePlant<R> {
    pub params: SinglePlantParams,
    pub resource: R,
}

/// Single plant with constant resource inflow.
pub type OnePlant = SinglePlant<Constant>;

/// Single plant with a seasonal resource pulse.
pub type OnePlantSeason = SinglePlant<WeibullPulse>;

/// Output of a [`SinglePlant`] evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantRates {
    /// Time derivative of the flower counts.
    pub derivative: FlowerRates,
    /// Pollinator visitation rate `P`.
    pub visitation: f64,
    /// Pollination pressure `Λ`.
    pub pressure: f64,
    /// Resource inflow `R(t)`.
    pub inflow: f64,
}

impl<R: Resource> SinglePlant<R> {
    #[must_use]
    pub fn new(params: SinglePlantParams, resource: R) -> Self {
        Self { params, resource }
    }

    /// Visitation rate `P` for the given flower counts.
    #[must_use]
    pub fn visitation(&self, flowers: &Flowers) -> f64 {
        self.params
            .attraction
            .visitation(flowers.total(), flowers.b)
    }

    /// Evaluates the dynamics at `time`.
    #[must_use]
    pub fn rates(&self, time: f64, flowers: &Flowers) -> PlantRates {
        let SinglePlantParams {
            m,
            l_0,
            dispersal,
            ..
        } = self.params;
        let Flowers { y, b, n } = *flowers;
        let total = flowers.total();

        let visitation = self.visitation(flowers);
        let pressure = pressure(visitation / total, l_0);
        let transfer = dispersal.transfer(pressure, y / total, b / total);
        let inflow = self.resource.inflow(time);

        PlantRates {
            derivative: FlowerRates {
                y: transfer.y * n - m * y,
                b: transfer.b * n - m * b,
                n: inflow - n * (m + transfer.y + transfer.b),
            },
            visitation,
            pressure,
            inflow,
        }
    }
}

impl<R: Resource> Model for SinglePlant<R> {
    type Input = Sample<Flowers>;
    type Output = PlantRates;
    type Error = Infallible;

    fn call(&self, input: &Sample<Flowers>) -> Result<PlantRates, Infallible> {
        Ok(self.rates(input.time, &input.state))
    }
}

impl Rates for PlantRates {
    type State = Flowers;

    fn derivative(&self) -> FlowerRates {
        self.derivative
    }
}
