//! Flower counts for a single plant.

use std::ops::{Add, Mul};

use pollen_core::StepIntegrable;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Absolute flower counts at one plant, by state.
///
/// - `y`: unvisited flowers
/// - `b`: flowers visited by a pollinator
/// - `n`: non-colonized flowers
///
/// The total `y + b + n` must stay positive; the dynamics divide by it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Flowers {
    #[cfg_attr(feature = "serde", serde(rename = "Y"))]
    pub y: f64,
    #[cfg_attr(feature = "serde", serde(rename = "B"))]
    pub b: f64,
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    pub n: f64,
}

impl Flowers {
    #[must_use]
    pub fn new(y: f64, b: f64, n: f64) -> Self {
        Self { y, b, n }
    }

    /// Total number of flowers.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.y + self.b + self.n
    }
}

/// One flower in each state.
impl Default for Flowers {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

/// Time derivative of [`Flowers`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowerRates {
    pub y: f64,
    pub b: f64,
    pub n: f64,
}

impl FlowerRates {
    /// Net rate of change of the total flower count.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.y + self.b + self.n
    }
}

impl Add for FlowerRates {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            y: self.y + rhs.y,
            b: self.b + rhs.b,
            n: self.n + rhs.n,
        }
    }
}

impl Mul<f64> for FlowerRates {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            y: self.y * rhs,
            b: self.b * rhs,
            n: self.n * rhs,
        }
    }
}

impl StepIntegrable<f64> for Flowers {
    type Derivative = FlowerRates;

    fn step(&self, derivative: FlowerRates, dt: f64) -> Self {
        Self {
            y: self.y + derivative.y * dt,
            b: self.b + derivative.b * dt,
            n: self.n + derivative.n * dt,
        }
    }
}
