//! Per-plant flower proportions for the landscape model.

use std::ops::{Add, Mul};

use ndarray::{Array2, ArrayView1, Axis, array};
use pollen_core::StepIntegrable;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::DimensionError;

const Y: usize = 0;
const B: usize = 1;

/// Flower proportions across a landscape, one `(Y, B)` row per plant.
///
/// Each row holds the unvisited (`Y`) and visited (`B`) share of that plant's
/// flowers. The non-colonized share is implicit, `N = 1 - Y - B`, and is never
/// stored or integrated. Keeping `Y + B <= 1` is the caller's responsibility.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "ProportionColumns", into = "ProportionColumns")
)]
pub struct Proportions(Array2<f64>);

impl Proportions {
    /// Builds proportions from matching `Y` and `B` columns.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Mismatch`] if the columns differ in length.
    pub fn from_columns(y: &[f64], b: &[f64]) -> Result<Self, DimensionError> {
        DimensionError::check("B0", y.len(), b.len())?;

        let mut data = Array2::zeros((y.len(), 2));
        for (mut row, (&unvisited, &visited)) in data.rows_mut().into_iter().zip(y.iter().zip(b)) {
            row[Y] = unvisited;
            row[B] = visited;
        }
        Ok(Self(data))
    }

    /// Builds proportions for a single plant.
    #[must_use]
    pub fn single(y: f64, b: f64) -> Self {
        Self(array![[y, b]])
    }

    /// Number of plants.
    #[must_use]
    pub fn n_plants(&self) -> usize {
        self.0.nrows()
    }

    /// Unvisited proportion at plant `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn y(&self, i: usize) -> f64 {
        self.0[[i, Y]]
    }

    /// Visited proportion at plant `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn b(&self, i: usize) -> f64 {
        self.0[[i, B]]
    }

    /// Implicit non-colonized proportion at plant `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn n(&self, i: usize) -> f64 {
        1.0 - self.y(i) - self.b(i)
    }

    /// Unvisited proportions for every plant.
    #[must_use]
    pub fn unvisited(&self) -> ArrayView1<'_, f64> {
        self.0.column(Y)
    }

    /// Visited proportions for every plant.
    #[must_use]
    pub fn visited(&self) -> ArrayView1<'_, f64> {
        self.0.column(B)
    }
}

/// Time derivative of [`Proportions`], with the same `(n_plants × 2)` shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ProportionRates(Array2<f64>);

impl ProportionRates {
    pub(crate) fn zeros(n_plants: usize) -> Self {
        Self(Array2::zeros((n_plants, 2)))
    }

    pub(crate) fn set(&mut self, i: usize, y: f64, b: f64) {
        let mut row = self.0.index_axis_mut(Axis(0), i);
        row[Y] = y;
        row[B] = b;
    }

    /// Rate of change of the unvisited proportion at plant `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn y(&self, i: usize) -> f64 {
        self.0[[i, Y]]
    }

    /// Rate of change of the visited proportion at plant `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn b(&self, i: usize) -> f64 {
        self.0[[i, B]]
    }
}

impl Add for ProportionRates {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<f64> for ProportionRates {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl StepIntegrable<f64> for Proportions {
    type Derivative = ProportionRates;

    fn step(&self, derivative: ProportionRates, dt: f64) -> Self {
        Self(&self.0 + &(derivative.0 * dt))
    }
}

/// Column form of [`Proportions`] used for (de)serialization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProportionColumns {
    #[cfg_attr(feature = "serde", serde(rename = "Y"))]
    pub y: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "B"))]
    pub b: Vec<f64>,
}

impl TryFrom<ProportionColumns> for Proportions {
    type Error = DimensionError;

    fn try_from(columns: ProportionColumns) -> Result<Self, Self::Error> {
        Self::from_columns(&columns.y, &columns.b)
    }
}

impl From<Proportions> for ProportionColumns {
    fn from(proportions: Proportions) -> Self {
        Self {
            y: proportions.unvisited().to_vec(),
            b: proportions.visited().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn builds_rows_from_columns() {
        let p = Proportions::from_columns(&[0.5, 0.2], &[0.1, 0.3]).unwrap();

        assert_eq!(p.n_plants(), 2);
        assert_relative_eq!(p.y(1), 0.2);
        assert_relative_eq!(p.b(0), 0.1);
        assert_relative_eq!(p.n(0), 0.4);
        assert_relative_eq!(p.n(1), 0.5);
    }

    #[test]
    fn rejects_ragged_columns() {
        let err = Proportions::from_columns(&[0.5, 0.2], &[0.1]).unwrap_err();
        assert_eq!(
            err,
            DimensionError::Mismatch {
                field: "B0",
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn steps_whole_matrix() {
        let p = Proportions::from_columns(&[0.5, 0.2], &[0.1, 0.3]).unwrap();
        let mut rates = ProportionRates::zeros(2);
        rates.set(0, 0.1, -0.1);
        rates.set(1, 0.0, 0.2);

        let next = p.step(rates, 0.5);

        assert_relative_eq!(next.y(0), 0.55);
        assert_relative_eq!(next.b(0), 0.05);
        assert_relative_eq!(next.y(1), 0.2);
        assert_relative_eq!(next.b(1), 0.4);
    }

    #[test]
    fn rates_combine_linearly() {
        let mut a = ProportionRates::zeros(1);
        a.set(0, 1.0, 2.0);
        let mut b = ProportionRates::zeros(1);
        b.set(0, 3.0, -2.0);

        let blended = (a + b) * 0.5;

        assert_relative_eq!(blended.y(0), 2.0);
        assert_relative_eq!(blended.b(0), 0.0);
    }

    #[test]
    fn column_form_round_trips() {
        let p = Proportions::single(0.25, 0.5);
        let columns = ProportionColumns::from(p.clone());

        assert_eq!(columns.y, vec![0.25]);
        assert_eq!(Proportions::try_from(columns).unwrap(), p);
    }
}
