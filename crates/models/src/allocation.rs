//! Sharing a finite pollinator pool across the plants of a landscape.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Proportions;

/// Competition for pollinators among plants and with the outside world.
///
/// Plant `i` attracts with raw weight `w_i = (1 - B_i)^u`, so plants with
/// fewer visited flowers draw more pollinators. Sources outside the landscape
/// compete with a fixed weight `x`. Each plant's share is
///
/// ```text
/// P_i = w_i / (x + Σ_j w_j)
/// ```
///
/// For `x > 0` the shares sum to strictly less than one, and the remainder
/// goes unallocated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Competition {
    /// Preference exponent `u` for less-visited plants.
    pub u: f64,
    /// External competition weight `X`.
    #[cfg_attr(feature = "serde", serde(rename = "X"))]
    pub x: f64,
}

impl Competition {
    #[must_use]
    pub fn new(u: f64, x: f64) -> Self {
        Self { u, x }
    }

    /// Computes every plant's share from the current proportions.
    #[must_use]
    pub fn allocate(&self, state: &Proportions) -> Allocation {
        let mut weights: Vec<f64> = state
            .visited()
            .iter()
            .map(|b| (1.0 - b).powf(self.u))
            .collect();

        let total = self.x + weights.iter().sum::<f64>();
        for w in &mut weights {
            *w /= total;
        }

        Allocation(weights)
    }
}

/// Per-plant shares of the pollinator pool.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation(Vec<f64>);

impl Allocation {
    /// Share of plant `i`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<f64> {
        self.0.get(i).copied()
    }

    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Share left to sources outside the landscape.
    #[must_use]
    pub fn unallocated(&self) -> f64 {
        1.0 - self.0.iter().sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn shares_match_formula() {
        let state = Proportions::from_columns(&[0.5, 0.5], &[0.0, 0.5]).unwrap();
        let allocation = Competition::new(1.0, 1.0).allocate(&state);

        // w = [1.0, 0.5], total = 1 + 1.5 = 2.5
        assert_relative_eq!(allocation.get(0).unwrap(), 0.4);
        assert_relative_eq!(allocation.get(1).unwrap(), 0.2);
        assert_relative_eq!(allocation.unallocated(), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn shares_are_positive_and_sum_below_one() {
        let state =
            Proportions::from_columns(&[0.1, 0.3, 0.0, 0.6], &[0.9, 0.2, 0.0, 0.35]).unwrap();

        for (u, x) in [(0.5, 0.01), (1.0, 1.0), (3.0, 10.0)] {
            let allocation = Competition::new(u, x).allocate(&state);

            assert_eq!(allocation.len(), 4);
            assert!(allocation.weights().iter().all(|&p| p > 0.0));
            assert!(allocation.weights().iter().sum::<f64>() < 1.0);
            assert!(allocation.unallocated() > 0.0);
        }
    }

    #[test]
    fn less_visited_plants_get_more() {
        let state = Proportions::from_columns(&[0.3, 0.3], &[0.1, 0.6]).unwrap();
        let allocation = Competition::new(2.0, 1.0).allocate(&state);

        assert!(allocation.get(0).unwrap() > allocation.get(1).unwrap());
    }

    #[test]
    fn identical_plants_get_identical_shares() {
        let state = Proportions::from_columns(&[0.5, 0.5, 0.5], &[0.1, 0.1, 0.1]).unwrap();
        let allocation = Competition::new(1.0, 1.0).allocate(&state);

        assert_eq!(allocation.get(0), allocation.get(1));
        assert_eq!(allocation.get(1), allocation.get(2));
    }

    #[test]
    fn empty_landscape_allocates_nothing() {
        let state = Proportions::from_columns(&[], &[]).unwrap();
        let allocation = Competition::new(1.0, 1.0).allocate(&state);

        assert!(allocation.is_empty());
        assert_eq!(allocation.get(0), None);
        assert_relative_eq!(allocation.unallocated(), 1.0);
    }
}
