use thiserror::Error;

/// Relative tolerance used to decide whether `dt` evenly divides `max_t`.
const FENCEPOST_TOL: f64 = 1e-9;

/// Fixed-step integration horizon: a uniform step size `dt` and a stop time
/// `max_t`, always starting from `t = 0`.
///
/// Step `k` ends at `k * dt`. Times are never accumulated, so the recorded
/// samples are evenly spaced. When `dt` does not evenly divide `max_t`, the
/// horizon ends with one shorter step that lands exactly on `max_t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizon {
    dt: f64,
    max_t: f64,
    full_steps: usize,
    partial: Option<f64>,
}

/// Errors that can occur when validating a horizon.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum HorizonError {
    #[error("dt must be finite and positive (got {0})")]
    StepSize(f64),

    #[error("max_t must be finite and non-negative (got {0})")]
    MaxTime(f64),
}

/// A single step of a [`Horizon`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Step number, starting at 1.
    pub index: usize,

    /// Time at the end of the step.
    pub time: f64,

    /// Size of the step.
    pub dt: f64,
}

impl Default for Horizon {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, 90.0).unwrap()
    }
}

impl Horizon {
    /// Creates a new horizon with a validated step size and stop time.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is not finite and positive, or if `max_t` is
    /// not finite and non-negative.
    pub fn new(dt: f64, max_t: f64) -> Result<Self, HorizonError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(HorizonError::StepSize(dt));
        }
        if !max_t.is_finite() || max_t < 0.0 {
            return Err(HorizonError::MaxTime(max_t));
        }

        let ratio = max_t / dt;
        let nearest = ratio.round();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (full_steps, partial) = if max_t == 0.0 {
            (0, None)
        } else if nearest >= 1.0 && (ratio - nearest).abs() <= FENCEPOST_TOL * nearest {
            (nearest as usize, None)
        } else {
            let full = ratio.floor();
            (full as usize, Some(max_t - full * dt))
        };

        Ok(Self {
            dt,
            max_t,
            full_steps,
            partial,
        })
    }

    /// Returns the nominal step size.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the stop time.
    #[must_use]
    pub fn max_t(&self) -> f64 {
        self.max_t
    }

    /// Returns the total number of steps, including a final partial step.
    #[must_use]
    pub fn len(&self) -> usize {
        self.full_steps + usize::from(self.partial.is_some())
    }

    /// Returns `true` if the horizon takes no steps (`max_t == 0`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the size of the final partial step, if `dt` does not evenly
    /// divide `max_t`.
    #[must_use]
    pub fn partial_step(&self) -> Option<f64> {
        self.partial
    }

    /// Iterates over the steps in order.
    pub fn steps(self) -> impl Iterator<Item = Step> {
        let Self {
            dt,
            max_t,
            full_steps,
            partial,
        } = self;

        #[allow(clippy::cast_precision_loss)]
        let full = (1..=full_steps).map(move |index| Step {
            index,
            time: index as f64 * dt,
            dt,
        });

        let last = partial.map(|dt| Step {
            index: full_steps + 1,
            time: max_t,
            dt,
        });

        full.chain(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_matches_documented_values() {
        let horizon = Horizon::default();
        assert_relative_eq!(horizon.dt(), 0.1);
        assert_relative_eq!(horizon.max_t(), 90.0);
        assert_eq!(horizon.len(), 900);
        assert!(horizon.partial_step().is_none());
    }

    #[test]
    fn rejects_bad_step_size() {
        assert_eq!(Horizon::new(0.0, 1.0), Err(HorizonError::StepSize(0.0)));
        assert_eq!(Horizon::new(-0.1, 1.0), Err(HorizonError::StepSize(-0.1)));
        assert!(matches!(
            Horizon::new(f64::NAN, 1.0),
            Err(HorizonError::StepSize(_))
        ));
    }

    #[test]
    fn rejects_bad_max_time() {
        assert_eq!(Horizon::new(0.1, -1.0), Err(HorizonError::MaxTime(-1.0)));
        assert_eq!(
            Horizon::new(0.1, f64::INFINITY),
            Err(HorizonError::MaxTime(f64::INFINITY))
        );
    }

    #[test]
    fn even_division_has_no_partial_step() {
        let horizon = Horizon::new(0.1, 1.0).unwrap();
        let steps: Vec<_> = horizon.steps().collect();

        assert_eq!(steps.len(), 10);
        assert!(horizon.partial_step().is_none());
        for (k, step) in steps.iter().enumerate() {
            assert_eq!(step.index, k + 1);
            assert_eq!(step.dt, 0.1);
        }
        assert_relative_eq!(steps[9].time, 1.0);
    }

    #[test]
    fn step_equal_to_horizon_takes_one_step() {
        let horizon = Horizon::new(2.5, 2.5).unwrap();
        let steps: Vec<_> = horizon.steps().collect();

        assert_eq!(
            steps,
            vec![Step {
                index: 1,
                time: 2.5,
                dt: 2.5
            }]
        );
    }

    #[test]
    fn uneven_division_ends_with_partial_step() {
        let horizon = Horizon::new(0.3, 1.0).unwrap();
        let steps: Vec<_> = horizon.steps().collect();

        assert_eq!(horizon.len(), 4);
        assert_relative_eq!(horizon.partial_step().unwrap(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(steps[2].time, 0.9, epsilon = 1e-12);
        assert_eq!(steps[3].time, 1.0);
        assert_relative_eq!(steps[3].dt, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn step_larger_than_horizon_is_a_single_partial_step() {
        let horizon = Horizon::new(2.0, 1.0).unwrap();
        let steps: Vec<_> = horizon.steps().collect();

        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].time, 1.0);
        assert_eq!(steps[0].dt, 1.0);
    }

    #[test]
    fn zero_horizon_is_empty() {
        let horizon = Horizon::new(0.1, 0.0).unwrap();
        assert!(horizon.is_empty());
        assert_eq!(horizon.steps().count(), 0);
    }

    #[test]
    fn tiny_horizon_is_one_partial_step() {
        let horizon = Horizon::new(1.0, 1e-12).unwrap();
        let steps: Vec<_> = horizon.steps().collect();

        assert_eq!(horizon.len(), 1);
        assert_eq!(horizon.partial_step(), Some(1e-12));
        assert_eq!(
            steps,
            vec![Step {
                index: 1,
                time: 1e-12,
                dt: 1e-12
            }]
        );
    }

    #[test]
    fn times_are_strictly_increasing() {
        let horizon = Horizon::new(0.07, 3.0).unwrap();
        let times: Vec<f64> = horizon.steps().map(|s| s.time).collect();

        assert!(times.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*times.last().unwrap(), 3.0);
    }
}
