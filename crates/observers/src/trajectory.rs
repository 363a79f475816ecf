use pollen_core::Observer;

use crate::traits::{HasState, HasTime};

/// Records the time and a copy of the state at every sample a solver emits.
///
/// Times and states are kept in two parallel, append-only sequences in the
/// order they were observed. There is no deduplication or downsampling, so a
/// fixed-step run with `n` steps yields `n + 1` samples (the initial state
/// plus one per completed step).
///
/// A `Trajectory` never stops a solver. Pass `&mut trajectory` as the observer
/// to keep ownership, or pass it by value and get it back from the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<S> {
    times: Vec<f64>,
    states: Vec<S>,
}

impl<S> Default for Trajectory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Trajectory<S> {
    /// Creates an empty trajectory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            times: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Creates an empty trajectory with room for `samples` samples.
    #[must_use]
    pub fn with_capacity(samples: usize) -> Self {
        Self {
            times: Vec::with_capacity(samples),
            states: Vec::with_capacity(samples),
        }
    }

    /// Appends a sample.
    pub fn push(&mut self, time: f64, state: S) {
        self.times.push(time);
        self.states.push(state);
    }

    /// Returns the number of recorded samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the recorded sample times.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the recorded states.
    #[must_use]
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Returns the last recorded sample.
    #[must_use]
    pub fn last(&self) -> Option<(f64, &S)> {
        self.times.last().copied().zip(self.states.last())
    }

    /// Iterates over `(time, state)` pairs in recorded order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &S)> {
        self.times.iter().copied().zip(self.states.iter())
    }

    /// Consumes the trajectory, returning the times and states.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<S>) {
        (self.times, self.states)
    }
}

impl<S, E, A> Observer<E, A> for Trajectory<S>
where
    S: Clone,
    E: HasTime + HasState<State = S>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.push(event.time(), event.state().clone());
        None
    }
}

/// Allows `&mut Trajectory<S>` to be passed to solvers that take an observer
/// by value, so the recording is still available after the solve completes.
impl<S, E, A> Observer<E, A> for &mut Trajectory<S>
where
    S: Clone,
    E: HasTime + HasState<State = S>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
