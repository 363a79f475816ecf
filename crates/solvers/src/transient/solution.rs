use pollen_core::Snapshot;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the end of the horizon.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a fixed-step integration.
///
/// Only the final sample is kept. Observers are responsible for recording
/// anything they need along the way.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// How the solver terminated.
    pub status: Status,

    /// Number of integration steps completed.
    pub steps: usize,

    /// Simulation time of the final sample.
    pub time: f64,

    /// Snapshot of the model at the final sample.
    pub last: Snapshot<I, O>,
}
