use pollen_core::Snapshot;

/// Event emitted by the fixed-step solvers for each recorded sample.
///
/// Step 0 is the initial state at `t = 0`, before any integration.
/// Steps 1..N are emitted after each completed integration step.
#[derive(Debug, Clone)]
pub struct Event<S, I, O> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// Simulation time of this sample.
    pub time: f64,

    /// The integrated state at this sample.
    pub state: S,

    /// Snapshot of the model input and output at this sample.
    pub snapshot: Snapshot<I, O>,
}
