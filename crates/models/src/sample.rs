/// Model input for every flower-state model: a state at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<S> {
    pub time: f64,
    pub state: S,
}

impl<S> Sample<S> {
    /// Creates a sample of `state` at `time`.
    pub fn new(time: f64, state: S) -> Self {
        Self { time, state }
    }
}
