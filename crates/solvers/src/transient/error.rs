use std::error::Error as StdError;

/// Errors that can occur during fixed-step integration.
///
/// Each variant records the step being computed when the failure happened.
/// Step 0 is the evaluation of the initial input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model failed at step {step}: {source}")]
    Model {
        step: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("problem failed at step {step}: {source}")]
    Problem {
        step: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    /// Returns the step that failed.
    #[must_use]
    pub fn step(&self) -> usize {
        match self {
            Self::Model { step, .. } | Self::Problem { step, .. } => *step,
        }
    }

    /// Wraps a model error raised while computing `step`.
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(step: usize) -> impl FnOnce(E) -> Self {
        move |err| Self::Model {
            step,
            source: Box::new(err),
        }
    }

    /// Wraps a problem error raised while computing `step`.
    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(
        step: usize,
    ) -> impl FnOnce(E) -> Self {
        move |err| Self::Problem {
            step,
            source: Box::new(err),
        }
    }
}
