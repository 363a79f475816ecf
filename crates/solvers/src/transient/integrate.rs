use pollen_core::{Model, Observer, OdeProblem, Snapshot};
use tracing::{debug, trace};

use super::{Action, Error, Event, Horizon, Solution, Status, Step};

/// Drives a fixed-step scheme across a horizon.
///
/// `advance` computes the state at the end of one step from the snapshot and
/// state at its start, the start time, and the [`Step`] being taken. Everything else
/// (time keeping, rebuilding model input, evaluating the model at each new
/// sample, and reporting to the observer) is shared by all schemes.
pub(crate) fn integrate<M, P, Obs, F>(
    model: &M,
    problem: &P,
    initial: M::Input,
    horizon: &Horizon,
    mut observer: Obs,
    mut advance: F,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::State: Clone,
    Obs: Observer<Event<P::State, M::Input, M::Output>, Action>,
    F: FnMut(&Snapshot<M::Input, M::Output>, &P::State, f64, &Step) -> Result<P::State, Error>,
{
    debug!(
        steps = horizon.len(),
        dt = horizon.dt(),
        max_t = horizon.max_t(),
        "starting fixed-step integration"
    );

    let initial_output = model.call(&initial).map_err(Error::model(0))?;
    let mut current = Snapshot::new(initial, initial_output);
    let mut state = problem.state(&current.input).map_err(Error::problem(0))?;
    let mut time = 0.0;

    let event = Event {
        step: 0,
        time,
        state: state.clone(),
        snapshot: current.clone(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        debug!(step = 0, status = ?Status::StoppedByObserver, "observer stopped integration");
        return Ok(Solution {
            status: Status::StoppedByObserver,
            steps: 0,
            time,
            last: current,
        });
    }

    for step in horizon.steps() {
        let next_state = advance(&current, &state, time, &step)?;

        let next_input = problem
            .build_input(&current.input, &next_state, step.time)
            .map_err(Error::problem(step.index))?;
        let next_output = model.call(&next_input).map_err(Error::model(step.index))?;

        current = Snapshot::new(next_input, next_output);
        state = next_state;
        time = step.time;
        trace!(step = step.index, time, "completed step");

        let event = Event {
            step: step.index,
            time,
            state: state.clone(),
            snapshot: current.clone(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(
                step = step.index,
                time,
                status = ?Status::StoppedByObserver,
                "observer stopped integration"
            );
            return Ok(Solution {
                status: Status::StoppedByObserver,
                steps: step.index,
                time,
                last: current,
            });
        }
    }

    debug!(
        steps = horizon.len(),
        time,
        status = ?Status::Complete,
        "integration complete"
    );

    Ok(Solution {
        status: Status::Complete,
        steps: horizon.len(),
        time,
        last: current,
    })
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use tracing_subscriber::fmt::MakeWriter;

    use crate::transient::{
        Action, Event, Horizon, euler,
        test_utils::{Inflow, Level, Tank, TankProblem},
    };

    /// Collects formatted log lines in memory.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Captured {
            self.clone()
        }
    }

    #[test]
    fn finish_is_logged_with_status() {
        let logs = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        let model = Inflow::new(|_: &Tank| 1.0);
        let horizon = Horizon::new(0.5, 1.0).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            euler::solve_unobserved(&model, &TankProblem, Tank::at_start(0.0), &horizon).unwrap();
        });

        let text = logs.text();
        assert!(text.contains("starting fixed-step integration"), "{text}");
        assert!(text.contains("integration complete"), "{text}");
        assert!(text.contains("status=Complete"), "{text}");
    }

    #[test]
    fn early_stop_is_logged_with_status() {
        let logs = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        let model = Inflow::new(|_: &Tank| 1.0);
        let horizon = Horizon::new(0.5, 1.0).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            euler::solve(
                &model,
                &TankProblem,
                Tank::at_start(0.0),
                &horizon,
                |_: &Event<Level, Tank, f64>| Some(Action::StopEarly),
            )
            .unwrap();
        });

        assert!(logs.text().contains("status=StoppedByObserver"));
    }
}
