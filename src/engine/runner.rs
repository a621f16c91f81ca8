//! Run loops that drive a map from a start state.

use crate::core::{GameError, GameMap, RunHistory, StateId, StateRef, StepRecord, Value};
use crate::engine::config::RunConfig;
use chrono::Utc;
use tracing::{debug, info_span, warn};

/// Result of executing a single step
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// The action ran and a next state was resolved
    Advanced { output: Value, next: StateRef },

    /// The action ran but no transition matches its output
    Stuck { output: Value },
}

impl Step {
    pub fn output(&self) -> &Value {
        match self {
            Self::Advanced { output, .. } | Self::Stuck { output } => output,
        }
    }
}

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOutcome {
    /// Output of the last executed action
    pub result: Value,

    /// Number of actions executed, including the last one
    pub steps: usize,

    /// Present when the run was configured to record history
    pub history: Option<RunHistory>,
}

/// Drives maps through their transitions.
///
/// A runner holds only configuration, so the same runner can be reused across
/// maps and runs.
///
/// # Example
///
/// ```rust
/// use gamestate::core::{GameMap, Value, ValueStore};
/// use gamestate::engine::{RunConfig, Runner};
///
/// let mut map = GameMap::new();
/// let a = map.new_state(|_: &mut ValueStore| Value::Int(1));
/// let b = map.new_state(|_: &mut ValueStore| Value::Int(2));
/// map.transition(a, b).unwrap();
///
/// let runner = Runner::new(RunConfig::builder().record_history(true).build());
/// let outcome = runner.run_to_completion(&mut map, a).unwrap();
///
/// assert_eq!(outcome.result, Value::Int(2));
/// assert_eq!(outcome.steps, 2);
/// assert_eq!(outcome.history.unwrap().path(), vec![a.id(), b.id()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Execute `current`'s action once and resolve where to go next.
    pub fn step(&self, map: &mut GameMap, current: StateRef) -> Result<Step, GameError> {
        map.check(current)?;
        let output = map.act(current.id());
        Ok(match map.resolve(current.id(), &output) {
            Some(next) => Step::Advanced {
                output,
                next: map.handle(next),
            },
            None => Step::Stuck { output },
        })
    }

    /// Run from `start` until `end` is reached, then run `end`'s action once
    /// and return its output.
    ///
    /// Transitions configured on `end` are never consulted. Fails with
    /// [`GameError::NoTransitionFound`] if some state before `end` has no
    /// transition for its output.
    pub fn run_to_target(
        &self,
        map: &mut GameMap,
        start: StateRef,
        end: StateRef,
    ) -> Result<RunOutcome, GameError> {
        map.check(start)?;
        map.check(end)?;

        let span = info_span!("run", mode = "to_target", start = %start.id(), end = %end.id());
        let _guard = span.enter();

        let mut run = Run::new(&self.config);
        let mut current = start.id();

        while current != end.id() {
            let output = run.act(map, current)?;
            match map.resolve(current, &output) {
                Some(next) => {
                    run.record(current, output, Some(next));
                    current = next;
                }
                None => {
                    warn!(state = %current, output = %output, "no transition found");
                    return Err(GameError::NoTransitionFound {
                        from: current,
                        output,
                    });
                }
            }
        }

        let output = run.act(map, current)?;
        run.record(current, output.clone(), None);
        debug!(state = %current, steps = run.steps, "reached end state");
        Ok(run.finish(output))
    }

    /// Run from `start` until a state's output has no transition, returning
    /// that last output.
    ///
    /// An unresolvable output is the normal way this run ends, so
    /// [`GameError::NoTransitionFound`] is never returned.
    pub fn run_to_completion(
        &self,
        map: &mut GameMap,
        start: StateRef,
    ) -> Result<RunOutcome, GameError> {
        map.check(start)?;

        let span = info_span!("run", mode = "to_completion", start = %start.id());
        let _guard = span.enter();

        let mut run = Run::new(&self.config);
        let mut current = start.id();

        loop {
            let output = run.act(map, current)?;
            match map.resolve(current, &output) {
                Some(next) => {
                    run.record(current, output, Some(next));
                    current = next;
                }
                None => {
                    run.record(current, output.clone(), None);
                    debug!(state = %current, steps = run.steps, "no further transition");
                    return Ok(run.finish(output));
                }
            }
        }
    }
}

/// Bookkeeping for one run in progress.
struct Run<'a> {
    config: &'a RunConfig,
    steps: usize,
    history: Option<RunHistory>,
}

impl<'a> Run<'a> {
    fn new(config: &'a RunConfig) -> Self {
        Self {
            config,
            steps: 0,
            history: config.record_history.then(RunHistory::new),
        }
    }

    fn act(&mut self, map: &mut GameMap, state: StateId) -> Result<Value, GameError> {
        if let Some(limit) = self.config.max_steps {
            if self.steps >= limit {
                warn!(limit, "step limit exceeded");
                return Err(GameError::StepLimitExceeded { limit });
            }
        }

        let output = map.act(state);
        self.steps += 1;
        Ok(output)
    }

    fn record(&mut self, from: StateId, output: Value, to: Option<StateId>) {
        match to {
            Some(next) => debug!(state = %from, output = %output, next = %next, "step"),
            None => debug!(state = %from, output = %output, "final step"),
        }

        if let Some(history) = self.history.as_mut() {
            history.push(StepRecord {
                from,
                output,
                to,
                timestamp: Utc::now(),
            });
        }
    }

    fn finish(self, result: Value) -> RunOutcome {
        RunOutcome {
            result,
            steps: self.steps,
            history: self.history,
        }
    }
}

impl GameMap {
    /// Run from `start` to `end` with the default configuration.
    ///
    /// See [`Runner::run_to_target`].
    pub fn run_game(&mut self, start: StateRef, end: StateRef) -> Result<Value, GameError> {
        Runner::default()
            .run_to_target(self, start, end)
            .map(|outcome| outcome.result)
    }

    /// Run from `start` until no transition resolves, with the default
    /// configuration.
    ///
    /// See [`Runner::run_to_completion`]. With a handle issued by this map the
    /// result is always `Ok`.
    pub fn run_game_to_end(&mut self, start: StateRef) -> Result<Value, GameError> {
        Runner::default()
            .run_to_completion(self, start)
            .map(|outcome| outcome.result)
    }
}
