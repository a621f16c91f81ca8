//! Step-by-step history of a run.
//!
//! A run can optionally record every action it executes. The history is a
//! log of what happened during one run; it does not describe the graph.

use super::state::StateId;
use super::value::Value;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single executed action.
///
/// `to` is the state the run moved to afterwards, or `None` when the run
/// ended on this action.
///
/// # Example
///
/// ```rust
/// use gamestate::core::{StateId, StepRecord, Value};
/// use chrono::Utc;
///
/// let record = StepRecord {
///     from: StateId(0),
///     output: Value::Int(1),
///     to: Some(StateId(2)),
///     timestamp: Utc::now(),
/// };
/// assert!(!record.is_terminal());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// The state whose action ran
    pub from: StateId,
    /// What the action returned
    pub output: Value,
    /// The state resolved next, if any
    pub to: Option<StateId>,
    /// When the action finished
    pub timestamp: DateTime<Utc>,
}

impl StepRecord {
    pub fn is_terminal(&self) -> bool {
        self.to.is_none()
    }
}

/// Ordered history of the actions executed by a run.
///
/// # Example
///
/// ```rust
/// use gamestate::core::{RunHistory, StateId, StepRecord, Value};
/// use chrono::Utc;
///
/// let history = RunHistory::new()
///     .record(StepRecord {
///         from: StateId(0),
///         output: Value::Int(1),
///         to: Some(StateId(2)),
///         timestamp: Utc::now(),
///     })
///     .record(StepRecord {
///         from: StateId(2),
///         output: Value::Int(3),
///         to: None,
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.path(), vec![StateId(0), StateId(2)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunHistory {
    records: Vec<StepRecord>,
}

impl RunHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a step, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, step: StepRecord) -> Self {
        let mut records = self.records.clone();
        records.push(step);
        Self { records }
    }

    pub(crate) fn push(&mut self, step: StepRecord) {
        self.records.push(step);
    }

    /// States whose actions ran, in execution order.
    pub fn path(&self) -> Vec<StateId> {
        self.records.iter().map(|r| r.from).collect()
    }

    /// Outputs of every executed action, in execution order.
    pub fn outputs(&self) -> Vec<&Value> {
        self.records.iter().map(|r| &r.output).collect()
    }

    /// Time between the first and last recorded step.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
