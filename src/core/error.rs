//! Error types for building and running game maps.

use super::state::StateId;
use super::value::Value;
use thiserror::Error;

/// Errors that can occur while wiring or running a map.
#[derive(Debug, Error)]
pub enum GameError {
    /// The state's action produced a value with no matching transition
    /// and the state has no default transition.
    #[error("No transition from state {from} for output {output}")]
    NoTransitionFound { from: StateId, output: Value },

    /// A state handle issued by a different map was used.
    #[error("State {state} does not belong to this map")]
    ForeignState { state: StateId },

    /// The run executed more actions than the configured limit allows.
    #[error("Step limit ({limit}) exceeded")]
    StepLimitExceeded { limit: usize },

    /// A run configuration document could not be parsed.
    #[error("Invalid run configuration: {0}")]
    Config(#[from] serde_json::Error),
}
