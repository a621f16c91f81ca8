//! Run configuration.

use crate::core::GameError;
use serde::{Deserialize, Serialize};

/// Options controlling a single run.
///
/// The default configuration matches the plain run loops: no step limit and
/// no history. Runs over cyclic graphs never end unless the caller sets
/// `max_steps` or the graph eventually stops resolving.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Maximum number of actions a run may execute
    pub max_steps: Option<usize>,

    /// Record every executed action into a [`RunHistory`](crate::core::RunHistory)
    pub record_history: bool,
}

impl RunConfig {
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::new()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```rust
    /// use gamestate::engine::RunConfig;
    ///
    /// let config = RunConfig::from_json(r#"{ "max_steps": 100 }"#).unwrap();
    /// assert_eq!(config.max_steps, Some(100));
    /// assert!(!config.record_history);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Builder for [`RunConfig`]
pub struct RunConfigBuilder {
    max_steps: Option<usize>,
    record_history: bool,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self {
            max_steps: None,
            record_history: false,
        }
    }

    /// Fail the run once more than `n` actions would execute
    pub fn max_steps(mut self, n: usize) -> Self {
        self.max_steps = Some(n);
        self
    }

    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    pub fn build(self) -> RunConfig {
        RunConfig {
            max_steps: self.max_steps,
            record_history: self.record_history,
        }
    }
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
