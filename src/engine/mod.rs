//! Run loops over a [`GameMap`](crate::core::GameMap).
//!
//! Two entry points share one stepping rule: run the current state's action,
//! then resolve the next state from its output.
//!
//! - [`Runner::run_to_target`] stops at an explicit end state and treats an
//!   unresolvable output as an error.
//! - [`Runner::run_to_completion`] has no end state and stops, successfully,
//!   at the first unresolvable output.
//!
//! Neither loop bounds the number of steps unless [`RunConfig::max_steps`]
//! is set.

mod config;
mod runner;

pub use config::{RunConfig, RunConfigBuilder};
pub use runner::{RunOutcome, Runner, Step};
