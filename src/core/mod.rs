//! Core state graph types.
//!
//! This module contains the data model of a game:
//! - Values produced by actions and used as transition keys
//! - States with their conditional and default transitions
//! - The map that owns states and the store their actions share
//! - Run history records
//!
//! Nothing in this module drives a run; see [`crate::engine`].

mod error;
mod history;
mod map;
mod state;
mod store;
mod value;

pub use error::GameError;
pub use history::{RunHistory, StepRecord};
pub use map::GameMap;
pub use state::{Action, GameState, MapId, StateId, StateRef};
pub use store::ValueStore;
pub use value::Value;
