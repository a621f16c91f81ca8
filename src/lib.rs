//! Gamestate: a minimal execution engine for scripted state machines
//!
//! A game is a directed graph of states. Each state carries an action whose
//! return value picks the next state: first by exact match against the
//! state's conditional transitions, then by its default transition. Actions
//! communicate through a key/value store owned by the map.
//!
//! # Core Concepts
//!
//! - **GameMap**: Owns states, allocates identities, hosts the shared store
//! - **Value**: Equality-comparable output of actions and transition key
//! - **Runner**: Drives a map to an end state, or until it stops resolving
//!
//! # Example
//!
//! ```rust
//! use gamestate::{GameMap, Value, ValueStore};
//!
//! let mut map = GameMap::new();
//!
//! let start = map.new_state(|_: &mut ValueStore| Value::Unit);
//! let middle = map.new_state(|store: &mut ValueStore| {
//!     store.get("ending").cloned().unwrap_or_default()
//! });
//! let good = map.new_state(|_: &mut ValueStore| Value::from("good"));
//! let bad = map.new_state(|_: &mut ValueStore| Value::from("bad"));
//!
//! map.transition(start, middle).unwrap();
//! map.transition_on(middle, good, 1).unwrap();
//! map.transition_on(middle, bad, 2).unwrap();
//!
//! map.set_value("ending", 2);
//! assert_eq!(map.run_game_to_end(start).unwrap(), Value::from("bad"));
//! ```

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{GameError, GameMap, StateId, StateRef, Value, ValueStore};
pub use crate::engine::{RunConfig, RunOutcome, Runner};
