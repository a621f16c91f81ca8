//! States, their identities, and transition resolution.

use super::store::ValueStore;
use super::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Numeric identity of a state within its map.
///
/// Identities are assigned from 0 in creation order and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub u32);

impl StateId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of a [`GameMap`](super::GameMap).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapId(Uuid);

impl MapId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Handle to a state, scoped to the map that created it.
///
/// Handles are cheap to copy and are what callers use to wire transitions
/// and start runs. A handle is only valid for the map that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateRef {
    pub(crate) map: MapId,
    pub(crate) id: StateId,
}

impl StateRef {
    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn map(&self) -> MapId {
        self.map
    }
}

/// Computation run each time a state is visited.
///
/// The action receives the owning map's shared store and returns the value
/// used to pick the next state.
pub type Action = Box<dyn FnMut(&mut ValueStore) -> Value + Send>;

/// A single state: an action plus its outgoing transitions.
pub struct GameState {
    id: StateId,
    action: Action,
    transitions: HashMap<Value, StateId>,
    default_transition: Option<StateId>,
}

impl GameState {
    pub(crate) fn new(id: StateId, action: Action) -> Self {
        Self {
            id,
            action,
            transitions: HashMap::new(),
            default_transition: None,
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn default_transition(&self) -> Option<StateId> {
        self.default_transition
    }

    pub fn conditional_transition(&self, on: &Value) -> Option<StateId> {
        self.transitions.get(on).copied()
    }

    /// Number of conditional transitions registered on this state.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    pub(crate) fn set_default(&mut self, to: StateId) {
        self.default_transition = Some(to);
    }

    pub(crate) fn set_conditional(&mut self, to: StateId, on: Value) {
        self.transitions.insert(on, to);
    }

    pub(crate) fn act(&mut self, store: &mut ValueStore) -> Value {
        (self.action)(store)
    }

    /// Resolve the state to visit after this one produced `output`.
    ///
    /// An exact match in the conditional table wins over the default
    /// transition. `None` means the graph has no way forward for `output`.
    pub fn next_state(&self, output: &Value) -> Option<StateId> {
        self.conditional_transition(output).or(self.default_transition)
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("id", &self.id)
            .field("transitions", &self.transitions)
            .field("default_transition", &self.default_transition)
            .finish_non_exhaustive()
    }
}
