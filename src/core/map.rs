//! The state graph: owns states, allocates identities, hosts the store.

use super::error::GameError;
use super::state::{GameState, MapId, StateId, StateRef};
use super::store::ValueStore;
use super::value::Value;
use tracing::trace;

/// A graph of states together with the store their actions share.
///
/// Each map is an independent context: identities start at 0 per map, and
/// values written by one map's actions are invisible to another map.
///
/// # Example
///
/// ```rust
/// use gamestate::core::{GameMap, Value, ValueStore};
///
/// let mut map = GameMap::new();
/// let start = map.new_state(|_: &mut ValueStore| Value::Int(1));
/// let end = map.new_state(|_: &mut ValueStore| Value::Int(2));
/// map.transition_on(start, end, 1).unwrap();
///
/// assert_eq!(map.run_game(start, end).unwrap(), Value::Int(2));
/// ```
#[derive(Debug)]
pub struct GameMap {
    id: MapId,
    next_state_id: u32,
    states: Vec<GameState>,
    values: ValueStore,
}

impl GameMap {
    pub fn new() -> Self {
        Self {
            id: MapId::new(),
            next_state_id: 0,
            states: Vec::new(),
            values: ValueStore::new(),
        }
    }

    pub fn id(&self) -> MapId {
        self.id
    }

    /// Create a state whose `action` runs every time the state is visited.
    pub fn new_state<F>(&mut self, action: F) -> StateRef
    where
        F: FnMut(&mut ValueStore) -> Value + Send + 'static,
    {
        let id = StateId(self.next_state_id);
        self.states.push(GameState::new(id, Box::new(action)));
        self.next_state_id += 1;

        trace!(map = %self.id, state = %id, "created state");
        StateRef { map: self.id, id }
    }

    /// Set the fallback transition of `from`, replacing any previous one.
    pub fn transition(&mut self, from: StateRef, to: StateRef) -> Result<(), GameError> {
        self.check(to)?;
        self.state_mut(from)?.set_default(to.id);

        trace!(from = %from.id, to = %to.id, "set default transition");
        Ok(())
    }

    /// Transition from `from` to `to` when `from`'s action returns `on`.
    ///
    /// Registering the same `on` twice replaces the earlier destination.
    pub fn transition_on(
        &mut self,
        from: StateRef,
        to: StateRef,
        on: impl Into<Value>,
    ) -> Result<(), GameError> {
        self.check(to)?;
        let on = on.into();
        trace!(from = %from.id, to = %to.id, on = %on, "set conditional transition");
        self.state_mut(from)?.set_conditional(to.id, on);
        Ok(())
    }

    pub fn state(&self, state: StateRef) -> Result<&GameState, GameError> {
        self.check(state)?;
        Ok(&self.states[state.id.index()])
    }

    pub(crate) fn state_mut(&mut self, state: StateRef) -> Result<&mut GameState, GameError> {
        self.check(state)?;
        Ok(&mut self.states[state.id.index()])
    }

    /// Run the action of `state` against this map's store.
    pub(crate) fn act(&mut self, state: StateId) -> Value {
        self.states[state.index()].act(&mut self.values)
    }

    pub(crate) fn resolve(&self, state: StateId, output: &Value) -> Option<StateId> {
        self.states[state.index()].next_state(output)
    }

    /// Wrap a state id known to belong to this map.
    pub(crate) fn handle(&self, id: StateId) -> StateRef {
        StateRef { map: self.id, id }
    }

    pub(crate) fn check(&self, state: StateRef) -> Result<(), GameError> {
        if state.map != self.id || state.id.index() >= self.states.len() {
            return Err(GameError::ForeignState { state: state.id });
        }
        Ok(())
    }

    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.set(key, value);
    }

    /// Remove a value. Missing keys are ignored.
    pub fn delete_value(&mut self, key: &str) {
        self.values.delete(key);
    }

    pub fn values(&self) -> &ValueStore {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut ValueStore {
        &mut self.values
    }

    /// Number of states in the map.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new()
    }
}
