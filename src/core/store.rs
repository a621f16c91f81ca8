//! Shared key/value store handed to every action of a map.

use super::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// String-keyed bag of [`Value`]s used for communication between states.
///
/// Every action of a [`GameMap`](super::GameMap) receives a mutable reference
/// to the map's store, so states can exchange data without being wired
/// together by transitions.
///
/// # Example
///
/// ```rust
/// use gamestate::core::{Value, ValueStore};
///
/// let mut store = ValueStore::new();
/// store.set("total", 0);
/// assert_eq!(store.get("total"), Some(&Value::Int(0)));
///
/// store.delete("total");
/// assert!(store.get("total").is_none());
///
/// // Deleting a missing key is a no-op.
/// store.delete("total");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueStore {
    values: HashMap<String, Value>,
}

impl ValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value. `None` means the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Insert or overwrite a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Remove a value, returning it if it was present.
    pub fn delete(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
