//! Volatile in-memory tier

use crate::eviction::{EvictionPolicy, Unbounded};
use parking_lot::Mutex;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Type-erased value held by the memory tier
pub type StoredValue = Arc<dyn Any + Send + Sync>;

struct MemoryState {
    entries: HashMap<String, StoredValue>,
    policy: Box<dyn EvictionPolicy>,
}

/// In-process map from key to value
///
/// Values are stored as-is, without serialization, and handed out as
/// shared `Arc`s. All operations are infallible; absence is a normal result.
/// A typed read of a key whose value has a different type is a miss.
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    /// Unbounded memory tier
    pub fn new() -> Self {
        Self::with_policy(Box::new(Unbounded))
    }

    pub fn with_policy(policy: Box<dyn EvictionPolicy>) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                entries: HashMap::new(),
                policy,
            }),
        }
    }

    /// Get the stored value for `key`, whatever its type
    pub fn get(&self, key: &str) -> Option<StoredValue> {
        let mut state = self.state.lock();
        let value = state.entries.get(key).cloned()?;
        state.policy.on_access(key);
        Some(value)
    }

    /// Get the value for `key` if it holds a `T`
    pub fn get_as<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let value = self.get(key)?;
        match value.downcast::<T>() {
            Ok(typed) => Some(typed),
            Err(_) => {
                trace!(key, expected = std::any::type_name::<T>(), "memory entry has a different type");
                None
            }
        }
    }

    /// Insert or overwrite `key`, evicting other entries if the policy asks to
    pub fn set(&self, key: &str, value: StoredValue) {
        let mut state = self.state.lock();
        state.entries.insert(key.to_string(), value);
        state.policy.on_insert(key);

        while let Some(victim) = state.policy.next_eviction() {
            state.entries.remove(&victim);
            state.policy.on_remove(&victim);
            debug!(key = %victim, "evicted from memory tier");
        }
    }

    pub fn exists(&self, key: &str) -> bool {
        self.state.lock().entries.contains_key(key)
    }

    /// Remove `key`; returns whether it was present
    pub fn remove(&self, key: &str) -> bool {
        let mut state = self.state.lock();
        let removed = state.entries.remove(key).is_some();
        if removed {
            state.policy.on_remove(key);
        }
        removed
    }

    pub fn remove_all(&self) {
        let mut state = self.state.lock();
        state.entries.clear();
        state.policy.clear();
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("entries", &self.len())
            .finish()
    }
}
