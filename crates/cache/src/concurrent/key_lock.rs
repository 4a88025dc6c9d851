//! Per-key mutual exclusion

use dashmap::DashMap;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// One mutex per key currently in use
///
/// Slots are created on demand and reclaimed when the last holder or waiter
/// for the key is done, so the map stays proportional to the number of keys
/// being worked on rather than to every key ever seen.
#[derive(Default)]
pub struct KeyLock {
    slots: DashMap<String, Arc<Mutex<()>>>,
}

impl KeyLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` while holding the lock for `key`
    ///
    /// Calls for different keys never block each other. Calls must not nest
    /// for the same key on one thread.
    pub fn with_key<R>(&self, key: &str, f: impl FnOnce() -> R) -> R {
        let slot = self
            .slots
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        // Declared before the guard so it runs after the guard is released
        let _reclaim = Reclaim {
            slots: &self.slots,
            key,
        };
        let _guard = slot.lock();
        f()
    }

    /// Number of keys with a live slot
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for KeyLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyLock")
            .field("active_keys", &self.slots.len())
            .finish()
    }
}

struct Reclaim<'a> {
    slots: &'a DashMap<String, Arc<Mutex<()>>>,
    key: &'a str,
}

impl Drop for Reclaim<'_> {
    fn drop(&mut self) {
        // Two references left means the map's and ours: nobody else is
        // holding or waiting on this slot.
        self.slots
            .remove_if(self.key, |_, slot| Arc::strong_count(slot) <= 2);
    }
}
