//! LRU (Least Recently Used) eviction policy implementation

use crate::eviction::traits::EvictionPolicy;
use lru::LruCache;
use std::num::NonZeroUsize;

/// LRU (Least Recently Used) eviction policy bounded by entry count
pub struct LruPolicy {
    /// Access order tracking, most recent at the front
    order: LruCache<String, ()>,
    /// Maximum number of entries allowed
    capacity: NonZeroUsize,
}

impl LruPolicy {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            // Unbounded so the memory tier, not the tracker, decides what goes
            order: LruCache::unbounded(),
            capacity,
        }
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }
}

impl EvictionPolicy for LruPolicy {
    fn on_insert(&mut self, key: &str) {
        // put() also moves an existing key to the front
        self.order.put(key.to_string(), ());
    }

    fn on_access(&mut self, key: &str) {
        self.order.promote(key);
    }

    fn on_remove(&mut self, key: &str) {
        self.order.pop(key);
    }

    fn next_eviction(&mut self) -> Option<String> {
        if self.order.len() <= self.capacity.get() {
            return None;
        }

        self.order.peek_lru().map(|(key, _)| key.clone())
    }

    fn clear(&mut self) {
        self.order.clear();
    }

    fn tracked(&self) -> usize {
        self.order.len()
    }
}

impl std::fmt::Debug for LruPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LruPolicy")
            .field("capacity", &self.capacity)
            .field("tracked", &self.order.len())
            .finish()
    }
}
