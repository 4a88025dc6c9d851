//! Core cache types and structures

use crate::concurrent::KeyLock;
use crate::memory::MemoryStore;
use crate::storage::DiskStore;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::sync::Arc;

use super::internal::{CacheStats, StatsSnapshot};

/// Values that can live in both tiers
///
/// Anything serde can round-trip and that can be shared across threads
/// qualifies; the memory-only API accepts a wider set of types.
pub trait CacheValue: Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> CacheValue for T where T: Serialize + DeserializeOwned + Send + Sync + 'static {}

/// Which part of an instance an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tier {
    /// Memory first, then disk, promoting disk hits
    #[default]
    Combined,
    /// The memory tier alone
    Memory,
    /// The disk tier alone
    Disk,
}

/// Named two-tier cache
///
/// Cloning is cheap and every clone refers to the same instance. Instances
/// are handed out by [`InstanceRegistry`](crate::InstanceRegistry), which
/// keeps at most one per name.
#[derive(Clone)]
pub struct CacheInstance {
    pub(super) inner: Arc<CacheInner>,
}

pub(super) struct CacheInner {
    pub name: String,
    pub memory: MemoryStore,
    pub disk: DiskStore,
    pub locks: KeyLock,
    pub stats: CacheStats,
}

impl CacheInstance {
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Point-in-time copy of this instance's counters
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.stats.snapshot()
    }

    /// Number of entries currently held in memory
    pub fn memory_len(&self) -> usize {
        self.inner.memory.len()
    }

    /// Whether `self` and `other` are handles to the same instance
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for CacheInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheInstance")
            .field("name", &self.inner.name)
            .field("namespace", &self.inner.disk.namespace())
            .field("memory_entries", &self.inner.memory.len())
            .finish()
    }
}
