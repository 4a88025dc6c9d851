//! Instance construction

use crate::concurrent::KeyLock;
use crate::config::CacheConfig;
use crate::eviction::create_eviction_policy;
use crate::memory::MemoryStore;
use crate::storage::{DiskBackend, DiskStore};
use std::sync::Arc;
use tracing::debug;

use super::internal::CacheStats;
use super::types::{CacheInner, CacheInstance};

impl CacheInstance {
    /// Build an instance whose disk tier is the `name` namespace of `backend`
    ///
    /// Nothing touches the disk until the first write.
    pub(crate) fn new(name: &str, backend: Arc<dyn DiskBackend>, config: &CacheConfig) -> Self {
        let policy = create_eviction_policy(config.memory_capacity);

        debug!(
            name,
            codec = %config.codec,
            memory_capacity = config.memory_capacity.map(|c| c.get()),
            "creating cache instance"
        );

        let inner = Arc::new(CacheInner {
            name: name.to_string(),
            memory: MemoryStore::with_policy(policy),
            disk: DiskStore::new(backend, name, config.codec),
            locks: KeyLock::new(),
            stats: CacheStats::default(),
        });

        Self { inner }
    }
}
