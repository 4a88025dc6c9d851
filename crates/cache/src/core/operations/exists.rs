//! Existence checks

use crate::errors::Result;
use tracing::warn;

use crate::core::types::CacheInstance;

impl CacheInstance {
    /// Whether `key` is held by either tier
    ///
    /// Never promotes. A failing disk tier counts as not holding the key.
    pub fn object_exists_for_key(&self, key: &str) -> bool {
        let inner = &self.inner;
        inner.locks.with_key(key, || {
            if inner.memory.exists(key) {
                return true;
            }
            match inner.disk.exists(key) {
                Ok(found) => found,
                Err(e) => {
                    inner.stats.record_disk_failure();
                    warn!(cache = %inner.name, key, error = %e, "disk existence check failed");
                    false
                }
            }
        })
    }

    pub fn object_exists_for_key_in_memory(&self, key: &str) -> bool {
        self.inner
            .locks
            .with_key(key, || self.inner.memory.exists(key))
    }

    pub fn object_exists_for_key_on_disk(&self, key: &str) -> Result<bool> {
        self.inner
            .locks
            .with_key(key, || self.inner.disk.exists(key))
    }
}
