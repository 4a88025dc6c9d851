//! Cache remove operations

use crate::errors::Result;

use crate::core::types::CacheInstance;

impl CacheInstance {
    /// Remove `key` from both tiers
    ///
    /// Removing a missing key is a no-op. The memory entry is gone even when
    /// the disk removal fails.
    pub fn remove_object_for_key(&self, key: &str) -> Result<()> {
        let inner = &self.inner;
        inner.locks.with_key(key, || {
            inner.memory.remove(key);
            inner.stats.record_removal();
            inner.disk.remove(key).inspect_err(|_| inner.stats.record_disk_failure())
        })
    }

    pub fn remove_object_for_key_in_memory(&self, key: &str) {
        let inner = &self.inner;
        inner.locks.with_key(key, || {
            inner.memory.remove(key);
            inner.stats.record_removal();
        });
    }

    pub fn remove_object_for_key_on_disk(&self, key: &str) -> Result<()> {
        let inner = &self.inner;
        inner.locks.with_key(key, || {
            inner.stats.record_removal();
            inner.disk.remove(key).inspect_err(|_| inner.stats.record_disk_failure())
        })
    }
}
