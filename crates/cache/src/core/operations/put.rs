//! Cache put operations

use crate::errors::{CacheError, Result};
use std::any::Any;
use std::sync::Arc;
use tracing::warn;

use crate::core::types::{CacheInstance, CacheValue};

impl CacheInstance {
    /// Store a value in both tiers
    ///
    /// Memory is written first. If the value cannot be encoded or the disk
    /// write fails, the value stays in memory and the failure is returned as
    /// [`CacheError::MemoryOnly`].
    pub fn set_object<T: CacheValue>(&self, value: T, key: &str) -> Result<()> {
        let inner = &self.inner;
        inner.locks.with_key(key, || {
            // Encode before the value moves into memory
            let encoded = inner.disk.codec().encode(key, &value);

            inner.memory.set(key, Arc::new(value));
            inner.stats.record_write();

            let persisted = encoded.and_then(|payload| inner.disk.set(key, &payload));
            persisted.map_err(|e| {
                inner.stats.record_disk_failure();
                warn!(cache = %inner.name, key, error = %e, "value cached in memory only");
                CacheError::MemoryOnly {
                    key: key.to_string(),
                    source: Box::new(e),
                }
            })
        })
    }

    /// Store a value in the memory tier only
    pub fn set_object_in_memory<T: Any + Send + Sync>(&self, value: T, key: &str) {
        let inner = &self.inner;
        inner.locks.with_key(key, || {
            inner.memory.set(key, Arc::new(value));
            inner.stats.record_write();
        });
    }

    /// Store a value in the disk tier only
    pub fn set_object_on_disk<T: CacheValue>(&self, value: T, key: &str) -> Result<()> {
        let inner = &self.inner;
        inner.locks.with_key(key, || {
            inner.disk.store(key, &value).map_err(|e| {
                inner.stats.record_disk_failure();
                warn!(cache = %inner.name, key, error = %e, "disk write failed");
                e
            })?;
            inner.stats.record_write();
            Ok(())
        })
    }
}
