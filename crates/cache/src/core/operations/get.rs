//! Cache get operations

use crate::storage::DiskRead;
use std::any::Any;
use std::sync::Arc;
use tracing::debug;

use crate::core::types::{CacheInstance, CacheValue};

impl CacheInstance {
    /// Get a value, consulting memory and then disk
    ///
    /// A disk hit is decoded and written into memory before it is returned,
    /// so the next read of `key` is served from memory. A memory entry of a
    /// different type than `T` is ignored and the disk tier decides. Disk
    /// failures and unreadable records are treated as absent. A disk record
    /// that does not decode as `T` is a miss and stays on disk.
    pub fn object_for_key<T: CacheValue>(&self, key: &str) -> Option<Arc<T>> {
        let inner = &self.inner;
        inner.locks.with_key(key, || {
            if let Some(value) = inner.memory.get_as::<T>(key) {
                inner.stats.record_memory_hit();
                return Some(value);
            }

            let read = inner.disk.load::<T>(key);
            inner.stats.record_disk_read(&read);
            match read {
                DiskRead::Hit(value) => {
                    let value = Arc::new(value);
                    inner.memory.set(key, value.clone());
                    inner.stats.record_promotion();
                    debug!(cache = %inner.name, key, "promoted disk hit into memory");
                    Some(value)
                }
                DiskRead::Miss | DiskRead::Unavailable | DiskRead::Corrupt | DiskRead::Undecodable => {
                    inner.stats.record_miss();
                    None
                }
            }
        })
    }

    /// Get a value from the memory tier only
    pub fn object_for_key_in_memory<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let inner = &self.inner;
        inner.locks.with_key(key, || {
            let value = inner.memory.get_as::<T>(key);
            if value.is_some() {
                inner.stats.record_memory_hit();
            } else {
                inner.stats.record_miss();
            }
            value
        })
    }

    /// Get a value from the disk tier only; memory is left untouched
    pub fn object_for_key_on_disk<T: CacheValue>(&self, key: &str) -> Option<Arc<T>> {
        let inner = &self.inner;
        inner.locks.with_key(key, || {
            let read = inner.disk.load::<T>(key);
            inner.stats.record_disk_read(&read);
            let value = read.into_option().map(Arc::new);
            if value.is_none() {
                inner.stats.record_miss();
            }
            value
        })
    }
}
