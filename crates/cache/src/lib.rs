//! Two-tier key/value cache
//!
//! Values live in a fast, volatile memory tier backed by a persistent disk
//! tier. Instances are named, and each name maps to its own disk namespace:
//!
//! ```no_run
//! let images = tiercache::instance_with_name("images");
//! images.set_object(b"bytes123".to_vec(), "cat.png")?;
//!
//! let bytes = images.object_for_key::<Vec<u8>>("cat.png");
//! assert_eq!(bytes.as_deref(), Some(&b"bytes123".to_vec()));
//! # Ok::<(), tiercache::CacheError>(())
//! ```
//!
//! See [`CacheInstance`] for the combined, memory-only, disk-only and
//! asynchronous families of operations.

pub mod concurrent;
pub mod config;
pub mod core;
pub mod errors;
pub mod eviction;
pub mod manager;
pub mod memory;
pub mod serialization;
pub mod storage;

#[cfg(test)]
mod testing;

pub use concurrent::{Completion, KeyLock};
pub use config::CacheConfig;
pub use crate::core::{CacheInstance, CacheValue, StatsSnapshot, Tier};
pub use errors::{CacheError, Error, RecoveryHint, Result, SerializationOp};
pub use eviction::{EvictionPolicy, LruPolicy, Unbounded};
pub use manager::{InstanceRegistry, DEFAULT_INSTANCE_NAME};
pub use memory::MemoryStore;
pub use serialization::Codec;
pub use storage::{DiskBackend, DiskRead, DiskStore, FileSystemBackend};

/// The default instance of the process-wide registry
pub fn shared_instance() -> CacheInstance {
    manager::global().shared_instance()
}

/// The instance called `name` in the process-wide registry
pub fn instance_with_name(name: &str) -> CacheInstance {
    manager::global().instance_with_name(name)
}

/// Configure the process-wide registry before its first use
pub fn init_global(config: CacheConfig) -> Result<()> {
    manager::init_global(config)
}
