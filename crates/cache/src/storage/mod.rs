//! Persistent disk tier
//!
//! [`DiskStore`] maps keys to serialized values inside one namespace of a
//! [`DiskBackend`]. Reads are best-effort: a missing record, a failing
//! backend and a corrupt record all come back as a non-hit. Records with a
//! broken frame are deleted as soon as they are detected; an intact record
//! that does not decode as the requested type is left in place. Writes,
//! removals and existence checks report failures to the caller.

mod backend;
mod format;

pub use backend::{hash_key, namespace_dir_name, DiskBackend, FileSystemBackend};
pub use format::{decode_record, encode_record, FORMAT_VERSION, HEADER_LEN, RECORD_MAGIC};

use crate::errors::{CacheError, Result};
use crate::serialization::Codec;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of a disk-tier read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiskRead<T> {
    /// The record exists and decoded cleanly
    Hit(T),
    /// No record for the key
    Miss,
    /// The backend failed; treated as a miss
    Unavailable,
    /// The record was unreadable and has been evicted
    Corrupt,
    /// The record is intact but does not decode as the requested type; it is kept
    Undecodable,
}

impl<T> DiskRead<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Hit(value) => Some(value),
            Self::Miss | Self::Unavailable | Self::Corrupt | Self::Undecodable => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }
}

/// Disk tier of one cache instance
#[derive(Clone)]
pub struct DiskStore {
    backend: Arc<dyn DiskBackend>,
    namespace: String,
    codec: Codec,
}

impl DiskStore {
    pub fn new(backend: Arc<dyn DiskBackend>, namespace: impl Into<String>, codec: Codec) -> Self {
        Self {
            backend,
            namespace: namespace.into(),
            codec,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn codec(&self) -> Codec {
        self.codec
    }

    /// Read the raw payload stored for `key`
    pub fn get(&self, key: &str) -> DiskRead<Vec<u8>> {
        let record = match self.backend.read(&self.namespace, key) {
            Ok(Some(record)) => record,
            Ok(None) => return DiskRead::Miss,
            Err(e) => {
                warn!(namespace = %self.namespace, key, error = %e, "disk read failed, treating as miss");
                return DiskRead::Unavailable;
            }
        };

        match decode_record(key, &record) {
            Ok(payload) => DiskRead::Hit(payload.to_vec()),
            Err(e) => {
                self.evict_corrupt(key, &e);
                DiskRead::Corrupt
            }
        }
    }

    /// Read and decode the value stored for `key`
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> DiskRead<T> {
        match self.get(key) {
            DiskRead::Hit(payload) => match self.codec.decode(key, &payload) {
                Ok(value) => DiskRead::Hit(value),
                Err(e) => {
                    debug!(namespace = %self.namespace, key, error = %e, "disk record does not decode as the requested type");
                    DiskRead::Undecodable
                }
            },
            DiskRead::Miss => DiskRead::Miss,
            DiskRead::Unavailable => DiskRead::Unavailable,
            DiskRead::Corrupt => DiskRead::Corrupt,
            DiskRead::Undecodable => DiskRead::Undecodable,
        }
    }

    /// Store a raw payload for `key`
    pub fn set(&self, key: &str, payload: &[u8]) -> Result<()> {
        self.backend
            .write(&self.namespace, key, &encode_record(payload))
    }

    /// Encode and store `value` for `key`
    pub fn store<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let payload = self.codec.encode(key, value)?;
        self.set(key, &payload)
    }

    pub fn exists(&self, key: &str) -> Result<bool> {
        self.backend.exists(&self.namespace, key)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.backend.delete(&self.namespace, key)
    }

    /// Remove every record of this namespace
    pub fn remove_all(&self) -> Result<()> {
        self.backend.delete_all(&self.namespace)
    }

    fn evict_corrupt(&self, key: &str, reason: &CacheError) {
        warn!(namespace = %self.namespace, key, error = %reason, "evicting unreadable disk record");
        match self.backend.delete(&self.namespace, key) {
            Ok(()) => debug!(namespace = %self.namespace, key, "corrupt record evicted"),
            Err(e) => warn!(namespace = %self.namespace, key, error = %e, "failed to evict corrupt record"),
        }
    }
}

impl fmt::Debug for DiskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiskStore")
            .field("namespace", &self.namespace)
            .field("codec", &self.codec)
            .field("backend", &self.backend)
            .finish()
    }
}
