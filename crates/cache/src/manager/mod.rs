//! Instance registry
//!
//! Hands out at most one [`CacheInstance`] per name. Every instance of a
//! registry shares its configuration and disk backend, with its disk tier
//! scoped to the namespace named after the instance.

mod global;

pub use global::{global, init_global};

use crate::config::CacheConfig;
use crate::core::CacheInstance;
use crate::storage::{DiskBackend, FileSystemBackend};
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;

/// Name of the instance returned by [`InstanceRegistry::shared_instance`]
pub const DEFAULT_INSTANCE_NAME: &str = "default";

/// Name -> instance map with idempotent construction
pub struct InstanceRegistry {
    config: CacheConfig,
    backend: Arc<dyn DiskBackend>,
    instances: DashMap<String, CacheInstance>,
}

impl InstanceRegistry {
    /// Registry storing records under `config.root_dir`
    pub fn new(config: CacheConfig) -> Self {
        let backend = Arc::new(FileSystemBackend::new(config.root_dir.clone()));
        Self::with_backend(config, backend)
    }

    /// Registry storing records through a custom backend
    ///
    /// `config.root_dir` is not used by the registry in this case.
    pub fn with_backend(config: CacheConfig, backend: Arc<dyn DiskBackend>) -> Self {
        Self {
            config,
            backend,
            instances: DashMap::new(),
        }
    }

    /// The default instance, created on first use
    pub fn shared_instance(&self) -> CacheInstance {
        self.instance_with_name(DEFAULT_INSTANCE_NAME)
    }

    /// The instance called `name`, created and registered on first use
    ///
    /// Concurrent first calls for the same name all receive the same
    /// instance.
    pub fn instance_with_name(&self, name: &str) -> CacheInstance {
        if let Some(existing) = self.instances.get(name) {
            return existing.clone();
        }

        // The entry holds the shard lock, so only one caller constructs
        self.instances
            .entry(name.to_string())
            .or_insert_with(|| CacheInstance::new(name, Arc::clone(&self.backend), &self.config))
            .clone()
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Number of instances created so far
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl fmt::Debug for InstanceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceRegistry")
            .field("config", &self.config)
            .field("backend", &self.backend)
            .field("instances", &self.instances.len())
            .finish()
    }
}
