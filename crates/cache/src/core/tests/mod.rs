//! Tests for cache instances


use crate::config::CacheConfig;
use crate::core::CacheInstance;
use crate::storage::{DiskBackend, FileSystemBackend};
use std::sync::Arc;
use tempfile::TempDir;

fn instance(temp_dir: &TempDir, name: &str) -> CacheInstance {
    let backend = Arc::new(FileSystemBackend::new(temp_dir.path()));
    instance_with_backend(temp_dir, name, backend)
}

fn instance_with_backend(
    temp_dir: &TempDir,
    name: &str,
    backend: Arc<dyn DiskBackend>,
) -> CacheInstance {
    CacheInstance::new(name, backend, &CacheConfig::new(temp_dir.path()))
}
