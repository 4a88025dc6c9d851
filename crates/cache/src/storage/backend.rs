//! Disk I/O capability and its filesystem implementation

use crate::errors::{CacheError, Result};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tiercache_utils::write_atomic;
use uuid::Uuid;

/// Byte-level persistence used by the disk tier
///
/// Every call is scoped by `namespace` (the owning instance's name), and
/// implementations must keep namespaces isolated from each other. `write`
/// must be atomic: a concurrent or later `read` never observes a partially
/// written value. Deleting something that does not exist is not an error.
pub trait DiskBackend: Send + Sync + fmt::Debug {
    fn read(&self, namespace: &str, key: &str) -> Result<Option<Vec<u8>>>;

    fn write(&self, namespace: &str, key: &str, bytes: &[u8]) -> Result<()>;

    fn exists(&self, namespace: &str, key: &str) -> Result<bool>;

    fn delete(&self, namespace: &str, key: &str) -> Result<()>;

    fn delete_all(&self, namespace: &str) -> Result<()>;
}

/// Stores each record as a file under `<root>/<namespace>/<shard>/<hash>`
#[derive(Debug, Clone)]
pub struct FileSystemBackend {
    root: PathBuf,
}

impl FileSystemBackend {
    /// Create a backend rooted at `root`; directories are created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every record of `namespace`
    pub fn namespace_dir(&self, namespace: &str) -> PathBuf {
        self.root.join(namespace_dir_name(namespace))
    }

    /// Generate record path using 256-shard distribution
    pub fn record_path(&self, namespace: &str, key: &str) -> PathBuf {
        let hash = hash_key(key);
        // First byte of the hash selects the shard (00-ff)
        let shard = &hash[..2];
        self.namespace_dir(namespace).join(shard).join(&hash)
    }
}

impl DiskBackend for FileSystemBackend {
    fn read(&self, namespace: &str, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.record_path(namespace, key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CacheError::io(path, "read cache record", e)),
        }
    }

    fn write(&self, namespace: &str, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.record_path(namespace, key);
        write_atomic(&path, bytes).map_err(|e| CacheError::io(path, "write cache record", e))
    }

    fn exists(&self, namespace: &str, key: &str) -> Result<bool> {
        let path = self.record_path(namespace, key);
        path.try_exists()
            .map_err(|e| CacheError::io(path, "check cache record", e))
    }

    fn delete(&self, namespace: &str, key: &str) -> Result<()> {
        let path = self.record_path(namespace, key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::io(path, "remove cache record", e)),
        }
    }

    fn delete_all(&self, namespace: &str) -> Result<()> {
        let dir = self.namespace_dir(namespace);

        // Detach the namespace with a single rename so later operations see
        // an empty namespace even while the old tree is still being deleted.
        let trash = self.root.join(format!(".trash-{}", Uuid::new_v4()));
        match fs::rename(&dir, &trash) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(CacheError::io(dir, "detach namespace directory", e)),
        }

        if let Err(e) = fs::remove_dir_all(&trash) {
            tracing::warn!(
                namespace,
                path = %trash.display(),
                error = %e,
                "failed to delete detached namespace directory"
            );
        }
        Ok(())
    }
}

/// Directory name for a namespace
///
/// Names made only of `[A-Za-z0-9._-]` that do not start with `.` are used
/// verbatim; anything else is replaced by `ns-<sha256>` so arbitrary instance
/// names can never escape the root or collide with internal entries.
pub fn namespace_dir_name(namespace: &str) -> String {
    let is_plain = !namespace.is_empty()
        && !namespace.starts_with('.')
        && namespace
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'));

    if is_plain {
        namespace.to_string()
    } else {
        format!("ns-{}", hash_key(namespace))
    }
}

/// Hash a cache key using SHA-256
pub fn hash_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_read_delete() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileSystemBackend::new(temp_dir.path());

        assert_eq!(backend.read("images", "cat.png").unwrap(), None);
        assert!(!backend.exists("images", "cat.png").unwrap());

        backend.write("images", "cat.png", b"bytes123").unwrap();
        assert_eq!(
            backend.read("images", "cat.png").unwrap(),
            Some(b"bytes123".to_vec())
        );
        assert!(backend.exists("images", "cat.png").unwrap());

        backend.delete("images", "cat.png").unwrap();
        assert_eq!(backend.read("images", "cat.png").unwrap(), None);
        // Second delete is a no-op
        backend.delete("images", "cat.png").unwrap();
    }

    #[test]
    fn test_record_layout_is_sharded() {
        let backend = FileSystemBackend::new("/cache");
        let path = backend.record_path("images", "cat.png");
        let hash = hash_key("cat.png");

        assert_eq!(
            path,
            PathBuf::from("/cache/images").join(&hash[..2]).join(&hash)
        );
    }

    #[test]
    fn test_overwrite_leaves_only_the_record() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileSystemBackend::new(temp_dir.path());

        backend.write("images", "cat.png", b"first").unwrap();
        backend.write("images", "cat.png", b"second").unwrap();

        let path = backend.record_path("images", "cat.png");
        let shard: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .collect();
        assert_eq!(shard, vec![path]);
        assert!(!shard.iter().any(|p| tiercache_utils::is_atomic_temp_file(p)));
        assert_eq!(backend.read("images", "cat.png").unwrap(), Some(b"second".to_vec()));
    }

    #[test]
    fn test_namespaces_are_isolated() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileSystemBackend::new(temp_dir.path());

        backend.write("images", "k", b"image").unwrap();
        backend.write("thumbs", "k", b"thumb").unwrap();

        backend.delete_all("images").unwrap();

        assert_eq!(backend.read("images", "k").unwrap(), None);
        assert_eq!(backend.read("thumbs", "k").unwrap(), Some(b"thumb".to_vec()));
    }

    #[test]
    fn test_delete_all_missing_namespace_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileSystemBackend::new(temp_dir.path());
        backend.delete_all("never-written").unwrap();
    }

    #[test]
    fn test_delete_all_leaves_no_trash() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileSystemBackend::new(temp_dir.path());

        backend.write("images", "a", b"1").unwrap();
        backend.write("images", "b", b"2").unwrap();
        backend.delete_all("images").unwrap();

        let remaining: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .collect();
        assert!(remaining.is_empty());

        // The namespace is usable again afterwards
        backend.write("images", "a", b"3").unwrap();
        assert_eq!(backend.read("images", "a").unwrap(), Some(b"3".to_vec()));
    }

    #[test]
    fn test_unsafe_namespace_names_are_hashed() {
        assert_eq!(namespace_dir_name("images"), "images");
        assert_eq!(namespace_dir_name("v1.2_thumbs-x"), "v1.2_thumbs-x");

        for name in ["", ".", "..", ".hidden", "../escape", "a/b", "spaced name"] {
            let dir = namespace_dir_name(name);
            assert!(dir.starts_with("ns-"), "{name:?} -> {dir}");
            assert_eq!(dir.len(), 3 + 64);
        }
    }

    #[test]
    fn test_escaping_namespace_stays_under_root() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileSystemBackend::new(temp_dir.path().join("root"));

        backend.write("../outside", "k", b"v").unwrap();

        assert!(backend.namespace_dir("../outside").starts_with(temp_dir.path().join("root")));
        assert!(!temp_dir.path().join("outside").exists());
    }
}
