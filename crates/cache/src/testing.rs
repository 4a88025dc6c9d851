//! Test doubles shared by the unit tests

use crate::errors::{CacheError, Result};
use crate::storage::{DiskBackend, FileSystemBackend};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Filesystem backend whose operations can be switched to fail
#[derive(Debug)]
pub struct FlakyBackend {
    inner: FileSystemBackend,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub fail_deletes: AtomicBool,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
}

impl FlakyBackend {
    pub fn new(root: &Path) -> Self {
        Self {
            inner: FileSystemBackend::new(root),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn inner(&self) -> &FileSystemBackend {
        &self.inner
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }
}

impl DiskBackend for FlakyBackend {
    fn read(&self, namespace: &str, key: &str) -> Result<Option<Vec<u8>>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CacheError::storage(namespace, key, "read", "injected read failure"));
        }
        self.inner.read(namespace, key)
    }

    fn write(&self, namespace: &str, key: &str, bytes: &[u8]) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CacheError::storage(namespace, key, "write", "injected write failure"));
        }
        self.inner.write(namespace, key, bytes)
    }

    fn exists(&self, namespace: &str, key: &str) -> Result<bool> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CacheError::storage(namespace, key, "stat", "injected read failure"));
        }
        self.inner.exists(namespace, key)
    }

    fn delete(&self, namespace: &str, key: &str) -> Result<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(CacheError::storage(namespace, key, "delete", "injected delete failure"));
        }
        self.inner.delete(namespace, key)
    }

    fn delete_all(&self, namespace: &str) -> Result<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(CacheError::storage(namespace, "*", "delete", "injected delete failure"));
        }
        self.inner.delete_all(namespace)
    }
}
