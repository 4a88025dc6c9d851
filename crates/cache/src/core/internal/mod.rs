//! Internal structures for cache instances

use crate::storage::DiskRead;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

/// Internal cache statistics with atomic counters
#[derive(Debug)]
pub struct CacheStats {
    pub memory_hits: AtomicU64,
    pub disk_hits: AtomicU64,
    pub misses: AtomicU64,
    pub promotions: AtomicU64,
    pub writes: AtomicU64,
    pub removals: AtomicU64,
    pub disk_failures: AtomicU64,
    pub corrupt_evictions: AtomicU64,
    pub stats_since: SystemTime,
}

impl Default for CacheStats {
    fn default() -> Self {
        Self {
            memory_hits: AtomicU64::new(0),
            disk_hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            promotions: AtomicU64::new(0),
            writes: AtomicU64::new(0),
            removals: AtomicU64::new(0),
            disk_failures: AtomicU64::new(0),
            corrupt_evictions: AtomicU64::new(0),
            stats_since: SystemTime::now(),
        }
    }
}

impl CacheStats {
    pub fn record_memory_hit(&self) {
        self.memory_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_promotion(&self) {
        self.promotions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_removal(&self) {
        self.removals.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_disk_failure(&self) {
        self.disk_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a disk read by outcome; misses are left to the caller
    pub fn record_disk_read<T>(&self, read: &DiskRead<T>) {
        match read {
            DiskRead::Hit(_) => {
                self.disk_hits.fetch_add(1, Ordering::Relaxed);
            }
            DiskRead::Unavailable => self.record_disk_failure(),
            DiskRead::Corrupt => {
                self.corrupt_evictions.fetch_add(1, Ordering::Relaxed);
            }
            DiskRead::Miss | DiskRead::Undecodable => {}
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            memory_hits: self.memory_hits.load(Ordering::Relaxed),
            disk_hits: self.disk_hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            promotions: self.promotions.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
            removals: self.removals.load(Ordering::Relaxed),
            disk_failures: self.disk_failures.load(Ordering::Relaxed),
            corrupt_evictions: self.corrupt_evictions.load(Ordering::Relaxed),
            stats_since: self.stats_since,
        }
    }
}

/// Copy of an instance's counters at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub memory_hits: u64,
    pub disk_hits: u64,
    pub misses: u64,
    /// Disk hits copied into memory by a combined read
    pub promotions: u64,
    pub writes: u64,
    pub removals: u64,
    /// Backend failures on reads and writes
    pub disk_failures: u64,
    /// Unreadable disk records deleted on detection
    pub corrupt_evictions: u64,
    pub stats_since: SystemTime,
}

impl StatsSnapshot {
    pub fn hits(&self) -> u64 {
        self.memory_hits + self.disk_hits
    }

    pub fn hit_rate(&self) -> f64 {
        let total = self.hits() + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits() as f64 / total as f64
        }
    }
}
