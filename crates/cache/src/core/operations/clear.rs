//! Whole-tier clears
//!
//! These take no key locks. An operation on a key that starts after a clear
//! returns sees the cleared tiers; operations already in flight may still
//! finish against the old contents.

use crate::errors::Result;
use tracing::debug;

use crate::core::types::CacheInstance;

impl CacheInstance {
    /// Remove every entry from memory and from this instance's disk namespace
    pub fn remove_all_objects(&self) -> Result<()> {
        self.remove_all_objects_in_memory();
        self.remove_all_objects_on_disk()
    }

    pub fn remove_all_objects_in_memory(&self) {
        self.inner.memory.remove_all();
        debug!(cache = %self.inner.name, "cleared memory tier");
    }

    pub fn remove_all_objects_on_disk(&self) -> Result<()> {
        self.inner
            .disk
            .remove_all()
            .inspect_err(|_| self.inner.stats.record_disk_failure())?;
        debug!(cache = %self.inner.name, "cleared disk tier");
        Ok(())
    }
}
