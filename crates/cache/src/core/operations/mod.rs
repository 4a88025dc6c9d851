//! Cache operations, implemented directly on `CacheInstance`

mod clear;
mod exists;
mod get;
mod put;
mod remove;

use crate::errors::Result;
use std::sync::Arc;

use super::types::{CacheInstance, CacheValue, Tier};

// Tier-dispatched entry points used by the asynchronous API
impl CacheInstance {
    pub(crate) fn lookup<T: CacheValue>(&self, key: &str, tier: Tier) -> Option<Arc<T>> {
        match tier {
            Tier::Combined => self.object_for_key(key),
            Tier::Memory => self.object_for_key_in_memory(key),
            Tier::Disk => self.object_for_key_on_disk(key),
        }
    }

    pub(crate) fn contains(&self, key: &str, tier: Tier) -> Result<bool> {
        match tier {
            Tier::Combined => Ok(self.object_exists_for_key(key)),
            Tier::Memory => Ok(self.object_exists_for_key_in_memory(key)),
            Tier::Disk => self.object_exists_for_key_on_disk(key),
        }
    }

    pub(crate) fn store<T: CacheValue>(&self, value: T, key: &str, tier: Tier) -> Result<()> {
        match tier {
            Tier::Combined => self.set_object(value, key),
            Tier::Memory => {
                self.set_object_in_memory(value, key);
                Ok(())
            }
            Tier::Disk => self.set_object_on_disk(value, key),
        }
    }

    pub(crate) fn discard(&self, key: &str, tier: Tier) -> Result<()> {
        match tier {
            Tier::Combined => self.remove_object_for_key(key),
            Tier::Memory => {
                self.remove_object_for_key_in_memory(key);
                Ok(())
            }
            Tier::Disk => self.remove_object_for_key_on_disk(key),
        }
    }

    pub(crate) fn clear_tier(&self, tier: Tier) -> Result<()> {
        match tier {
            Tier::Combined => self.remove_all_objects(),
            Tier::Memory => {
                self.remove_all_objects_in_memory();
                Ok(())
            }
            Tier::Disk => self.remove_all_objects_on_disk(),
        }
    }
}
