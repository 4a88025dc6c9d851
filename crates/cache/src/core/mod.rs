//! Two-tier cache instances
//!
//! A [`CacheInstance`] pairs a volatile memory tier with a persistent disk
//! tier under one name. Its API comes in three families:
//! - combined (`object_for_key`, `set_object`, ...): consults memory first,
//!   falls back to disk and promotes disk hits into memory;
//! - memory-only (`*_in_memory`): never touches the disk tier;
//! - disk-only (`*_on_disk`): never touches the memory tier.
//!
//! Every single-key operation runs under that key's lock, so operations on
//! the same key are linearized while distinct keys proceed in parallel.

pub mod internal;

mod asynchronous;
mod builder;
mod operations;
mod types;

pub use internal::StatsSnapshot;
pub use types::{CacheInstance, CacheValue, Tier};

#[cfg(test)]
mod tests;
