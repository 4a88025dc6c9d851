//! Error handling for the cache system
//!
//! Misses are never errors: lookups return `Option`. The types here cover
//! storage and serialization failures surfaced by write, removal and
//! disk-tier existence paths, together with a recovery hint describing what a
//! caller can do about them.

mod conversions;
mod recovery;
mod types;

pub use types::*;
