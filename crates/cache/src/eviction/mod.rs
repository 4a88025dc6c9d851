//! Eviction policies for the memory tier
//!
//! The memory tier is unbounded unless a capacity is configured, in which
//! case the least recently used entries are dropped first. Evicting from
//! memory never touches the disk tier.

mod factory;
mod policies;
mod traits;

// Re-export public API
pub use factory::create_eviction_policy;
pub use policies::{LruPolicy, Unbounded};
pub use traits::EvictionPolicy;
