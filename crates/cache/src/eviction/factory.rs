//! Factory for creating eviction policies

use std::num::NonZeroUsize;

use super::policies::{LruPolicy, Unbounded};
use super::traits::EvictionPolicy;

/// Policy for a memory tier holding at most `capacity` entries
///
/// `None` keeps the tier unbounded.
pub fn create_eviction_policy(capacity: Option<NonZeroUsize>) -> Box<dyn EvictionPolicy> {
    match capacity {
        Some(capacity) => Box::new(LruPolicy::new(capacity)),
        None => Box::new(Unbounded),
    }
}
