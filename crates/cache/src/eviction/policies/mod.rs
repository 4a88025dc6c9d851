//! Eviction policy implementations

mod lru;
mod unbounded;

pub use lru::LruPolicy;
pub use unbounded::Unbounded;
