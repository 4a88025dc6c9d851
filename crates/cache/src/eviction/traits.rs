//! Core eviction policy trait definition

/// Eviction policy trait
///
/// The memory tier calls these hooks while holding its own lock, so
/// implementations see a consistent sequence of events and need no
/// synchronization of their own.
pub trait EvictionPolicy: Send {
    /// Record insertion or overwrite of a key
    fn on_insert(&mut self, key: &str);

    /// Record a read hit on a key
    fn on_access(&mut self, key: &str);

    /// Record removal of a key
    fn on_remove(&mut self, key: &str);

    /// Next key to evict, or `None` while the tier is within bounds
    fn next_eviction(&mut self) -> Option<String>;

    /// Clear all tracking data
    fn clear(&mut self);

    /// Number of keys currently tracked
    fn tracked(&self) -> usize;
}
