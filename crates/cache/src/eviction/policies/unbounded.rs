use crate::eviction::traits::EvictionPolicy;

/// Never evicts; the default for the memory tier
#[derive(Debug, Default, Clone, Copy)]
pub struct Unbounded;

impl EvictionPolicy for Unbounded {
    fn on_insert(&mut self, _key: &str) {}

    fn on_access(&mut self, _key: &str) {}

    fn on_remove(&mut self, _key: &str) {}

    fn next_eviction(&mut self) -> Option<String> {
        None
    }

    fn clear(&mut self) {}

    fn tracked(&self) -> usize {
        0
    }
}
