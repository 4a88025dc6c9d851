//! Non-blocking variants of the cache API
//!
//! Each operation comes in two shapes. `*_async` returns a [`Completion`]
//! that can be awaited or waited on; `*_with` takes a callback that is
//! invoked exactly once, on a cache worker thread, with the same result the
//! synchronous call would have produced. Both shapes accept a [`Tier`] to
//! select the combined, memory-only or disk-only behavior.

use crate::concurrent::{dispatch, dispatch_with, Completion};
use crate::errors::Result;
use std::sync::Arc;

use super::types::{CacheInstance, CacheValue, Tier};

impl CacheInstance {
    pub fn object_for_key_async<T: CacheValue>(
        &self,
        key: impl Into<String>,
        tier: Tier,
    ) -> Completion<Option<Arc<T>>> {
        let cache = self.clone();
        let key = key.into();
        dispatch(move || Ok(cache.lookup::<T>(&key, tier)))
    }

    pub fn object_exists_for_key_async(
        &self,
        key: impl Into<String>,
        tier: Tier,
    ) -> Completion<bool> {
        let cache = self.clone();
        let key = key.into();
        dispatch(move || cache.contains(&key, tier))
    }

    pub fn set_object_async<T: CacheValue>(
        &self,
        value: T,
        key: impl Into<String>,
        tier: Tier,
    ) -> Completion<()> {
        let cache = self.clone();
        let key = key.into();
        dispatch(move || cache.store(value, &key, tier))
    }

    pub fn remove_object_for_key_async(
        &self,
        key: impl Into<String>,
        tier: Tier,
    ) -> Completion<()> {
        let cache = self.clone();
        let key = key.into();
        dispatch(move || cache.discard(&key, tier))
    }

    pub fn remove_all_objects_async(&self, tier: Tier) -> Completion<()> {
        let cache = self.clone();
        dispatch(move || cache.clear_tier(tier))
    }

    /// Look up `key` and pass the value, or `None`, to `callback`
    pub fn object_for_key_with<T, F>(&self, key: impl Into<String>, tier: Tier, callback: F)
    where
        T: CacheValue,
        F: FnOnce(Option<Arc<T>>) + Send + 'static,
    {
        let cache = self.clone();
        let key = key.into();
        dispatch_with(
            move || Ok(cache.lookup::<T>(&key, tier)),
            move |result: Result<Option<Arc<T>>>| callback(result.ok().flatten()),
        );
    }

    pub fn object_exists_for_key_with<F>(&self, key: impl Into<String>, tier: Tier, callback: F)
    where
        F: FnOnce(Result<bool>) + Send + 'static,
    {
        let cache = self.clone();
        let key = key.into();
        dispatch_with(move || cache.contains(&key, tier), callback);
    }

    pub fn set_object_with<T, F>(&self, value: T, key: impl Into<String>, tier: Tier, callback: F)
    where
        T: CacheValue,
        F: FnOnce(Result<()>) + Send + 'static,
    {
        let cache = self.clone();
        let key = key.into();
        dispatch_with(move || cache.store(value, &key, tier), callback);
    }

    pub fn remove_object_for_key_with<F>(&self, key: impl Into<String>, tier: Tier, callback: F)
    where
        F: FnOnce(Result<()>) + Send + 'static,
    {
        let cache = self.clone();
        let key = key.into();
        dispatch_with(move || cache.discard(&key, tier), callback);
    }

    pub fn remove_all_objects_with<F>(&self, tier: Tier, callback: F)
    where
        F: FnOnce(Result<()>) + Send + 'static,
    {
        let cache = self.clone();
        dispatch_with(move || cache.clear_tier(tier), callback);
    }
}
