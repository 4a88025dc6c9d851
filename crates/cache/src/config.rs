//! Cache configuration with environment overrides
use crate::errors::{CacheError, RecoveryHint, Result};
use crate::serialization::Codec;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tiercache_utils::XdgPaths;

/// Overrides `root_dir`
pub const ENV_CACHE_DIR: &str = "TIERCACHE_DIR";
/// Overrides `codec` (`bincode` or `json`)
pub const ENV_CODEC: &str = "TIERCACHE_CODEC";
/// Bounds the memory tier to this many entries per instance
pub const ENV_MEMORY_CAPACITY: &str = "TIERCACHE_MEMORY_CAPACITY";

/// Settings shared by every instance of a registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Directory holding one sub-directory per instance
    pub root_dir: PathBuf,
    /// Encoding of disk records
    pub codec: Codec,
    /// Entry bound for each memory tier; `None` never evicts
    pub memory_capacity: Option<NonZeroUsize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        // Use XDG cache directory which respects XDG_CACHE_HOME
        Self {
            root_dir: XdgPaths::cache_dir(),
            codec: Codec::default(),
            memory_capacity: None,
        }
    }
}

impl CacheConfig {
    /// Default settings rooted at `root_dir`
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_codec(mut self, codec: Codec) -> Self {
        self.codec = codec;
        self
    }

    pub fn with_memory_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.memory_capacity = Some(capacity);
        self
    }

    /// Defaults with any `TIERCACHE_*` environment overrides applied
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(dir) = lookup(ENV_CACHE_DIR).filter(|d| !d.is_empty()) {
            self.root_dir = PathBuf::from(dir);
        }

        if let Some(codec) = lookup(ENV_CODEC) {
            self.codec = codec.parse()?;
        }

        if let Some(capacity) = lookup(ENV_MEMORY_CAPACITY) {
            let parsed = capacity
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|e| CacheError::Configuration {
                    message: format!("Invalid {ENV_MEMORY_CAPACITY} value '{capacity}': {e}"),
                    recovery_hint: RecoveryHint::Manual {
                        instructions: format!(
                            "Set {ENV_MEMORY_CAPACITY} to a positive integer or unset it"
                        ),
                    },
                })?;
            self.memory_capacity = Some(parsed);
        }

        Ok(())
    }
}
