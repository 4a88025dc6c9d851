//! Process-wide registry

use crate::config::CacheConfig;
use crate::errors::{CacheError, RecoveryHint, Result};
use once_cell::sync::OnceCell;
use tracing::warn;

use super::InstanceRegistry;

// Global registry instance
static GLOBAL: OnceCell<InstanceRegistry> = OnceCell::new();

/// The process-wide registry
///
/// Built on first use from [`CacheConfig::from_env`], unless
/// [`init_global`] installed a configuration before that. Invalid
/// environment settings are logged and replaced by the defaults.
pub fn global() -> &'static InstanceRegistry {
    GLOBAL.get_or_init(|| {
        let config = CacheConfig::from_env().unwrap_or_else(|e| {
            warn!(error = %e, "invalid cache environment, using default configuration");
            CacheConfig::default()
        });
        InstanceRegistry::new(config)
    })
}

/// Install the configuration of the process-wide registry
///
/// Fails once the registry exists, whether it was created by an earlier
/// call or by first use.
pub fn init_global(config: CacheConfig) -> Result<()> {
    GLOBAL
        .set(InstanceRegistry::new(config))
        .map_err(|_| CacheError::Configuration {
            message: "global cache registry is already initialized".to_string(),
            recovery_hint: RecoveryHint::Manual {
                instructions: "Call init_global before any other cache access".to_string(),
            },
        })
}
