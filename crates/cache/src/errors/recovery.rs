//! Recovery utilities for cache errors

use super::types::{CacheError, RecoveryHint};

impl CacheError {
    /// Get the recovery hint for this error
    ///
    /// A memory-only write reports the hint of the disk failure behind it.
    #[must_use]
    pub fn recovery_hint(&self) -> &RecoveryHint {
        match self {
            Self::Io { recovery_hint, .. }
            | Self::Storage { recovery_hint, .. }
            | Self::Serialization { recovery_hint, .. }
            | Self::Corruption { recovery_hint, .. }
            | Self::Configuration { recovery_hint, .. }
            | Self::Worker { recovery_hint, .. } => recovery_hint,
            Self::MemoryOnly { source, .. } => source.recovery_hint(),
        }
    }

    /// Check if this error is transient and can be retried
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self.recovery_hint(), RecoveryHint::Retry { .. })
    }

    /// Check if this error indicates data corruption
    #[must_use]
    pub fn is_corruption(&self) -> bool {
        match self {
            Self::Corruption { .. } => true,
            Self::MemoryOnly { source, .. } => source.is_corruption(),
            _ => false,
        }
    }

    /// True when a combined write left the value cached in memory only
    #[must_use]
    pub const fn is_memory_only(&self) -> bool {
        matches!(self, Self::MemoryOnly { .. })
    }
}
