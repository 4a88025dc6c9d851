//! Core error types for the cache system

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Result type for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;

/// Re-export CacheError as Error for convenience
pub use CacheError as Error;

/// Error type for cache operations
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Filesystem failure inside the disk tier
    #[error("I/O error during {operation} on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: std::io::Error,
        recovery_hint: RecoveryHint,
    },

    /// Failure reported by a non-filesystem disk backend
    #[error("storage backend failed to {operation} '{key}' in namespace '{namespace}': {message}")]
    Storage {
        namespace: String,
        key: String,
        operation: &'static str,
        message: String,
        recovery_hint: RecoveryHint,
    },

    /// Serialization/deserialization errors
    #[error("failed to {operation} cache entry '{key}': {source}")]
    Serialization {
        key: String,
        operation: SerializationOp,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        recovery_hint: RecoveryHint,
    },

    /// A persisted record failed validation
    #[error("cache corruption detected for key '{key}': {reason}")]
    Corruption {
        key: String,
        reason: String,
        recovery_hint: RecoveryHint,
    },

    /// A combined write reached the memory tier but not the disk tier
    #[error("'{key}' is cached in memory only, it could not be persisted: {source}")]
    MemoryOnly {
        key: String,
        #[source]
        source: Box<CacheError>,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration {
        message: String,
        recovery_hint: RecoveryHint,
    },

    /// The background worker could not deliver a result
    #[error("background worker failed: {message}")]
    Worker {
        message: String,
        recovery_hint: RecoveryHint,
    },
}

/// Recovery hints for error handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryHint {
    /// Retry the operation
    Retry { after: Duration },

    /// Clear the affected tier and retry
    ClearAndRetry,

    /// Check file permissions
    CheckPermissions { path: PathBuf },

    /// Check disk space and clean up if needed
    CheckDiskSpace,

    /// Use a default value
    UseDefault { value: String },

    /// No automated recovery possible
    Manual { instructions: String },
}

/// Serialization operation types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializationOp {
    Encode,
    Decode,
}

impl fmt::Display for SerializationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode => f.write_str("encode"),
            Self::Decode => f.write_str("decode"),
        }
    }
}
