//! Error construction helpers

use super::types::{CacheError, RecoveryHint, SerializationOp};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

// ENOSPC on Linux and macOS
const ENOSPC: i32 = 28;

impl CacheError {
    /// Wrap a filesystem error, deriving the recovery hint from its kind
    pub fn io(path: impl Into<PathBuf>, operation: &'static str, source: std::io::Error) -> Self {
        let path = path.into();
        let recovery_hint = match source.kind() {
            ErrorKind::PermissionDenied => RecoveryHint::CheckPermissions { path: path.clone() },
            ErrorKind::WouldBlock | ErrorKind::TimedOut | ErrorKind::Interrupted => {
                RecoveryHint::Retry {
                    after: Duration::from_millis(100),
                }
            }
            ErrorKind::InvalidData => RecoveryHint::ClearAndRetry,
            _ if source.raw_os_error() == Some(ENOSPC) => RecoveryHint::CheckDiskSpace,
            _ => RecoveryHint::Manual {
                instructions: format!("Inspect '{}'", path.display()),
            },
        };

        Self::Io {
            path,
            operation,
            source,
            recovery_hint,
        }
    }

    /// Failure reported by a custom disk backend
    pub fn storage(
        namespace: &str,
        key: &str,
        operation: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::Storage {
            namespace: namespace.to_string(),
            key: key.to_string(),
            operation,
            message: message.into(),
            recovery_hint: RecoveryHint::Retry {
                after: Duration::from_millis(100),
            },
        }
    }

    /// Wrap a codec failure for `key`
    pub fn serialization(
        key: &str,
        operation: SerializationOp,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        let recovery_hint = match operation {
            SerializationOp::Encode => RecoveryHint::Manual {
                instructions: "Check that the value is serializable".to_string(),
            },
            SerializationOp::Decode => RecoveryHint::ClearAndRetry,
        };

        Self::Serialization {
            key: key.to_string(),
            operation,
            source: Box::new(source),
            recovery_hint,
        }
    }

    /// Invalid configuration value
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            recovery_hint: RecoveryHint::Manual {
                instructions: "Check the cache configuration".to_string(),
            },
        }
    }
}
