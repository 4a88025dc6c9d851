//! Value serialization for the disk tier
//!
//! The memory tier stores values as-is. Only the disk-facing paths need a
//! byte representation, produced by the [`Codec`] configured per instance.

use crate::errors::{CacheError, RecoveryHint, Result, SerializationOp};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serialization capability used by an instance's disk tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    /// Compact binary encoding via `bincode`
    #[default]
    Bincode,
    /// Human-readable encoding via `serde_json`
    Json,
}

impl Codec {
    /// Serialize a value for storage under `key`
    pub fn encode<T>(&self, key: &str, value: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        match self {
            Self::Bincode => bincode::serialize(value)
                .map_err(|e| CacheError::serialization(key, SerializationOp::Encode, e)),
            Self::Json => serde_json::to_vec(value)
                .map_err(|e| CacheError::serialization(key, SerializationOp::Encode, e)),
        }
    }

    /// Deserialize a value previously stored under `key`
    pub fn decode<T: DeserializeOwned>(&self, key: &str, bytes: &[u8]) -> Result<T> {
        match self {
            Self::Bincode => bincode::deserialize(bytes)
                .map_err(|e| CacheError::serialization(key, SerializationOp::Decode, e)),
            Self::Json => serde_json::from_slice(bytes)
                .map_err(|e| CacheError::serialization(key, SerializationOp::Decode, e)),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bincode => "bincode",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Codec {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bincode" => Ok(Self::Bincode),
            "json" => Ok(Self::Json),
            other => Err(CacheError::Configuration {
                message: format!("Unknown codec: {other}"),
                recovery_hint: RecoveryHint::UseDefault {
                    value: Self::default().name().to_string(),
                },
            }),
        }
    }
}
