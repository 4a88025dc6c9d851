//! On-disk record format
//!
//! Every payload written by the disk tier is wrapped in a fixed header so
//! truncated or bit-rotted records are detected on read:
//!
//! ```text
//! magic "TCR1" | version u16 | flags u16 | payload_len u64 | payload_crc u32 | payload
//! ```
//!
//! All integers are little-endian.

use crate::errors::{CacheError, RecoveryHint, Result};
use crc32c::crc32c;

/// Magic number for cache records: "TCR1" (TierCache Record)
pub const RECORD_MAGIC: [u8; 4] = *b"TCR1";

/// Current storage format version
pub const FORMAT_VERSION: u16 = 1;

/// Size of the fixed header in bytes
pub const HEADER_LEN: usize = 4 + 2 + 2 + 8 + 4;

/// Parsed record header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub version: u16,
    pub flags: u16,
    pub payload_len: u64,
    pub payload_crc: u32,
}

impl RecordHeader {
    fn for_payload(payload: &[u8]) -> Self {
        Self {
            version: FORMAT_VERSION,
            flags: 0,
            payload_len: payload.len() as u64,
            payload_crc: crc32c(payload),
        }
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&RECORD_MAGIC);
        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(&self.flags.to_le_bytes());
        out.extend_from_slice(&self.payload_len.to_le_bytes());
        out.extend_from_slice(&self.payload_crc.to_le_bytes());
    }

    fn parse(key: &str, bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(corruption(
                key,
                format!("record is {} bytes, shorter than its header", bytes.len()),
            ));
        }

        if bytes[..4] != RECORD_MAGIC {
            return Err(corruption(
                key,
                format!("invalid magic number {:02x?}", &bytes[..4]),
            ));
        }

        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        if version > FORMAT_VERSION {
            return Err(corruption(
                key,
                format!("unsupported record version: {version}"),
            ));
        }

        let flags = u16::from_le_bytes([bytes[6], bytes[7]]);
        let mut len = [0u8; 8];
        len.copy_from_slice(&bytes[8..16]);
        let mut crc = [0u8; 4];
        crc.copy_from_slice(&bytes[16..20]);

        Ok(Self {
            version,
            flags,
            payload_len: u64::from_le_bytes(len),
            payload_crc: u32::from_le_bytes(crc),
        })
    }
}

/// Frame a payload for storage
pub fn encode_record(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    RecordHeader::for_payload(payload).write_to(&mut out);
    out.extend_from_slice(payload);
    out
}

/// Validate a stored record and return its payload
pub fn decode_record<'a>(key: &str, bytes: &'a [u8]) -> Result<&'a [u8]> {
    let header = RecordHeader::parse(key, bytes)?;
    let payload = &bytes[HEADER_LEN..];

    if payload.len() as u64 != header.payload_len {
        return Err(corruption(
            key,
            format!(
                "payload length mismatch: header says {}, found {}",
                header.payload_len,
                payload.len()
            ),
        ));
    }

    let actual_crc = crc32c(payload);
    if actual_crc != header.payload_crc {
        return Err(corruption(
            key,
            format!(
                "payload CRC mismatch: expected {:08x}, got {actual_crc:08x}",
                header.payload_crc
            ),
        ));
    }

    Ok(payload)
}

fn corruption(key: &str, reason: String) -> CacheError {
    CacheError::Corruption {
        key: key.to_string(),
        reason,
        recovery_hint: RecoveryHint::ClearAndRetry,
    }
}
