//! Wire format for echo payloads
//!
//! A probe packet is exactly 8 bytes: one IEEE-754 double-precision
//! timestamp in native byte order. The echo endpoint returns the bytes
//! untouched, so decode(encode(v)) must be bit-identical to v.

use crate::error::{AppError, Result};

/// Size of a probe payload in bytes
pub const TIMESTAMP_LEN: usize = 8;

/// Serialize a timestamp into its 8-byte wire form
pub fn encode_timestamp(timestamp: f64) -> [u8; TIMESTAMP_LEN] {
    timestamp.to_ne_bytes()
}

/// Decode a timestamp from a reply payload
///
/// The payload must be exactly [`TIMESTAMP_LEN`] bytes.
pub fn decode_timestamp(payload: &[u8]) -> Result<f64> {
    let bytes: [u8; TIMESTAMP_LEN] = payload.try_into().map_err(|_| {
        AppError::parse(format!(
            "Expected {} byte reply payload, got {} bytes",
            TIMESTAMP_LEN,
            payload.len()
        ))
    })?;
    Ok(f64::from_ne_bytes(bytes))
}
