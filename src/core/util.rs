//! Small helpers used across the core module

use sha2::{Digest, Sha256};

use crate::consts::FINGERPRINT_LENGTH;

/// Truncated SHA-256 of `data` as lowercase hex
pub fn fingerprint_hex(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    hex::encode(&digest[..FINGERPRINT_LENGTH])
}
