// src/key_ops.rs
//! Key derivation, generation and representation
//!
//! Every path ends in a [`SymmetricKey`] of exactly `KEY_LENGTH` bytes.
//! Strings are taken as their UTF-8 bytes; identity keys mix an MD5 digest
//! of the application id into the device id.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use md5::{Digest, Md5};
use rand::RngCore;
use tracing::warn;

use crate::aliases::SymmetricKey;
use crate::consts::{KEY_FILLER_BYTE, KEY_LENGTH};
use crate::enums::KeyPolicy;
use crate::error::{CipherError, Result};

/// Key from raw bytes; length must be exactly `KEY_LENGTH`
pub fn derive_from_bytes(bytes: &[u8]) -> Result<SymmetricKey> {
    let key: [u8; KEY_LENGTH] = bytes
        .try_into()
        .map_err(|_| CipherError::key_length(bytes.len()))?;
    Ok(SymmetricKey::new(key))
}

/// Key from a caller string under the given policy
///
/// `Lenient` pads with `KEY_FILLER_BYTE` or truncates, but an empty string
/// is rejected under both policies.
pub fn derive_from_string(key: &str, policy: KeyPolicy) -> Result<SymmetricKey> {
    let bytes = key.as_bytes();
    match policy {
        KeyPolicy::Strict => derive_from_bytes(bytes),
        KeyPolicy::Lenient => {
            if bytes.is_empty() {
                return Err(CipherError::key_length(0));
            }
            if bytes.len() != KEY_LENGTH {
                warn!(
                    actual = bytes.len(),
                    expected = KEY_LENGTH,
                    "key string has the wrong length; padding or truncating"
                );
            }
            let mut key = [KEY_FILLER_BYTE; KEY_LENGTH];
            let n = bytes.len().min(KEY_LENGTH);
            key[..n].copy_from_slice(&bytes[..n]);
            Ok(SymmetricKey::new(key))
        }
    }
}

/// Key from a hex string (32 hex digits)
pub fn derive_from_hex(key_hex: &str) -> Result<SymmetricKey> {
    let bytes =
        hex::decode(key_hex.trim()).map_err(|e| CipherError::InvalidKeyEncoding(e.to_string()))?;
    derive_from_bytes(&bytes)
}

/// Key from a 16-byte device identifier and an application id
///
/// `MD5(app_id) XOR device_id`. Same inputs always give the same key.
pub fn derive_from_identity(device_id: &[u8], app_id: &str) -> Result<SymmetricKey> {
    if device_id.len() != KEY_LENGTH {
        return Err(CipherError::key_length(device_id.len()));
    }

    let digest = Md5::digest(app_id.as_bytes());
    let mut key = [0u8; KEY_LENGTH];
    for (i, byte) in key.iter_mut().enumerate() {
        *byte = digest[i] ^ device_id[i];
    }
    Ok(SymmetricKey::new(key))
}

/// Generate a new random 128-bit key
#[inline]
pub fn generate_key() -> SymmetricKey {
    let mut key = [0u8; KEY_LENGTH];
    rand::rng().fill_bytes(&mut key);
    SymmetricKey::new(key)
}

/// String representations of a key for export/display
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
    pub fingerprint: String,
}

pub fn key_representations(key: &SymmetricKey) -> KeyRepr {
    KeyRepr {
        hex: hex::encode(key.expose_secret()),
        base64: STANDARD.encode(key.expose_secret()),
        fingerprint: key.fingerprint(),
    }
}
