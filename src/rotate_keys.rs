// src/rotate_keys.rs
//! Re-encrypting stored blobs under a new key or mode
//!
//! Pure in-memory: decrypt with the old engine, encrypt with the new one.
//! Every re-encrypted blob gets a fresh IV.

use tracing::{debug, info};

use crate::aliases::SymmetricKey;
use crate::engine::CipherEngine;
use crate::enums::CipherMode;
use crate::error::{Result, RotationError};
use crate::key_ops::generate_key;

/// Move one blob from `old` to `new`
pub fn rotate_blob(old: &CipherEngine, new: &CipherEngine, blob: &str) -> Result<String> {
    let plaintext = old.decrypt_bytes(blob)?;
    new.encrypt_bytes(&plaintext)
}

/// Rotate one blob to a freshly generated key, keeping the mode
pub fn rotate_key(old: &CipherEngine, blob: &str) -> Result<(String, SymmetricKey)> {
    let new_key = generate_key();
    let new = CipherEngine::new(new_key.clone(), old.mode());
    let rotated = rotate_blob(old, &new, blob)?;
    Ok((rotated, new_key))
}

/// Legacy CTR blob → CBC blob under the same key
pub fn upgrade_legacy(key: &SymmetricKey, blob: &str) -> Result<String> {
    let legacy = CipherEngine::new(key.clone(), CipherMode::Ctr);
    let current = CipherEngine::new(key.clone(), CipherMode::Cbc);
    rotate_blob(&legacy, &current, blob)
}

/// Rotate a batch; stops at the first blob that fails
pub fn rotate_all<I, S>(
    old: &CipherEngine,
    new: &CipherEngine,
    blobs: I,
) -> std::result::Result<Vec<String>, RotationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rotated = Vec::new();
    for (index, blob) in blobs.into_iter().enumerate() {
        let next = rotate_blob(old, new, blob.as_ref()).map_err(|source| {
            debug!(index, error = %source, "rotation aborted");
            RotationError { index, source }
        })?;
        rotated.push(next);
    }
    info!(
        count = rotated.len(),
        from = %old.key_fingerprint(),
        to = %new.key_fingerprint(),
        "rotated blobs"
    );
    Ok(rotated)
}
