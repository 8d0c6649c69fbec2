// src/engine.rs
//! The cipher engine: text in, single-line Base64 blob out, and back
//!
//! An engine owns one key and one [`CipherMode`]. Each call builds its own
//! cipher context and IV, so a shared `&CipherEngine` can be used from any
//! number of threads without locking.

use tracing::{debug, trace};

use crate::aliases::SymmetricKey;
use crate::core::{decrypt_to_vec, encrypt_to_vec, generate_iv, EncodedBlob};
use crate::enums::{CipherMode, KeyPolicy};
use crate::error::{CipherError, Result};
use crate::identity::IdentityProvider;
use crate::key_ops::{derive_from_identity, derive_from_string};

#[derive(Debug, Clone)]
pub struct CipherEngine {
    key: SymmetricKey,
    mode: CipherMode,
}

impl CipherEngine {
    pub fn new(key: SymmetricKey, mode: CipherMode) -> Self {
        debug!(mode = mode.as_str(), key = %key.fingerprint(), "cipher engine ready");
        Self { key, mode }
    }

    /// Strict 16-byte key string, CBC mode
    pub fn from_key_str(key: &str) -> Result<Self> {
        Self::from_key_str_with(key, KeyPolicy::Strict, CipherMode::Cbc)
    }

    pub fn from_key_str_with(key: &str, policy: KeyPolicy, mode: CipherMode) -> Result<Self> {
        Ok(Self::new(derive_from_string(key, policy)?, mode))
    }

    /// Key derived from device id and application id
    pub fn from_identity(device_id: &[u8], app_id: &str, mode: CipherMode) -> Result<Self> {
        Ok(Self::new(derive_from_identity(device_id, app_id)?, mode))
    }

    pub fn from_provider<P: IdentityProvider + ?Sized>(provider: &P, mode: CipherMode) -> Result<Self> {
        Self::from_identity(&provider.device_id(), &provider.app_id(), mode)
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn key_fingerprint(&self) -> String {
        self.key.fingerprint()
    }

    /// Encrypt text into a Base64 blob carrying its own IV
    ///
    /// # Errors
    ///
    /// [`CipherError::EncryptionFailure`] only if the cipher rejects the key,
    /// which a constructed engine never does.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        self.encrypt_bytes(plaintext.as_bytes())
    }

    /// Decrypt a blob produced by [`CipherEngine::encrypt`]
    ///
    /// # Errors
    ///
    /// [`CipherError::MalformedInput`] when the text is not a blob at all,
    /// [`CipherError::DecryptionFailure`] when it does not decrypt to UTF-8
    /// under this key and mode.
    pub fn decrypt(&self, blob: &str) -> Result<String> {
        let plaintext = self.decrypt_bytes(blob)?;
        String::from_utf8(plaintext).map_err(|_| {
            debug!("decrypted bytes are not UTF-8");
            CipherError::DecryptionFailure
        })
    }

    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> Result<String> {
        let iv = generate_iv();
        let ciphertext = encrypt_to_vec(self.mode, &self.key, &iv, plaintext)?;
        trace!(
            plaintext_len = plaintext.len(),
            ciphertext_len = ciphertext.len(),
            "encrypted"
        );
        Ok(EncodedBlob::new(iv, ciphertext).to_base64())
    }

    pub fn decrypt_bytes(&self, blob: &str) -> Result<Vec<u8>> {
        let blob = EncodedBlob::from_base64(blob)?;
        let plaintext = decrypt_to_vec(self.mode, &self.key, &blob.iv, &blob.ciphertext)
            .inspect_err(|_| debug!(mode = self.mode.as_str(), "decryption failed"))?;
        trace!(
            ciphertext_len = blob.ciphertext.len(),
            plaintext_len = plaintext.len(),
            "decrypted"
        );
        Ok(plaintext)
    }
}
