//! The `IV‖ciphertext` wire form and its single-line Base64 encoding
//!
//! ```text
//! base64( iv[16] ‖ ciphertext[16·n] ),  n ≥ 1
//! ```
//!
//! The blob carries its own IV, so the key is the only thing a reader
//! needs to decrypt it later.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::aliases::Iv;
use crate::consts::IV_LENGTH;
use crate::error::{CipherError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBlob {
    pub iv: Iv,
    pub ciphertext: Vec<u8>,
}

impl EncodedBlob {
    pub fn new(iv: Iv, ciphertext: Vec<u8>) -> Self {
        Self { iv, ciphertext }
    }

    /// `iv ‖ ciphertext` as one buffer
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(IV_LENGTH + self.ciphertext.len());
        buffer.extend_from_slice(&self.iv);
        buffer.extend_from_slice(&self.ciphertext);
        buffer
    }

    /// Split a raw `iv ‖ ciphertext` buffer
    ///
    /// # Errors
    ///
    /// [`CipherError::MalformedInput`] if there is nothing after the IV.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() <= IV_LENGTH {
            return Err(CipherError::MalformedInput(format!(
                "decoded length {} leaves no ciphertext after the {IV_LENGTH}-byte IV",
                bytes.len()
            )));
        }
        let (iv_bytes, ciphertext) = bytes.split_at(IV_LENGTH);
        let mut iv = [0u8; IV_LENGTH];
        iv.copy_from_slice(iv_bytes);
        Ok(Self::new(iv, ciphertext.to_vec()))
    }

    /// Standard-alphabet Base64, padded, never line-wrapped
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Parse text produced by [`EncodedBlob::to_base64`]
    ///
    /// # Errors
    ///
    /// [`CipherError::MalformedInput`] for invalid Base64 or a buffer too
    /// short to hold an IV plus ciphertext.
    pub fn from_base64(text: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(text.trim())
            .map_err(|e| CipherError::MalformedInput(e.to_string()))?;
        Self::from_bytes(&bytes)
    }
}
