// src/aliases.rs
//! Secret-holding types used throughout prefcrypt
//!
//! Key bytes live only inside [`SymmetricKey`], which zeroizes itself on drop
//! and never prints its contents.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{IV_LENGTH, KEY_LENGTH};
use crate::core::util::fingerprint_hex;

/// Raw initialization vector
pub type Iv = [u8; IV_LENGTH];

/// 128-bit AES key
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey([u8; KEY_LENGTH]);

impl SymmetricKey {
    pub fn new(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn expose_secret(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    /// Short SHA-256 based identifier, safe to log
    pub fn fingerprint(&self) -> String {
        fingerprint_hex(&self.0)
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SymmetricKey")
            .field(&self.fingerprint())
            .finish()
    }
}
