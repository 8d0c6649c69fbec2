// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: block cipher mode and
//! how key strings of the wrong length are treated.

use serde::{Deserialize, Serialize};

/// Block cipher mode, fixed for the lifetime of an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum CipherMode {
    /// AES-128-CBC with PKCS#7 padding
    #[default]
    Cbc,
    /// AES-128-CTR over PKCS#7-padded plaintext (legacy blobs)
    Ctr,
}

impl CipherMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherMode::Cbc => "cbc",
            CipherMode::Ctr => "ctr",
        }
    }
}

/// What to do with a key string whose UTF-8 length is not `KEY_LENGTH`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// Reject anything but exactly `KEY_LENGTH` bytes
    #[default]
    Strict,
    /// Pad with `KEY_FILLER_BYTE` or truncate to `KEY_LENGTH` bytes
    Lenient,
}
