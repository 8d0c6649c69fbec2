// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

use crate::consts::KEY_LENGTH;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("private key is {}: expected {expected} bytes but got {actual}", verdict(.actual, .expected))]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("private key is not valid hex: {0}")]
    InvalidKeyEncoding(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("unexpected decryption state")]
    DecryptionFailure,

    #[error("unexpected encryption state")]
    EncryptionFailure,
}

fn verdict(actual: &usize, expected: &usize) -> &'static str {
    if actual < expected {
        "too short"
    } else {
        "too long"
    }
}

impl CipherError {
    pub(crate) fn key_length(actual: usize) -> Self {
        CipherError::InvalidKeyLength {
            expected: KEY_LENGTH,
            actual,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML in config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config names no key: set key.secret, key.secret_hex, key.device_id + key.app_id, or {env}")]
    MissingKey { env: &'static str },

    #[error("config key rejected: {0}")]
    Key(#[from] CipherError),
}

pub type Result<T> = std::result::Result<T, CipherError>;

/// A batch rotation stopped at `index`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("blob #{index} could not be rotated: {source}")]
pub struct RotationError {
    pub index: usize,
    #[source]
    pub source: CipherError,
}
