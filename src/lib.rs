// src/lib.rs
//! prefcrypt: text-in, text-out symmetric encryption for stored values
//!
//! Features:
//! - AES-128-CBC (default) or legacy AES-128-CTR, PKCS#7 padded
//! - Fresh random IV per call, carried inside the blob
//! - Single-line Base64 blobs: `base64(iv ‖ ciphertext)`
//! - Keys from a 16-byte string, raw/hex bytes, or device + app identity
//!
//! There is no authentication tag: a modified blob may decrypt to garbage
//! instead of failing. Confidentiality only.

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod engine;
pub mod enums;
pub mod error;
pub mod identity;
pub mod key_ops;
pub mod rotate_keys;

// Re-export everything users need at the crate root
pub use aliases::SymmetricKey;
pub use config::load as load_config;
pub use consts::{IV_LENGTH, KEY_LENGTH};
pub use crate::core::EncodedBlob;
pub use engine::CipherEngine;
pub use enums::{CipherMode, KeyPolicy};
pub use error::{CipherError, ConfigError, RotationError};
pub use identity::{IdentityProvider, StaticIdentity};
pub use key_ops::{
    derive_from_bytes, derive_from_hex, derive_from_identity, derive_from_string, generate_key,
};
pub use rotate_keys::{rotate_all, rotate_blob, rotate_key, upgrade_legacy};
