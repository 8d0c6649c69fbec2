// src/core/crypto/mod.rs
//! Pure cryptographic operations on in-memory buffers
//!
//! Every call builds its own AES context from the key bytes, so nothing
//! here holds mutable state between calls and all functions are safe to
//! run in parallel on the same key.

mod decrypt;
mod encrypt;

pub use decrypt::decrypt_to_vec;
pub use encrypt::{encrypt_to_vec, generate_iv};

pub(crate) type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
pub(crate) type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
pub(crate) type Aes128Ctr = ctr::Ctr128BE<aes::Aes128>;
