// src/core/mod.rs
//! Pure building blocks of the cipher engine

pub mod blob;
pub mod crypto;
pub mod util;

pub use blob::EncodedBlob;
pub use crypto::*;
pub use util::*;

pub type Result<T> = crate::error::Result<T>;
