//! Configuration system for prefcrypt
//!
//! Lazy-loaded global config from TOML, with an env override for the key.

pub use app::{config_path, load, load_from, CipherSettings, Config, KeySettings};

mod app;
mod defaults;
