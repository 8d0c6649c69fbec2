// src/consts.rs
//! Shared constants: key, IV and encoding parameters

/// Length of every symmetric key in bytes (AES-128)
pub const KEY_LENGTH: usize = 128 / 8;

/// Length of the IV prepended to every ciphertext (one AES block)
pub const IV_LENGTH: usize = 16;

/// Byte used by the lenient key policy to pad short key strings
pub const KEY_FILLER_BYTE: u8 = b'0';

/// Number of SHA-256 bytes kept in a key fingerprint
pub const FINGERPRINT_LENGTH: usize = 8;

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "PREFCRYPT_CONFIG";

/// Environment variable overriding the configured key string
pub const KEY_ENV: &str = "PREFCRYPT_KEY";

/// Config file name inside the platform config directory
pub const DEFAULT_CONFIG_FILE: &str = "prefcrypt/config.toml";
