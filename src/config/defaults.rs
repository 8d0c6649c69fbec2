use std::path::PathBuf;

use crate::config::app::{CipherSettings, KeySettings};
use crate::consts::DEFAULT_CONFIG_FILE;
use crate::enums::{CipherMode, KeyPolicy};

pub fn default_cipher() -> CipherSettings {
    CipherSettings {
        mode: CipherMode::Cbc,
        key_policy: KeyPolicy::Strict,
    }
}

pub fn default_keys() -> KeySettings {
    KeySettings {
        secret: None,
        secret_hex: None,
        device_id: None,
        app_id: None,
    }
}

/// `<platform config dir>/prefcrypt/config.toml`, or `./prefcrypt.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(DEFAULT_CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from("prefcrypt.toml"))
}
