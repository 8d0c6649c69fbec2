use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::*;
use crate::aliases::SymmetricKey;
use crate::consts::{CONFIG_PATH_ENV, KEY_ENV};
use crate::engine::CipherEngine;
use crate::enums::{CipherMode, KeyPolicy};
use crate::error::ConfigError;
use crate::key_ops::{derive_from_hex, derive_from_identity, derive_from_string};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_cipher")]
    pub cipher: CipherSettings,
    #[serde(default = "default_keys")]
    pub key: KeySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CipherSettings {
    #[serde(default)]
    pub mode: CipherMode,
    #[serde(default)]
    pub key_policy: KeyPolicy,
}

/// Where the engine key comes from, first match wins:
/// `secret_hex`, then `secret`, then `device_id` + `app_id`
#[derive(Clone, Default, Deserialize)]
pub struct KeySettings {
    pub secret: Option<String>,
    pub secret_hex: Option<String>,
    pub device_id: Option<String>,
    pub app_id: Option<String>,
}

impl fmt::Debug for KeySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("KeySettings")
            .field("secret", &redact(&self.secret))
            .field("secret_hex", &redact(&self.secret_hex))
            .field("device_id", &redact(&self.device_id))
            .field("app_id", &self.app_id)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cipher: default_cipher(),
            key: default_keys(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Replace the configured key string, e.g. with `PREFCRYPT_KEY`
    pub fn with_key_override(mut self, secret: Option<String>) -> Self {
        if let Some(secret) = secret {
            debug!("key string taken from override");
            self.key.secret = Some(secret);
            self.key.secret_hex = None;
        }
        self
    }

    /// Derive the key this config names
    pub fn symmetric_key(&self) -> Result<SymmetricKey, ConfigError> {
        let key = &self.key;
        if let Some(secret_hex) = &key.secret_hex {
            Ok(derive_from_hex(secret_hex)?)
        } else if let Some(secret) = &key.secret {
            Ok(derive_from_string(secret, self.cipher.key_policy)?)
        } else if let (Some(device_id), Some(app_id)) = (&key.device_id, &key.app_id) {
            Ok(derive_from_identity(device_id.as_bytes(), app_id)?)
        } else {
            Err(ConfigError::MissingKey { env: KEY_ENV })
        }
    }

    /// Build the engine this config describes
    pub fn engine(&self) -> Result<CipherEngine, ConfigError> {
        Ok(CipherEngine::new(self.symmetric_key()?, self.cipher.mode))
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// `PREFCRYPT_CONFIG` if set, else the platform default
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

/// Read a config file, or defaults if it is missing
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let conf = if path.exists() {
        debug!(path = %path.display(), "loading config");
        Config::from_toml_str(&std::fs::read_to_string(path)?)?
    } else {
        warn!(path = %path.display(), "config file not found, using built-in defaults");
        Config::default()
    };

    Ok(conf.with_key_override(std::env::var(KEY_ENV).ok()))
}

/// Global config, loaded once from [`config_path`]
pub fn load() -> Result<&'static Config, ConfigError> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }
    let conf = load_from(&config_path())?;
    Ok(CONFIG.get_or_init(|| conf))
}
