// src/identity.rs
//! Device/application identity supplied by the host platform
//!
//! prefcrypt never looks these values up itself. A platform layer (a
//! preference store adapter, a mobile shell) implements
//! [`IdentityProvider`] and hands it to the engine.

/// Source of the two opaque inputs of an identity-derived key
pub trait IdentityProvider {
    /// Stable device identifier, `KEY_LENGTH` bytes
    fn device_id(&self) -> Vec<u8>;

    /// Application/package identifier
    fn app_id(&self) -> String;
}

/// Fixed identity, e.g. read from config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticIdentity {
    pub device_id: Vec<u8>,
    pub app_id: String,
}

impl StaticIdentity {
    pub fn new(device_id: impl Into<Vec<u8>>, app_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            app_id: app_id.into(),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn device_id(&self) -> Vec<u8> {
        self.device_id.clone()
    }

    fn app_id(&self) -> String {
        self.app_id.clone()
    }
}
