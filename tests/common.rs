// tests/common.rs
//! Shared test utilities: logging setup and fixtures

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Key used by the fixed scenarios
#[allow(dead_code)]
pub const SAMPLE_KEY: &str = "0123456789abcdef";

/// Mixed Japanese / ASCII text
#[allow(dead_code)]
pub const MULTI_BYTE: &str = "日本語の混じった文字列。 Hello, world!";

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
#[allow(dead_code)]
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// Printable ASCII string of `len` chars, varied by `seed`
#[allow(dead_code)]
pub fn ascii_text(len: usize, seed: usize) -> String {
    (0..len)
        .map(|i| (b' ' + ((i * 31 + seed * 7) % 95) as u8) as char)
        .collect()
}
