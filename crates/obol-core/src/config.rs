//! Application configuration

use serde::{Deserialize, Serialize};

/// Environment variable holding the base path prefix, mirroring how the
/// hosting environment tells the client where it is mounted.
pub const BASE_URL_VAR: &str = "OBOL_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base path prefix the application is served under
    pub base_path: String,
}

impl Config {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Read the base path from `OBOL_BASE_URL`, defaulting to `/`.
    pub fn from_env() -> Self {
        let base_path = std::env::var(BASE_URL_VAR).unwrap_or_else(|_| "/".to_string());
        Self { base_path }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("/")
    }
}
