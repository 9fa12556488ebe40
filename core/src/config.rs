//! Client configuration.
//!
//! The only setting is the backend base path. It can come from a TOML file,
//! and `PETSTORE_BASE_PATH` overrides whatever the file says. Missing values
//! fall back to a local backend.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable that overrides the configured base path.
pub const BASE_PATH_ENV: &str = "PETSTORE_BASE_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root URL of the REST backend, e.g. `http://localhost:8080`.
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
        }
    }
}

fn default_base_path() -> String {
    "http://localhost:8080".to_string()
}

impl ClientConfig {
    /// Defaults plus the environment override.
    pub fn from_env() -> Self {
        Self::default().with_override(std::env::var(BASE_PATH_ENV).ok())
    }

    /// Read a TOML file, then apply the environment override.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?.with_override(std::env::var(BASE_PATH_ENV).ok());
        tracing::debug!(path = %path.display(), base_path = %config.base_path, "loaded client config");
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(raw)?;
        config.validate()
    }

    /// Replace the base path when `base_path` is set and non-blank.
    pub fn with_override(mut self, base_path: Option<String>) -> Self {
        if let Some(base_path) = base_path.filter(|p| !p.trim().is_empty()) {
            self.base_path = base_path.trim().to_string();
        }
        self
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.base_path.trim().is_empty() {
            return Err(ConfigError::EmptyBasePath);
        }
        Ok(self)
    }
}
