//! Inference backend configuration from TOML (`[backend]` section)

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_PORT: u16 = 11434;

/// Raw backend configuration from TOML
///
/// # Example
///
/// ```toml
/// [backend]
/// host = "192.168.1.20"
/// port = 11434
/// # or, bypassing host/port entirely:
/// # base_url = "https://ollama.internal"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    pub host: Option<String>,
    pub port: u16,
    pub base_url: Option<String>,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_BACKEND_PORT,
            base_url: None,
        }
    }
}

impl FileBackendConfig {
    /// Base URL of the backend, without a trailing slash
    pub fn base_url(&self) -> Result<String, ConfigError> {
        if let Some(url) = self.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
            return Ok(url.trim().trim_end_matches('/').to_string());
        }
        let host = self
            .host
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or(ConfigError::Missing {
                field: "backend.host",
                env: "BACKEND_HOST",
            })?;
        Ok(format!("http://{}:{}", host, self.port))
    }
}
