//! Configuration types for ragchat
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - `ServerSettings`, `BehaviorSettings`, `UploadSettings` - its sections

use std::time::Duration;

use ragchat_api::{BackendConfig, DEFAULT_BASE_URL, DEFAULT_CHAT_PATH, DEFAULT_UPLOAD_PATH};
use ragchat_core::prelude::*;
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub upload: UploadSettings,
}

/// Where the RAG backend lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_chat_path")]
    pub chat_path: String,

    #[serde(default = "default_upload_path")]
    pub upload_path: String,

    /// Request timeout in seconds; 0 leaves the transport default
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            chat_path: default_chat_path(),
            upload_path: default_upload_path(),
            timeout_secs: 0,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_chat_path() -> String {
    DEFAULT_CHAT_PATH.to_string()
}

fn default_upload_path() -> String {
    DEFAULT_UPLOAD_PATH.to_string()
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Pause before each chat request, in milliseconds
    #[serde(default = "default_thinking_delay_ms")]
    pub thinking_delay_ms: u64,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            thinking_delay_ms: default_thinking_delay_ms(),
        }
    }
}

fn default_thinking_delay_ms() -> u64 {
    1000
}

/// Upload settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UploadSettings {
    /// Largest accepted file, in MiB (inclusive)
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size_mb(),
        }
    }
}

fn default_max_file_size_mb() -> u64 {
    10
}

impl Settings {
    /// Build the HTTP client configuration. Fails on an invalid base URL.
    pub fn backend_config(&self) -> Result<BackendConfig> {
        let base_url = BackendConfig::parse_base_url(&self.server.base_url)?;
        let timeout =
            (self.server.timeout_secs > 0).then(|| Duration::from_secs(self.server.timeout_secs));

        Ok(BackendConfig {
            base_url,
            chat_path: self.server.chat_path.clone(),
            upload_path: self.server.upload_path.clone(),
            timeout,
        })
    }

    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.behavior.thinking_delay_ms)
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.upload.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}
