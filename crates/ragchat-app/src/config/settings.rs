//! Settings file loading, environment overrides and first-run setup

use std::path::{Path, PathBuf};

use ragchat_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "ragchat";

/// Environment variable overriding `[server] base_url`
pub const BASE_URL_ENV: &str = "RAGCHAT_BASE_URL";

/// Default location: `<config dir>/ragchat/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing file yields defaults. A file that cannot be read or parsed is
/// logged and also yields defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply `RAGCHAT_BASE_URL` on top of file settings
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        let base_url = base_url.trim();
        if !base_url.is_empty() {
            debug!("{} overrides base URL: {}", BASE_URL_ENV, base_url);
            settings.server.base_url = base_url.to_string();
        }
    }
}

/// Write a commented default config file unless one already exists.
/// Returns the path written (or already present).
pub fn init_config_file(config_path: &Path) -> Result<PathBuf> {
    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
        }
    }

    if config_path.exists() {
        info!("Config file already exists at {:?}", config_path);
        return Ok(config_path.to_path_buf());
    }

    let default_content = r#"# ragchat configuration

[server]
base_url = "http://localhost:8000"   # RAG backend; RAGCHAT_BASE_URL overrides
chat_path = "/chat"
upload_path = "/upload"
timeout_secs = 0                     # 0 = no client-side timeout

[behavior]
thinking_delay_ms = 1000             # pause before each chat request

[upload]
max_file_size_mb = 10
"#;

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);

    Ok(config_path.to_path_buf())
}
