//! Configuration file parsing for ragchat
//!
//! Supports `~/.config/ragchat/config.toml` (or a path given on the command
//! line) plus the `RAGCHAT_BASE_URL` environment override.

pub mod settings;
pub mod types;

pub use settings::{
    apply_env_overrides, default_config_path, init_config_file, load_settings, BASE_URL_ENV,
};
pub use types::*;
