//! HTTP client for the RAG backend
//!
//! Two endpoints, no retries: every failure is reported once to the caller,
//! which decides on the demo-mode fallback.

use std::time::Duration;

use ragchat_core::prelude::*;
use ragchat_core::FileCandidate;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use url::Url;

use crate::protocol::{extract_reply, ChatRequest};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_CHAT_PATH: &str = "/chat";
pub const DEFAULT_UPLOAD_PATH: &str = "/upload";

/// Operations the app needs from the backend.
///
/// The TUI and headless runners both drive the backend through this trait,
/// which keeps the TEA layer testable against a scripted double.
#[trait_variant::make(Backend: Send)]
pub trait LocalBackend {
    /// Send one chat message and return the reply text
    async fn send_chat(&self, message: &str) -> Result<String>;

    /// Upload one document; returns the backend's JSON answer
    async fn upload_document(&self, file: &FileCandidate) -> Result<Value>;
}

/// Where the backend lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: Url,
    pub chat_path: String,
    pub upload_path: String,
    /// Per-request timeout; `None` leaves the transport default
    pub timeout: Option<Duration>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            upload_path: DEFAULT_UPLOAD_PATH.to_string(),
            timeout: None,
        }
    }
}

impl BackendConfig {
    /// Parse and validate a base URL
    pub fn parse_base_url(raw: &str) -> Result<Url> {
        let url = Url::parse(raw)
            .map_err(|e| Error::config_invalid(format!("invalid base URL '{}': {}", raw, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::config_invalid(format!(
                "unsupported URL scheme '{}' in '{}'",
                other, raw
            ))),
        }
    }

    pub fn chat_url(&self) -> String {
        join_endpoint(&self.base_url, &self.chat_path)
    }

    pub fn upload_url(&self) -> String {
        join_endpoint(&self.base_url, &self.upload_path)
    }
}

/// Concatenate base and path, tolerating a trailing or missing slash
fn join_endpoint(base: &Url, path: &str) -> String {
    let base = base.as_str().trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// reqwest-backed implementation of [`Backend`]
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

impl Backend for HttpBackend {
    async fn send_chat(&self, message: &str) -> Result<String> {
        let url = self.config.chat_url();
        debug!("POST {} ({} chars)", url, message.len());

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|e| Error::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::connection(format!("HTTP error! status: {}", status)));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::connection(format!("Failed to parse response: {}", e)))?;

        extract_reply(&body).ok_or_else(|| Error::connection("response contained no reply"))
    }

    async fn upload_document(&self, file: &FileCandidate) -> Result<Value> {
        let url = self.config.upload_url();
        debug!("POST {} ({}, {} bytes)", url, file.name, file.size);

        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|e| Error::upload(format!("Failed to read {}: {}", file.path.display(), e)))?;

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(&file.mime)
            .map_err(|e| Error::upload(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::upload(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::upload(status.to_string()));
        }

        response
            .json()
            .await
            .map_err(|e| Error::upload(format!("Failed to parse response: {}", e)))
    }
}
