//! Test utilities for backend consumers
//!
//! Provides a scripted [`MockBackend`] that records every call, so app-level
//! tests can assert on what was (or was not) sent over the network.

use std::sync::Mutex;

use ragchat_core::prelude::*;
use ragchat_core::FileCandidate;
use serde_json::{json, Value};

use crate::client::Backend;

/// Scripted backend that never touches the network.
#[derive(Debug, Default)]
pub struct MockBackend {
    /// Reply returned by `send_chat`; `None` makes every chat fail
    chat_reply: Option<String>,
    /// Whether `upload_document` succeeds
    uploads_succeed: bool,
    chat_calls: Mutex<Vec<String>>,
    upload_calls: Mutex<Vec<String>>,
}

impl MockBackend {
    /// A backend that answers every chat with `reply` and accepts uploads
    pub fn reachable(reply: impl Into<String>) -> Self {
        Self {
            chat_reply: Some(reply.into()),
            uploads_succeed: true,
            ..Self::default()
        }
    }

    /// A backend whose every request fails
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Messages passed to `send_chat`, in call order
    pub fn chat_calls(&self) -> Vec<String> {
        self.chat_calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// File names passed to `upload_document`, in call order
    pub fn upload_calls(&self) -> Vec<String> {
        self.upload_calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Backend for MockBackend {
    async fn send_chat(&self, message: &str) -> Result<String> {
        if let Ok(mut calls) = self.chat_calls.lock() {
            calls.push(message.to_string());
        }
        self.chat_reply
            .clone()
            .ok_or_else(|| Error::connection("mock backend unreachable"))
    }

    async fn upload_document(&self, file: &FileCandidate) -> Result<Value> {
        if let Ok(mut calls) = self.upload_calls.lock() {
            calls.push(file.name.clone());
        }
        if self.uploads_succeed {
            Ok(json!({ "status": "ok", "filename": file.name }))
        } else {
            Err(Error::upload("mock backend unreachable"))
        }
    }
}

/// Build an in-memory candidate without touching the filesystem
pub fn test_candidate(name: &str, size: u64) -> FileCandidate {
    let path = std::path::PathBuf::from(name);
    FileCandidate {
        mime: ragchat_core::mime_for_path(&path).to_string(),
        path,
        name: name.to_string(),
        size,
    }
}
