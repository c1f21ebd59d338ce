//! Headless mode - NDJSON event output without the TUI
//!
//! Runs the same engine as the TUI, reads commands from stdin and writes
//! one JSON object per line to stdout. Each object has an `"event"` field
//! naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"message_added","message":{"id":1,"text":"Hello","sender":"user","timestamp":"14:05","is_system":false,"is_demo":false},"timestamp":1704700001000}
//! {"event":"connection_changed","connected":false,"timestamp":1704700002000}
//! {"event":"error","message":"Connection failed - using demo mode","timestamp":1704700002000}
//! ```

pub mod runner;

use chrono::Utc;
use ragchat_app::EngineEvent;
use ragchat_core::{ChatMessage, UploadId, UploadedFile};
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A message was appended to the conversation
    MessageAdded { message: ChatMessage, timestamp: i64 },

    /// An uploaded-file record was appended
    FileUploaded { file: UploadedFile, timestamp: i64 },

    /// An uploaded-file record was removed
    FileRemoved { id: UploadId, timestamp: i64 },

    /// The backend became reachable or unreachable
    ConnectionChanged { connected: bool, timestamp: i64 },

    /// The error banner was set
    Error { message: String, timestamp: i64 },

    /// The conversation was cleared
    SessionCleared { timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Map an engine event to its NDJSON form. `Shutdown` has none.
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        let event = match event {
            EngineEvent::MessageAdded { message } => Self::MessageAdded {
                message: message.clone(),
                timestamp,
            },
            EngineEvent::FileUploaded { file } => Self::FileUploaded {
                file: file.clone(),
                timestamp,
            },
            EngineEvent::FileRemoved { id } => Self::FileRemoved { id: *id, timestamp },
            EngineEvent::ConnectionChanged { connected } => Self::ConnectionChanged {
                connected: *connected,
                timestamp,
            },
            EngineEvent::ErrorRaised { message } => Self::Error {
                message: message.clone(),
                timestamp,
            },
            EngineEvent::SessionCleared => Self::SessionCleared { timestamp },
            EngineEvent::Shutdown => return None,
        };
        Some(event)
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }
}
