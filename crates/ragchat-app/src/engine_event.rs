//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use ragchat_core::{ChatMessage, UploadId, UploadedFile};

/// Domain events emitted by the Engine for external consumers.
///
/// Events are derived by diffing state before and after a message is
/// processed, so subscribers see a consistent view of state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// A message was appended to the conversation
    MessageAdded { message: ChatMessage },

    /// An uploaded-file record was appended (success or demo)
    FileUploaded { file: UploadedFile },

    /// An uploaded-file record was removed from the local list
    FileRemoved { id: UploadId },

    /// The chat endpoint became reachable or unreachable
    ConnectionChanged { connected: bool },

    /// The error banner was set to a new message
    ErrorRaised { message: String },

    /// The message log was cleared
    SessionCleared,

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Event name used in logs and NDJSON output
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::MessageAdded { .. } => "message_added",
            EngineEvent::FileUploaded { .. } => "file_uploaded",
            EngineEvent::FileRemoved { .. } => "file_removed",
            EngineEvent::ConnectionChanged { .. } => "connection_changed",
            EngineEvent::ErrorRaised { .. } => "error",
            EngineEvent::SessionCleared => "session_cleared",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
