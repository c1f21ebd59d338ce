//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `chat`: Send / reply / failure handlers for the conversation
//! - `upload`: Upload modal, drop and batch-result handlers
//! - `scroll`: Conversation scroll handlers

pub(crate) mod chat;
pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod update;
pub(crate) mod upload;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::time::Duration;

use crate::message::Message;
use crate::state::OperationToken;

// Re-export main entry point
pub use update::update;

pub use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Post the message to the chat endpoint after the thinking delay.
    /// Completes with `ChatReplyReceived` or `ChatRequestFailed`.
    SendChat {
        token: OperationToken,
        text: String,
        thinking_delay: Duration,
    },

    /// Validate and upload each path in order.
    /// Completes with per-file results followed by `UploadBatchFinished`,
    /// or a single `UploadValidationFailed`.
    UploadBatch {
        token: OperationToken,
        paths: Vec<PathBuf>,
        max_bytes: u64,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
