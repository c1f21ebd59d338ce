//! Conversation and upload domain types

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::upload::FileCandidate;

static MESSAGE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);
static UPLOAD_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a chat message
pub type MessageId = u64;

/// Unique identifier for an uploaded file record
pub type UploadId = u64;

/// Display format for message and upload times (`14:05`)
pub const TIME_FORMAT: &str = "%H:%M";

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Visual variant of a message, derived from its sender and flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageVariant {
    User,
    Bot,
    System,
    Demo,
}

/// A single entry in the conversation log. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    #[serde(serialize_with = "serialize_time")]
    pub timestamp: DateTime<Local>,
    /// Upload confirmations and other client-generated notices
    pub is_system: bool,
    /// Synthetic content produced while the backend is unreachable
    pub is_demo: bool,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: MESSAGE_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
            text: text.into(),
            sender,
            timestamp: Local::now(),
            is_system: false,
            is_demo: false,
        }
    }

    /// Message typed by the user
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// Reply returned by the backend
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }

    /// Canned reply shown when the chat endpoint failed
    pub fn demo(text: impl Into<String>) -> Self {
        let mut msg = Self::new(Sender::Bot, text);
        msg.is_demo = true;
        msg
    }

    /// Bot-side notice generated by the client (upload confirmations)
    pub fn system(text: impl Into<String>) -> Self {
        let mut msg = Self::new(Sender::Bot, text);
        msg.is_system = true;
        msg
    }

    /// Upload notice produced when the upload endpoint failed
    pub fn system_demo(text: impl Into<String>) -> Self {
        let mut msg = Self::system(text);
        msg.is_demo = true;
        msg
    }

    pub fn variant(&self) -> MessageVariant {
        match self.sender {
            Sender::User => MessageVariant::User,
            Sender::Bot if self.is_system => MessageVariant::System,
            Sender::Bot if self.is_demo => MessageVariant::Demo,
            Sender::Bot => MessageVariant::Bot,
        }
    }

    pub fn time_display(&self) -> String {
        self.timestamp.format(TIME_FORMAT).to_string()
    }
}

/// Outcome recorded for an uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    /// The backend accepted and processed the document
    Success,
    /// The backend was unreachable; the upload was simulated
    Demo,
}

/// A file that went through the upload flow
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadedFile {
    pub id: UploadId,
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type
    #[serde(rename = "type")]
    pub mime: String,
    #[serde(serialize_with = "serialize_time")]
    pub uploaded_at: DateTime<Local>,
    pub status: UploadStatus,
}

impl UploadedFile {
    pub fn from_candidate(candidate: &FileCandidate, status: UploadStatus) -> Self {
        Self {
            id: UPLOAD_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
            name: candidate.name.clone(),
            size: candidate.size,
            mime: candidate.mime.clone(),
            uploaded_at: Local::now(),
            status,
        }
    }

    pub fn uploaded_at_display(&self) -> String {
        self.uploaded_at.format(TIME_FORMAT).to_string()
    }

    /// `"1.50 MB • 14:05"`
    pub fn summary(&self) -> String {
        format!(
            "{} • {}",
            crate::upload::format_file_size(self.size),
            self.uploaded_at_display()
        )
    }
}

fn serialize_time<S>(time: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
}
