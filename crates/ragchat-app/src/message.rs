//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use ragchat_core::{UploadId, UploadedFile};

use crate::input_key::InputKey;
use crate::state::OperationToken;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Text pasted into the terminal. Terminals deliver a file drag-and-drop
    /// as a paste; `paths` is set by the frontend when every pasted token
    /// names an existing file.
    Paste {
        text: String,
        paths: Option<Vec<PathBuf>>,
    },

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit immediately (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Conversation Messages
    // ─────────────────────────────────────────────────────────
    /// Replace the draft text
    DraftChanged { text: String },
    /// Send the current draft (send-start)
    SendMessage,
    /// The chat endpoint answered (send-success)
    ChatReplyReceived {
        token: OperationToken,
        reply: String,
    },
    /// The chat endpoint failed (send-failure); `fallback` is the demo reply
    /// to show instead
    ChatRequestFailed {
        token: OperationToken,
        error: String,
        fallback: String,
    },
    /// Reset the message log and error banner
    ClearSession,
    /// Hide the error banner
    DismissError,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll conversation up one line
    ScrollUp,
    /// Scroll conversation down one line
    ScrollDown,
    /// Scroll to the first message
    ScrollToTop,
    /// Scroll to the newest message and resume following
    ScrollToBottom,
    /// Page up in the conversation
    PageUp,
    /// Page down in the conversation
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Upload Messages
    // ─────────────────────────────────────────────────────────
    /// Show the upload modal
    OpenUploadModal,
    /// Hide the upload modal
    CloseUploadModal,
    /// Replace the path text in the upload modal
    UploadPathChanged { text: String },
    /// Upload the paths typed into the modal
    SubmitUploadPaths,
    /// Start an upload batch
    UploadFiles { paths: Vec<PathBuf> },
    /// A drag entered the drop zone
    DragEnter,
    /// A drag left the drop zone
    DragLeave,
    /// Files were dropped
    FilesDropped { paths: Vec<PathBuf> },
    /// A file failed pre-flight validation; the batch is aborted
    UploadValidationFailed {
        token: OperationToken,
        error: String,
    },
    /// The upload endpoint accepted a file
    UploadItemSucceeded {
        token: OperationToken,
        file: UploadedFile,
    },
    /// The upload endpoint failed; the file is recorded as a demo upload
    UploadItemFellBack {
        token: OperationToken,
        file: UploadedFile,
        error: String,
    },
    /// Every file of the batch was processed
    UploadBatchFinished { token: OperationToken },
    /// Move the uploaded-files selection down
    SelectNextUpload,
    /// Move the uploaded-files selection up
    SelectPreviousUpload,
    /// Drop an uploaded-file record from the local list
    RemoveUploadedFile { id: UploadId },
}
