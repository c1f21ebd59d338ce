//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Chat => handle_key_chat(state, key),
        UiMode::UploadModal => handle_key_upload_modal(state, key),
    }
}

/// Handle key events in the conversation view
fn handle_key_chat(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SendMessage),
        InputKey::ShiftEnter => Some(Message::DraftChanged {
            text: format!("{}\n", state.draft),
        }),
        InputKey::Char(c) => {
            let mut text = state.draft.clone();
            text.push(c);
            Some(Message::DraftChanged { text })
        }
        InputKey::Backspace => {
            if state.draft.is_empty() {
                return None;
            }
            let mut text = state.draft.clone();
            text.pop();
            Some(Message::DraftChanged { text })
        }

        // Clear draft
        InputKey::CharCtrl('u') => Some(Message::DraftChanged {
            text: String::new(),
        }),
        // Clear session
        InputKey::CharCtrl('l') => Some(Message::ClearSession),
        // Upload documents
        InputKey::CharCtrl('o') => Some(Message::OpenUploadModal),

        InputKey::Up => Some(Message::ScrollUp),
        InputKey::Down => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::End => Some(Message::ScrollToBottom),

        InputKey::Esc if state.error.is_some() => Some(Message::DismissError),

        _ => None,
    }
}

/// Handle key events while the upload modal is open
fn handle_key_upload_modal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseUploadModal),
        InputKey::Enter => Some(Message::SubmitUploadPaths),

        InputKey::Char(c) => {
            let mut text = state.upload_modal.path_draft.clone();
            text.push(c);
            Some(Message::UploadPathChanged { text })
        }
        InputKey::Backspace => {
            if state.upload_modal.path_draft.is_empty() {
                return None;
            }
            let mut text = state.upload_modal.path_draft.clone();
            text.pop();
            Some(Message::UploadPathChanged { text })
        }
        InputKey::CharCtrl('u') => Some(Message::UploadPathChanged {
            text: String::new(),
        }),

        InputKey::Up => Some(Message::SelectPreviousUpload),
        InputKey::Down => Some(Message::SelectNextUpload),
        InputKey::Delete => state
            .selected_upload()
            .map(|file| Message::RemoveUploadedFile { id: file.id }),

        _ => None,
    }
}
