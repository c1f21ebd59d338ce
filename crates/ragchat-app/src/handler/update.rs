//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState, UiMode};

use super::{chat, keys::handle_key, scroll, upload, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste { text, paths } => match (state.ui_mode, paths) {
            (UiMode::Chat, Some(paths)) => UpdateResult::message(Message::FilesDropped { paths }),
            (UiMode::Chat, None) => {
                state.draft.push_str(&text);
                UpdateResult::none()
            }
            (UiMode::UploadModal, _) => UpdateResult::message(Message::FilesDropped {
                paths: ragchat_core::parse_dropped_paths(&text),
            }),
        },

        Message::Tick => {
            if state.is_typing() || state.is_uploading() {
                state.animation_frame = state.animation_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Conversation Messages
        // ─────────────────────────────────────────────────────────
        Message::DraftChanged { text } => {
            state.draft = text;
            UpdateResult::none()
        }
        Message::SendMessage => chat::handle_send_message(state),
        Message::ChatReplyReceived { token, reply } => {
            chat::handle_reply_received(state, token, reply)
        }
        Message::ChatRequestFailed {
            token,
            error,
            fallback,
        } => chat::handle_request_failed(state, token, &error, fallback),
        Message::ClearSession => chat::handle_clear_session(state),
        Message::DismissError => {
            state.clear_error();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),

        // ─────────────────────────────────────────────────────────
        // Upload Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenUploadModal => upload::handle_open_modal(state),
        Message::CloseUploadModal => upload::handle_close_modal(state),
        Message::UploadPathChanged { text } => {
            state.upload_modal.path_draft = text;
            UpdateResult::none()
        }
        Message::SubmitUploadPaths => upload::handle_submit_paths(state),
        Message::UploadFiles { paths } | Message::FilesDropped { paths } => {
            state.drag_active = false;
            upload::handle_upload_files(state, paths)
        }
        Message::DragEnter => {
            state.drag_active = true;
            UpdateResult::none()
        }
        Message::DragLeave => {
            state.drag_active = false;
            UpdateResult::none()
        }
        Message::UploadValidationFailed { token, error } => {
            upload::handle_validation_failed(state, token, error)
        }
        Message::UploadItemSucceeded { token, file } => {
            upload::handle_item_succeeded(state, token, file)
        }
        Message::UploadItemFellBack { token, file, error } => {
            upload::handle_item_fell_back(state, token, file, &error)
        }
        Message::UploadBatchFinished { token } => upload::handle_batch_finished(state, token),
        Message::SelectNextUpload => upload::handle_select_next(state),
        Message::SelectPreviousUpload => upload::handle_select_previous(state),
        Message::RemoveUploadedFile { id } => upload::handle_remove_file(state, id),
    }
}
