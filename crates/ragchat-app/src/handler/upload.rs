//! Upload handlers: modal, drop/path entry, per-file batch results

use std::path::PathBuf;

use ragchat_core::prelude::*;
use ragchat_core::{demo, parse_dropped_paths, ChatMessage, UploadId, UploadedFile};

use crate::message::Message;
use crate::state::{AppState, OperationToken, UiMode};

use super::{UpdateAction, UpdateResult};

pub fn handle_open_modal(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::UploadModal;
    if state.upload_modal.selected.is_none() && !state.uploaded_files.is_empty() {
        state.upload_modal.selected = Some(0);
    }
    UpdateResult::none()
}

pub fn handle_close_modal(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Chat;
    state.drag_active = false;
    UpdateResult::none()
}

/// Upload whatever paths are typed in the modal
pub fn handle_submit_paths(state: &mut AppState) -> UpdateResult {
    let paths = parse_dropped_paths(&state.upload_modal.path_draft);
    if paths.is_empty() {
        return UpdateResult::none();
    }
    UpdateResult::message(Message::UploadFiles { paths })
}

/// Start an upload batch. Empty batches and batches submitted while another
/// is running are ignored.
pub fn handle_upload_files(state: &mut AppState, paths: Vec<PathBuf>) -> UpdateResult {
    if paths.is_empty() {
        return UpdateResult::none();
    }

    let Some(token) = state.upload.begin() else {
        debug!("Upload ignored: batch already in progress");
        return UpdateResult::none();
    };

    info!("Starting upload batch of {} file(s)", paths.len());
    state.upload_modal.path_draft.clear();

    UpdateResult::action(UpdateAction::UploadBatch {
        token,
        paths,
        max_bytes: state.settings.max_upload_bytes(),
    })
}

/// A file was rejected before any network call; the batch is over and the
/// modal stays open so the user can fix the selection.
pub fn handle_validation_failed(
    state: &mut AppState,
    token: OperationToken,
    error: String,
) -> UpdateResult {
    if !state.upload.finish(token) {
        warn!("Ignoring stale upload failure (token {})", token.id());
        return UpdateResult::none();
    }

    state.set_error(error);
    UpdateResult::none()
}

pub fn handle_item_succeeded(
    state: &mut AppState,
    token: OperationToken,
    file: UploadedFile,
) -> UpdateResult {
    if !state.upload.is_current(token) {
        warn!("Ignoring stale upload result (token {})", token.id());
        return UpdateResult::none();
    }

    state.push_message(ChatMessage::system(demo::upload_success_text(&file.name)));
    state.uploaded_files.push(file);
    UpdateResult::none()
}

/// The endpoint failed; record the file as a demo upload and keep going
pub fn handle_item_fell_back(
    state: &mut AppState,
    token: OperationToken,
    file: UploadedFile,
    error: &str,
) -> UpdateResult {
    if !state.upload.is_current(token) {
        warn!("Ignoring stale upload result (token {})", token.id());
        return UpdateResult::none();
    }

    warn!("Upload of {} failed, recording demo upload: {}", file.name, error);
    state.push_message(ChatMessage::system_demo(demo::upload_demo_text(&file.name)));
    state.uploaded_files.push(file);
    UpdateResult::none()
}

pub fn handle_batch_finished(state: &mut AppState, token: OperationToken) -> UpdateResult {
    if !state.upload.finish(token) {
        warn!("Ignoring stale batch completion (token {})", token.id());
        return UpdateResult::none();
    }

    state.ui_mode = UiMode::Chat;
    state.drag_active = false;
    UpdateResult::none()
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    let len = state.uploaded_files.len();
    if len == 0 {
        return UpdateResult::none();
    }
    state.upload_modal.selected = Some(match state.upload_modal.selected {
        Some(i) => (i + 1).min(len - 1),
        None => 0,
    });
    UpdateResult::none()
}

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    if state.uploaded_files.is_empty() {
        return UpdateResult::none();
    }
    state.upload_modal.selected = Some(state.upload_modal.selected.unwrap_or(0).saturating_sub(1));
    UpdateResult::none()
}

/// Drop a record from the local list. The backend is not told.
pub fn handle_remove_file(state: &mut AppState, id: UploadId) -> UpdateResult {
    let Some(index) = state.uploaded_files.iter().position(|f| f.id == id) else {
        debug!("No uploaded file with id {}", id);
        return UpdateResult::none();
    };

    let removed = state.uploaded_files.remove(index);
    debug!("Removed {} from uploaded files", removed.name);

    let len = state.uploaded_files.len();
    state.upload_modal.selected = match state.upload_modal.selected {
        _ if len == 0 => None,
        Some(i) if i >= len => Some(len - 1),
        other => other,
    };
    UpdateResult::none()
}
