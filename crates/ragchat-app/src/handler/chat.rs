//! Conversation handlers: send-start, send-success, send-failure, clear

use ragchat_core::demo::CONNECTION_FAILED_BANNER;
use ragchat_core::prelude::*;
use ragchat_core::ChatMessage;

use crate::state::{AppState, OperationToken};

use super::{UpdateAction, UpdateResult};

/// Append the user's message and start the chat request.
///
/// No-op for a blank draft or while a send is in flight.
pub fn handle_send_message(state: &mut AppState) -> UpdateResult {
    let text = state.draft.trim().to_string();
    if text.is_empty() {
        return UpdateResult::none();
    }

    let Some(token) = state.chat.begin() else {
        debug!("Send ignored: chat request already in flight");
        return UpdateResult::none();
    };

    state.draft.clear();
    state.clear_error();
    state.push_message(ChatMessage::user(text.clone()));
    state.conversation_view.follow();

    UpdateResult::action(UpdateAction::SendChat {
        token,
        text,
        thinking_delay: state.settings.thinking_delay(),
    })
}

pub fn handle_reply_received(
    state: &mut AppState,
    token: OperationToken,
    reply: String,
) -> UpdateResult {
    if !state.chat.finish(token) {
        warn!("Ignoring stale chat reply (token {})", token.id());
        return UpdateResult::none();
    }

    state.push_message(ChatMessage::bot(reply));
    state.is_connected = true;
    UpdateResult::none()
}

/// Switch to demo mode for this exchange: banner, disconnected badge and a
/// canned reply.
pub fn handle_request_failed(
    state: &mut AppState,
    token: OperationToken,
    error: &str,
    fallback: String,
) -> UpdateResult {
    if !state.chat.finish(token) {
        warn!("Ignoring stale chat failure (token {})", token.id());
        return UpdateResult::none();
    }

    warn!("Chat request failed: {}", error);
    state.set_error(CONNECTION_FAILED_BANNER);
    state.is_connected = false;
    state.push_message(ChatMessage::demo(fallback));
    UpdateResult::none()
}

/// Reset the message log and error banner. Uploaded files are kept.
pub fn handle_clear_session(state: &mut AppState) -> UpdateResult {
    state.messages.clear();
    state.clear_error();
    state.session_epoch = state.session_epoch.wrapping_add(1);
    state.conversation_view.follow();
    UpdateResult::none()
}
