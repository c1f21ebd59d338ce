//! Scroll message handlers
//!
//! Handles vertical scrolling of the conversation. Offsets are counted from
//! the bottom; the renderer clamps them to the content height.

use crate::state::AppState;

use super::UpdateResult;

/// Handle scroll up message
pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.conversation_view.scroll_up(1);
    UpdateResult::none()
}

/// Handle scroll down message
pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.conversation_view.scroll_down(1);
    UpdateResult::none()
}

/// Handle scroll to top message
pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.conversation_view.offset_from_bottom = usize::MAX;
    UpdateResult::none()
}

/// Handle scroll to bottom message
pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.conversation_view.follow();
    UpdateResult::none()
}

/// Handle page up message
pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    let lines = state.conversation_view.page_lines();
    state.conversation_view.scroll_up(lines);
    UpdateResult::none()
}

/// Handle page down message
pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    let lines = state.conversation_view.page_lines();
    state.conversation_view.scroll_down(lines);
    UpdateResult::none()
}
