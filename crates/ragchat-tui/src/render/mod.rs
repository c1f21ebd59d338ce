//! Main render/view function (View in TEA pattern)


use ragchat_app::state::{AppState, UiMode};
use ratatui::layout::Margin;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Only mutates the conversation scroll state, which records the
/// viewport height and clamps the offset against the rendered lines.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let input_height = widgets::InputBox::required_height(&state.draft, area.width);
    let areas = layout::create(
        area,
        state.error.is_some(),
        !state.uploaded_files.is_empty(),
        input_height,
    );

    frame.render_widget(widgets::MainHeader::new(state.is_connected), areas.header);

    if let Some(error) = state.error.as_deref() {
        frame.render_widget(widgets::ErrorBanner::new(error), areas.banner);
    }

    if !state.uploaded_files.is_empty() {
        frame.render_widget(
            widgets::UploadedStrip::new(&state.uploaded_files),
            areas.strip,
        );
    }

    let conversation_area = areas.conversation.inner(Margin::new(1, 0));
    if state.messages.is_empty() && !state.is_typing() {
        frame.render_widget(widgets::WelcomePanel, conversation_area);
    } else {
        let conversation = widgets::Conversation::new(&state.messages)
            .thinking(state.is_typing(), state.animation_frame);
        frame.render_stateful_widget(
            conversation,
            conversation_area,
            &mut state.conversation_view,
        );
    }

    let input = widgets::InputBox::new(&state.draft)
        .focused(state.ui_mode == UiMode::Chat)
        .sending(state.is_loading());
    frame.render_widget(input, areas.input);

    if state.show_upload_modal() {
        let modal = widgets::UploadModal::new(&state.upload_modal, &state.uploaded_files)
            .uploading(state.is_uploading())
            .drag_active(state.drag_active)
            .max_file_size_mb(state.settings.upload.max_file_size_mb)
            .error(state.error.as_deref());
        frame.render_widget(modal, area);
    }
}
