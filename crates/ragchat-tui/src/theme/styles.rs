//! Semantic style builders for the chat TUI.

use ragchat_core::{MessageVariant, UploadStatus};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::ACCENT_ALT)
}

/// Black on accent, for the selected row in lists
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Domain mappings ---

/// `(label, Style)` for the connection badge
pub fn connection_badge(connected: bool) -> (&'static str, Style) {
    if connected {
        (
            "● Connected",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "● Demo Mode",
            Style::default()
                .fg(palette::STATUS_ORANGE)
                .add_modifier(Modifier::BOLD),
        )
    }
}

/// `(author label, tag, Style)` for a message variant
pub fn message_variant(variant: MessageVariant) -> (&'static str, Option<&'static str>, Style) {
    match variant {
        MessageVariant::User => ("You", None, Style::default().fg(palette::USER_FG)),
        MessageVariant::Bot => ("Assistant", None, Style::default().fg(palette::BOT_FG)),
        MessageVariant::System => (
            "Assistant",
            Some("System"),
            Style::default().fg(palette::SYSTEM_FG),
        ),
        MessageVariant::Demo => (
            "Assistant",
            Some("Demo Mode"),
            Style::default().fg(palette::DEMO_FG),
        ),
    }
}

pub fn upload_status(status: UploadStatus) -> Style {
    match status {
        UploadStatus::Success => Style::default().fg(palette::STATUS_GREEN),
        UploadStatus::Demo => Style::default().fg(palette::DEMO_FG),
    }
}
