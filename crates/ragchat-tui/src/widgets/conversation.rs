//! Conversation view: message list, thinking indicator and welcome panel
//!
//! Messages are pre-wrapped to the area width so the scroll offset can be
//! clamped against the real line count.

use ragchat_app::state::ConversationView;
use ragchat_core::ChatMessage;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::{palette, styles};

const BODY_INDENT: &str = "  ";
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Scrollable list of chat messages
pub struct Conversation<'a> {
    messages: &'a [ChatMessage],
    thinking: bool,
    animation_frame: u64,
}

impl<'a> Conversation<'a> {
    pub fn new(messages: &'a [ChatMessage]) -> Self {
        Self {
            messages,
            thinking: false,
            animation_frame: 0,
        }
    }

    /// Show the "thinking" indicator under the last message
    pub fn thinking(mut self, thinking: bool, animation_frame: u64) -> Self {
        self.thinking = thinking;
        self.animation_frame = animation_frame;
        self
    }

    fn build_lines(&self, width: usize) -> Vec<Line<'a>> {
        let body_width = width.saturating_sub(BODY_INDENT.len()).max(1);
        let mut lines = Vec::new();

        for message in self.messages {
            let (author, tag, style) = styles::message_variant(message.variant());

            let mut header = vec![
                Span::styled(author, style.add_modifier(Modifier::BOLD)),
                Span::styled(format!(" · {}", message.time_display()), styles::text_muted()),
            ];
            if let Some(tag) = tag {
                header.push(Span::raw("  "));
                header.push(Span::styled(format!("[{}]", tag), style));
            }
            lines.push(Line::from(header));

            for row in wrap_text(&message.text, body_width) {
                lines.push(Line::from(vec![
                    Span::raw(BODY_INDENT),
                    Span::styled(row, style),
                ]));
            }
            lines.push(Line::default());
        }

        if self.thinking {
            let frame = SPINNER_FRAMES[(self.animation_frame % SPINNER_FRAMES.len() as u64) as usize];
            lines.push(Line::from(vec![
                Span::styled(frame, styles::accent_bold()),
                Span::styled(" AI is thinking...", styles::text_secondary()),
            ]));
        }

        lines
    }
}

impl StatefulWidget for Conversation<'_> {
    type State = ConversationView;

    fn render(self, area: Rect, buf: &mut Buffer, view: &mut ConversationView) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let lines = self.build_lines(area.width as usize);
        let height = area.height as usize;
        let total = lines.len();

        view.viewport_height = height;
        view.clamp(total.saturating_sub(height));

        let end = total - view.offset_from_bottom;
        let start = end.saturating_sub(height);
        let visible: Vec<Line> = lines.into_iter().skip(start).take(end - start).collect();

        Paragraph::new(visible).render(area, buf);
    }
}

/// Greeting shown while the conversation is empty
pub struct WelcomePanel;

impl Widget for WelcomePanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled("Welcome to RAG Intelligence", styles::accent_bold())),
            Line::default(),
            Line::from(Span::styled(
                "Ask me anything! I'm powered by Retrieval-Augmented Generation",
                styles::text_primary(),
            )),
            Line::from(Span::styled(
                "to provide intelligent, context-aware responses.",
                styles::text_primary(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Press ", styles::text_muted()),
                Span::styled("Ctrl+O", styles::keybinding()),
                Span::styled(" to upload documents, or drop files onto the terminal.", styles::text_muted()),
            ]),
        ];

        let top = area.height.saturating_sub(lines.len() as u16) / 2;
        let inner = Rect {
            y: area.y + top,
            height: area.height - top,
            ..area
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette::TEXT_PRIMARY))
            .render(inner, buf);
    }
}

/// Greedy word wrap by display width. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;

        for word in paragraph.split(' ') {
            let word_width: usize = word.chars().map(|c| c.width().unwrap_or(0)).sum();
            let sep = usize::from(!row.is_empty());

            if row_width + sep + word_width <= width {
                if sep == 1 {
                    row.push(' ');
                }
                row.push_str(word);
                row_width += sep + word_width;
                continue;
            }

            if !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }

            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if row_width + w > width && !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                row.push(c);
                row_width += w;
            }
        }

        rows.push(row);
    }

    rows
}
