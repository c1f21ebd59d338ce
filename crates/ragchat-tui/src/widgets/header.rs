//! Header bar widget
//!
//! Title, connection badge and the main keybindings in one bordered row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub const APP_TITLE: &str = "RAG Intelligence";

/// Main header showing the app title, connection badge and keybindings
pub struct MainHeader {
    connected: bool,
}

impl MainHeader {
    pub fn new(connected: bool) -> Self {
        Self { connected }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (badge, badge_style) = styles::connection_badge(self.connected);
        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::raw("  "),
            Span::styled(badge, badge_style),
        ]);
        let left_width = left.width() as u16;
        left.render(inner, buf);

        let hints = Line::from(vec![
            Span::styled("^O", styles::keybinding()),
            Span::styled(" Upload  ", styles::text_secondary()),
            Span::styled("^L", styles::keybinding()),
            Span::styled(" Clear  ", styles::text_secondary()),
            Span::styled("^C", styles::keybinding()),
            Span::styled(" Quit ", styles::text_secondary()),
        ]);
        let hints_width = hints.width() as u16;

        // Hints only when they fit beside the title
        if left_width + hints_width + 2 <= inner.width {
            let hints_area = Rect {
                x: inner.x + inner.width - hints_width,
                y: inner.y,
                width: hints_width,
                height: 1,
            };
            hints.render(hints_area, buf);
        }
    }
}
