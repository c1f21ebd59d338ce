//! Multi-line draft input

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::conversation::wrap_text;
use crate::theme::{palette, styles};

pub const PLACEHOLDER: &str = "Ask me anything about your documents...";

/// Most draft rows shown before the box starts scrolling
pub const MAX_VISIBLE_ROWS: u16 = 5;

pub struct InputBox<'a> {
    draft: &'a str,
    focused: bool,
    sending: bool,
}

impl<'a> InputBox<'a> {
    pub fn new(draft: &'a str) -> Self {
        Self {
            draft,
            focused: true,
            sending: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn sending(mut self, sending: bool) -> Self {
        self.sending = sending;
        self
    }

    /// Box height (borders included) for a draft at the given outer width
    pub fn required_height(draft: &str, width: u16) -> u16 {
        let inner = width.saturating_sub(2) as usize;
        let rows = wrap_text(draft, inner.saturating_sub(1)).len() as u16;
        rows.clamp(1, MAX_VISIBLE_ROWS) + 2
    }
}

impl Widget for InputBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hint = if self.sending {
            " sending... "
        } else {
            " Enter send · Shift+Enter newline "
        };
        let block = styles::glass_block(self.focused)
            .title(Span::styled(" Message ", styles::text_secondary()))
            .title_bottom(Line::from(Span::styled(hint, styles::text_muted())).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.draft.is_empty() {
            let mut spans = vec![Span::styled(PLACEHOLDER, styles::text_muted())];
            if self.focused {
                spans.insert(0, cursor());
            }
            Paragraph::new(Line::from(spans)).render(inner, buf);
            return;
        }

        // Reserve a column for the cursor
        let rows = wrap_text(self.draft, (inner.width as usize).saturating_sub(1));
        let skip = rows.len().saturating_sub(inner.height as usize);
        let last = rows.len() - 1;
        let lines: Vec<Line> = rows
            .into_iter()
            .enumerate()
            .skip(skip)
            .map(|(i, row)| {
                let mut spans = vec![Span::styled(row, styles::text_primary())];
                if i == last && self.focused {
                    spans.push(cursor());
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn cursor() -> Span<'static> {
    Span::styled("▏", Style::default().fg(palette::ACCENT))
}
