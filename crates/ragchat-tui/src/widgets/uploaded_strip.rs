//! Strip listing uploaded documents above the conversation

use ragchat_core::UploadedFile;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct UploadedStrip<'a> {
    files: &'a [UploadedFile],
}

impl<'a> UploadedStrip<'a> {
    pub fn new(files: &'a [UploadedFile]) -> Self {
        Self { files }
    }
}

impl Widget for UploadedStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            format!(" Uploaded Documents ({}): ", self.files.len()),
            styles::text_secondary(),
        )];

        for (i, file) in self.files.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted()));
            }
            spans.push(Span::styled(
                file.name.as_str(),
                styles::upload_status(file.status),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
