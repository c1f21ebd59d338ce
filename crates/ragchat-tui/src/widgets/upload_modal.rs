//! Upload modal: drop zone, path entry, supported formats and the list of
//! uploaded documents.

use ragchat_app::state::UploadModalState;
use ragchat_core::{supported_formats_label, UploadStatus, UploadedFile};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::{palette, styles};

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 22;

pub struct UploadModal<'a> {
    modal: &'a UploadModalState,
    files: &'a [UploadedFile],
    uploading: bool,
    drag_active: bool,
    max_file_size_mb: u64,
    error: Option<&'a str>,
}

impl<'a> UploadModal<'a> {
    pub fn new(modal: &'a UploadModalState, files: &'a [UploadedFile]) -> Self {
        Self {
            modal,
            files,
            uploading: false,
            drag_active: false,
            max_file_size_mb: 10,
            error: None,
        }
    }

    pub fn uploading(mut self, uploading: bool) -> Self {
        self.uploading = uploading;
        self
    }

    pub fn drag_active(mut self, drag_active: bool) -> Self {
        self.drag_active = drag_active;
        self
    }

    pub fn max_file_size_mb(mut self, max_file_size_mb: u64) -> Self {
        self.max_file_size_mb = max_file_size_mb;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    fn render_drop_zone(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.drag_active || self.uploading;
        let block = styles::glass_block(focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = if self.uploading {
            vec![Line::from(Span::styled("Uploading...", styles::accent_bold()))]
        } else if self.drag_active {
            vec![Line::from(Span::styled(
                "Drop your documents here",
                styles::accent_bold(),
            ))]
        } else {
            vec![
                Line::from(Span::styled(
                    "Drop files here or type paths below",
                    styles::text_primary().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("PDF, TXT, DOC files up to {}MB", self.max_file_size_mb),
                    styles::text_muted(),
                )),
            ]
        };

        let top = inner.height.saturating_sub(lines.len() as u16) / 2;
        let text_area = Rect {
            y: inner.y + top,
            height: inner.height - top,
            ..inner
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(text_area, buf);
    }

    fn render_path_input(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("Path: ", styles::text_secondary()),
            Span::styled(self.modal.path_draft.as_str(), styles::text_primary()),
            Span::styled("▏", Style::default().fg(palette::ACCENT)),
        ]);
        Paragraph::new(line).render(area, buf);
    }

    fn render_formats(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("Supported Formats: ", styles::text_secondary()),
            Span::styled(supported_formats_label(), styles::text_primary()),
            Span::styled(
                format!(" · Max {}MB each", self.max_file_size_mb),
                styles::text_muted(),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }

    fn render_uploaded_list(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(Span::styled(
            format!("Uploaded Documents ({})", self.files.len()),
            styles::text_secondary(),
        ))];

        if self.files.is_empty() {
            lines.push(Line::from(Span::styled(
                "  No documents yet",
                styles::text_muted(),
            )));
        }

        // Keep the selected row in view
        let visible_rows = area.height.saturating_sub(1) as usize;
        let selected = self.modal.selected.unwrap_or(0);
        let skip = (selected + 1).saturating_sub(visible_rows);

        for (i, file) in self.files.iter().enumerate().skip(skip) {
            let is_selected = self.modal.selected == Some(i);
            let marker = if is_selected { "▶ " } else { "  " };
            let tag = match file.status {
                UploadStatus::Success => "",
                UploadStatus::Demo => "  [demo]",
            };
            let mut line = Line::from(vec![
                Span::raw(marker),
                Span::styled(file.name.clone(), styles::upload_status(file.status)),
                Span::styled(format!("  {}{}", file.summary(), tag), styles::text_muted()),
            ]);
            if is_selected {
                line = line.style(styles::focused_selected());
            }
            lines.push(line);
        }

        Paragraph::new(lines).render(area, buf);
    }
}

impl Widget for UploadModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let modal_area = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::clear_area(buf, modal_area);
        modal_overlay::render_shadow(buf, modal_area);

        let block = styles::modal_block(" Upload Document ").title_bottom(
            Line::from(Span::styled(
                " Enter upload · ↑↓ select · Del remove · Esc close ",
                styles::text_muted(),
            ))
            .right_aligned(),
        );
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner.height < 4 || inner.width < 10 {
            return;
        }

        let error_height = u16::from(self.error.is_some());
        let [drop_zone, path, error, formats, _, list] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Length(error_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        self.render_drop_zone(drop_zone, buf);
        self.render_path_input(path, buf);
        if let Some(message) = self.error {
            Paragraph::new(Span::styled(
                message,
                Style::default().fg(palette::STATUS_RED),
            ))
            .render(error, buf);
        }
        self.render_formats(formats, buf);
        self.render_uploaded_list(list, buf);
    }
}
