//! Screen layout definitions for the TUI
//!
//! Header on top, optional error banner and uploaded-documents strip, the
//! conversation in the middle and the input box at the bottom. The input
//! box grows with the draft.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, connection badge and keybinding hints
    pub header: Rect,

    /// Error banner; zero height when no error is shown
    pub banner: Rect,

    /// Uploaded-documents strip; zero height when nothing was uploaded
    pub strip: Rect,

    /// Conversation (or welcome panel)
    pub conversation: Rect,

    /// Draft input box
    pub input: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_banner` - An error banner is visible
/// * `show_strip` - At least one document was uploaded
/// * `input_height` - Height requested by the input box
pub fn create(area: Rect, show_banner: bool, show_strip: bool, input_height: u16) -> ScreenAreas {
    let [header, banner, strip, conversation, input] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(u16::from(show_banner)),
        Constraint::Length(u16::from(show_strip)),
        Constraint::Min(3),
        Constraint::Length(input_height),
    ])
    .areas(area);

    ScreenAreas {
        header,
        banner,
        strip,
        conversation,
        input,
    }
}
