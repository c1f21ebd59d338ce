//! Color palette for the chat TUI.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Magenta;

// --- Accent ---
pub const ACCENT: Color = Color::Magenta;
pub const ACCENT_ALT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_ORANGE: Color = Color::Rgb(249, 115, 22);
pub const STATUS_BLUE: Color = Color::Blue;

// --- Message bubbles ---
pub const USER_FG: Color = Color::Cyan;
pub const BOT_FG: Color = Color::White;
pub const SYSTEM_FG: Color = Color::Green;
pub const DEMO_FG: Color = Color::Yellow;

// --- Effects ---
pub const SHADOW: Color = Color::Black;
