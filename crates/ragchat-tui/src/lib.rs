//! ragchat-tui - Terminal UI for ragchat
//!
//! Renders the conversation, input box and upload modal with ratatui, and
//! turns crossterm key and paste events into engine messages.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
