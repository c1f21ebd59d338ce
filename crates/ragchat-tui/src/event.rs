//! Terminal event polling

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ragchat_app::message::Message;
use ragchat_app::InputKey;
use ragchat_core::parse_dropped_paths;
use ragchat_core::prelude::*;
use tracing::debug;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        // Most terminals only report Alt+Enter; Shift+Enter needs the kitty
        // keyboard protocol
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
        {
            Some(InputKey::ShiftEnter)
        }
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Turn pasted text into a message.
///
/// A drag-and-drop onto the terminal arrives as a paste of file paths. The
/// paste counts as a drop only when every token names an existing file.
pub fn paste_to_message(text: String) -> Message {
    let paths = dropped_files(&text);
    Message::Paste { text, paths }
}

fn dropped_files(text: &str) -> Option<Vec<PathBuf>> {
    let paths = parse_dropped_paths(text);
    if !paths.is_empty() && paths.iter().all(|p| p.is_file()) {
        Some(paths)
    } else {
        None
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        let event = event::read()?;

        match event {
            Event::Key(key) => {
                if key.kind == event::KeyEventKind::Press {
                    Ok(key_event_to_input(key).map(Message::Key))
                } else {
                    Ok(None)
                }
            }
            Event::Paste(text) => {
                debug!("Paste of {} bytes", text.len());
                Ok(Some(paste_to_message(text)))
            }
            _ => Ok(None),
        }
    } else {
        // Generate tick on timeout for animations
        Ok(Some(Message::Tick))
    }
}
