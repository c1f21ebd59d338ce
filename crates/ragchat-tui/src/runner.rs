//! Main TUI runner - entry point and event loop

use ragchat_api::Backend;
use ragchat_app::Engine;
use ragchat_core::prelude::*;

use crate::{event, render, terminal};

/// Run the chat TUI on top of an engine until the user quits
pub async fn run<B>(engine: &mut Engine<B>) -> Result<()>
where
    B: Backend + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_paste() {
        warn!("Bracketed paste unavailable, file drops disabled: {}", e);
    }

    // Sends Message::Quit on SIGINT/SIGTERM
    engine.spawn_signal_handler();

    let result = run_loop(&mut term, engine);

    terminal::disable_paste();
    ratatui::restore();
    engine.shutdown();

    result
}

/// Main event loop
fn run_loop<B>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<B>) -> Result<()>
where
    B: Backend + Sync + 'static,
{
    while !engine.should_quit() {
        // Replies and upload progress from background tasks
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
