//! Headless mode runner - stdin commands in, NDJSON events out
//!
//! Commands are read one per line:
//!
//! | Line | Effect |
//! |---|---|
//! | any text | send it as a chat message |
//! | `/upload PATHS...` | upload the files (shell-style quoting) |
//! | `/clear` | clear the conversation |
//! | `/remove ID` | drop an uploaded-file record |
//! | `/quit` | exit |
//!
//! Commands run one at a time: the next one is dispatched once the engine
//! has no chat request or upload in flight. At end of input the runner
//! waits for in-flight work, then exits.

use std::collections::VecDeque;
use std::path::PathBuf;

use ragchat_api::Backend;
use ragchat_app::{message::Message, Engine, EngineEvent};
use ragchat_core::prelude::*;
use ragchat_core::{parse_dropped_paths, UploadId};
use tokio::sync::{broadcast, mpsc};

use super::HeadlessEvent;

/// One parsed stdin line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessCommand {
    Send(String),
    Upload(Vec<PathBuf>),
    Clear,
    Remove(UploadId),
    Quit,
}

impl HeadlessCommand {
    /// Parse a stdin line. Blank lines and unknown commands yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        if !trimmed.starts_with('/') {
            return Some(Self::Send(trimmed.to_string()));
        }

        let (command, rest) = trimmed
            .split_once(char::is_whitespace)
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((trimmed, ""));

        match command {
            "/upload" => Some(Self::Upload(parse_dropped_paths(rest))),
            "/clear" => Some(Self::Clear),
            "/quit" | "/exit" => Some(Self::Quit),
            "/remove" => match rest.parse::<UploadId>() {
                Ok(id) => Some(Self::Remove(id)),
                Err(_) => {
                    warn!("Invalid upload id for /remove: {:?}", rest);
                    None
                }
            },
            _ => {
                warn!("Unknown stdin command: {}", command);
                None
            }
        }
    }

    /// Messages that carry out this command
    pub fn into_messages(self) -> Vec<Message> {
        match self {
            Self::Send(text) => vec![Message::DraftChanged { text }, Message::SendMessage],
            Self::Upload(paths) => vec![Message::UploadFiles { paths }],
            Self::Clear => vec![Message::ClearSession],
            Self::Remove(id) => vec![Message::RemoveUploadedFile { id }],
            Self::Quit => vec![Message::Quit],
        }
    }
}

/// Input from the stdin reader thread
#[derive(Debug)]
pub enum StdinInput {
    Command(HeadlessCommand),
    Closed,
}

/// Run in headless mode until `/quit`, a signal, or end of input
pub async fn run_headless<B>(engine: &mut Engine<B>) -> Result<()>
where
    B: Backend + Sync + 'static,
{
    info!("ragchat starting in HEADLESS mode");

    engine.spawn_signal_handler();

    let (input_tx, input_rx) = mpsc::channel::<StdinInput>(64);
    std::thread::spawn(move || {
        read_stdin_blocking(input_tx);
    });

    let result = headless_event_loop(engine, input_rx, |event| event.emit()).await;

    engine.shutdown();
    info!("ragchat headless mode exiting");
    result
}

/// Main headless event loop
pub async fn headless_event_loop<B, F>(
    engine: &mut Engine<B>,
    mut input_rx: mpsc::Receiver<StdinInput>,
    mut emit: F,
) -> Result<()>
where
    B: Backend + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    let mut events = engine.subscribe();
    let mut pending: VecDeque<HeadlessCommand> = VecDeque::new();
    let mut input_closed = false;

    loop {
        while engine.is_idle() && !engine.should_quit() {
            let Some(command) = pending.pop_front() else {
                break;
            };
            debug!("Dispatching {:?}", command);
            for message in command.into_messages() {
                engine.process_message(message);
            }
            forward_events(&mut events, &mut emit);
        }

        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        if input_closed && pending.is_empty() && engine.is_idle() {
            info!("Input closed and no work in flight");
            break;
        }

        tokio::select! {
            message = engine.recv_message() => match message {
                Some(message) => engine.process_message(message),
                None => {
                    info!("Message channel closed");
                    break;
                }
            },
            input = input_rx.recv(), if !input_closed => match input {
                Some(StdinInput::Command(command)) => pending.push_back(command),
                Some(StdinInput::Closed) | None => input_closed = true,
            },
        }

        forward_events(&mut events, &mut emit);
    }

    Ok(())
}

fn forward_events<F>(events: &mut broadcast::Receiver<EngineEvent>, emit: &mut F)
where
    F: FnMut(HeadlessEvent),
{
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(headless) = HeadlessEvent::from_engine_event(&event) {
                    emit(headless);
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} events", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Read commands from stdin (blocking, runs on its own thread)
fn read_stdin_blocking(input_tx: mpsc::Sender<StdinInput>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => {
                if let Some(command) = HeadlessCommand::parse(&line) {
                    let quit = command == HeadlessCommand::Quit;
                    if input_tx.blocking_send(StdinInput::Command(command)).is_err() || quit {
                        break;
                    }
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    let _ = input_tx.blocking_send(StdinInput::Closed);
    info!("Stdin reader exiting");
}
