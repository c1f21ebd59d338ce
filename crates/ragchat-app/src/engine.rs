//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the backend handle
//! and the event broadcaster. Both frontends feed it messages and read
//! state (TUI) or events (headless) back out.

use std::sync::Arc;

use ragchat_api::{Backend, HttpBackend};
use ragchat_core::prelude::*;
use ragchat_core::UploadId;
use tokio::sync::{broadcast, mpsc};

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    message_count: usize,
    session_epoch: u64,
    upload_ids: Vec<UploadId>,
    is_connected: bool,
    error_generation: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            message_count: state.messages.len(),
            session_epoch: state.session_epoch,
            upload_ids: state.uploaded_files.iter().map(|f| f.id).collect(),
            is_connected: state.is_connected,
            error_generation: state.error_generation,
        }
    }
}

/// Orchestration engine for ragchat.
pub struct Engine<B> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, stdin reader).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    backend: Arc<B>,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine<HttpBackend> {
    /// Build an engine talking to the HTTP backend described by `settings`
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let config = settings
            .backend_config()
            .context("Invalid server settings")?;
        let backend = HttpBackend::new(config)?;
        info!(
            "Backend: chat={} upload={}",
            backend.config().chat_url(),
            backend.config().upload_url()
        );
        Ok(Self::new(settings, backend))
    }
}

impl<B> Engine<B>
where
    B: Backend + Sync + 'static,
{
    /// Create an engine around any backend implementation.
    ///
    /// Creates the message channel (capacity 256) and the event broadcast
    /// channel (capacity 256).
    pub fn new(settings: Settings, backend: B) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        Self {
            state: AppState::with_settings(settings),
            msg_tx,
            msg_rx,
            backend: Arc::new(backend),
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// Slow subscribers that fall more than 256 events behind see
    /// `broadcast::error::RecvError::Lagged`.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update loop and emit the
    /// resulting events.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.backend);
        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from a background task or input source
    pub async fn recv_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Get a clone of the message sender for input sources
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Install SIGINT/SIGTERM handling that sends `Message::Quit`
    pub fn spawn_signal_handler(&self) {
        signals::spawn_signal_handler(self.msg_tx.clone());
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// No chat request or upload batch is in flight
    pub fn is_idle(&self) -> bool {
        !self.state.is_loading() && !self.state.is_uploading()
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    /// Announce shutdown to subscribers
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        let first_new = if post.session_epoch != pre.session_epoch {
            self.emit(EngineEvent::SessionCleared);
            0
        } else {
            pre.message_count.min(post.message_count)
        };
        for message in &self.state.messages[first_new..] {
            self.emit(EngineEvent::MessageAdded {
                message: message.clone(),
            });
        }

        for id in &pre.upload_ids {
            if !post.upload_ids.contains(id) {
                self.emit(EngineEvent::FileRemoved { id: *id });
            }
        }
        for file in &self.state.uploaded_files {
            if !pre.upload_ids.contains(&file.id) {
                self.emit(EngineEvent::FileUploaded { file: file.clone() });
            }
        }

        if pre.is_connected != post.is_connected {
            self.emit(EngineEvent::ConnectionChanged {
                connected: post.is_connected,
            });
        }

        if post.error_generation != pre.error_generation {
            if let Some(message) = &self.state.error {
                self.emit(EngineEvent::ErrorRaised {
                    message: message.clone(),
                });
            }
        }
    }

    fn emit(&self, event: EngineEvent) {
        trace!("EngineEvent: {}", event.event_type());
        // No subscribers is not an error
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragchat_api::test_utils::MockBackend;
    use ragchat_core::demo::CONNECTION_FAILED_BANNER;
    use ragchat_core::{MessageVariant, UploadStatus};
    use std::time::Duration;

    fn quick_settings() -> Settings {
        let mut settings = Settings::default();
        settings.behavior.thinking_delay_ms = 0;
        settings
    }

    fn drain_events(rx: &mut broadcast::Receiver<EngineEvent>) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Process channel messages until no operation is in flight
    async fn run_until_idle<B: Backend + Sync + 'static>(engine: &mut Engine<B>) {
        while !engine.is_idle() {
            let msg = tokio::time::timeout(Duration::from_secs(5), engine.recv_message())
                .await
                .expect("background task did not report back")
                .expect("channel closed");
            engine.process_message(msg);
        }
    }

    #[tokio::test]
    async fn test_engine_new_creates_valid_state() {
        let engine = Engine::new(Settings::default(), MockBackend::default());
        assert!(engine.state.messages.is_empty());
        assert!(engine.is_idle());
        assert!(!engine.should_quit());
    }

    #[tokio::test]
    async fn test_engine_drain_empty_channel() {
        let mut engine = Engine::new(Settings::default(), MockBackend::default());
        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test]
    async fn test_engine_process_quit_message() {
        let mut engine = Engine::new(Settings::default(), MockBackend::default());
        engine.process_message(Message::Quit);
        assert!(engine.should_quit());
    }

    #[tokio::test]
    async fn test_from_settings_rejects_bad_url() {
        let mut settings = Settings::default();
        settings.server.base_url = "not a url".to_string();
        assert!(Engine::from_settings(settings).is_err());
    }

    #[tokio::test]
    async fn test_chat_round_trip_emits_events() {
        let mut engine = Engine::new(quick_settings(), MockBackend::reachable("From the docs"));
        let mut events = engine.subscribe();

        engine.process_message(Message::DraftChanged {
            text: "Hello".to_string(),
        });
        engine.process_message(Message::SendMessage);
        run_until_idle(&mut engine).await;

        let events = drain_events(&mut events);
        let texts: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                EngineEvent::MessageAdded { message } => Some(message.text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["Hello", "From the docs"]);
        assert!(!events
            .iter()
            .any(|e| matches!(e, EngineEvent::ConnectionChanged { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_backend_scenario() {
        let backend = MockBackend::unreachable();
        let mut engine = Engine::new(quick_settings(), backend);
        let mut events = engine.subscribe();

        // Blank draft is a no-op
        engine.process_message(Message::DraftChanged {
            text: "  ".to_string(),
        });
        engine.process_message(Message::SendMessage);
        assert!(engine.state.messages.is_empty());
        assert!(engine.is_idle());

        engine.process_message(Message::DraftChanged {
            text: "Hello".to_string(),
        });
        engine.process_message(Message::SendMessage);
        run_until_idle(&mut engine).await;

        let messages = &engine.state.messages;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "Hello");
        assert_eq!(messages[1].variant(), MessageVariant::Demo);
        assert!(ragchat_core::demo::DEMO_RESPONSES.contains(&messages[1].text.as_str()));
        assert!(!engine.state.is_connected);
        assert_eq!(engine.state.error.as_deref(), Some(CONNECTION_FAILED_BANNER));
        assert_eq!(engine.backend().chat_calls(), vec!["Hello".to_string()]);

        let events = drain_events(&mut events);
        assert!(events.contains(&EngineEvent::ConnectionChanged { connected: false }));
        assert!(events.contains(&EngineEvent::ErrorRaised {
            message: CONNECTION_FAILED_BANNER.to_string()
        }));
    }

    #[tokio::test]
    async fn test_upload_fallback_and_clear_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manual.pdf");
        std::fs::write(&path, b"%PDF-1.7").unwrap();

        let mut engine = Engine::new(quick_settings(), MockBackend::unreachable());
        let mut events = engine.subscribe();

        engine.process_message(Message::UploadFiles { paths: vec![path] });
        run_until_idle(&mut engine).await;

        assert_eq!(engine.state.uploaded_files.len(), 1);
        assert_eq!(engine.state.uploaded_files[0].status, UploadStatus::Demo);
        assert_eq!(engine.state.messages.len(), 1);
        assert!(engine.state.messages[0].is_demo && engine.state.messages[0].is_system);

        engine.process_message(Message::ClearSession);

        assert!(engine.state.messages.is_empty());
        assert_eq!(engine.state.uploaded_files.len(), 1);

        let events = drain_events(&mut events);
        assert!(events
            .iter()
            .any(|e| matches!(e, EngineEvent::FileUploaded { file } if file.name == "manual.pdf")));
        assert_eq!(events.last(), Some(&EngineEvent::SessionCleared));
    }

    #[tokio::test]
    async fn test_repeated_rejection_emits_error_each_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, b"png").unwrap();

        let mut engine = Engine::new(quick_settings(), MockBackend::reachable("ok"));
        let mut events = engine.subscribe();

        for _ in 0..2 {
            engine.process_message(Message::UploadFiles {
                paths: vec![path.clone()],
            });
            run_until_idle(&mut engine).await;
        }

        let errors: Vec<_> = drain_events(&mut events)
            .into_iter()
            .filter_map(|e| match e {
                EngineEvent::ErrorRaised { message } => Some(message),
                _ => None,
            })
            .collect();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|m| m.starts_with("File type image/png not supported")));
        assert!(engine.state.uploaded_files.is_empty());
    }

    #[tokio::test]
    async fn test_remove_file_emits_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, b"a").unwrap();

        let mut engine = Engine::new(quick_settings(), MockBackend::reachable("ok"));
        engine.process_message(Message::UploadFiles { paths: vec![path] });
        run_until_idle(&mut engine).await;
        let id = engine.state.uploaded_files[0].id;

        let mut events = engine.subscribe();
        engine.process_message(Message::RemoveUploadedFile { id });

        assert!(engine.state.uploaded_files.is_empty());
        assert_eq!(drain_events(&mut events), vec![EngineEvent::FileRemoved { id }]);
    }

    #[tokio::test]
    async fn test_shutdown_event() {
        let mut engine = Engine::new(Settings::default(), MockBackend::default());
        let mut events = engine.subscribe();
        engine.shutdown();
        assert_eq!(events.try_recv().unwrap(), EngineEvent::Shutdown);
    }
}
