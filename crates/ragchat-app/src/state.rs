//! Application state (Model in TEA pattern)

use std::sync::atomic::{AtomicU64, Ordering};

use ragchat_core::{ChatMessage, UploadedFile};

use crate::config::Settings;

static OPERATION_TOKEN_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Conversation view with the draft input focused
    #[default]
    Chat,

    /// Upload modal over the conversation
    UploadModal,
}

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Identifies one in-flight operation.
///
/// Completion messages carry the token they were started with; a completion
/// whose token no longer occupies the slot is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationToken(u64);

impl OperationToken {
    fn next() -> Self {
        Self(OPERATION_TOKEN_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Single-slot tracker for one class of operation (chat or upload)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InFlight {
    slot: Option<OperationToken>,
}

impl InFlight {
    /// Claim the slot. Returns `None` when an operation is already running.
    pub fn begin(&mut self) -> Option<OperationToken> {
        if self.slot.is_some() {
            return None;
        }
        let token = OperationToken::next();
        self.slot = Some(token);
        Some(token)
    }

    /// Whether `token` is the operation currently holding the slot
    pub fn is_current(&self, token: OperationToken) -> bool {
        self.slot == Some(token)
    }

    /// Release the slot if `token` holds it. Returns false for stale tokens.
    pub fn finish(&mut self, token: OperationToken) -> bool {
        if self.is_current(token) {
            self.slot = None;
            true
        } else {
            false
        }
    }

    pub fn is_active(&self) -> bool {
        self.slot.is_some()
    }

    pub fn current(&self) -> Option<OperationToken> {
        self.slot
    }
}

/// Scroll position of the conversation, counted in rendered lines from the
/// bottom. `0` means the newest line is visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationView {
    pub offset_from_bottom: usize,
    /// Height of the conversation area at the last render
    pub viewport_height: usize,
}

/// Page size used before the first render reports a viewport height
const DEFAULT_PAGE_LINES: usize = 10;

impl ConversationView {
    /// Lines moved by PageUp/PageDown
    pub fn page_lines(&self) -> usize {
        if self.viewport_height > 1 {
            self.viewport_height - 1
        } else {
            DEFAULT_PAGE_LINES
        }
    }

    pub fn is_following(&self) -> bool {
        self.offset_from_bottom == 0
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset_from_bottom = self.offset_from_bottom.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset_from_bottom = self.offset_from_bottom.saturating_sub(lines);
    }

    pub fn follow(&mut self) {
        self.offset_from_bottom = 0;
    }

    /// Keep the offset within the rendered content
    pub fn clamp(&mut self, max_offset: usize) {
        self.offset_from_bottom = self.offset_from_bottom.min(max_offset);
    }
}

/// State owned by the upload modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadModalState {
    /// Paths typed (or pasted) into the modal
    pub path_draft: String,
    /// Selected index into `AppState::uploaded_files`
    pub selected: Option<usize>,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,

    /// Conversation log, in display order
    pub messages: Vec<ChatMessage>,
    /// Uploaded-file records, in upload order
    pub uploaded_files: Vec<UploadedFile>,

    /// Current draft text
    pub draft: String,
    /// Error banner; `None` hides it
    pub error: Option<String>,
    /// Result of the last chat round-trip
    pub is_connected: bool,
    /// A drag is hovering over the drop zone
    pub drag_active: bool,

    pub chat: InFlight,
    pub upload: InFlight,

    pub upload_modal: UploadModalState,
    pub conversation_view: ConversationView,

    /// Frame counter for the thinking indicator
    pub animation_frame: u64,

    /// Bumped each time the session is cleared
    pub session_epoch: u64,

    /// Bumped by every `set_error`, so a repeated message still counts
    pub error_generation: u64,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Chat,
            messages: Vec::new(),
            uploaded_files: Vec::new(),
            draft: String::new(),
            error: None,
            is_connected: true,
            drag_active: false,
            chat: InFlight::default(),
            upload: InFlight::default(),
            upload_modal: UploadModalState::default(),
            conversation_view: ConversationView::default(),
            animation_frame: 0,
            session_epoch: 0,
            error_generation: 0,
            settings,
        }
    }

    /// A chat request is outstanding
    pub fn is_loading(&self) -> bool {
        self.chat.is_active()
    }

    /// The thinking indicator is shown; always paired with `is_loading`
    pub fn is_typing(&self) -> bool {
        self.chat.is_active()
    }

    /// An upload batch is being processed
    pub fn is_uploading(&self) -> bool {
        self.upload.is_active()
    }

    pub fn show_upload_modal(&self) -> bool {
        self.ui_mode == UiMode::UploadModal
    }

    /// The send button would be enabled
    pub fn can_send(&self) -> bool {
        !self.is_loading() && !self.draft.trim().is_empty()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.error_generation = self.error_generation.wrapping_add(1);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Append to the conversation log
    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Currently selected uploaded file in the modal
    pub fn selected_upload(&self) -> Option<&UploadedFile> {
        self.upload_modal
            .selected
            .and_then(|i| self.uploaded_files.get(i))
    }
}
