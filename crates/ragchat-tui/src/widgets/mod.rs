//! Custom widget components

mod conversation;
mod error_banner;
mod header;
mod input_box;
pub mod modal_overlay;
mod upload_modal;
mod uploaded_strip;

pub use conversation::{wrap_text, Conversation, WelcomePanel};
pub use error_banner::ErrorBanner;
pub use header::{MainHeader, APP_TITLE};
pub use input_box::{InputBox, PLACEHOLDER};
pub use upload_modal::UploadModal;
pub use uploaded_strip::UploadedStrip;

// Re-export state types from app layer (these are used by render/)
pub use ragchat_app::state::{ConversationView, UploadModalState};
