//! ragchat-app - Application state and orchestration for ragchat
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the Engine abstraction shared by the TUI and headless
//! runners, background actions against the backend, and configuration
//! loading.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, OperationToken, UiMode};
