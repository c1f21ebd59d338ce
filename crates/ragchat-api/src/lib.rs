//! ragchat-api - HTTP client for the RAG backend
//!
//! The backend is an external collaborator with two endpoints:
//! - `POST /chat` with `{"message": ...}`, answered by
//!   `{"response" | "message" | "reply": ...}`
//! - `POST /upload` with a multipart `file` field
//!
//! [`Backend`] is the seam the app layer talks through; [`HttpBackend`] is
//! the reqwest implementation.

pub mod client;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{
    Backend, BackendConfig, HttpBackend, LocalBackend, DEFAULT_BASE_URL, DEFAULT_CHAT_PATH,
    DEFAULT_UPLOAD_PATH,
};
pub use protocol::{extract_reply, ChatRequest, REPLY_KEYS};
