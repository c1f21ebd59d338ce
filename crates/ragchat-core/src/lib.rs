//! # ragchat-core - Core Domain Types
//!
//! Foundation crate for ragchat. Provides the conversation and upload
//! domain types, upload validation, demo-mode content, error handling, and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing, rand).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ChatMessage`] - One entry of the conversation log
//! - [`Sender`], [`MessageVariant`] - Authorship and display variant
//! - [`UploadedFile`], [`UploadStatus`] - Record of a finished upload
//!
//! ### Uploads (`upload`)
//! - [`FileCandidate`] - A file resolved from disk, ready for validation
//! - [`DocumentKind`] - Accepted document formats
//! - [`parse_dropped_paths()`] - Split pasted/dropped text into paths
//!
//! ### Demo Mode (`demo`)
//! - [`demo::random_response()`] and the upload notice texts
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use ragchat_core::prelude::*;
//! ```

pub mod demo;
pub mod error;
pub mod logging;
pub mod types;
pub mod upload;

/// Prelude for common imports used throughout all ragchat crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{
    ChatMessage, MessageId, MessageVariant, Sender, UploadId, UploadStatus, UploadedFile,
};
pub use upload::{
    format_file_size, mime_for_path, parse_dropped_paths, supported_formats_label, DocumentKind,
    FileCandidate, MAX_UPLOAD_BYTES,
};
