//! Wire types for the RAG backend's JSON endpoints

use serde::Serialize;
use serde_json::Value;

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Keys that may carry the reply text, in priority order
pub const REPLY_KEYS: [&str; 3] = ["response", "message", "reply"];

/// Pull the reply text out of a chat response body.
///
/// The first key holding a non-empty string wins. Empty strings and
/// non-string values are skipped.
pub fn extract_reply(body: &Value) -> Option<String> {
    REPLY_KEYS.iter().find_map(|key| {
        body.get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}
