//! Demo-mode fallback content used when the backend is unreachable

use rand::seq::SliceRandom;

/// Banner shown after a failed chat request
pub const CONNECTION_FAILED_BANNER: &str = "Connection failed - using demo mode";

/// Canned replies substituted for a failed chat request
pub const DEMO_RESPONSES: [&str; 4] = [
    "I'm a RAG chatbot ready to help! (This is a demo response - connect your backend to see real responses)",
    "Your question is interesting! Once connected to the backend, I'll provide intelligent answers based on my knowledge base.",
    "I'd love to help with that! Please make sure the backend is running and properly configured.",
    "Great question! In demo mode, but ready to provide real RAG-powered responses when connected.",
];

/// Pick one demo reply uniformly at random
pub fn random_response() -> &'static str {
    DEMO_RESPONSES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(DEMO_RESPONSES[0])
}

pub fn upload_success_text(file_name: &str) -> String {
    format!(
        "✅ Successfully uploaded \"{}\". The document has been processed and added to my knowledge base!",
        file_name
    )
}

pub fn upload_demo_text(file_name: &str) -> String {
    format!(
        "📁 File \"{}\" uploaded successfully! (Demo mode - connect your backend to process real documents)",
        file_name
    )
}
