//! Message processing
//!
//! Runs a message through the TEA update function, follows up any chained
//! messages, and dispatches the resulting actions.

use std::sync::Arc;

use ragchat_api::Backend;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<B>,
) where
    B: Backend + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, Arc::clone(backend), msg_tx.clone());
        }

        msg = result.message;
    }
}
