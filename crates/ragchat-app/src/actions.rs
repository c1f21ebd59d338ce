//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Each action runs on its own tokio task and reports back through the
//! message channel. State is never touched from here.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use ragchat_api::Backend;
use ragchat_core::prelude::*;
use ragchat_core::{demo, FileCandidate, UploadStatus, UploadedFile};
use tokio::sync::mpsc;

use crate::message::Message;
use crate::state::OperationToken;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<B>(action: UpdateAction, backend: Arc<B>, msg_tx: mpsc::Sender<Message>)
where
    B: Backend + Sync + 'static,
{
    match action {
        UpdateAction::SendChat {
            token,
            text,
            thinking_delay,
        } => {
            tokio::spawn(async move {
                let msg = run_chat_request(backend.as_ref(), token, &text, thinking_delay).await;
                send_or_log(&msg_tx, msg).await;
            });
        }

        UpdateAction::UploadBatch {
            token,
            paths,
            max_bytes,
        } => {
            tokio::spawn(async move {
                run_upload_batch(backend.as_ref(), token, paths, max_bytes, &msg_tx).await;
            });
        }
    }
}

/// Wait out the thinking delay, then post the message.
///
/// Failures resolve to `ChatRequestFailed` carrying a demo reply picked here
/// so the reducer stays deterministic.
pub async fn run_chat_request<B: Backend>(
    backend: &B,
    token: OperationToken,
    text: &str,
    thinking_delay: Duration,
) -> Message {
    if !thinking_delay.is_zero() {
        tokio::time::sleep(thinking_delay).await;
    }

    match backend.send_chat(text).await {
        Ok(reply) => {
            debug!("Chat reply received ({} chars)", reply.len());
            Message::ChatReplyReceived { token, reply }
        }
        Err(e) => {
            if e.is_recoverable() {
                warn!("Chat request failed, answering in demo mode: {}", e);
            } else {
                error!("Chat request failed: {:?}", e);
            }
            Message::ChatRequestFailed {
                token,
                error: e.to_string(),
                fallback: demo::random_response().to_string(),
            }
        }
    }
}

/// Process files strictly in order.
///
/// A file that cannot be read or fails validation stops the batch with
/// `UploadValidationFailed`; files already uploaded stay recorded. A failed
/// upload is reported as `UploadItemFellBack` and the batch continues.
pub async fn run_upload_batch<B: Backend>(
    backend: &B,
    token: OperationToken,
    paths: Vec<PathBuf>,
    max_bytes: u64,
    msg_tx: &mpsc::Sender<Message>,
) {
    for path in paths {
        let candidate = match FileCandidate::from_path(&path)
            .and_then(|candidate| candidate.validate(max_bytes).map(|()| candidate))
        {
            Ok(candidate) => candidate,
            Err(e) => {
                if e.is_validation() {
                    info!("Upload batch aborted: {}", e);
                } else {
                    warn!("Upload batch aborted on {}: {:?}", path.display(), e);
                }
                let msg = Message::UploadValidationFailed {
                    token,
                    error: e.to_string(),
                };
                send_or_log(msg_tx, msg).await;
                return;
            }
        };

        let msg = match backend.upload_document(&candidate).await {
            Ok(_) => {
                info!("Uploaded {}", candidate.name);
                Message::UploadItemSucceeded {
                    token,
                    file: UploadedFile::from_candidate(&candidate, UploadStatus::Success),
                }
            }
            Err(e) => Message::UploadItemFellBack {
                token,
                file: UploadedFile::from_candidate(&candidate, UploadStatus::Demo),
                error: e.to_string(),
            },
        };
        send_or_log(msg_tx, msg).await;
    }

    send_or_log(msg_tx, Message::UploadBatchFinished { token }).await;
}

async fn send_or_log(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        warn!("Message channel closed; dropping task result");
    }
}
