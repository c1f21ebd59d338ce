//! Tests for handler module

use std::path::PathBuf;
use std::time::Duration;

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppPhase, AppState, OperationToken, UiMode};
use ragchat_api::test_utils::test_candidate;
use ragchat_core::demo::{CONNECTION_FAILED_BANNER, DEMO_RESPONSES};
use ragchat_core::{ChatMessage, MessageVariant, Sender, UploadStatus, UploadedFile};

/// Run a message and any follow-ups, collecting the actions produced
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn type_draft(state: &mut AppState, text: &str) {
    run(
        state,
        Message::DraftChanged {
            text: text.to_string(),
        },
    );
}

/// Start a send and return its token
fn start_send(state: &mut AppState, text: &str) -> OperationToken {
    type_draft(state, text);
    match run(state, Message::SendMessage).as_slice() {
        [UpdateAction::SendChat { token, .. }] => *token,
        other => panic!("expected SendChat, got {:?}", other),
    }
}

/// Start an upload batch and return its token
fn start_upload(state: &mut AppState, paths: &[&str]) -> OperationToken {
    let paths = paths.iter().map(PathBuf::from).collect();
    match run(state, Message::UploadFiles { paths }).as_slice() {
        [UpdateAction::UploadBatch { token, .. }] => *token,
        other => panic!("expected UploadBatch, got {:?}", other),
    }
}

fn record(name: &str, status: UploadStatus) -> UploadedFile {
    UploadedFile::from_candidate(&test_candidate(name, 1024), status)
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    update(&mut state, Message::Quit);
    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_in_every_mode() {
    let mut state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));

    state.ui_mode = UiMode::UploadModal;
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

// ─────────────────────────────────────────────────────────
// Sending
// ─────────────────────────────────────────────────────────

#[test]
fn test_send_appends_user_message_and_starts_request() {
    let mut state = AppState::new();
    type_draft(&mut state, "  What is RAG?  ");

    let actions = run(&mut state, Message::SendMessage);

    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].text, "What is RAG?");
    assert_eq!(state.messages[0].sender, Sender::User);
    assert!(state.draft.is_empty());
    assert!(state.is_loading());
    assert!(state.is_typing());
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::SendChat { text, thinking_delay, .. }]
            if text == "What is RAG?" && *thinking_delay == Duration::from_millis(1000)
    ));
}

#[test]
fn test_send_clears_previous_error() {
    let mut state = AppState::new();
    state.set_error("old");
    start_send(&mut state, "hi");
    assert!(state.error.is_none());
}

#[test]
fn test_send_blank_draft_is_noop() {
    for draft in ["", "   ", "\n\t "] {
        let mut state = AppState::new();
        type_draft(&mut state, draft);

        let actions = run(&mut state, Message::SendMessage);

        assert!(actions.is_empty());
        assert!(state.messages.is_empty());
        assert!(!state.is_loading());
    }
}

#[test]
fn test_send_while_in_flight_is_noop() {
    let mut state = AppState::new();
    start_send(&mut state, "first");
    type_draft(&mut state, "second");

    let actions = run(&mut state, Message::SendMessage);

    assert!(actions.is_empty());
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.draft, "second");
}

#[test]
fn test_reply_appends_bot_message_and_marks_connected() {
    let mut state = AppState::new();
    state.is_connected = false;
    let token = start_send(&mut state, "Hello");

    run(
        &mut state,
        Message::ChatReplyReceived {
            token,
            reply: "Hi from the knowledge base".to_string(),
        },
    );

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].sender, Sender::Bot);
    assert_eq!(state.messages[1].variant(), MessageVariant::Bot);
    assert_eq!(state.messages[1].text, "Hi from the knowledge base");
    assert!(state.is_connected);
    assert!(!state.is_loading());
    assert!(!state.is_typing());
}

#[test]
fn test_failure_switches_to_demo_mode() {
    let mut state = AppState::new();
    let token = start_send(&mut state, "Hello");

    run(
        &mut state,
        Message::ChatRequestFailed {
            token,
            error: "Connection error: refused".to_string(),
            fallback: DEMO_RESPONSES[2].to_string(),
        },
    );

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].text, DEMO_RESPONSES[2]);
    assert!(state.messages[1].is_demo);
    assert!(!state.messages[1].is_system);
    assert_eq!(state.messages[1].variant(), MessageVariant::Demo);
    assert!(!state.is_connected);
    assert_eq!(state.error.as_deref(), Some(CONNECTION_FAILED_BANNER));
    assert!(!state.is_loading());
}

#[test]
fn test_stale_chat_completion_is_ignored() {
    let mut state = AppState::new();
    let first = start_send(&mut state, "one");
    run(
        &mut state,
        Message::ChatReplyReceived {
            token: first,
            reply: "r1".to_string(),
        },
    );
    let second = start_send(&mut state, "two");

    // A duplicate completion for the first request arrives late
    run(
        &mut state,
        Message::ChatRequestFailed {
            token: first,
            error: "late".to_string(),
            fallback: DEMO_RESPONSES[0].to_string(),
        },
    );

    assert_eq!(state.messages.len(), 3);
    assert!(state.is_connected);
    assert!(state.error.is_none());
    assert!(state.chat.is_current(second));
}

#[test]
fn test_scenario_blank_then_unreachable_backend() {
    let mut state = AppState::new();

    type_draft(&mut state, "  ");
    assert!(run(&mut state, Message::SendMessage).is_empty());
    assert!(state.messages.is_empty());

    let token = start_send(&mut state, "Hello");
    run(
        &mut state,
        Message::ChatRequestFailed {
            token,
            error: "unreachable".to_string(),
            fallback: DEMO_RESPONSES[0].to_string(),
        },
    );

    let texts: Vec<_> = state.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["Hello", DEMO_RESPONSES[0]]);
    assert_eq!(state.messages[0].sender, Sender::User);
    assert_eq!(state.messages[1].sender, Sender::Bot);
    assert!(!state.is_connected);
    assert_eq!(
        state.error.as_deref(),
        Some("Connection failed - using demo mode")
    );
}

#[test]
fn test_thinking_delay_comes_from_settings() {
    let mut state = AppState::new();
    state.settings.behavior.thinking_delay_ms = 250;
    type_draft(&mut state, "hi");

    let actions = run(&mut state, Message::SendMessage);

    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::SendChat { thinking_delay, .. }] if *thinking_delay == Duration::from_millis(250)
    ));
}

// ─────────────────────────────────────────────────────────
// Clear session / error banner
// ─────────────────────────────────────────────────────────

#[test]
fn test_clear_session_keeps_uploaded_files() {
    let mut state = AppState::new();
    state.push_message(ChatMessage::user("a"));
    state.push_message(ChatMessage::bot("b"));
    state.uploaded_files.push(record("doc.pdf", UploadStatus::Success));
    state.set_error("boom");

    run(&mut state, Message::ClearSession);

    assert!(state.messages.is_empty());
    assert!(state.error.is_none());
    assert_eq!(state.uploaded_files.len(), 1);
    assert_eq!(state.session_epoch, 1);
}

#[test]
fn test_ctrl_l_clears_session() {
    let mut state = AppState::new();
    state.push_message(ChatMessage::user("a"));
    run(&mut state, Message::Key(InputKey::CharCtrl('l')));
    assert!(state.messages.is_empty());
}

#[test]
fn test_esc_dismisses_error() {
    let mut state = AppState::new();
    state.set_error("boom");
    run(&mut state, Message::Key(InputKey::Esc));
    assert!(state.error.is_none());
}

#[test]
fn test_esc_without_error_does_nothing() {
    let state = AppState::new();
    assert!(handle_key(&state, InputKey::Esc).is_none());
}

// ─────────────────────────────────────────────────────────
// Draft editing
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_and_backspace_edit_draft() {
    let mut state = AppState::new();
    for c in "hey".chars() {
        run(&mut state, Message::Key(InputKey::Char(c)));
    }
    run(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(state.draft, "he");
}

#[test]
fn test_shift_enter_inserts_newline_enter_sends() {
    let mut state = AppState::new();
    type_draft(&mut state, "line one");
    run(&mut state, Message::Key(InputKey::ShiftEnter));
    run(&mut state, Message::Key(InputKey::Char('x')));
    assert_eq!(state.draft, "line one\nx");

    let actions = run(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(actions.len(), 1);
    assert_eq!(state.messages[0].text, "line one\nx");
}

#[test]
fn test_typing_allowed_while_loading() {
    let mut state = AppState::new();
    start_send(&mut state, "first");
    run(&mut state, Message::Key(InputKey::Char('n')));
    assert_eq!(state.draft, "n");
}

#[test]
fn test_ctrl_u_clears_draft() {
    let mut state = AppState::new();
    type_draft(&mut state, "discard me");
    run(&mut state, Message::Key(InputKey::CharCtrl('u')));
    assert!(state.draft.is_empty());
}

#[test]
fn test_plain_paste_appends_to_draft() {
    let mut state = AppState::new();
    type_draft(&mut state, "Summarize: ");
    let actions = run(
        &mut state,
        Message::Paste {
            text: "the quarterly report".to_string(),
            paths: None,
        },
    );
    assert!(actions.is_empty());
    assert_eq!(state.draft, "Summarize: the quarterly report");
}

// ─────────────────────────────────────────────────────────
// Scrolling
// ─────────────────────────────────────────────────────────

#[test]
fn test_scroll_keys_move_view() {
    let mut state = AppState::new();
    run(&mut state, Message::Key(InputKey::Up));
    run(&mut state, Message::Key(InputKey::Up));
    assert_eq!(state.conversation_view.offset_from_bottom, 2);

    run(&mut state, Message::Key(InputKey::Down));
    assert_eq!(state.conversation_view.offset_from_bottom, 1);

    run(&mut state, Message::Key(InputKey::End));
    assert!(state.conversation_view.is_following());

    state.conversation_view.viewport_height = 8;
    run(&mut state, Message::Key(InputKey::PageUp));
    assert_eq!(state.conversation_view.offset_from_bottom, 7);

    run(&mut state, Message::Key(InputKey::Home));
    assert_eq!(state.conversation_view.offset_from_bottom, usize::MAX);
}

#[test]
fn test_send_resumes_following() {
    let mut state = AppState::new();
    state.conversation_view.scroll_up(12);
    start_send(&mut state, "hi");
    assert!(state.conversation_view.is_following());
}

// ─────────────────────────────────────────────────────────
// Upload modal
// ─────────────────────────────────────────────────────────

#[test]
fn test_ctrl_o_opens_modal_and_esc_closes() {
    let mut state = AppState::new();
    run(&mut state, Message::Key(InputKey::CharCtrl('o')));
    assert!(state.show_upload_modal());

    run(&mut state, Message::Key(InputKey::Esc));
    assert!(!state.show_upload_modal());
}

#[test]
fn test_modal_path_entry_submits_batch() {
    let mut state = AppState::new();
    run(&mut state, Message::OpenUploadModal);
    for c in "a.pdf 'my notes.txt'".chars() {
        run(&mut state, Message::Key(InputKey::Char(c)));
    }

    let actions = run(&mut state, Message::Key(InputKey::Enter));

    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::UploadBatch { paths, max_bytes, .. }]
            if *paths == vec![PathBuf::from("a.pdf"), PathBuf::from("my notes.txt")]
                && *max_bytes == ragchat_core::MAX_UPLOAD_BYTES
    ));
    assert!(state.is_uploading());
    assert!(state.upload_modal.path_draft.is_empty());
}

#[test]
fn test_modal_enter_with_empty_draft_is_noop() {
    let mut state = AppState::new();
    run(&mut state, Message::OpenUploadModal);
    assert!(run(&mut state, Message::Key(InputKey::Enter)).is_empty());
    assert!(!state.is_uploading());
}

#[test]
fn test_empty_batch_is_noop() {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::UploadFiles { paths: vec![] });
    assert!(actions.is_empty());
    assert!(!state.is_uploading());
}

#[test]
fn test_second_batch_ignored_while_uploading() {
    let mut state = AppState::new();
    start_upload(&mut state, &["a.pdf"]);
    let actions = run(
        &mut state,
        Message::UploadFiles {
            paths: vec![PathBuf::from("b.pdf")],
        },
    );
    assert!(actions.is_empty());
}

#[test]
fn test_paste_in_modal_is_a_drop() {
    let mut state = AppState::new();
    run(&mut state, Message::OpenUploadModal);

    let actions = run(
        &mut state,
        Message::Paste {
            text: "file:///tmp/report%201.pdf".to_string(),
            paths: None,
        },
    );

    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::UploadBatch { paths, .. }] if *paths == vec![PathBuf::from("/tmp/report 1.pdf")]
    ));
}

#[test]
fn test_path_paste_in_chat_uploads() {
    let mut state = AppState::new();
    let actions = run(
        &mut state,
        Message::Paste {
            text: "/tmp/a.pdf".to_string(),
            paths: Some(vec![PathBuf::from("/tmp/a.pdf")]),
        },
    );
    assert_eq!(actions.len(), 1);
    assert!(state.draft.is_empty());
}

#[test]
fn test_drag_enter_leave_and_drop() {
    let mut state = AppState::new();
    run(&mut state, Message::DragEnter);
    assert!(state.drag_active);
    run(&mut state, Message::DragLeave);
    assert!(!state.drag_active);

    run(&mut state, Message::DragEnter);
    run(
        &mut state,
        Message::FilesDropped {
            paths: vec![PathBuf::from("x.txt")],
        },
    );
    assert!(!state.drag_active);
    assert!(state.is_uploading());
}

// ─────────────────────────────────────────────────────────
// Upload batch results
// ─────────────────────────────────────────────────────────

#[test]
fn test_success_records_file_and_system_message() {
    let mut state = AppState::new();
    run(&mut state, Message::OpenUploadModal);
    let token = start_upload(&mut state, &["guide.pdf"]);

    run(
        &mut state,
        Message::UploadItemSucceeded {
            token,
            file: record("guide.pdf", UploadStatus::Success),
        },
    );
    run(&mut state, Message::UploadBatchFinished { token });

    assert_eq!(state.uploaded_files.len(), 1);
    assert_eq!(state.uploaded_files[0].status, UploadStatus::Success);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(
        state.messages[0].text,
        "✅ Successfully uploaded \"guide.pdf\". The document has been processed and added to my knowledge base!"
    );
    assert_eq!(state.messages[0].variant(), MessageVariant::System);
    assert!(!state.messages[0].is_demo);
    assert!(!state.show_upload_modal());
    assert!(!state.is_uploading());
}

#[test]
fn test_all_failing_uploads_record_demo_in_order() {
    let names = ["a.pdf", "b.txt", "c.doc"];
    let mut state = AppState::new();
    let token = start_upload(&mut state, &names);

    for name in names {
        run(
            &mut state,
            Message::UploadItemFellBack {
                token,
                file: record(name, UploadStatus::Demo),
                error: "Upload failed: refused".to_string(),
            },
        );
    }
    run(&mut state, Message::UploadBatchFinished { token });

    let recorded: Vec<_> = state.uploaded_files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(recorded, names);
    assert!(state
        .uploaded_files
        .iter()
        .all(|f| f.status == UploadStatus::Demo));

    assert_eq!(state.messages.len(), 3);
    for (message, name) in state.messages.iter().zip(names) {
        assert!(message.is_demo && message.is_system);
        assert_eq!(
            message.text,
            format!(
                "📁 File \"{}\" uploaded successfully! (Demo mode - connect your backend to process real documents)",
                name
            )
        );
    }
    assert!(state.error.is_none());
}

#[test]
fn test_validation_failure_sets_error_and_keeps_modal_open() {
    let mut state = AppState::new();
    run(&mut state, Message::OpenUploadModal);
    let token = start_upload(&mut state, &["photo.png"]);

    run(
        &mut state,
        Message::UploadValidationFailed {
            token,
            error: "File type image/png not supported. Please upload PDF, TXT, or DOC files."
                .to_string(),
        },
    );

    assert!(state.uploaded_files.is_empty());
    assert!(state.messages.is_empty());
    assert_eq!(
        state.error.as_deref(),
        Some("File type image/png not supported. Please upload PDF, TXT, or DOC files.")
    );
    assert!(state.show_upload_modal());
    assert!(!state.is_uploading());
}

#[test]
fn test_stale_upload_results_are_ignored() {
    let mut state = AppState::new();
    let first = start_upload(&mut state, &["a.pdf"]);
    run(&mut state, Message::UploadBatchFinished { token: first });
    let second = start_upload(&mut state, &["b.pdf"]);

    run(
        &mut state,
        Message::UploadItemSucceeded {
            token: first,
            file: record("a.pdf", UploadStatus::Success),
        },
    );
    run(&mut state, Message::UploadBatchFinished { token: first });

    assert!(state.uploaded_files.is_empty());
    assert!(state.upload.is_current(second));
}

// ─────────────────────────────────────────────────────────
// Uploaded-file selection and removal
// ─────────────────────────────────────────────────────────

fn state_with_files(names: &[&str]) -> AppState {
    let mut state = AppState::new();
    for name in names {
        state
            .uploaded_files
            .push(record(name, UploadStatus::Success));
    }
    state
}

#[test]
fn test_selection_moves_within_bounds() {
    let mut state = state_with_files(&["a.pdf", "b.pdf"]);
    run(&mut state, Message::OpenUploadModal);
    assert_eq!(state.upload_modal.selected, Some(0));

    run(&mut state, Message::Key(InputKey::Down));
    run(&mut state, Message::Key(InputKey::Down));
    assert_eq!(state.upload_modal.selected, Some(1));

    run(&mut state, Message::Key(InputKey::Up));
    run(&mut state, Message::Key(InputKey::Up));
    assert_eq!(state.upload_modal.selected, Some(0));
}

#[test]
fn test_delete_removes_selected_file_locally() {
    let mut state = state_with_files(&["a.pdf", "b.pdf"]);
    run(&mut state, Message::OpenUploadModal);
    run(&mut state, Message::Key(InputKey::Down));

    let actions = run(&mut state, Message::Key(InputKey::Delete));

    assert!(actions.is_empty());
    let names: Vec<_> = state.uploaded_files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.pdf"]);
    assert_eq!(state.upload_modal.selected, Some(0));

    run(&mut state, Message::Key(InputKey::Delete));
    assert!(state.uploaded_files.is_empty());
    assert_eq!(state.upload_modal.selected, None);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut state = state_with_files(&["a.pdf"]);
    run(&mut state, Message::RemoveUploadedFile { id: u64::MAX });
    assert_eq!(state.uploaded_files.len(), 1);
}

#[test]
fn test_tick_advances_animation_only_when_busy() {
    let mut state = AppState::new();
    run(&mut state, Message::Tick);
    assert_eq!(state.animation_frame, 0);

    start_send(&mut state, "hi");
    run(&mut state, Message::Tick);
    assert_eq!(state.animation_frame, 1);
}
