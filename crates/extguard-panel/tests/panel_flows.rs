//! End-to-end panel flows against a mocked backend
//!
//! Tests cover:
//! - Adding a custom extension and the follow-up reload
//! - Optimistic fixed toggles and their rollback, for error statuses and
//!   for requests that never get a response
//! - Inline messages for duplicate and other backend rejections
//! - Validation that never reaches the backend
//! - Silent load failures
//! - Confirmed removal, both succeeding and failing
//! - Toast timers progressing while a confirmation is pending

mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use common::*;
use extguard_core::{Locale, UiLimits, ValidationError};
use extguard_panel::{
    AddOutcome, Confirm, EventOutcome, PanelEvent, RemoveOutcome, Toast, ToastKind, ToggleOutcome,
};
use serde_json::json;
use tokio::sync::oneshot;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn toast(message: &str, kind: ToastKind) -> Option<Toast> {
    Some(Toast {
        message: message.to_string(),
        kind,
    })
}

#[tokio::test]
async fn test_add_custom_extension_reloads_list() {
    let server = MockServer::start().await;
    mock_get(&server, FIXED_PATH, fixed_json(false)).await;
    mock_get_times(&server, CUSTOM_PATH, custom_json(&[]), 1).await;
    mock_get(&server, CUSTOM_PATH, custom_json(&["zip"])).await;
    Mock::given(method("POST"))
        .and(path(CUSTOM_PATH))
        .and(body_json(json!({"extension": "zip"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1, "extension": "zip", "createdAt": "2025-11-02T10:15:30"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, true);
    h.page.load().await;
    let before = h.view.last_custom().unwrap();
    assert!(before.empty);
    assert_eq!((before.count, before.max_count), (0, 200));

    let outcome = h
        .page
        .dispatch(PanelEvent::Submit {
            input: "  ZIP ".to_string(),
        })
        .await;
    assert_eq!(outcome, EventOutcome::Added(AddOutcome::Added("zip".into())));

    let after = h.view.last_custom().unwrap();
    assert!(!after.empty);
    assert_eq!(after.count, 1);
    assert_eq!(after.tags[0].extension, "zip");
    assert_eq!(after.tags[0].control_id, "tag-zip");
    assert_eq!(h.view.input_cleared(), 1);
    assert_eq!(h.view.inline_error(), None);
    assert_eq!(
        h.page.notifier().snapshot().toast,
        toast("zip blocked", ToastKind::Success)
    );
}

#[tokio::test]
async fn test_failed_toggle_rolls_back_after_reload() {
    let server = MockServer::start().await;
    mock_get(&server, FIXED_PATH, fixed_json(false)).await;
    mock_get(&server, CUSTOM_PATH, custom_json(&[])).await;
    mock_status_expect(&server, "PATCH", "/api/extensions/fixed/exe", 500, 1).await;

    let h = harness(&server, true);
    h.page.load().await;
    assert_eq!(h.view.fixed_render_count(), 1);

    let outcome = h
        .page
        .dispatch(PanelEvent::Toggle {
            name: "exe".into(),
            blocked: true,
        })
        .await;
    assert_eq!(outcome, EventOutcome::Toggled(ToggleOutcome::RolledBack));

    let renders = h.view.fixed_renders.lock().unwrap().clone();
    assert_eq!(renders.len(), 3);
    // Optimistic flip, then the reloaded backend state.
    assert!(renders[1].iter().any(|row| row.name == "exe" && row.blocked));
    assert!(renders[2].iter().any(|row| row.name == "exe" && !row.blocked));
    assert_eq!(
        h.page.notifier().snapshot().toast,
        toast("Update failed", ToastKind::Error)
    );
}

#[tokio::test]
async fn test_toggle_without_response_rolls_back_like_server_error() {
    let server = MockServer::start().await;
    mock_get(&server, FIXED_PATH, fixed_json(false)).await;
    mock_get(&server, CUSTOM_PATH, custom_json(&[])).await;
    // Answers only after the client has given up.
    Mock::given(method("PATCH"))
        .and(path("/api/extensions/fixed/exe"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let h = harness_with_timeout(&server, 1);
    h.page.load().await;

    let outcome = h.page.fixed().toggle("exe", true).await;
    assert_eq!(outcome, ToggleOutcome::RolledBack);

    let renders = h.view.fixed_renders.lock().unwrap().clone();
    assert_eq!(renders.len(), 3);
    assert!(renders[1].iter().any(|row| row.name == "exe" && row.blocked));
    assert!(renders[2].iter().any(|row| row.name == "exe" && !row.blocked));
    assert_eq!(
        h.page.notifier().snapshot().toast,
        toast("Update failed", ToastKind::Error)
    );
}

#[tokio::test]
async fn test_toggle_success_toasts_in_locale() {
    let server = MockServer::start().await;
    mock_get(&server, FIXED_PATH, fixed_json(true)).await;
    mock_get(&server, CUSTOM_PATH, custom_json(&[])).await;
    Mock::given(method("PATCH"))
        .and(path("/api/extensions/fixed/exe"))
        .and(body_json(json!({"blocked": false})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 5, "name": "exe", "blocked": false})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let h = harness_with(&server, true, Locale::Ko, UiLimits::default());
    h.page.load().await;

    let outcome = h.page.fixed().toggle("exe", false).await;
    assert_eq!(outcome, ToggleOutcome::Applied);
    assert!(h
        .page
        .fixed()
        .rows()
        .iter()
        .any(|row| row.control_id == "ext-exe" && !row.blocked));
    assert_eq!(
        h.page.notifier().snapshot().toast,
        toast("exe 확장자 차단 해제", ToastKind::SuccessUnblock)
    );
}

#[tokio::test]
async fn test_duplicate_rejection_names_extension() {
    let server = MockServer::start().await;
    mock_get(&server, CUSTOM_PATH, custom_json(&["zip"])).await;
    Mock::given(method("POST"))
        .and(path(CUSTOM_PATH))
        .respond_with(ResponseTemplate::new(409).set_body_json(error_json(
            "DUPLICATE_EXTENSION",
            "이미 등록된 확장자입니다: zip",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, true);
    let _ = h.page.custom().load().await;

    let outcome = h.page.custom().add("zip").await;
    assert_eq!(
        outcome,
        AddOutcome::Rejected {
            extension: "zip".into(),
            message: "zip is already blocked".into(),
        }
    );
    assert_eq!(h.view.inline_error().as_deref(), Some("zip is already blocked"));
    assert_eq!(h.view.input_cleared(), 0);
    assert!(h.page.notifier().snapshot().toast.is_none());
}

#[tokio::test]
async fn test_other_rejection_shows_server_message() {
    let server = MockServer::start().await;
    mock_get(&server, CUSTOM_PATH, custom_json(&[])).await;
    Mock::given(method("POST"))
        .and(path(CUSTOM_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_json(
            "EXTENSION_LIMIT_EXCEEDED",
            "Custom extension limit reached",
        )))
        .mount(&server)
        .await;

    let h = harness(&server, true);
    let _ = h.page.custom().load().await;

    h.page.custom().add("rar").await;
    assert_eq!(
        h.view.inline_error().as_deref(),
        Some("Custom extension limit reached")
    );
}

#[tokio::test]
async fn test_validation_failures_never_reach_backend() {
    let server = MockServer::start().await;
    mock_get(&server, CUSTOM_PATH, custom_json(&["zip", "tar"])).await;
    mock_status_expect(&server, "POST", CUSTOM_PATH, 201, 0).await;

    let limits = UiLimits {
        max_length: 20,
        max_count: 2,
    };
    let h = harness_with(&server, true, Locale::En, limits);
    let _ = h.page.custom().load().await;
    assert_eq!(h.page.custom().current_count(), 2);

    assert_eq!(
        h.page.custom().add("rar").await,
        AddOutcome::Invalid(ValidationError::CountExceeded { max: 2 })
    );
    assert_eq!(
        h.view.inline_error().as_deref(),
        Some("You can add at most 2 extensions")
    );

    let long = "a".repeat(21);
    assert_eq!(
        h.page.custom().add(&long).await,
        AddOutcome::Invalid(ValidationError::TooLong { max: 20 })
    );
    assert!(h.page.notifier().snapshot().toast.is_none());
}

#[tokio::test]
async fn test_failed_load_is_silent() {
    let server = MockServer::start().await;
    mock_status_expect(&server, "GET", FIXED_PATH, 500, 1).await;
    mock_status_expect(&server, "GET", CUSTOM_PATH, 503, 1).await;

    let h = harness(&server, true);
    h.page.load().await;

    assert_eq!(h.view.fixed_render_count(), 0);
    assert_eq!(h.view.custom_render_count(), 0);
    assert!(h.page.notifier().snapshot().toast.is_none());
    assert!(h.page.fixed().rows().is_empty());
}

#[tokio::test]
async fn test_confirmed_remove_reloads_list() {
    let server = MockServer::start().await;
    mock_get_times(&server, CUSTOM_PATH, custom_json(&["zip"]), 1).await;
    mock_get(&server, CUSTOM_PATH, custom_json(&[])).await;
    mock_status_expect(&server, "DELETE", "/api/extensions/custom/zip", 204, 1).await;

    let h = harness(&server, true);
    let _ = h.page.custom().load().await;

    let outcome = h
        .page
        .dispatch(PanelEvent::Remove {
            extension: "zip".into(),
        })
        .await;
    assert_eq!(outcome, EventOutcome::Removed(RemoveOutcome::Removed));
    assert_eq!(
        h.confirm.prompts.lock().unwrap().as_slice(),
        ["Unblock the 'zip' extension?"]
    );
    assert!(h.view.last_custom().unwrap().empty);
    assert_eq!(
        h.page.notifier().snapshot().toast,
        toast("zip unblocked", ToastKind::SuccessUnblock)
    );
}

#[tokio::test]
async fn test_failed_remove_toasts_without_reload() {
    let server = MockServer::start().await;
    mock_status_expect(&server, "GET", CUSTOM_PATH, 200, 0).await;
    mock_status_expect(&server, "DELETE", "/api/extensions/custom/zip", 500, 1).await;

    let h = harness(&server, true);

    assert_eq!(h.page.custom().remove("zip").await, RemoveOutcome::Failed);
    assert_eq!(
        h.page.notifier().snapshot().toast,
        toast("Delete failed", ToastKind::Error)
    );
}

#[tokio::test]
async fn test_declined_remove_is_a_no_op() {
    let server = MockServer::start().await;
    mock_status_expect(&server, "DELETE", "/api/extensions/custom/zip", 204, 0).await;

    let h = harness(&server, false);

    assert_eq!(h.page.custom().remove("zip").await, RemoveOutcome::Cancelled);
    assert!(h.page.notifier().snapshot().toast.is_none());
    assert_eq!(h.confirm.prompts.lock().unwrap().len(), 1);
}

/// Confirmation answered later from another task
struct DeferredConfirm {
    answer: Mutex<Option<oneshot::Receiver<bool>>>,
}

#[async_trait]
impl Confirm for DeferredConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        let answer = self.answer.lock().unwrap().take();
        match answer {
            Some(rx) => rx.await.unwrap_or(false),
            None => false,
        }
    }
}

#[tokio::test]
async fn test_toast_timers_run_while_confirmation_is_pending() {
    let server = MockServer::start().await;
    mock_get(&server, CUSTOM_PATH, custom_json(&[])).await;
    mock_status_expect(&server, "DELETE", "/api/extensions/custom/zip", 204, 1).await;

    let (tx, rx) = oneshot::channel();
    let (page, _view) = page_with_confirm(
        &server,
        Arc::new(DeferredConfirm {
            answer: Mutex::new(Some(rx)),
        }),
    );
    page.notifier().show("earlier", ToastKind::Success);

    let notifier = page.notifier().clone();
    let answer = tokio::spawn(async move {
        // Only reachable if the reveal timer fires during the prompt.
        while !notifier.snapshot().visible {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        let _ = tx.send(true);
    });

    let outcome = tokio::time::timeout(Duration::from_secs(5), page.custom().remove("zip"))
        .await
        .expect("confirmation never answered");
    assert_eq!(outcome, RemoveOutcome::Removed);
    answer.await.unwrap();
}
