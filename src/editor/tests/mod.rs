//! Unit tests for the editor session
//!
//! Uses the in-memory backend only; file-backed sessions are covered by the
//! integration tests.

#![allow(clippy::panic)]

use futures::StreamExt;
use serde_json::json;

use crate::{
    compose::PreviewMode,
    editor::{EditorError, EditorSession, MemoryBackend},
    model::{FieldKey, StoreInfo},
    render::WidgetKind,
};

const STORE: &str = "loja-verde";

fn store_info() -> StoreInfo {
    StoreInfo {
        default_logo_url: Some("https://cdn.example.com/store.png".to_string()),
        storefront_url: None,
    }
}

#[tokio::test]
async fn first_visit_starts_from_initial_identity() {
    let backend = MemoryBackend::new();
    let session = EditorSession::load(STORE, &backend, &store_info()).await.unwrap();

    assert_eq!(session.get_field("app_name").unwrap(), Some(json!("My Store")));
    assert_eq!(session.get_field("fab_enabled").unwrap(), None);
    assert!(!session.is_dirty());
    assert_eq!(session.mode(), PreviewMode::Splash);
}

#[tokio::test]
async fn load_then_save_writes_back_exactly_what_was_read() {
    let stored = json!({
        "app_name": "",
        "theme_color": "#10B981",
        "fab_enabled": true,
        "fab_size": "gigantic",
        "legacy_flag": 3
    });
    let backend = MemoryBackend::with_payload(STORE, stored.clone());

    let mut session = EditorSession::load(STORE, &backend, &store_info()).await.unwrap();
    session.save(&backend).await.unwrap();

    assert_eq!(backend.stored(STORE), Some(stored));
}

#[tokio::test]
async fn save_strips_store_supplied_fields() {
    let backend = MemoryBackend::with_payload(
        STORE,
        json!({
            "app_name": "Verde",
            "default_logo_url": "https://cdn.example.com/stale.png",
            "storefront_url": "old.example.com"
        }),
    );

    let mut session = EditorSession::load(STORE, &backend, &store_info()).await.unwrap();
    assert_eq!(
        session.config().default_logo_url.as_deref(),
        Some("https://cdn.example.com/store.png")
    );

    session.save(&backend).await.unwrap();
    assert_eq!(backend.stored(STORE), Some(json!({ "app_name": "Verde" })));
}

#[tokio::test]
async fn load_failure_creates_no_session() {
    let backend = MemoryBackend::new();
    backend.fail_loads(true);

    let err = EditorSession::load(STORE, &backend, &store_info()).await.unwrap_err();
    assert!(matches!(err, EditorError::LoadFailed { .. }));
}

#[tokio::test]
async fn non_object_payload_is_a_load_failure() {
    let backend = MemoryBackend::with_payload(STORE, json!([1, 2, 3]));

    let err = EditorSession::load(STORE, &backend, &store_info()).await.unwrap_err();
    assert!(matches!(err, EditorError::LoadFailed { .. }));
}

#[tokio::test]
async fn failed_save_keeps_edits_and_can_be_retried() {
    let backend = MemoryBackend::new();
    let mut session = EditorSession::new(STORE, store_info());
    session.update_field("fab_enabled", json!(true)).unwrap();

    backend.fail_saves(true);
    let err = session.save(&backend).await.unwrap_err();
    assert!(matches!(err, EditorError::SaveFailed { .. }));
    assert!(session.is_dirty());
    assert_eq!(session.get_field("fab_enabled").unwrap(), Some(json!(true)));

    backend.fail_saves(false);
    session.save(&backend).await.unwrap();
    assert!(!session.is_dirty());
    assert_eq!(backend.save_count(), 1);
}

#[test]
fn update_refreshes_preview_immediately() {
    let mut session = EditorSession::new(STORE, store_info());
    session.finish_splash();
    assert!(session.screen().layer(WidgetKind::Fab).is_none());

    let screen = session.update_field("fab_enabled", json!(true)).unwrap();
    assert!(screen.layer(WidgetKind::Fab).is_some());

    session.update_field("fab_enabled", json!(false)).unwrap();
    assert!(session.screen().layer(WidgetKind::Fab).is_none());
}

#[test]
fn null_unsets_back_to_default() {
    let mut session = EditorSession::new(STORE, store_info());
    session.update_field("fab_text", json!("Get it")).unwrap();
    assert_eq!(session.effective_field("fab_text").unwrap(), json!("Get it"));

    session.update_field("fab_text", json!(null)).unwrap();
    assert_eq!(session.get_field("fab_text").unwrap(), None);
    assert_eq!(session.effective_field("fab_text").unwrap(), json!("Download App"));
}

#[test]
fn rejects_read_only_unknown_and_mistyped_values() {
    let mut session = EditorSession::new(STORE, store_info());

    assert!(matches!(
        session.update_field("default_logo_url", json!("https://x.example.com/a.png")),
        Err(EditorError::ReadOnlyField(_))
    ));
    assert!(matches!(
        session.update_field("fab_colour", json!("#FFFFFF")),
        Err(EditorError::UnknownField(_))
    ));
    assert!(matches!(
        session.update_field("fab_enabled", json!("yes")),
        Err(EditorError::TypeMismatch { field: FieldKey::FabEnabled, .. })
    ));
    assert!(matches!(
        session.update_field("fab_size", json!("huge")),
        Err(EditorError::TypeMismatch { field: FieldKey::FabSize, .. })
    ));
    assert!(!session.is_dirty());
}

#[test]
fn store_fields_are_readable_but_not_persisted() {
    let session = EditorSession::new(STORE, store_info());

    assert_eq!(
        session.get_field("default_logo_url").unwrap(),
        Some(json!("https://cdn.example.com/store.png"))
    );
    assert!(session.save_payload().get("default_logo_url").is_none());
}

#[test]
fn form_values_are_never_undefined() {
    let session = EditorSession::from_payload(STORE, json!({}), StoreInfo::default()).unwrap();
    let form = session.form_values();

    assert_eq!(form["topbar_text"], json!("Install the app and get 10% off your first purchase"));
    assert_eq!(form["topbar_button_text"], json!("Install now"));
    assert_eq!(form["fab_size"], json!("medium"));
}

#[test]
fn mistyped_payload_still_opens_and_reports_the_fields() {
    let stored = json!({
        "app_name": "Shop",
        "fab_enabled": "true",
        "fab_text": 5,
        "bottom_bar_enabled": 1
    });

    let mut session = EditorSession::from_payload(STORE, stored.clone(), store_info()).unwrap();

    let fields: Vec<FieldKey> = session.issues().into_iter().map(|issue| issue.field).collect();
    assert_eq!(
        fields,
        vec![FieldKey::FabEnabled, FieldKey::FabText, FieldKey::BottomBarEnabled]
    );

    let effective = session.effective();
    assert_eq!(effective.identity.app_name, "Shop");
    assert!(!effective.fab.enabled);
    assert!(effective.bottom_bar.enabled);
    assert_eq!(session.form_values()["fab_text"], json!("Download App"));

    let screen = session.finish_splash();
    assert!(screen.layer(WidgetKind::Fab).is_none());
    assert!(screen.layer(WidgetKind::BottomBar).is_some());
    assert_eq!(session.save_payload(), stored);
}

#[test]
fn writing_the_same_value_is_not_an_edit() {
    let mut session = EditorSession::new(STORE, store_info());

    session.update_field("app_name", json!("My Store")).unwrap();
    assert!(!session.is_dirty());
}

#[tokio::test]
async fn subscribers_see_matching_edits_only() {
    let mut session = EditorSession::new(STORE, store_info());
    let mut fab = Box::pin(session.subscribe("fab_*"));
    let mut all = Box::pin(session.subscribe("*"));

    session.update_field("topbar_enabled", json!(true)).unwrap();
    session.update_field("fab_text", json!("Get it")).unwrap();

    let change = fab.next().await.unwrap();
    assert_eq!(change.field, FieldKey::FabText);
    assert_eq!(change.old_value, None);
    assert_eq!(change.as_string().as_deref(), Some("Get it"));

    let first = all.next().await.unwrap();
    assert_eq!(first.field, FieldKey::TopbarEnabled);
    assert!(first.extract::<bool>().unwrap());
}
