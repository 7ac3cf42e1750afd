//! Unit tests for settings
//!
//! Parsing and defaults only. No filesystem or environment access.

#![allow(clippy::panic)]

use std::path::PathBuf;

use crate::{
    AppwrapError,
    settings::{LogLevel, Settings},
};

#[test]
fn empty_file_is_all_defaults() {
    let settings = Settings::from_toml("", None).unwrap();

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.general.log_level, LogLevel::Info);
    assert_eq!(settings.preview.viewport().width, 276.0);
    assert_eq!(settings.preview.viewport().height, 576.0);
}

#[test]
fn sections_override_defaults() {
    let settings = Settings::from_toml(
        r#"
        [general]
        log_level = "debug"

        [storage]
        data_dir = "/srv/appwrap"

        [store]
        storefront_url = "shop.example.com"

        [preview]
        viewport_width = 390
        "#,
        None,
    )
    .unwrap();

    assert_eq!(settings.general.log_level, LogLevel::Debug);
    assert_eq!(settings.storage.data_dir, Some(PathBuf::from("/srv/appwrap")));
    assert_eq!(settings.preview.viewport_width, 390.0);
    assert_eq!(settings.preview.viewport_height, 576.0);

    let info = settings.store.store_info();
    assert_eq!(info.storefront_url.as_deref(), Some("shop.example.com"));
    assert_eq!(info.default_logo_url, None);
}

#[test]
fn configured_data_dir_wins() {
    let settings = Settings::from_toml("[storage]\ndata_dir = \"/tmp/stores\"", None).unwrap();

    assert_eq!(
        settings.storage.resolved_data_dir().unwrap(),
        PathBuf::from("/tmp/stores")
    );
}

#[test]
fn invalid_toml_reports_location() {
    let err = Settings::from_toml("[general\nlog_level = ", None).unwrap_err();

    match err {
        AppwrapError::TomlParseError { location, .. } => assert_eq!(location, "string"),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn unknown_log_level_is_rejected() {
    assert!(Settings::from_toml("[general]\nlog_level = \"loud\"", None).is_err());
}

#[test]
fn non_positive_viewport_is_rejected() {
    let err = Settings::from_toml("[preview]\nviewport_width = 0", None).unwrap_err();

    assert!(matches!(err, AppwrapError::ConfigValidation { .. }));
}

#[test]
fn log_level_display_matches_filter_names() {
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert_eq!(LogLevel::Trace.to_string(), "trace");
}
