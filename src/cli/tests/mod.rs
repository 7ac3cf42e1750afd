//! Unit tests for CLI module
//!
//! Tests argument parsing, formatting, and command execution against an
//! in-memory backend.

use clap::Parser;
use serde_json::{Value, json};

use crate::{
    cli::{
        Cli, CliError, CliService, Commands, OutputFormat, SourceArgs,
        formatting::{format_issues, format_json_value, format_screen},
        parse_value,
    },
    compose::{PreviewMode, preview},
    editor::MemoryBackend,
    model::{AppConfig, FieldIssue, FieldKey},
    settings::Settings,
};

fn service_with(backend: MemoryBackend) -> CliService {
    CliService::with_backend(Box::new(backend), &Settings::default())
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn format_json_value_scalars() {
    assert_eq!(format_json_value(&json!("hello world")), "\"hello world\"");
    assert_eq!(format_json_value(&json!("")), "\"\"");
    assert_eq!(format_json_value(&json!(42)), "42");
    assert_eq!(format_json_value(&json!(true)), "true");
    assert_eq!(format_json_value(&Value::Null), "(unset)");
}

#[test]
fn format_json_value_collections_show_size() {
    assert_eq!(format_json_value(&json!([1, 2, 3])), "[3]");
    assert_eq!(format_json_value(&json!({"a": 1, "b": 2})), "{2}");
}

#[test]
fn parse_value_reads_json_and_falls_back_to_strings() {
    assert_eq!(parse_value("true"), json!(true));
    assert_eq!(parse_value("3"), json!(3));
    assert_eq!(parse_value("null"), Value::Null);
    assert_eq!(parse_value("\"quoted\""), json!("quoted"));
    assert_eq!(parse_value("Get the app"), json!("Get the app"));
    assert_eq!(parse_value("#FF0000"), json!("#FF0000"));
}

#[test]
fn format_screen_lists_every_layer() {
    let mut config = AppConfig::initial();
    config.fab.enabled = Some(true);
    let screen = preview(&config, PreviewMode::App);

    let text = strip_ansi(&format_screen(&screen));
    assert!(text.starts_with("Preview (app, 276×576)"));
    for kind in screen.kinds() {
        assert!(text.contains(kind.as_str()), "missing {kind} in\n{text}");
    }
    assert!(text.contains("\"📲 Download App\""));
}

#[test]
fn format_issues_names_field_and_expectation() {
    let issues = vec![FieldIssue {
        field: FieldKey::FabColor,
        value: "\"#GGGGGG\"".to_string(),
        expected: FieldKey::FabColor.kind().expected_type(),
    }];

    let text = strip_ansi(&format_issues(&issues));
    assert_eq!(
        text,
        "warning: fab_color = \"#GGGGGG\" is not color string, using the default"
    );
}

#[test]
fn cli_parses_preview_defaults() {
    let cli = Cli::try_parse_from(["appwrap", "preview", "--store", "shop-1"]).unwrap();
    match cli.command {
        Commands::Preview {
            source,
            mode,
            format,
        } => {
            assert_eq!(source.store.as_deref(), Some("shop-1"));
            assert!(source.input.is_none());
            assert_eq!(mode, PreviewMode::App);
            assert_eq!(format, OutputFormat::Text);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn cli_parses_splash_mode_and_json_format() {
    let cli = Cli::try_parse_from([
        "appwrap", "preview", "--input", "cfg.json", "--mode", "splash", "--format", "json",
    ])
    .unwrap();
    match cli.command {
        Commands::Preview { mode, format, .. } => {
            assert_eq!(mode, PreviewMode::Splash);
            assert_eq!(format, OutputFormat::Json);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn cli_rejects_store_and_input_together() {
    let result = Cli::try_parse_from([
        "appwrap", "resolve", "--store", "a", "--input", "b.json",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_rejects_unknown_mode() {
    let result = Cli::try_parse_from(["appwrap", "preview", "--store", "a", "--mode", "boot"]);
    assert!(result.is_err());
}

#[test]
fn cli_set_requires_store() {
    assert!(Cli::try_parse_from(["appwrap", "set", "fab_text", "Hi"]).is_err());
    assert!(Cli::try_parse_from(["appwrap", "set", "fab_text", "Hi", "--store", "s"]).is_ok());
}

#[tokio::test]
async fn set_saves_and_get_reads_back() {
    let service = service_with(MemoryBackend::new());

    let output = service
        .execute(Commands::Set {
            field: "fab_text".to_string(),
            value: "Get the app".to_string(),
            store: "shop-1".to_string(),
        })
        .await
        .unwrap();
    assert!(strip_ansi(&output).contains("fab_text = \"Get the app\""));

    let output = service
        .execute(Commands::Get {
            field: "fab_text".to_string(),
            store: "shop-1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(
        strip_ansi(&output),
        "fab_text = \"Get the app\" (effective: \"Get the app\")"
    );
}

#[tokio::test]
async fn get_shows_effective_default_for_unset_field() {
    let service = service_with(MemoryBackend::new());

    let output = service
        .execute(Commands::Get {
            field: "fab_icon".to_string(),
            store: "shop-1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(strip_ansi(&output), "fab_icon = (unset) (effective: \"📲\")");
}

#[tokio::test]
async fn set_rejects_read_only_field() {
    let service = service_with(MemoryBackend::new());

    let result = service
        .execute(Commands::Set {
            field: "default_logo_url".to_string(),
            value: "https://cdn.example.com/x.png".to_string(),
            store: "shop-1".to_string(),
        })
        .await;
    assert!(matches!(result, Err(CliError::Editor(_))));
}

#[tokio::test]
async fn preview_without_source_is_invalid() {
    let service = service_with(MemoryBackend::new());

    let result = service
        .execute(Commands::Preview {
            source: SourceArgs {
                store: None,
                input: None,
            },
            mode: PreviewMode::App,
            format: OutputFormat::Text,
        })
        .await;
    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
}

#[tokio::test]
async fn preview_json_is_a_screen() {
    let backend = MemoryBackend::with_payload(
        "shop-1",
        json!({"app_name": "Verdant", "fab_enabled": true}),
    );
    let service = service_with(backend);

    let output = service
        .execute(Commands::Preview {
            source: SourceArgs {
                store: Some("shop-1".to_string()),
                input: None,
            },
            mode: PreviewMode::App,
            format: OutputFormat::Json,
        })
        .await
        .unwrap();

    let screen: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(screen["mode"], json!("app"));
    assert!(screen["layers"].as_array().is_some_and(|l| !l.is_empty()));
}

#[tokio::test]
async fn load_failure_surfaces_as_editor_error() {
    let backend = MemoryBackend::new();
    backend.fail_loads(true);
    let service = service_with(backend);

    let result = service
        .execute(Commands::Get {
            field: "fab_text".to_string(),
            store: "shop-1".to_string(),
        })
        .await;
    assert!(matches!(result, Err(CliError::Editor(_))));
}

#[tokio::test]
async fn schema_describes_stored_fields() {
    let service = service_with(MemoryBackend::new());

    let output = service.execute(Commands::Schema).await.unwrap();
    assert!(output.contains("fab_text"));
    assert!(output.contains("bottom_bar_enabled"));
}
