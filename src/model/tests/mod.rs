//! Unit tests for the configuration model
//!
//! Wire format, round-trips and field shape validation. All in-memory.

#![allow(clippy::panic)]

use serde_json::{Value, json};

use crate::{
    layout::{FabPosition, SizeToken, TopBarPosition},
    model::{AppConfig, Explicit, FieldKey, StoreInfo},
};

#[test]
fn empty_payload_deserializes_to_all_absent() {
    let config: AppConfig = serde_json::from_value(json!({})).unwrap();

    assert_eq!(config, AppConfig::default());
    for key in FieldKey::ALL {
        assert!(config.explicit(key).is_none(), "{key} should be absent");
    }
}

#[test]
fn flat_wire_names_map_to_widget_groups() {
    let config: AppConfig = serde_json::from_value(json!({
        "app_name": "Loja Verde",
        "fab_enabled": true,
        "fab_position": "left",
        "fab_size": "xl",
        "fab_delay": 4,
        "topbar_position": "bottom",
        "topbar_button_bg_color": "#FBBF24",
        "popup_image_url": "https://cdn.example.com/popup.png",
        "bottom_bar_enabled": false
    }))
    .unwrap();

    assert_eq!(config.app_name.as_deref(), Some("Loja Verde"));
    assert_eq!(config.fab.enabled, Some(true));
    assert_eq!(config.fab.position, Some(FabPosition::Left));
    assert_eq!(config.fab.size, Some(SizeToken::Xl));
    assert_eq!(config.fab.delay_seconds, Some(4));
    assert_eq!(config.topbar.position, Some(TopBarPosition::Bottom));
    assert_eq!(config.topbar.button_background_color.as_deref(), Some("#FBBF24"));
    assert_eq!(
        config.popup.image_url.as_deref(),
        Some("https://cdn.example.com/popup.png")
    );
    assert_eq!(config.bottom_bar.enabled, Some(false));
}

#[test]
fn serialization_writes_only_explicit_fields() {
    let payload = json!({
        "app_name": "",
        "theme_color": "#10B981",
        "fab_enabled": true,
        "fab_size": "small",
        "topbar_text": ""
    });

    let config: AppConfig = serde_json::from_value(payload.clone()).unwrap();
    let written = serde_json::to_value(&config).unwrap();

    assert_eq!(written, payload);
}

#[test]
fn store_supplied_fields_are_never_serialized() {
    let config: AppConfig = serde_json::from_value(json!({
        "app_name": "Shop",
        "default_logo_url": "https://cdn.example.com/store.png",
        "storefront_url": "shop.example.com"
    }))
    .unwrap();

    assert_eq!(
        config.default_logo_url.as_deref(),
        Some("https://cdn.example.com/store.png")
    );

    let written = serde_json::to_value(&config).unwrap();
    assert_eq!(written, json!({ "app_name": "Shop" }));
}

#[test]
fn unrecognized_tokens_are_dropped_not_fatal() {
    let config: AppConfig = serde_json::from_value(json!({
        "fab_size": "gigantic",
        "fab_position": "center",
        "topbar_size": 3,
        "fab_delay": "7"
    }))
    .unwrap();

    assert_eq!(config.fab.size, None);
    assert_eq!(config.fab.position, None);
    assert_eq!(config.topbar.size, None);
    assert_eq!(config.fab.delay_seconds, Some(7));
}

#[test]
fn wrongly_typed_values_read_as_absent() {
    let config: AppConfig = serde_json::from_value(json!({
        "app_name": "Shop",
        "fab_enabled": "true",
        "fab_text": 5,
        "topbar_color": ["#FFF"],
        "bottom_bar_enabled": 1
    }))
    .unwrap();

    assert_eq!(config.app_name.as_deref(), Some("Shop"));
    assert_eq!(config.fab.enabled, None);
    assert_eq!(config.fab.text, None);
    assert_eq!(config.topbar.background_color, None);
    assert_eq!(config.bottom_bar.enabled, None);
}

#[test]
fn payload_issues_name_each_mistyped_field() {
    let payload = json!({
        "app_name": "Shop",
        "fab_enabled": "true",
        "fab_text": 5,
        "fab_delay": "3",
        "fab_size": "gigantic",
        "bottom_bar_enabled": 1,
        "legacy_flag": {"kept": true}
    });
    let Value::Object(payload) = payload else {
        panic!("payload is an object");
    };

    let mut issues = AppConfig::payload_issues(&payload);
    issues.sort_by_key(|issue| issue.field);
    let fields: Vec<FieldKey> = issues.iter().map(|issue| issue.field).collect();

    assert_eq!(
        fields,
        vec![
            FieldKey::FabEnabled,
            FieldKey::FabText,
            FieldKey::FabSize,
            FieldKey::BottomBarEnabled,
        ]
    );
    assert_eq!(issues[0].value, "\"true\"");
    assert_eq!(issues[0].expected, "boolean");
}

#[test]
fn null_values_read_as_absent() {
    let config: AppConfig = serde_json::from_value(json!({
        "fab_color": null,
        "fab_background_image_url": null,
        "fab_size": null
    }))
    .unwrap();

    assert_eq!(config.fab.color, None);
    assert_eq!(config.fab.background_image_url, None);
    assert_eq!(config.fab.size, None);
}

#[test]
fn initial_config_carries_identity_defaults() {
    let config = AppConfig::initial();

    assert_eq!(config.explicit(FieldKey::AppName), Some(Explicit::Text("My Store")));
    assert_eq!(config.explicit(FieldKey::ThemeColor), Some(Explicit::Text("#000000")));
    assert_eq!(config.explicit(FieldKey::LogoUrl), Some(Explicit::Text("")));
    assert!(config.explicit(FieldKey::FabEnabled).is_none());
}

#[test]
fn validate_reports_malformed_shapes_only() {
    let config: AppConfig = serde_json::from_value(json!({
        "theme_color": "greenish",
        "fab_color": "",
        "logo_url": "logo.png",
        "popup_image_url": "https://cdn.example.com/p.png",
        "fab_delay": 42
    }))
    .unwrap();

    let issues: Vec<FieldKey> = config.validate().into_iter().map(|i| i.field).collect();

    assert_eq!(
        issues,
        vec![FieldKey::ThemeColor, FieldKey::LogoUrl, FieldKey::FabDelay]
    );
}

#[test]
fn apply_store_info_keeps_existing_values_when_collaborator_is_silent() {
    let mut config = AppConfig {
        default_logo_url: Some("https://cdn.example.com/old.png".to_string()),
        ..AppConfig::default()
    };

    config.apply_store_info(&StoreInfo {
        default_logo_url: None,
        storefront_url: Some("shop.example.com".to_string()),
    });

    assert_eq!(
        config.default_logo_url.as_deref(),
        Some("https://cdn.example.com/old.png")
    );
    assert_eq!(config.storefront_url.as_deref(), Some("shop.example.com"));
}

#[test]
fn support_link_uses_digits_only() {
    let config = AppConfig {
        whatsapp_number: Some("+55 (11) 98765-4321".to_string()),
        ..AppConfig::default()
    };

    let link = config.support_link().unwrap();
    assert!(link.starts_with("https://wa.me/5511987654321?text=Hello%21"));

    let blank = AppConfig {
        whatsapp_number: Some("  ".to_string()),
        ..AppConfig::default()
    };
    assert!(blank.support_link().is_none());
}
