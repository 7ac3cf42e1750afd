//! Unit tests for fallback resolution

#![allow(clippy::panic)]

use serde_json::{Value, json};

use crate::{
    layout::{FabPosition, SizeToken, TopBarPosition},
    model::{AppConfig, Color, FieldKey, FieldKind},
    resolve::{Fallback, LogoSource, chain, resolve, resolve_all, resolve_field},
};

fn config(payload: Value) -> AppConfig {
    serde_json::from_value(payload).unwrap()
}

#[test]
fn empty_config_resolves_every_field() {
    let all = resolve_all(&AppConfig::default());

    assert_eq!(all.len(), FieldKey::ALL.len());
    for key in FieldKey::ALL {
        let value = &all[key.as_str()];
        match key {
            FieldKey::FabBackgroundImageUrl | FieldKey::TopbarBackgroundImageUrl => {
                assert!(value.is_null(), "{key} should be null");
            }
            FieldKey::WhatsappNumber | FieldKey::PopupImageUrl => {
                assert_eq!(value, &json!(""), "{key}");
            }
            _ => assert!(
                !value.is_null() && value != &json!(""),
                "{key} resolved to {value}"
            ),
        }
    }
}

#[test]
fn explicit_value_wins_over_defaults() {
    let effective = resolve(&config(json!({
        "app_name": "Loja Verde",
        "fab_text": "Get it",
        "fab_position": "left",
        "topbar_position": "bottom",
        "topbar_text_color": "#123456"
    })));

    assert_eq!(effective.identity.app_name, "Loja Verde");
    assert_eq!(effective.fab.text, "Get it");
    assert_eq!(effective.fab.position, FabPosition::Left);
    assert_eq!(effective.topbar.position, TopBarPosition::Bottom);
    assert_eq!(effective.topbar.text_color, Color::rgb(0x12, 0x34, 0x56));
}

#[test]
fn widget_colors_follow_theme_color() {
    let effective = resolve(&config(json!({ "theme_color": "#10B981" })));
    let theme = Color::rgb(0x10, 0xB9, 0x81);

    assert_eq!(effective.identity.theme_color, theme);
    assert_eq!(effective.fab.color, theme);
    assert_eq!(effective.topbar.background_color, theme);
}

#[test]
fn malformed_colors_fall_through_the_chain() {
    let effective = resolve(&config(json!({
        "theme_color": "not-a-color",
        "fab_color": "#GGGGGG",
        "bottom_bar_bg": ""
    })));

    assert_eq!(effective.identity.theme_color, Color::BLACK);
    assert_eq!(effective.fab.color, Color::BLACK);
    assert_eq!(effective.bottom_bar.background_color, Color::WHITE);
}

#[test]
fn empty_logo_falls_back_to_store_logo() {
    let mut cfg = config(json!({ "logo_url": "" }));
    cfg.default_logo_url = Some("https://cdn.example.com/store.png".to_string());

    match resolve(&cfg).identity.logo {
        LogoSource::Image { url } => assert_eq!(url.as_str(), "https://cdn.example.com/store.png"),
        other => panic!("expected store logo, got {other:?}"),
    }
}

#[test]
fn missing_logo_generates_avatar_from_name() {
    let effective = resolve(&config(json!({ "app_name": "  verde", "logo_url": "" })));

    assert_eq!(effective.identity.logo, LogoSource::Avatar { letter: 'V' });
}

#[test]
fn empty_name_avatar_uses_default_label() {
    let effective = resolve(&config(json!({
        "app_name": "",
        "theme_color": "#10B981",
        "fab_enabled": true
    })));

    assert_eq!(effective.identity.logo, LogoSource::Avatar { letter: 'A' });
    assert_eq!(effective.identity.app_name, "My Store");
}

#[test]
fn image_defaults_come_from_their_chains() {
    let empty = AppConfig::default();
    let images = FieldKey::ALL
        .into_iter()
        .filter(|key| key.kind() == FieldKind::ImageUrl && *key != FieldKey::LogoUrl);

    for key in images {
        let expected = match chain(key) {
            [Fallback::Text(text), ..] => json!(text),
            [Fallback::Null, ..] => Value::Null,
            other => panic!("{key}: unexpected chain {other:?}"),
        };
        assert_eq!(resolve_field(key, &empty), expected, "{key}");
    }
    assert!(resolve(&empty).fab.background_image.is_none());
    assert!(resolve(&empty).popup.image.is_none());
}

#[test]
fn logo_tries_store_logo_then_avatar() {
    assert_eq!(
        chain(FieldKey::LogoUrl),
        &[Fallback::StoreLogo, Fallback::Avatar]
    );

    let mut cfg = config(json!({ "app_name": "Verde" }));
    assert_eq!(
        resolve_field(FieldKey::LogoUrl, &cfg),
        json!({ "kind": "avatar", "letter": "V" })
    );

    cfg.default_logo_url = Some("https://cdn.example.com/store.png".to_string());
    assert_eq!(
        resolve_field(FieldKey::LogoUrl, &cfg),
        json!({ "kind": "image", "url": "https://cdn.example.com/store.png" })
    );
}

#[test]
fn unusable_logo_url_is_skipped() {
    let mut cfg = config(json!({ "logo_url": "ftp://files.example.com/logo.png" }));
    cfg.default_logo_url = Some("relative/logo.png".to_string());

    assert!(matches!(
        resolve(&cfg).identity.logo,
        LogoSource::Avatar { .. }
    ));
}

#[test]
fn delay_is_clamped() {
    let high = resolve(&config(json!({ "fab_delay": 42 })));
    let low = resolve(&config(json!({ "fab_delay": -3 })));

    assert_eq!(high.fab.delay_seconds, 10);
    assert_eq!(low.fab.delay_seconds, 0);
}

#[test]
fn size_tokens_carry_their_scale() {
    let effective = resolve(&config(json!({ "fab_size": "xs", "topbar_size": "xl" })));

    assert_eq!(effective.fab.size, SizeToken::Xs);
    assert_eq!(effective.fab.scale, 0.7);
    assert_eq!(effective.topbar.size, SizeToken::Xl);
    assert_eq!(effective.topbar.scale, 1.3);

    let defaults = resolve(&AppConfig::default());
    assert_eq!(defaults.fab.scale, 1.0);
    assert_eq!(defaults.topbar.scale, 1.0);
}

#[test]
fn popup_without_image_is_not_shown() {
    let effective = resolve(&config(json!({
        "popup_enabled": true,
        "popup_image_url": ""
    })));

    assert!(effective.popup.enabled);
    assert!(!effective.popup.is_shown());
}

#[test]
fn bottom_bar_defaults_on_other_widgets_off() {
    let effective = resolve(&AppConfig::default());

    assert!(effective.bottom_bar.enabled);
    assert!(!effective.fab.enabled);
    assert!(!effective.topbar.enabled);
    assert!(!effective.popup.enabled);
}

#[test]
fn resolve_field_agrees_with_resolve() {
    let cfg = config(json!({ "theme_color": "#10b981", "fab_size": "large" }));

    assert_eq!(resolve_field(FieldKey::FabColor, &cfg), json!("#10B981"));
    assert_eq!(resolve_field(FieldKey::FabSize, &cfg), json!("large"));
    assert_eq!(resolve_field(FieldKey::FabDelay, &cfg), json!(0));
    assert_eq!(
        resolve_field(FieldKey::LogoUrl, &cfg),
        json!({ "kind": "avatar", "letter": "A" })
    );
}

#[test]
fn storefront_is_normalized() {
    let mut cfg = AppConfig::default();
    cfg.storefront_url = Some("shop.example.com/".to_string());

    assert_eq!(
        resolve(&cfg).storefront.as_deref(),
        Some("https://shop.example.com/")
    );
}
