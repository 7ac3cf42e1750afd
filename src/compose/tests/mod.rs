//! Unit tests for preview composition
//!
//! Layer order, modal behaviour, fault containment and the FAB clearance
//! property over every size combination.

#![allow(clippy::panic)]

use serde_json::{Value, json};

use crate::{
    compose::{LayerSlot, PreviewMode, compose, compose_in, preview},
    layout::{SizeToken, Viewport},
    model::AppConfig,
    render::{WidgetContent, WidgetKind},
    resolve::{EffectiveConfig, resolve},
};

fn config(payload: Value) -> AppConfig {
    serde_json::from_value(payload).unwrap()
}

fn effective(payload: Value) -> EffectiveConfig {
    resolve(&config(payload))
}

fn everything_on(topbar_position: &str) -> Value {
    json!({
        "fab_enabled": true,
        "topbar_enabled": true,
        "topbar_position": topbar_position,
        "popup_enabled": true,
        "popup_image_url": "https://cdn.example.com/p.png",
        "bottom_bar_enabled": true
    })
}

#[test]
fn app_layers_follow_fixed_order() {
    let top = compose(&effective(everything_on("top")), PreviewMode::App);
    let bottom = compose(&effective(everything_on("bottom")), PreviewMode::App);

    assert_eq!(
        top.kinds(),
        vec![
            WidgetKind::StatusBar,
            WidgetKind::Storefront,
            WidgetKind::TopBar,
            WidgetKind::Fab,
            WidgetKind::BottomBar,
            WidgetKind::Popup,
        ]
    );
    assert_eq!(
        bottom.kinds(),
        vec![
            WidgetKind::StatusBar,
            WidgetKind::Storefront,
            WidgetKind::Fab,
            WidgetKind::BottomBar,
            WidgetKind::TopBar,
            WidgetKind::Popup,
        ]
    );
    let slots: Vec<LayerSlot> = bottom.layers.iter().map(|l| l.slot).collect();
    assert!(slots.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn popup_is_topmost_whatever_else_is_enabled() {
    for fab in [false, true] {
        for topbar in [false, true] {
            for bottom_bar in [false, true] {
                for position in ["top", "bottom"] {
                    let screen = preview(
                        &config(json!({
                            "fab_enabled": fab,
                            "topbar_enabled": topbar,
                            "topbar_position": position,
                            "bottom_bar_enabled": bottom_bar,
                            "popup_enabled": true,
                            "popup_image_url": "https://cdn.example.com/p.png"
                        })),
                        PreviewMode::App,
                    );

                    let popup = screen.z_index(WidgetKind::Popup).unwrap();
                    assert_eq!(popup, screen.layers.len() - 1);
                    for other in [WidgetKind::Fab, WidgetKind::TopBar, WidgetKind::BottomBar] {
                        if let Some(z) = screen.z_index(other) {
                            assert!(z < popup, "{other} above popup");
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn fab_clears_bottom_bar_and_bottom_topbar_for_every_size() {
    for fab_size in SizeToken::ALL {
        for topbar_size in SizeToken::ALL {
            for fab_position in ["left", "right"] {
                let screen = preview(
                    &config(json!({
                        "fab_enabled": true,
                        "fab_size": fab_size.as_str(),
                        "fab_position": fab_position,
                        "topbar_enabled": true,
                        "topbar_position": "bottom",
                        "topbar_size": topbar_size.as_str()
                    })),
                    PreviewMode::App,
                );

                let fab = &screen.layer(WidgetKind::Fab).unwrap().widget.frame;
                let topbar = &screen.layer(WidgetKind::TopBar).unwrap().widget.frame;
                let bar = &screen.layer(WidgetKind::BottomBar).unwrap().widget.frame;

                assert!(fab.bottom() < bar.y, "{fab_size}/{topbar_size}: FAB overlaps bottom bar");
                assert!(fab.bottom() < topbar.y, "{fab_size}/{topbar_size}: FAB overlaps topbar");
                assert!(!fab.intersects(topbar));
            }
        }
    }
}

#[test]
fn splash_mode_shows_only_identity() {
    let screen = compose(&effective(everything_on("top")), PreviewMode::Splash);

    assert_eq!(screen.kinds(), vec![WidgetKind::Splash]);
    assert!(!screen.modal);
}

#[test]
fn compose_is_idempotent() {
    let resolved = effective(everything_on("bottom"));

    for mode in [PreviewMode::Splash, PreviewMode::App] {
        assert_eq!(compose(&resolved, mode), compose(&resolved, mode));
    }
    assert_eq!(
        preview(&config(everything_on("top")), PreviewMode::App),
        preview(&config(everything_on("top")), PreviewMode::App)
    );
}

#[test]
fn avatar_scenario_with_empty_name() {
    let screen = preview(
        &config(json!({ "app_name": "", "theme_color": "#10B981", "fab_enabled": true })),
        PreviewMode::Splash,
    );

    match &screen.layers[0].widget.content {
        WidgetContent::Splash { icon, .. } => {
            assert_eq!(
                icon.logo,
                crate::resolve::LogoSource::Avatar { letter: 'A' }
            );
        }
        other => panic!("unexpected content {other:?}"),
    }
}

#[test]
fn open_popup_captures_every_tap() {
    let screen = compose(&effective(everything_on("top")), PreviewMode::App);
    assert!(screen.modal);

    let fab = screen.layer(WidgetKind::Fab).unwrap().widget.frame;
    let hit = screen.hit_test(fab.center_x(), fab.center_y()).unwrap();
    assert_eq!(hit.widget.kind, WidgetKind::Popup);

    let bar = screen.layer(WidgetKind::BottomBar).unwrap().widget.frame;
    let hit = screen.hit_test(bar.center_x(), bar.center_y()).unwrap();
    assert_eq!(hit.widget.kind, WidgetKind::Popup);
}

#[test]
fn without_popup_taps_reach_the_widget() {
    let screen = preview(&config(json!({ "fab_enabled": true })), PreviewMode::App);
    assert!(!screen.modal);

    let fab = screen.layer(WidgetKind::Fab).unwrap().widget.frame;
    let hit = screen.hit_test(fab.center_x(), fab.center_y()).unwrap();
    assert_eq!(hit.widget.kind, WidgetKind::Fab);

    let hit = screen.hit_test(10.0, 10.0);
    assert!(hit.is_none(), "status bar takes no taps");
}

#[test]
fn failing_widget_becomes_placeholder_rest_survives() {
    let resolved = effective(json!({
        "topbar_enabled": true,
        "topbar_size": "xl",
        "fab_enabled": true,
        "fab_size": "xs"
    }));
    let screen = compose_in(&resolved, PreviewMode::App, Viewport::new(150.0, 576.0));

    let topbar = screen.layer(WidgetKind::TopBar).unwrap();
    assert!(topbar.widget.is_placeholder());
    assert!(!topbar.widget.accepts_pointer);
    assert_eq!(screen.placeholders().count(), 1);

    for kind in [WidgetKind::StatusBar, WidgetKind::Storefront, WidgetKind::BottomBar, WidgetKind::Fab] {
        let layer = screen.layer(kind).unwrap();
        assert!(!layer.widget.is_placeholder(), "{kind} should render");
    }
}

#[test]
fn mode_only_moves_forward() {
    assert_eq!(PreviewMode::Splash.advance(), PreviewMode::App);
    assert_eq!(PreviewMode::App.advance(), PreviewMode::App);
    assert_eq!("APP".parse::<PreviewMode>().unwrap(), PreviewMode::App);
    assert!("launch".parse::<PreviewMode>().is_err());
}
