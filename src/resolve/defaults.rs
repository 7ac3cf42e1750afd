//! The fallback table.
//!
//! One entry per persisted field, listing the steps tried after the explicit
//! value. This table is the only place defaults are spelled out; the editor,
//! the preview and the CLI all read through it.

use crate::model::FieldKey;

/// Name shown when the merchant has not named the app.
pub const DEFAULT_APP_NAME: &str = "My Store";
/// Label the avatar letter is taken from when the app has no name.
pub const AVATAR_LABEL: &str = "App";
/// Theme color when none is set.
pub const DEFAULT_THEME_COLOR: &str = "#000000";

/// Default FAB label.
pub const DEFAULT_FAB_TEXT: &str = "Download App";
/// Default icon for the FAB and the TopBar.
pub const DEFAULT_WIDGET_ICON: &str = "📲";
/// Default TopBar message.
pub const DEFAULT_TOPBAR_TEXT: &str = "Install the app and get 10% off your first purchase";
/// Default TopBar call-to-action label.
pub const DEFAULT_TOPBAR_BUTTON_TEXT: &str = "Install now";
/// Default TopBar message color.
pub const DEFAULT_TOPBAR_TEXT_COLOR: &str = "#FFFFFF";
/// Default TopBar call-to-action background.
pub const DEFAULT_TOPBAR_BUTTON_BG_COLOR: &str = "#FBBF24";
/// Default TopBar call-to-action text color.
pub const DEFAULT_TOPBAR_BUTTON_TEXT_COLOR: &str = "#111827";

/// Default bottom bar background.
pub const DEFAULT_BOTTOM_BAR_BG: &str = "#FFFFFF";
/// Default bottom bar icon color.
pub const DEFAULT_BOTTOM_BAR_ICON_COLOR: &str = "#6B7280";

/// Longest FAB delay the installed app honours, in seconds.
pub const MAX_FAB_DELAY_SECONDS: i64 = 10;

/// One step of a fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// A literal string (text, color or token).
    Text(&'static str),
    /// A literal boolean.
    Flag(bool),
    /// A literal number of seconds.
    Seconds(i64),
    /// Explicitly nothing (`null` on the wire).
    Null,
    /// The effective theme color.
    ThemeColor,
    /// The store-supplied logo.
    StoreLogo,
    /// A generated single-letter avatar.
    Avatar,
}

/// The steps tried, in order, when a field has no usable explicit value.
pub fn chain(key: FieldKey) -> &'static [Fallback] {
    use Fallback::*;

    match key {
        FieldKey::AppName => &[Text(DEFAULT_APP_NAME)],
        FieldKey::ThemeColor => &[Text(DEFAULT_THEME_COLOR)],
        FieldKey::LogoUrl => &[StoreLogo, Avatar],
        FieldKey::WhatsappNumber => &[Text("")],

        FieldKey::FabEnabled => &[Flag(false)],
        FieldKey::FabText => &[Text(DEFAULT_FAB_TEXT)],
        FieldKey::FabPosition => &[Text("right")],
        FieldKey::FabIcon => &[Text(DEFAULT_WIDGET_ICON)],
        FieldKey::FabDelay => &[Seconds(0)],
        FieldKey::FabSize => &[Text("medium")],
        FieldKey::FabColor => &[ThemeColor],
        FieldKey::FabBackgroundImageUrl => &[Null],

        FieldKey::TopbarEnabled => &[Flag(false)],
        FieldKey::TopbarText => &[Text(DEFAULT_TOPBAR_TEXT)],
        FieldKey::TopbarButtonText => &[Text(DEFAULT_TOPBAR_BUTTON_TEXT)],
        FieldKey::TopbarIcon => &[Text(DEFAULT_WIDGET_ICON)],
        FieldKey::TopbarPosition => &[Text("top")],
        FieldKey::TopbarColor => &[ThemeColor],
        FieldKey::TopbarTextColor => &[Text(DEFAULT_TOPBAR_TEXT_COLOR)],
        FieldKey::TopbarSize => &[Text("medium")],
        FieldKey::TopbarButtonBgColor => &[Text(DEFAULT_TOPBAR_BUTTON_BG_COLOR)],
        FieldKey::TopbarButtonTextColor => &[Text(DEFAULT_TOPBAR_BUTTON_TEXT_COLOR)],
        FieldKey::TopbarBackgroundImageUrl => &[Null],

        FieldKey::PopupEnabled => &[Flag(false)],
        FieldKey::PopupImageUrl => &[Text("")],

        FieldKey::BottomBarEnabled => &[Flag(true)],
        FieldKey::BottomBarBg => &[Text(DEFAULT_BOTTOM_BAR_BG)],
        FieldKey::BottomBarIconColor => &[Text(DEFAULT_BOTTOM_BAR_ICON_COLOR)],
    }
}
