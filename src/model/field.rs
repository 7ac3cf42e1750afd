use std::{fmt, str::FromStr};

use serde_json::Value;

use crate::layout::{FabPosition, SizeToken, TopBarPosition};

/// Fields supplied by the store collaborator. They can be read but never
/// edited or persisted back.
pub const READ_ONLY_FIELDS: [&str; 2] = ["default_logo_url", "storefront_url"];

/// Shape a persisted field's value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Boolean toggle.
    Flag,
    /// Free text (may be empty).
    Text,
    /// Hex color string.
    Color,
    /// Image URL string, `null` allowed.
    ImageUrl,
    /// Whole seconds in `0..=10`.
    Seconds,
    /// One of the five size tokens.
    Size,
    /// `left` or `right`.
    FabPosition,
    /// `top` or `bottom`.
    TopBarPosition,
}

impl FieldKind {
    /// Human readable name of the expected JSON type.
    pub fn expected_type(self) -> &'static str {
        match self {
            FieldKind::Flag => "boolean",
            FieldKind::Seconds => "integer",
            FieldKind::Text => "string",
            FieldKind::Color => "color string",
            FieldKind::ImageUrl => "URL string or null",
            FieldKind::Size => "one of xs|small|medium|large|xl",
            FieldKind::FabPosition => "one of left|right",
            FieldKind::TopBarPosition => "one of top|bottom",
        }
    }

    /// Whether `value` has the JSON shape this kind stores. `null` always
    /// fits and means "unset".
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (FieldKind::Flag, Value::Bool(_)) => true,
            (FieldKind::Text | FieldKind::Color | FieldKind::ImageUrl, Value::String(_)) => true,
            (FieldKind::Seconds, Value::Number(_)) => true,
            (FieldKind::Size, Value::String(s)) => s.parse::<SizeToken>().is_ok(),
            (FieldKind::FabPosition, Value::String(s)) => s.parse::<FabPosition>().is_ok(),
            (FieldKind::TopBarPosition, Value::String(s)) => s.parse::<TopBarPosition>().is_ok(),
            _ => false,
        }
    }
}

/// Every persisted configuration field, named as the merchant backend names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum FieldKey {
    AppName,
    ThemeColor,
    LogoUrl,
    WhatsappNumber,

    FabEnabled,
    FabText,
    FabPosition,
    FabIcon,
    FabDelay,
    FabSize,
    FabColor,
    FabBackgroundImageUrl,

    TopbarEnabled,
    TopbarText,
    TopbarButtonText,
    TopbarIcon,
    TopbarPosition,
    TopbarColor,
    TopbarTextColor,
    TopbarSize,
    TopbarButtonBgColor,
    TopbarButtonTextColor,
    TopbarBackgroundImageUrl,

    PopupEnabled,
    PopupImageUrl,

    BottomBarEnabled,
    BottomBarBg,
    BottomBarIconColor,
}

impl FieldKey {
    /// All persisted fields in payload order.
    pub const ALL: [FieldKey; 28] = [
        FieldKey::AppName,
        FieldKey::ThemeColor,
        FieldKey::LogoUrl,
        FieldKey::WhatsappNumber,
        FieldKey::FabEnabled,
        FieldKey::FabText,
        FieldKey::FabPosition,
        FieldKey::FabIcon,
        FieldKey::FabDelay,
        FieldKey::FabSize,
        FieldKey::FabColor,
        FieldKey::FabBackgroundImageUrl,
        FieldKey::TopbarEnabled,
        FieldKey::TopbarText,
        FieldKey::TopbarButtonText,
        FieldKey::TopbarIcon,
        FieldKey::TopbarPosition,
        FieldKey::TopbarColor,
        FieldKey::TopbarTextColor,
        FieldKey::TopbarSize,
        FieldKey::TopbarButtonBgColor,
        FieldKey::TopbarButtonTextColor,
        FieldKey::TopbarBackgroundImageUrl,
        FieldKey::PopupEnabled,
        FieldKey::PopupImageUrl,
        FieldKey::BottomBarEnabled,
        FieldKey::BottomBarBg,
        FieldKey::BottomBarIconColor,
    ];

    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::AppName => "app_name",
            FieldKey::ThemeColor => "theme_color",
            FieldKey::LogoUrl => "logo_url",
            FieldKey::WhatsappNumber => "whatsapp_number",
            FieldKey::FabEnabled => "fab_enabled",
            FieldKey::FabText => "fab_text",
            FieldKey::FabPosition => "fab_position",
            FieldKey::FabIcon => "fab_icon",
            FieldKey::FabDelay => "fab_delay",
            FieldKey::FabSize => "fab_size",
            FieldKey::FabColor => "fab_color",
            FieldKey::FabBackgroundImageUrl => "fab_background_image_url",
            FieldKey::TopbarEnabled => "topbar_enabled",
            FieldKey::TopbarText => "topbar_text",
            FieldKey::TopbarButtonText => "topbar_button_text",
            FieldKey::TopbarIcon => "topbar_icon",
            FieldKey::TopbarPosition => "topbar_position",
            FieldKey::TopbarColor => "topbar_color",
            FieldKey::TopbarTextColor => "topbar_text_color",
            FieldKey::TopbarSize => "topbar_size",
            FieldKey::TopbarButtonBgColor => "topbar_button_bg_color",
            FieldKey::TopbarButtonTextColor => "topbar_button_text_color",
            FieldKey::TopbarBackgroundImageUrl => "topbar_background_image_url",
            FieldKey::PopupEnabled => "popup_enabled",
            FieldKey::PopupImageUrl => "popup_image_url",
            FieldKey::BottomBarEnabled => "bottom_bar_enabled",
            FieldKey::BottomBarBg => "bottom_bar_bg",
            FieldKey::BottomBarIconColor => "bottom_bar_icon_color",
        }
    }

    /// Shape the field's value must have.
    pub fn kind(self) -> FieldKind {
        match self {
            FieldKey::FabEnabled
            | FieldKey::TopbarEnabled
            | FieldKey::PopupEnabled
            | FieldKey::BottomBarEnabled => FieldKind::Flag,

            FieldKey::ThemeColor
            | FieldKey::FabColor
            | FieldKey::TopbarColor
            | FieldKey::TopbarTextColor
            | FieldKey::TopbarButtonBgColor
            | FieldKey::TopbarButtonTextColor
            | FieldKey::BottomBarBg
            | FieldKey::BottomBarIconColor => FieldKind::Color,

            FieldKey::LogoUrl
            | FieldKey::FabBackgroundImageUrl
            | FieldKey::TopbarBackgroundImageUrl
            | FieldKey::PopupImageUrl => FieldKind::ImageUrl,

            FieldKey::FabDelay => FieldKind::Seconds,
            FieldKey::FabSize | FieldKey::TopbarSize => FieldKind::Size,
            FieldKey::FabPosition => FieldKind::FabPosition,
            FieldKey::TopbarPosition => FieldKind::TopBarPosition,

            FieldKey::AppName
            | FieldKey::WhatsappNumber
            | FieldKey::FabText
            | FieldKey::FabIcon
            | FieldKey::TopbarText
            | FieldKey::TopbarButtonText
            | FieldKey::TopbarIcon => FieldKind::Text,
        }
    }

    /// Whether a wire name belongs to a store-supplied, read-only field.
    pub fn is_read_only(name: &str) -> bool {
        READ_ONLY_FIELDS.contains(&name)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a name that is not a persisted field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown config field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FieldKey {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
