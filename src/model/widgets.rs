use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layout::{FabPosition, SizeToken, TopBarPosition};

use super::lenient;

/// Floating action button settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct FabConfig {
    /// Whether the button is shown.
    #[serde(
        rename = "fab_enabled",
        default,
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<bool>")]
    pub enabled: Option<bool>,

    /// Button label.
    #[serde(
        rename = "fab_text",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub text: Option<String>,

    /// Emoji or short text shown before the label.
    #[serde(
        rename = "fab_icon",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub icon: Option<String>,

    /// Bottom corner the button sits in.
    #[serde(
        rename = "fab_position",
        default,
        deserialize_with = "lenient::token",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<FabPosition>")]
    pub position: Option<FabPosition>,

    /// Seconds to wait after launch before showing the button (0 to 10).
    #[serde(
        rename = "fab_delay",
        default,
        deserialize_with = "lenient::seconds",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<i64>")]
    pub delay_seconds: Option<i64>,

    /// Button size.
    #[serde(
        rename = "fab_size",
        default,
        deserialize_with = "lenient::token",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<SizeToken>")]
    pub size: Option<SizeToken>,

    /// Button color, the theme color when unset.
    #[serde(
        rename = "fab_color",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub color: Option<String>,

    /// Image drawn behind the label instead of the solid color.
    #[serde(
        rename = "fab_background_image_url",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub background_image_url: Option<String>,
}

/// Fixed promotional bar settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct TopBarConfig {
    /// Whether the bar is shown.
    #[serde(
        rename = "topbar_enabled",
        default,
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<bool>")]
    pub enabled: Option<bool>,

    /// Promotional message.
    #[serde(
        rename = "topbar_text",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub text: Option<String>,

    /// Call-to-action button label.
    #[serde(
        rename = "topbar_button_text",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub button_text: Option<String>,

    /// Emoji or short text shown before the message.
    #[serde(
        rename = "topbar_icon",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub icon: Option<String>,

    /// Edge the bar is pinned to.
    #[serde(
        rename = "topbar_position",
        default,
        deserialize_with = "lenient::token",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<TopBarPosition>")]
    pub position: Option<TopBarPosition>,

    /// Bar size.
    #[serde(
        rename = "topbar_size",
        default,
        deserialize_with = "lenient::token",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<SizeToken>")]
    pub size: Option<SizeToken>,

    /// Bar background color.
    #[serde(
        rename = "topbar_color",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub background_color: Option<String>,

    /// Message text color.
    #[serde(
        rename = "topbar_text_color",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub text_color: Option<String>,

    /// Call-to-action background color.
    #[serde(
        rename = "topbar_button_bg_color",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub button_background_color: Option<String>,

    /// Call-to-action text color.
    #[serde(
        rename = "topbar_button_text_color",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub button_text_color: Option<String>,

    /// Image drawn behind the bar instead of the solid color.
    #[serde(
        rename = "topbar_background_image_url",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub background_image_url: Option<String>,
}

/// Full-screen install popup settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PopupConfig {
    /// Whether the popup is shown.
    #[serde(
        rename = "popup_enabled",
        default,
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<bool>")]
    pub enabled: Option<bool>,

    /// Portrait artwork shown in the popup.
    #[serde(
        rename = "popup_image_url",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub image_url: Option<String>,
}

/// Bottom navigation bar settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct BottomBarConfig {
    /// Whether the bar is shown. Defaults to shown.
    #[serde(
        rename = "bottom_bar_enabled",
        default,
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<bool>")]
    pub enabled: Option<bool>,

    /// Bar background color.
    #[serde(
        rename = "bottom_bar_bg",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub background_color: Option<String>,

    /// Icon and label color.
    #[serde(
        rename = "bottom_bar_icon_color",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub icon_color: Option<String>,
}
