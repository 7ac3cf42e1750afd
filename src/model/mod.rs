//! Configuration model.
//!
//! [`AppConfig`] is the per-store record a merchant edits. Every field is
//! optional on the wire so that a stored record round-trips without picking
//! up defaults; effective values come from [`crate::resolve`].
//!
//! The in-memory shape groups fields per widget while the wire format stays
//! the flat object the merchant backend expects (`fab_text`, `topbar_color`,
//! and so on).

mod color;
mod field;
mod image;
mod lenient;
mod store;
mod widgets;

#[cfg(test)]
mod tests;

pub use color::Color;
pub use field::{FieldKey, FieldKind, READ_ONLY_FIELDS, UnknownField};
pub use image::{ImageUrl, normalize_storefront_url};
pub use store::StoreInfo;
pub use widgets::{BottomBarConfig, FabConfig, PopupConfig, TopBarConfig};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::layout::{FabPosition, SizeToken, TopBarPosition};

/// App name given to a store on its first visit to the configurator.
pub const INITIAL_APP_NAME: &str = "My Store";
/// Theme color given to a store on its first visit to the configurator.
pub const INITIAL_THEME_COLOR: &str = "#000000";

const SUPPORT_GREETING: &str = "Hello! I saw your app and would like to ask a question.";

/// The per-store app configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct AppConfig {
    /// Name shown under the icon and on the splash screen.
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub app_name: Option<String>,

    /// Main brand color.
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub theme_color: Option<String>,

    /// Merchant-provided logo. An empty string means "not set".
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub logo_url: Option<String>,

    /// Support contact number for the chat link.
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub whatsapp_number: Option<String>,

    /// Store logo supplied by the platform. Never persisted.
    #[serde(default, skip_serializing)]
    pub default_logo_url: Option<String>,

    /// Public storefront address supplied by the platform. Never persisted.
    #[serde(default, skip_serializing)]
    pub storefront_url: Option<String>,

    /// Floating action button.
    #[serde(flatten)]
    pub fab: FabConfig,

    /// Fixed promotional bar.
    #[serde(flatten)]
    pub topbar: TopBarConfig,

    /// Install popup.
    #[serde(flatten)]
    pub popup: PopupConfig,

    /// Bottom navigation bar.
    #[serde(flatten)]
    pub bottom_bar: BottomBarConfig,
}

/// A field's explicitly stored value, before any fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Explicit<'a> {
    /// Boolean toggle.
    Flag(bool),
    /// Any string-valued field (text, color, URL).
    Text(&'a str),
    /// Delay in seconds, as stored.
    Seconds(i64),
    /// Size token.
    Size(SizeToken),
    /// FAB corner.
    FabPosition(FabPosition),
    /// TopBar edge.
    TopBarPosition(TopBarPosition),
}

impl Explicit<'_> {
    /// The stored value as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        match *self {
            Explicit::Flag(flag) => flag.into(),
            Explicit::Text(text) => text.into(),
            Explicit::Seconds(seconds) => seconds.into(),
            Explicit::Size(token) => token.as_str().into(),
            Explicit::FabPosition(position) => position.to_string().into(),
            Explicit::TopBarPosition(position) => position.to_string().into(),
        }
    }
}

/// A stored value that does not have the shape its field requires.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIssue {
    /// Offending field.
    pub field: FieldKey,
    /// The stored value.
    pub value: String,
    /// What the field expects.
    pub expected: &'static str,
}

impl AppConfig {
    /// Configuration for a store opening the configurator for the first time.
    pub fn initial() -> Self {
        Self {
            app_name: Some(INITIAL_APP_NAME.to_string()),
            theme_color: Some(INITIAL_THEME_COLOR.to_string()),
            logo_url: Some(String::new()),
            ..Self::default()
        }
    }

    /// Copies the store collaborator's read-only values into the record.
    pub fn apply_store_info(&mut self, info: &StoreInfo) {
        if info.default_logo_url.is_some() {
            self.default_logo_url.clone_from(&info.default_logo_url);
        }
        if info.storefront_url.is_some() {
            self.storefront_url.clone_from(&info.storefront_url);
        }
    }

    /// The read-only store values carried by this record.
    pub fn store_info(&self) -> StoreInfo {
        StoreInfo {
            default_logo_url: self.default_logo_url.clone(),
            storefront_url: self.storefront_url.clone(),
        }
    }

    /// The explicitly stored value of a field, if any.
    pub fn explicit(&self, key: FieldKey) -> Option<Explicit<'_>> {
        match key {
            FieldKey::AppName => text(&self.app_name),
            FieldKey::ThemeColor => text(&self.theme_color),
            FieldKey::LogoUrl => text(&self.logo_url),
            FieldKey::WhatsappNumber => text(&self.whatsapp_number),

            FieldKey::FabEnabled => self.fab.enabled.map(Explicit::Flag),
            FieldKey::FabText => text(&self.fab.text),
            FieldKey::FabPosition => self.fab.position.map(Explicit::FabPosition),
            FieldKey::FabIcon => text(&self.fab.icon),
            FieldKey::FabDelay => self.fab.delay_seconds.map(Explicit::Seconds),
            FieldKey::FabSize => self.fab.size.map(Explicit::Size),
            FieldKey::FabColor => text(&self.fab.color),
            FieldKey::FabBackgroundImageUrl => text(&self.fab.background_image_url),

            FieldKey::TopbarEnabled => self.topbar.enabled.map(Explicit::Flag),
            FieldKey::TopbarText => text(&self.topbar.text),
            FieldKey::TopbarButtonText => text(&self.topbar.button_text),
            FieldKey::TopbarIcon => text(&self.topbar.icon),
            FieldKey::TopbarPosition => self.topbar.position.map(Explicit::TopBarPosition),
            FieldKey::TopbarColor => text(&self.topbar.background_color),
            FieldKey::TopbarTextColor => text(&self.topbar.text_color),
            FieldKey::TopbarSize => self.topbar.size.map(Explicit::Size),
            FieldKey::TopbarButtonBgColor => text(&self.topbar.button_background_color),
            FieldKey::TopbarButtonTextColor => text(&self.topbar.button_text_color),
            FieldKey::TopbarBackgroundImageUrl => text(&self.topbar.background_image_url),

            FieldKey::PopupEnabled => self.popup.enabled.map(Explicit::Flag),
            FieldKey::PopupImageUrl => text(&self.popup.image_url),

            FieldKey::BottomBarEnabled => self.bottom_bar.enabled.map(Explicit::Flag),
            FieldKey::BottomBarBg => text(&self.bottom_bar.background_color),
            FieldKey::BottomBarIconColor => text(&self.bottom_bar.icon_color),
        }
    }

    /// Lists stored values whose shape is wrong for their field.
    ///
    /// Empty strings are "not set", not malformed. Issues never block
    /// rendering; the resolver falls back past them.
    pub fn validate(&self) -> Vec<FieldIssue> {
        FieldKey::ALL
            .into_iter()
            .filter_map(|key| {
                let explicit = self.explicit(key)?;
                let malformed = match (key.kind(), explicit) {
                    (FieldKind::Color, Explicit::Text(raw)) => {
                        !raw.trim().is_empty() && !Color::is_valid(raw)
                    }
                    (FieldKind::ImageUrl, Explicit::Text(raw)) => {
                        !raw.trim().is_empty() && !ImageUrl::is_valid(raw)
                    }
                    (FieldKind::Seconds, Explicit::Seconds(seconds)) => !(0..=10).contains(&seconds),
                    _ => false,
                };

                malformed.then(|| FieldIssue {
                    field: key,
                    value: explicit.to_json().to_string(),
                    expected: key.kind().expected_type(),
                })
            })
            .collect()
    }

    /// Stored values whose JSON type does not fit their field.
    ///
    /// Such values deserialize as unset, so [`AppConfig::validate`] never sees
    /// them; this reports them from the raw payload instead. Numeric strings
    /// for the delay are read as numbers and are not reported.
    pub fn payload_issues(payload: &Map<String, Value>) -> Vec<FieldIssue> {
        payload
            .iter()
            .filter_map(|(name, value)| {
                let key: FieldKey = name.parse().ok()?;
                let kind = key.kind();
                let tolerated = matches!(
                    (kind, value),
                    (FieldKind::Seconds, Value::String(s)) if s.trim().parse::<i64>().is_ok()
                );

                (!kind.accepts(value) && !tolerated).then(|| FieldIssue {
                    field: key,
                    value: value.to_string(),
                    expected: kind.expected_type(),
                })
            })
            .collect()
    }

    /// Chat link for the support number, digits only.
    pub fn support_link(&self) -> Option<String> {
        let digits: String = self
            .whatsapp_number
            .as_deref()?
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        if digits.is_empty() {
            return None;
        }

        let text: String = url::form_urlencoded::byte_serialize(SUPPORT_GREETING.as_bytes()).collect();
        Some(format!("https://wa.me/{digits}?text={text}"))
    }
}

fn text(value: &Option<String>) -> Option<Explicit<'_>> {
    value.as_deref().map(Explicit::Text)
}
