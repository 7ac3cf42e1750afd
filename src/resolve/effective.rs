use serde::Serialize;

use crate::{
    layout::{FabPosition, SizeToken, TopBarPosition},
    model::{Color, ImageUrl},
};

/// What the app icon shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogoSource {
    /// A logo image.
    Image {
        /// Where the image is loaded from.
        url: ImageUrl,
    },
    /// A generated avatar showing one upper-case letter.
    Avatar {
        /// The letter drawn on the theme color.
        letter: char,
    },
}

/// Fully resolved configuration; every value is present and render-safe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveConfig {
    /// App identity, shared by the splash screen and the storefront header.
    pub identity: EffectiveIdentity,
    /// Floating action button.
    pub fab: EffectiveFab,
    /// Promotional bar.
    pub topbar: EffectiveTopBar,
    /// Install popup.
    pub popup: EffectivePopup,
    /// Bottom navigation bar.
    pub bottom_bar: EffectiveBottomBar,
    /// Normalized storefront address, when the store has one.
    pub storefront: Option<String>,
}

/// Resolved visual identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveIdentity {
    /// Display name.
    pub app_name: String,
    /// Theme color.
    pub theme_color: Color,
    /// Icon content.
    pub logo: LogoSource,
}

/// Resolved floating action button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveFab {
    /// Whether the button is shown.
    pub enabled: bool,
    /// Label.
    pub text: String,
    /// Leading icon.
    pub icon: String,
    /// Corner.
    pub position: FabPosition,
    /// Launch delay, clamped to `0..=10`.
    pub delay_seconds: u8,
    /// Size token.
    pub size: SizeToken,
    /// Scale factor looked up from the FAB table.
    pub scale: f64,
    /// Button color.
    pub color: Color,
    /// Optional background artwork.
    pub background_image: Option<ImageUrl>,
}

/// Resolved promotional bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveTopBar {
    /// Whether the bar is shown.
    pub enabled: bool,
    /// Message.
    pub text: String,
    /// Call-to-action label.
    pub button_text: String,
    /// Leading icon.
    pub icon: String,
    /// Pinned edge.
    pub position: TopBarPosition,
    /// Size token.
    pub size: SizeToken,
    /// Scale factor looked up from the TopBar table.
    pub scale: f64,
    /// Bar background.
    pub background_color: Color,
    /// Message color.
    pub text_color: Color,
    /// Call-to-action background.
    pub button_background_color: Color,
    /// Call-to-action text color.
    pub button_text_color: Color,
    /// Optional background artwork.
    pub background_image: Option<ImageUrl>,
}

/// Resolved install popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectivePopup {
    /// The merchant toggle.
    pub enabled: bool,
    /// Artwork, absent when empty or unusable.
    pub image: Option<ImageUrl>,
}

impl EffectivePopup {
    /// A popup without artwork is never shown, whatever the toggle says.
    pub fn is_shown(&self) -> bool {
        self.enabled && self.image.is_some()
    }
}

/// Resolved bottom navigation bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveBottomBar {
    /// Whether the bar is shown.
    pub enabled: bool,
    /// Background.
    pub background_color: Color,
    /// Icon and label color.
    pub icon_color: Color,
}
