//! Fallback resolution.
//!
//! Turns a partial [`AppConfig`] into an [`EffectiveConfig`] where every value
//! is present. Each field is resolved in the same order: the explicit value if
//! it is non-empty and well-formed, then the steps listed for that field in
//! [`defaults::chain`]. Malformed values are skipped, never surfaced.

pub mod defaults;
mod effective;

#[cfg(test)]
mod tests;

pub use defaults::{Fallback, chain};
pub use effective::{
    EffectiveBottomBar, EffectiveConfig, EffectiveFab, EffectiveIdentity, EffectivePopup,
    EffectiveTopBar, LogoSource,
};

use serde_json::Value;
use tracing::instrument;

use crate::{
    layout::{FAB_SCALE, FabPosition, SizeToken, TOPBAR_SCALE, TopBarPosition},
    model::{AppConfig, Color, Explicit, FieldKey, FieldKind, ImageUrl, normalize_storefront_url},
};

use defaults::{AVATAR_LABEL, MAX_FAB_DELAY_SECONDS};

/// Resolves every field of a configuration.
#[instrument(skip_all)]
pub fn resolve(config: &AppConfig) -> EffectiveConfig {
    let r = Resolver::new(config);

    let fab_size = r.size(FieldKey::FabSize);
    let topbar_size = r.size(FieldKey::TopbarSize);

    EffectiveConfig {
        identity: EffectiveIdentity {
            app_name: r.text(FieldKey::AppName),
            theme_color: r.color(FieldKey::ThemeColor),
            logo: r.logo(),
        },
        fab: EffectiveFab {
            enabled: r.flag(FieldKey::FabEnabled),
            text: r.text(FieldKey::FabText),
            icon: r.text(FieldKey::FabIcon),
            position: r.fab_position(),
            delay_seconds: r.seconds(FieldKey::FabDelay),
            size: fab_size,
            scale: FAB_SCALE.factor(Some(fab_size)),
            color: r.color(FieldKey::FabColor),
            background_image: r.image(FieldKey::FabBackgroundImageUrl),
        },
        topbar: EffectiveTopBar {
            enabled: r.flag(FieldKey::TopbarEnabled),
            text: r.text(FieldKey::TopbarText),
            button_text: r.text(FieldKey::TopbarButtonText),
            icon: r.text(FieldKey::TopbarIcon),
            position: r.topbar_position(),
            size: topbar_size,
            scale: TOPBAR_SCALE.factor(Some(topbar_size)),
            background_color: r.color(FieldKey::TopbarColor),
            text_color: r.color(FieldKey::TopbarTextColor),
            button_background_color: r.color(FieldKey::TopbarButtonBgColor),
            button_text_color: r.color(FieldKey::TopbarButtonTextColor),
            background_image: r.image(FieldKey::TopbarBackgroundImageUrl),
        },
        popup: EffectivePopup {
            enabled: r.flag(FieldKey::PopupEnabled),
            image: r.image(FieldKey::PopupImageUrl),
        },
        bottom_bar: EffectiveBottomBar {
            enabled: r.flag(FieldKey::BottomBarEnabled),
            background_color: r.color(FieldKey::BottomBarBg),
            icon_color: r.color(FieldKey::BottomBarIconColor),
        },
        storefront: config
            .storefront_url
            .as_deref()
            .and_then(normalize_storefront_url)
            .map(String::from),
    }
}

/// Effective value of a single field, as JSON.
///
/// `logo_url` resolves to a tagged [`LogoSource`]; optional background images
/// resolve to `null` when nothing usable is set.
pub fn resolve_field(key: FieldKey, config: &AppConfig) -> Value {
    Resolver::new(config).value(key)
}

/// Effective values of every field, keyed by wire name.
pub fn resolve_all(config: &AppConfig) -> serde_json::Map<String, Value> {
    let r = Resolver::new(config);
    FieldKey::ALL
        .into_iter()
        .map(|key| (key.as_str().to_string(), r.value(key)))
        .collect()
}

struct Resolver<'a> {
    config: &'a AppConfig,
}

impl<'a> Resolver<'a> {
    fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    fn explicit_text(&self, key: FieldKey) -> Option<&'a str> {
        match self.config.explicit(key)? {
            Explicit::Text(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }

    fn flag(&self, key: FieldKey) -> bool {
        if let Some(Explicit::Flag(flag)) = self.config.explicit(key) {
            return flag;
        }
        chain(key)
            .iter()
            .find_map(|step| match step {
                Fallback::Flag(flag) => Some(*flag),
                _ => None,
            })
            .unwrap_or(false)
    }

    fn text(&self, key: FieldKey) -> String {
        if let Some(text) = self.explicit_text(key) {
            return text.to_string();
        }
        chain(key)
            .iter()
            .find_map(|step| match step {
                Fallback::Text(text) => Some((*text).to_string()),
                _ => None,
            })
            .unwrap_or_default()
    }

    fn color(&self, key: FieldKey) -> Color {
        if let Some(color) = self.explicit_text(key).and_then(Color::parse) {
            return color;
        }
        chain(key)
            .iter()
            .find_map(|step| match step {
                Fallback::Text(raw) => Color::parse(raw),
                Fallback::ThemeColor if key != FieldKey::ThemeColor => {
                    Some(self.color(FieldKey::ThemeColor))
                }
                _ => None,
            })
            .unwrap_or(Color::BLACK)
    }

    fn store_logo(&self) -> Option<ImageUrl> {
        self.config.default_logo_url.as_deref().and_then(ImageUrl::parse)
    }

    /// Usable image for the field. A `Null` step ends the chain with nothing.
    fn image(&self, key: FieldKey) -> Option<ImageUrl> {
        if let Some(url) = self.explicit_text(key).and_then(ImageUrl::parse) {
            return Some(url);
        }
        chain(key)
            .iter()
            .find_map(|step| match step {
                Fallback::Text(raw) => ImageUrl::parse(raw).map(Some),
                Fallback::StoreLogo => self.store_logo().map(Some),
                Fallback::Null => Some(None),
                _ => None,
            })
            .flatten()
    }

    fn image_value(&self, key: FieldKey) -> Value {
        if let Some(url) = self.explicit_text(key).and_then(ImageUrl::parse) {
            return url.as_str().into();
        }
        chain(key)
            .iter()
            .find_map(|step| match step {
                Fallback::Text(text) => Some((*text).into()),
                Fallback::StoreLogo => self.store_logo().map(|url| url.as_str().into()),
                Fallback::Null => Some(Value::Null),
                _ => None,
            })
            .unwrap_or(Value::Null)
    }

    fn seconds(&self, key: FieldKey) -> u8 {
        let stored = match self.config.explicit(key) {
            Some(Explicit::Seconds(seconds)) => Some(seconds),
            _ => None,
        };
        let seconds = stored.unwrap_or_else(|| {
            chain(key)
                .iter()
                .find_map(|step| match step {
                    Fallback::Seconds(seconds) => Some(*seconds),
                    _ => None,
                })
                .unwrap_or(0)
        });

        u8::try_from(seconds.clamp(0, MAX_FAB_DELAY_SECONDS)).unwrap_or_default()
    }

    fn size(&self, key: FieldKey) -> SizeToken {
        if let Some(Explicit::Size(token)) = self.config.explicit(key) {
            return token;
        }
        self.token(key).unwrap_or_default()
    }

    fn fab_position(&self) -> FabPosition {
        if let Some(Explicit::FabPosition(position)) = self.config.explicit(FieldKey::FabPosition) {
            return position;
        }
        self.token(FieldKey::FabPosition).unwrap_or_default()
    }

    fn topbar_position(&self) -> TopBarPosition {
        if let Some(Explicit::TopBarPosition(position)) =
            self.config.explicit(FieldKey::TopbarPosition)
        {
            return position;
        }
        self.token(FieldKey::TopbarPosition).unwrap_or_default()
    }

    fn token<T: std::str::FromStr>(&self, key: FieldKey) -> Option<T> {
        chain(key).iter().find_map(|step| match step {
            Fallback::Text(raw) => raw.parse().ok(),
            _ => None,
        })
    }

    fn logo(&self) -> LogoSource {
        if let Some(url) = self.explicit_text(FieldKey::LogoUrl).and_then(ImageUrl::parse) {
            return LogoSource::Image { url };
        }
        let avatar = || LogoSource::Avatar {
            letter: self.avatar_letter(),
        };
        chain(FieldKey::LogoUrl)
            .iter()
            .find_map(|step| match step {
                Fallback::StoreLogo => self.store_logo().map(|url| LogoSource::Image { url }),
                Fallback::Avatar => Some(avatar()),
                _ => None,
            })
            .unwrap_or_else(avatar)
    }

    fn avatar_letter(&self) -> char {
        let label = self
            .explicit_text(FieldKey::AppName)
            .map(str::trim)
            .unwrap_or(AVATAR_LABEL);

        label
            .chars()
            .next()
            .and_then(|first| first.to_uppercase().next())
            .unwrap_or('A')
    }

    fn value(&self, key: FieldKey) -> Value {
        match key.kind() {
            FieldKind::Flag => self.flag(key).into(),
            FieldKind::Text => self.text(key).into(),
            FieldKind::Color => self.color(key).to_hex().into(),
            FieldKind::Seconds => self.seconds(key).into(),
            FieldKind::Size => self.size(key).as_str().into(),
            FieldKind::FabPosition => self.fab_position().to_string().into(),
            FieldKind::TopBarPosition => self.topbar_position().to_string().into(),
            FieldKind::ImageUrl if key == FieldKey::LogoUrl => {
                serde_json::to_value(self.logo()).unwrap_or(Value::Null)
            }
            FieldKind::ImageUrl => self.image_value(key),
        }
    }
}
