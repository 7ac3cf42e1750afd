use std::fmt;

use serde::{Serialize, Serializer};
use url::Url;

/// A validated image location.
///
/// Only absolute `http`, `https` and `data` URLs are accepted. Relative paths
/// and other schemes cannot be loaded by the installed app, so they are
/// treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageUrl(Url);

impl ImageUrl {
    /// Parses and validates an image URL.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let url = Url::parse(trimmed).ok()?;
        match url.scheme() {
            "http" | "https" if url.host().is_some() => Some(Self(url)),
            "data" => Some(Self(url)),
            _ => None,
        }
    }

    /// Whether a string is a usable image URL.
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_some()
    }

    /// The URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ImageUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Normalizes a storefront address typed by a merchant.
///
/// Bare hosts such as `shop.example.com` get an `https://` prefix. Returns
/// `None` when the result is still not an absolute web URL.
pub fn normalize_storefront_url(raw: &str) -> Option<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    Url::parse(&candidate)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
}
