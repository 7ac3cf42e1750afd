use serde::{Deserialize, Serialize};
use url::Url;

use super::image::normalize_storefront_url;

const QR_CODE_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
const INSTALL_PAGE_PATH: &str = "pages/app";

/// Read-only facts about the store, supplied by the store collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreInfo {
    /// Store logo used when the merchant has not set one.
    #[serde(default)]
    pub default_logo_url: Option<String>,

    /// Public storefront address, as the platform reports it.
    #[serde(default)]
    pub storefront_url: Option<String>,
}

impl StoreInfo {
    /// Normalized storefront address.
    pub fn storefront(&self) -> Option<Url> {
        self.storefront_url
            .as_deref()
            .and_then(normalize_storefront_url)
    }

    /// Page customers open to install the app.
    pub fn install_url(&self) -> Option<String> {
        let storefront = self.storefront()?;
        let base = storefront.as_str().trim_end_matches('/');
        Some(format!("{base}/{INSTALL_PAGE_PATH}"))
    }

    /// Image URL of a 150×150 QR code pointing at the install page.
    pub fn qr_code_url(&self) -> Option<String> {
        let install_url = self.install_url()?;
        Url::parse_with_params(
            QR_CODE_ENDPOINT,
            &[
                ("size", "150x150"),
                ("data", install_url.as_str()),
                ("color", "000000"),
            ],
        )
        .ok()
        .map(String::from)
    }
}
