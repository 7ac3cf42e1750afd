//! The tool's own settings.
//!
//! Read from `config.toml` in the settings directory (see [`SettingsPaths`]).
//! Every section is optional; missing values take their defaults.

mod file_creation;
mod log_level;
mod paths;

#[cfg(test)]
mod tests;

pub use file_creation::create_default_settings_file;
pub use log_level::LogLevel;
pub use paths::SettingsPaths;

use std::{fs, path::Path, path::PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{AppwrapError, Result, layout::Viewport, model::StoreInfo};

/// Root of the settings file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Settings {
    /// Global behaviour.
    #[serde(default)]
    pub general: GeneralSettings,

    /// Where store configurations are kept.
    #[serde(default)]
    pub storage: StorageSettings,

    /// Store values normally supplied by the store platform.
    #[serde(default)]
    pub store: StoreSettings,

    /// Preview screen size.
    #[serde(default)]
    pub preview: PreviewSettings,
}

/// Global behaviour.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct GeneralSettings {
    /// Logging verbosity when `RUST_LOG` is not set.
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Where store configurations are kept.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct StorageSettings {
    /// Directory with one `<store_id>.json` per store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl StorageSettings {
    /// The configured data directory, or the default one.
    ///
    /// # Errors
    /// Returns an error when no directory is configured and `HOME` is unset.
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(SettingsPaths::default_data_dir()?),
        }
    }
}

/// Store values the CLI hands to editor sessions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct StoreSettings {
    /// Store logo used when the merchant has none.
    #[serde(default)]
    pub default_logo_url: String,

    /// Public storefront address.
    #[serde(default)]
    pub storefront_url: String,
}

impl StoreSettings {
    /// The values as store info; empty strings are absent.
    pub fn store_info(&self) -> StoreInfo {
        let present = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        StoreInfo {
            default_logo_url: present(&self.default_logo_url),
            storefront_url: present(&self.storefront_url),
        }
    }
}

/// Preview screen size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PreviewSettings {
    /// Screen width in logical pixels.
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,

    /// Screen height in logical pixels.
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
        }
    }
}

impl PreviewSettings {
    /// The configured screen.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }
}

fn default_viewport_width() -> f64 {
    Viewport::default().width
}

fn default_viewport_height() -> f64 {
    Viewport::default().height
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    /// Returns `AppwrapError::TomlParseError` for invalid TOML and
    /// `AppwrapError::ConfigValidation` for out-of-range values.
    pub fn from_toml(content: &str, path: Option<&Path>) -> Result<Self> {
        let settings: Settings =
            toml::from_str(content).map_err(|e| AppwrapError::toml_parse(e, path))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is invalid.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AppwrapError::io_at(e, path))?;
        let settings = Self::from_toml(&content, Some(path))?;
        debug!(log_level = %settings.general.log_level, "settings loaded");
        Ok(settings)
    }

    /// Loads the settings file, creating a commented one on first run.
    ///
    /// # Errors
    /// Returns an error if the settings directory cannot be determined or the
    /// file cannot be created or read.
    pub fn load_or_create() -> Result<Self> {
        let path = SettingsPaths::config_file()?;

        if !path.exists() {
            info!(path = %path.display(), "creating settings file");
            create_default_settings_file(&path)?;
        }

        Self::load(&path)
    }

    fn validate(&self) -> Result<()> {
        let preview = &self.preview;
        let valid = |v: f64| v.is_finite() && v > 0.0;

        if !valid(preview.viewport_width) || !valid(preview.viewport_height) {
            return Err(AppwrapError::ConfigValidation {
                component: "preview".to_string(),
                details: format!(
                    "viewport must be positive, got {}x{}",
                    preview.viewport_width, preview.viewport_height
                ),
            });
        }

        Ok(())
    }
}
