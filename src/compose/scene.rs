use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::resolve::{EffectiveConfig, EffectiveIdentity};

/// Which phase of app launch the preview shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewMode {
    /// Launch screen.
    #[default]
    Splash,
    /// Running app.
    App,
}

impl PreviewMode {
    /// The mode after the splash timer fires. `App` never goes back.
    pub fn advance(self) -> Self {
        PreviewMode::App
    }

    /// Wire name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            PreviewMode::Splash => "splash",
            PreviewMode::App => "app",
        }
    }
}

impl fmt::Display for PreviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unrecognized preview mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preview mode '{0}', expected 'splash' or 'app'")]
pub struct UnknownMode(pub String);

impl FromStr for PreviewMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "splash" => Ok(PreviewMode::Splash),
            "app" => Ok(PreviewMode::App),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// What is on screen, carrying only the data that phase can show.
///
/// A splash scene has no widgets to draw, so it cannot be handed a FAB or a
/// popup by mistake.
#[derive(Debug, Clone, PartialEq)]
pub enum Scene<'a> {
    /// Launch screen: identity only.
    Splash {
        /// Icon, name and theme color.
        identity: &'a EffectiveIdentity,
    },
    /// Running app with every widget.
    App {
        /// The full resolved configuration.
        config: &'a EffectiveConfig,
    },
}

impl<'a> Scene<'a> {
    /// Narrows a resolved configuration to what the given mode can show.
    pub fn new(config: &'a EffectiveConfig, mode: PreviewMode) -> Self {
        match mode {
            PreviewMode::Splash => Scene::Splash {
                identity: &config.identity,
            },
            PreviewMode::App => Scene::App { config },
        }
    }

    /// The mode this scene belongs to.
    pub fn mode(&self) -> PreviewMode {
        match self {
            Scene::Splash { .. } => PreviewMode::Splash,
            Scene::App { .. } => PreviewMode::App,
        }
    }

    /// Identity block, present in both phases.
    pub fn identity(&self) -> &'a EffectiveIdentity {
        match *self {
            Scene::Splash { identity } => identity,
            Scene::App { config } => &config.identity,
        }
    }

    /// The full configuration, only while the app is running.
    pub fn app(&self) -> Option<&'a EffectiveConfig> {
        match *self {
            Scene::App { config } => Some(config),
            Scene::Splash { .. } => None,
        }
    }
}
