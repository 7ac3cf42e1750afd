use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Five-point ordinal size scale shared by the FAB and the TopBar.
///
/// Ordering follows the ordinal: `Xs < Small < Medium < Large < Xl`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SizeToken {
    /// Extra small.
    Xs,
    /// Small.
    Small,
    /// Medium, the neutral size (`1.0`).
    #[default]
    Medium,
    /// Large.
    Large,
    /// Extra large.
    Xl,
}

impl SizeToken {
    /// Every token in ordinal order.
    pub const ALL: [SizeToken; 5] = [
        SizeToken::Xs,
        SizeToken::Small,
        SizeToken::Medium,
        SizeToken::Large,
        SizeToken::Xl,
    ];

    /// Zero-based position on the ordinal scale.
    pub fn ordinal(self) -> usize {
        match self {
            SizeToken::Xs => 0,
            SizeToken::Small => 1,
            SizeToken::Medium => 2,
            SizeToken::Large => 3,
            SizeToken::Xl => 4,
        }
    }

    /// Wire name of the token.
    pub fn as_str(self) -> &'static str {
        match self {
            SizeToken::Xs => "xs",
            SizeToken::Small => "small",
            SizeToken::Medium => "medium",
            SizeToken::Large => "large",
            SizeToken::Xl => "xl",
        }
    }
}

impl fmt::Display for SizeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the five size tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown size token '{0}'")]
pub struct UnknownSizeToken(pub String);

impl FromStr for SizeToken {
    type Err = UnknownSizeToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SizeToken::ALL
            .into_iter()
            .find(|token| token.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSizeToken(s.to_string()))
    }
}

/// A versioned mapping from size tokens to scale factors.
///
/// Tables are part of the rendered contract of every published app: a new
/// mapping gets a new version instead of replacing the values in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTable {
    /// Widget family the table belongs to.
    pub family: &'static str,
    /// Table revision.
    pub version: u32,
    factors: [f64; 5],
}

impl ScaleTable {
    /// Scale factor for a token; an absent token is `Medium`.
    pub fn factor(&self, token: Option<SizeToken>) -> f64 {
        self.factors[token.unwrap_or_default().ordinal()]
    }

    /// Scale factor for a raw wire token. Unrecognized tokens scale as `Medium`.
    pub fn factor_for_str(&self, raw: &str) -> f64 {
        self.factor(raw.parse().ok())
    }

    /// The raw factors in ordinal order.
    pub fn factors(&self) -> [f64; 5] {
        self.factors
    }
}

/// FAB sizing, revision 1.
pub const FAB_SCALE: ScaleTable = ScaleTable {
    family: "fab",
    version: 1,
    factors: [0.7, 0.85, 1.0, 1.2, 1.35],
};

/// TopBar sizing, revision 1.
pub const TOPBAR_SCALE: ScaleTable = ScaleTable {
    family: "topbar",
    version: 1,
    factors: [0.8, 0.9, 1.0, 1.15, 1.3],
};
