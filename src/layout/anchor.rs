use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::geometry::{FAB_EDGE_INSET, Rect, Viewport};

/// Horizontal corner the floating action button sits in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum FabPosition {
    /// Bottom-left corner.
    Left,
    /// Bottom-right corner.
    #[default]
    Right,
}

/// Screen edge the promotional bar is pinned to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum TopBarPosition {
    /// Just below the status bar.
    #[default]
    Top,
    /// Just above the bottom navigation bar.
    Bottom,
}

/// Error returned for an unrecognized position token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown position token '{0}'")]
pub struct UnknownPosition(pub String);

impl FromStr for FabPosition {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(FabPosition::Left),
            "right" => Ok(FabPosition::Right),
            _ => Err(UnknownPosition(s.to_string())),
        }
    }
}

impl FromStr for TopBarPosition {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(TopBarPosition::Top),
            "bottom" => Ok(TopBarPosition::Bottom),
            _ => Err(UnknownPosition(s.to_string())),
        }
    }
}

impl fmt::Display for FabPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FabPosition::Left => write!(f, "left"),
            FabPosition::Right => write!(f, "right"),
        }
    }
}

impl fmt::Display for TopBarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopBarPosition::Top => write!(f, "top"),
            TopBarPosition::Bottom => write!(f, "bottom"),
        }
    }
}

/// A screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

/// Distance of a widget's near side from a screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeOffset {
    /// Edge the offset is measured from.
    pub edge: Edge,
    /// Distance in logical pixels.
    pub offset: f64,
}

impl EdgeOffset {
    /// Creates an offset from an edge.
    pub fn new(edge: Edge, offset: f64) -> Self {
        Self { edge, offset }
    }
}

/// Where a widget is attached, independent of any rendering toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Anchor {
    /// Covers the full width, pinned vertically to one edge.
    Band {
        /// Vertical attachment.
        vertical: EdgeOffset,
    },
    /// Pinned to a corner.
    Corner {
        /// Vertical attachment.
        vertical: EdgeOffset,
        /// Horizontal attachment.
        horizontal: EdgeOffset,
    },
    /// Centered in the region it is given.
    Centered,
}

impl Anchor {
    /// Places a widget of the given size in the viewport.
    pub fn place(&self, viewport: &Viewport, width: f64, height: f64) -> Rect {
        match *self {
            Anchor::Band { vertical } => {
                Rect::new(0.0, vertical_origin(viewport, vertical, height), viewport.width, height)
            }
            Anchor::Corner {
                vertical,
                horizontal,
            } => {
                let x = match horizontal.edge {
                    Edge::Right => viewport.width - horizontal.offset - width,
                    _ => horizontal.offset,
                };
                Rect::new(x, vertical_origin(viewport, vertical, height), width, height)
            }
            Anchor::Centered => Rect::new(
                (viewport.width - width) / 2.0,
                (viewport.height - height) / 2.0,
                width,
                height,
            ),
        }
    }
}

fn vertical_origin(viewport: &Viewport, vertical: EdgeOffset, height: f64) -> f64 {
    match vertical.edge {
        Edge::Bottom => viewport.height - vertical.offset - height,
        _ => vertical.offset,
    }
}

/// Anchor for the FAB given how much space is taken at the bottom of the screen.
pub fn fab_anchor(position: FabPosition, bottom_clearance: f64) -> Anchor {
    let edge = match position {
        FabPosition::Left => Edge::Left,
        FabPosition::Right => Edge::Right,
    };

    Anchor::Corner {
        vertical: EdgeOffset::new(Edge::Bottom, bottom_clearance),
        horizontal: EdgeOffset::new(edge, FAB_EDGE_INSET),
    }
}

/// Anchor for the promotional bar.
///
/// `top_clearance` is the status bar height, `bottom_clearance` the bottom
/// navigation height (zero when the bar is hidden).
pub fn topbar_anchor(position: TopBarPosition, top_clearance: f64, bottom_clearance: f64) -> Anchor {
    let vertical = match position {
        TopBarPosition::Top => EdgeOffset::new(Edge::Top, top_clearance),
        TopBarPosition::Bottom => EdgeOffset::new(Edge::Bottom, bottom_clearance),
    };

    Anchor::Band { vertical }
}
