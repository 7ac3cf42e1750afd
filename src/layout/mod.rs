//! Size and position resolution.
//!
//! Maps the enumerated size tokens to versioned scale factors and the
//! position tokens to edge-relative anchors. Nothing here knows about
//! configuration records or widgets.

mod anchor;
mod geometry;
mod size;

pub use anchor::{
    Anchor, Edge, EdgeOffset, FabPosition, TopBarPosition, UnknownPosition, fab_anchor,
    topbar_anchor,
};
pub use geometry::*;
pub use size::{FAB_SCALE, ScaleTable, SizeToken, TOPBAR_SCALE, UnknownSizeToken};
