//! Widget renderers.
//!
//! Each renderer turns one slice of a [`Scene`] into a [`WidgetLayout`], or
//! `None` when the widget is disabled or does not belong to the scene's
//! phase. Renderers are pure; the composer decides their stacking order.

mod bottom_bar;
mod chrome;
mod fab;
mod popup;
mod splash;
mod topbar;
mod widget;


pub use bottom_bar::{BottomBarRenderer, NAV_SLOTS};
pub use chrome::{StatusBarRenderer, StorefrontRenderer};
pub use fab::{FabRenderer, fab_bottom_clearance};
pub use popup::PopupRenderer;
pub use splash::SplashRenderer;
pub use topbar::{TopBarRenderer, topbar_height};
pub use widget::{
    Action, Block, Button, Fill, Icon, Label, NavSlot, PLACEHOLDER_COLOR, StorefrontBody,
    WidgetContent, WidgetKind, WidgetLayout,
};

use thiserror::Error;

use crate::{
    compose::Scene,
    layout::{Rect, Viewport},
};

/// Everything a renderer may look at.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// What is on screen.
    pub scene: Scene<'a>,
    /// Screen size.
    pub viewport: Viewport,
}

impl<'a> RenderContext<'a> {
    /// Creates a render context.
    pub fn new(scene: Scene<'a>, viewport: Viewport) -> Self {
        Self { scene, viewport }
    }
}

/// Failure to lay out a single widget.
///
/// Never fatal to a preview: the composer draws a placeholder in `region`
/// and keeps going.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The widget needs more room than its region offers.
    #[error("{widget} needs {needed}px but only {available}px are available")]
    DoesNotFit {
        /// Widget that failed.
        widget: WidgetKind,
        /// Area the widget was given.
        region: Rect,
        /// Space required along the constrained axis.
        needed: f64,
        /// Space offered along the constrained axis.
        available: f64,
    },
}

impl RenderError {
    /// Area a placeholder for the failed widget should cover.
    pub fn region(&self) -> Rect {
        match self {
            RenderError::DoesNotFit { region, .. } => *region,
        }
    }

    /// Widget that failed.
    pub fn widget(&self) -> WidgetKind {
        match self {
            RenderError::DoesNotFit { widget, .. } => *widget,
        }
    }
}

/// A pure function from scene to widget layout.
pub trait WidgetRenderer: Send + Sync {
    /// The kind of widget this renderer produces.
    fn kind(&self) -> WidgetKind;

    /// Lays out the widget, or returns `None` when it is not shown.
    ///
    /// # Errors
    /// Returns [`RenderError`] when the widget cannot fit in the viewport.
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Option<WidgetLayout>, RenderError>;
}

/// All renderers, in the order their layers are stacked.
pub fn renderers() -> [&'static dyn WidgetRenderer; 7] {
    [
        &StatusBarRenderer,
        &StorefrontRenderer,
        &SplashRenderer,
        &TopBarRenderer,
        &FabRenderer,
        &BottomBarRenderer,
        &PopupRenderer,
    ]
}
