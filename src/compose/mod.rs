//! Preview composition.
//!
//! Runs every renderer against one scene and stacks the results into a fixed
//! layer order. The composer keeps no state between calls: composing the
//! same configuration twice yields equal screens.

mod scene;

#[cfg(test)]
mod tests;

pub use scene::{PreviewMode, Scene, UnknownMode};

use serde::Serialize;
use tracing::{instrument, warn};

use crate::{
    layout::{TopBarPosition, Viewport},
    model::AppConfig,
    render::{RenderContext, WidgetKind, WidgetLayout, renderers},
    resolve::{EffectiveConfig, resolve},
};

/// Stacking slot of a layer, bottom to top.
///
/// The popup is last so that it covers every other widget whenever it is
/// shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerSlot {
    /// Status bar.
    Background,
    /// Storefront body or splash block.
    Body,
    /// TopBar pinned to the top.
    TopBarTop,
    /// Floating action button.
    Fab,
    /// Bottom navigation bar.
    BottomBar,
    /// TopBar pinned to the bottom.
    TopBarBottom,
    /// Install popup.
    Popup,
}

impl LayerSlot {
    fn of(kind: WidgetKind, topbar: TopBarPosition) -> Self {
        match kind {
            WidgetKind::StatusBar => LayerSlot::Background,
            WidgetKind::Storefront | WidgetKind::Splash => LayerSlot::Body,
            WidgetKind::TopBar => match topbar {
                TopBarPosition::Top => LayerSlot::TopBarTop,
                TopBarPosition::Bottom => LayerSlot::TopBarBottom,
            },
            WidgetKind::Fab => LayerSlot::Fab,
            WidgetKind::BottomBar => LayerSlot::BottomBar,
            WidgetKind::Popup => LayerSlot::Popup,
        }
    }
}

/// One entry of the layer list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    /// Stacking slot.
    pub slot: LayerSlot,
    /// The laid-out widget.
    pub widget: WidgetLayout,
}

/// A composed preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    /// Phase shown.
    pub mode: PreviewMode,
    /// Screen size.
    pub viewport: Viewport,
    /// Layers, bottom first.
    pub layers: Vec<Layer>,
    /// Whether a modal layer blocks everything beneath it.
    pub modal: bool,
}

impl Screen {
    /// Kinds of the layers, bottom first.
    pub fn kinds(&self) -> Vec<WidgetKind> {
        self.layers.iter().map(|layer| layer.widget.kind).collect()
    }

    /// The layer of a given kind, if present.
    pub fn layer(&self, kind: WidgetKind) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.widget.kind == kind)
    }

    /// Stacking position of a kind, if present. Larger is higher.
    pub fn z_index(&self, kind: WidgetKind) -> Option<usize> {
        self.layers.iter().position(|layer| layer.widget.kind == kind)
    }

    /// The topmost layer that takes a tap at the point.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&Layer> {
        self.layers
            .iter()
            .rev()
            .find(|layer| layer.widget.accepts_pointer && layer.widget.frame.contains(x, y))
    }

    /// Layers standing in for widgets that failed to lay out.
    pub fn placeholders(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|layer| layer.widget.is_placeholder())
    }
}

/// Composes a preview on the default phone screen.
pub fn compose(config: &EffectiveConfig, mode: PreviewMode) -> Screen {
    compose_in(config, mode, Viewport::default())
}

/// Composes a preview on a screen of the given size.
#[instrument(skip_all, fields(mode = %mode))]
pub fn compose_in(config: &EffectiveConfig, mode: PreviewMode, viewport: Viewport) -> Screen {
    let ctx = RenderContext::new(Scene::new(config, mode), viewport);

    let mut layers: Vec<Layer> = renderers()
        .into_iter()
        .filter_map(|renderer| {
            let widget = match renderer.render(&ctx) {
                Ok(widget) => widget?,
                Err(e) => {
                    warn!(widget = %e.widget(), error = %e, "widget replaced by placeholder");
                    WidgetLayout::placeholder(e.widget(), e.region(), e.to_string())
                }
            };
            Some(Layer {
                slot: LayerSlot::of(widget.kind, config.topbar.position),
                widget,
            })
        })
        .collect();

    layers.sort_by_key(|layer| layer.slot);

    let modal = layers
        .iter()
        .any(|layer| layer.slot == LayerSlot::Popup && !layer.widget.is_placeholder());
    if modal {
        for layer in layers.iter_mut().filter(|l| l.slot != LayerSlot::Popup) {
            layer.widget.accepts_pointer = false;
        }
    }

    Screen {
        mode,
        viewport,
        layers,
        modal,
    }
}

/// Resolves and composes a raw configuration in one step.
pub fn preview(config: &AppConfig, mode: PreviewMode) -> Screen {
    compose(&resolve(config), mode)
}
