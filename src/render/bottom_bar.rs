use crate::layout::{Anchor, BOTTOM_BAR_HEIGHT, Edge, EdgeOffset, Rect};

use super::{
    Fill, Label, NavSlot, RenderContext, RenderError, WidgetContent, WidgetKind, WidgetLayout,
    WidgetRenderer,
};

/// Glyph and caption of each navigation slot, left to right.
pub const NAV_SLOTS: [(&str, &str); 4] = [
    ("🏠", "Home"),
    ("🛒", "Catalog"),
    ("🔔", "Alerts"),
    ("👤", "Account"),
];

const LABEL_FONT: f64 = 10.0;
const MIN_SLOT_WIDTH: f64 = 30.0;

/// Four-slot navigation bar pinned to the bottom edge.
pub struct BottomBarRenderer;

impl WidgetRenderer for BottomBarRenderer {
    fn kind(&self) -> WidgetKind {
        WidgetKind::BottomBar
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Option<WidgetLayout>, RenderError> {
        let Some(config) = ctx.scene.app() else {
            return Ok(None);
        };
        let bar = &config.bottom_bar;
        if !bar.enabled {
            return Ok(None);
        }

        let anchor = Anchor::Band {
            vertical: EdgeOffset::new(Edge::Bottom, 0.0),
        };
        let frame = anchor.place(&ctx.viewport, ctx.viewport.width, BOTTOM_BAR_HEIGHT);

        let slot_width = frame.width / NAV_SLOTS.len() as f64;
        if slot_width < MIN_SLOT_WIDTH {
            return Err(RenderError::DoesNotFit {
                widget: WidgetKind::BottomBar,
                region: frame,
                needed: MIN_SLOT_WIDTH * NAV_SLOTS.len() as f64,
                available: frame.width,
            });
        }

        let slots = NAV_SLOTS
            .iter()
            .enumerate()
            .map(|(i, &(icon, caption))| NavSlot {
                frame: Rect::new(
                    frame.x + i as f64 * slot_width,
                    frame.y,
                    slot_width,
                    frame.height,
                ),
                icon,
                label: Label::new(caption, bar.icon_color, LABEL_FONT),
            })
            .collect();

        Ok(Some(WidgetLayout {
            kind: WidgetKind::BottomBar,
            anchor,
            frame,
            background: Fill::Solid {
                color: bar.background_color,
            },
            content: WidgetContent::BottomBar { slots },
            accepts_pointer: true,
        }))
    }
}
