use crate::{
    layout::{
        BOTTOM_BAR_HEIGHT, FAB_BOTTOM_GAP, FAB_EDGE_INSET, Rect, STATUS_BAR_HEIGHT, TopBarPosition,
        ellipsize, fab_anchor, line_height, text_width,
    },
    model::Color,
    resolve::EffectiveConfig,
};

use super::{
    Fill, Label, RenderContext, RenderError, WidgetContent, WidgetKind, WidgetLayout,
    WidgetRenderer, topbar_height,
};

const FONT: f64 = 12.0;
const PADDING_Y: f64 = 10.0;
const PADDING_X: f64 = 20.0;
const RADIUS: f64 = 30.0;

/// Distance from the bottom of the screen to the FAB's bottom edge.
///
/// Clears the bottom navigation bar and a bottom-pinned TopBar, plus a
/// fixed gap, so the button never overlaps either.
pub fn fab_bottom_clearance(config: &EffectiveConfig) -> f64 {
    let mut clearance = FAB_BOTTOM_GAP;
    if config.bottom_bar.enabled {
        clearance += BOTTOM_BAR_HEIGHT;
    }
    if config.topbar.enabled && config.topbar.position == TopBarPosition::Bottom {
        clearance += topbar_height(&config.topbar);
    }
    clearance
}

/// Pill-shaped install button floating in a bottom corner.
pub struct FabRenderer;

impl WidgetRenderer for FabRenderer {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Fab
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Option<WidgetLayout>, RenderError> {
        let Some(config) = ctx.scene.app() else {
            return Ok(None);
        };
        let fab = &config.fab;
        if !fab.enabled {
            return Ok(None);
        }

        let s = fab.scale;
        let font_size = FONT * s;
        let padding_x = PADDING_X * s;
        let height = line_height(font_size) + 2.0 * PADDING_Y * s;

        let clearance = fab_bottom_clearance(config);
        let available_height = ctx.viewport.height - STATUS_BAR_HEIGHT - clearance;
        let region = Rect::new(
            0.0,
            STATUS_BAR_HEIGHT,
            ctx.viewport.width,
            available_height.max(0.0),
        );

        if height > available_height {
            return Err(RenderError::DoesNotFit {
                widget: WidgetKind::Fab,
                region,
                needed: height,
                available: available_height,
            });
        }

        let max_width = ctx.viewport.width - 2.0 * FAB_EDGE_INSET;
        let max_text = max_width - 2.0 * padding_x;
        let full = format!("{} {}", fab.icon, fab.text);
        let (text, truncated) = ellipsize(&full, font_size, max_text);
        if text.is_empty() {
            return Err(RenderError::DoesNotFit {
                widget: WidgetKind::Fab,
                region,
                needed: 2.0 * padding_x + text_width(&full, font_size),
                available: max_width,
            });
        }

        let width = text_width(&text, font_size) + 2.0 * padding_x;
        let anchor = fab_anchor(fab.position, clearance);

        Ok(Some(WidgetLayout {
            kind: WidgetKind::Fab,
            anchor,
            frame: anchor.place(&ctx.viewport, width, height),
            background: Fill::image_or(fab.background_image.as_ref(), fab.color),
            content: WidgetContent::Fab {
                label: Label::new(text, Color::WHITE, font_size).bold(),
                corner_radius: RADIUS * s,
                truncated,
            },
            accepts_pointer: true,
        }))
    }
}
