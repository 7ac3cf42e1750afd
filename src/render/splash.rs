use crate::layout::{Anchor, Rect, line_height};
use crate::model::Color;

use super::{
    Fill, Icon, Label, RenderContext, RenderError, WidgetContent, WidgetKind, WidgetLayout,
    WidgetRenderer,
};

const ICON_SIZE: f64 = 72.0;
const ICON_RADIUS: f64 = 16.0;
const NAME_FONT: f64 = 20.0;
const CAPTION_FONT: f64 = 12.0;
const ICON_GAP: f64 = 16.0;
const CAPTION_GAP: f64 = 8.0;
const CAPTION: &str = "Loading...";

/// Launch screen: icon, name and caption centered on the theme color.
pub struct SplashRenderer;

impl WidgetRenderer for SplashRenderer {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Splash
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Option<WidgetLayout>, RenderError> {
        if ctx.scene.app().is_some() {
            return Ok(None);
        }
        let identity = ctx.scene.identity();
        let viewport = ctx.viewport;

        let block_height =
            ICON_SIZE + ICON_GAP + line_height(NAME_FONT) + CAPTION_GAP + line_height(CAPTION_FONT);
        if block_height > viewport.height || ICON_SIZE > viewport.width {
            return Err(RenderError::DoesNotFit {
                widget: WidgetKind::Splash,
                region: viewport.bounds(),
                needed: block_height,
                available: viewport.height,
            });
        }

        let top = (viewport.height - block_height) / 2.0;
        let icon = Icon {
            frame: Rect::new(
                (viewport.width - ICON_SIZE) / 2.0,
                top,
                ICON_SIZE,
                ICON_SIZE,
            ),
            logo: identity.logo.clone(),
            background: identity.theme_color,
            corner_radius: ICON_RADIUS,
        };

        let anchor = Anchor::Centered;
        Ok(Some(WidgetLayout {
            kind: WidgetKind::Splash,
            anchor,
            frame: anchor.place(&viewport, viewport.width, viewport.height),
            background: Fill::Solid {
                color: identity.theme_color,
            },
            content: WidgetContent::Splash {
                icon,
                name: Label::new(identity.app_name.clone(), Color::WHITE, NAME_FONT).bold(),
                caption: Label::new(CAPTION, Color::WHITE.with_alpha(0xCC), CAPTION_FONT),
            },
            accepts_pointer: false,
        }))
    }
}
