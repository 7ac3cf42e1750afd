use crate::{
    layout::{
        BOTTOM_BAR_HEIGHT, Rect, STATUS_BAR_HEIGHT, ellipsize, line_height, text_width,
        topbar_anchor,
    },
    resolve::{EffectiveConfig, EffectiveTopBar},
};

use super::{
    Action, Button, Fill, Label, RenderContext, RenderError, WidgetContent, WidgetKind,
    WidgetLayout, WidgetRenderer,
};

const BASE_HEIGHT: f64 = 44.0;
const PADDING_X: f64 = 12.0;
const GAP: f64 = 8.0;
const ICON_FONT: f64 = 16.0;
const MESSAGE_FONT: f64 = 12.0;
const BUTTON_FONT: f64 = 11.0;
const BUTTON_PADDING_Y: f64 = 6.0;
const BUTTON_PADDING_X: f64 = 12.0;
/// Narrowest message box kept beside the button.
const MIN_MESSAGE_WIDTH: f64 = 40.0;
/// Largest share of the space after the icon the button may take.
const MAX_BUTTON_SHARE: f64 = 0.65;

/// Height of the promotional bar at its resolved size.
pub fn topbar_height(topbar: &EffectiveTopBar) -> f64 {
    BASE_HEIGHT * topbar.scale
}

/// Full-width promotional bar with a call-to-action pill.
pub struct TopBarRenderer;

impl WidgetRenderer for TopBarRenderer {
    fn kind(&self) -> WidgetKind {
        WidgetKind::TopBar
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Option<WidgetLayout>, RenderError> {
        let Some(config) = ctx.scene.app() else {
            return Ok(None);
        };
        let topbar = &config.topbar;
        if !topbar.enabled {
            return Ok(None);
        }

        let s = topbar.scale;
        let anchor = topbar_anchor(topbar.position, STATUS_BAR_HEIGHT, bottom_clearance(config));
        let frame = anchor.place(&ctx.viewport, ctx.viewport.width, topbar_height(topbar));

        let icon = Label::new(topbar.icon.clone(), topbar.text_color, ICON_FONT * s);
        let icon_width = text_width(&icon.text, icon.font_size);

        let content_width = frame.width - 2.0 * PADDING_X * s - icon_width - 2.0 * GAP * s;
        let button_max =
            (content_width - MIN_MESSAGE_WIDTH * s).min(content_width * MAX_BUTTON_SHARE);
        let (button_text, button_cut) = ellipsize(
            &topbar.button_text,
            BUTTON_FONT * s,
            button_max - 2.0 * BUTTON_PADDING_X * s,
        );
        if button_text.is_empty() {
            let shortest_button = text_width("W…", BUTTON_FONT * s) + 2.0 * BUTTON_PADDING_X * s;
            let needed = frame.width - content_width + MIN_MESSAGE_WIDTH * s + shortest_button;
            return Err(RenderError::DoesNotFit {
                widget: WidgetKind::TopBar,
                region: frame,
                needed,
                available: frame.width,
            });
        }

        let button_label = Label::new(button_text, topbar.button_text_color, BUTTON_FONT * s).bold();
        let button_width =
            text_width(&button_label.text, button_label.font_size) + 2.0 * BUTTON_PADDING_X * s;
        let button_height = line_height(button_label.font_size) + 2.0 * BUTTON_PADDING_Y * s;
        let button_x = frame.right() - PADDING_X * s - button_width;

        let message_x = frame.x + PADDING_X * s + icon_width + GAP * s;
        let message_width = (button_x - GAP * s - message_x).max(0.0);
        let message_height = line_height(MESSAGE_FONT * s);
        let message_frame = Rect::new(
            message_x,
            frame.center_y() - message_height / 2.0,
            message_width,
            message_height,
        );
        let (message_text, message_cut) = ellipsize(&topbar.text, MESSAGE_FONT * s, message_width);

        let button = Button {
            frame: Rect::new(
                button_x,
                frame.center_y() - button_height / 2.0,
                button_width,
                button_height,
            ),
            label: button_label,
            background: topbar.button_background_color,
            corner_radius: button_height / 2.0,
            action: Action::Install,
        };

        Ok(Some(WidgetLayout {
            kind: WidgetKind::TopBar,
            anchor,
            frame,
            background: Fill::image_or(topbar.background_image.as_ref(), topbar.background_color),
            content: WidgetContent::TopBar {
                icon,
                message: Label::new(message_text, topbar.text_color, MESSAGE_FONT * s),
                message_frame,
                button,
                truncated: button_cut || message_cut,
            },
            accepts_pointer: true,
        }))
    }
}

fn bottom_clearance(config: &EffectiveConfig) -> f64 {
    if config.bottom_bar.enabled {
        BOTTOM_BAR_HEIGHT
    } else {
        0.0
    }
}
