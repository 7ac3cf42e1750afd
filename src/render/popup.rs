use crate::{
    layout::{Anchor, Edge, EdgeOffset, Rect, STATUS_BAR_HEIGHT, line_height},
    model::Color,
};

use super::{
    Action, Button, Fill, Label, RenderContext, RenderError, WidgetContent, WidgetKind,
    WidgetLayout, WidgetRenderer,
};

const BACKDROP_ALPHA: u8 = 0xB3;
const MAX_PANEL_SHARE: f64 = 0.8;
const ASPECT_WIDTH: f64 = 9.0;
const ASPECT_HEIGHT: f64 = 16.0;
const MARGIN: f64 = 16.0;
const ACTION_GAP: f64 = 8.0;
const ACTION_FONT: f64 = 13.0;
const ACTION_PADDING_Y: f64 = 10.0;
const MIN_PANEL_WIDTH: f64 = 45.0;

const CLOSE_TEXT: Color = Color::rgb(0x11, 0x18, 0x27);

/// Modal install prompt over a dimmed backdrop.
///
/// Shown only when enabled with usable artwork; an enabled popup with an
/// empty image is treated as disabled.
pub struct PopupRenderer;

impl WidgetRenderer for PopupRenderer {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Popup
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Option<WidgetLayout>, RenderError> {
        let Some(config) = ctx.scene.app() else {
            return Ok(None);
        };
        let popup = &config.popup;
        let Some(image) = popup.image.as_ref().filter(|_| popup.enabled) else {
            return Ok(None);
        };

        let anchor = Anchor::Band {
            vertical: EdgeOffset::new(Edge::Top, STATUS_BAR_HEIGHT),
        };
        let height = (ctx.viewport.height - STATUS_BAR_HEIGHT).max(0.0);
        let frame = anchor.place(&ctx.viewport, ctx.viewport.width, height);

        let action_height = line_height(ACTION_FONT) + 2.0 * ACTION_PADDING_Y;
        let room_height = frame.height - 2.0 * MARGIN - ACTION_GAP - action_height;

        let mut panel_width = frame.width * MAX_PANEL_SHARE;
        let mut panel_height = panel_width * ASPECT_HEIGHT / ASPECT_WIDTH;
        if panel_height > room_height {
            panel_height = room_height;
            panel_width = panel_height * ASPECT_WIDTH / ASPECT_HEIGHT;
        }

        if panel_width < MIN_PANEL_WIDTH {
            return Err(RenderError::DoesNotFit {
                widget: WidgetKind::Popup,
                region: frame,
                needed: MIN_PANEL_WIDTH * ASPECT_HEIGHT / ASPECT_WIDTH
                    + 2.0 * MARGIN
                    + ACTION_GAP
                    + action_height,
                available: frame.height,
            });
        }

        let stack_height = panel_height + ACTION_GAP + action_height;
        let panel = Rect::new(
            frame.center_x() - panel_width / 2.0,
            frame.center_y() - stack_height / 2.0,
            panel_width,
            panel_height,
        );

        let button_width = (panel_width - ACTION_GAP) / 2.0;
        let button_top = panel.bottom() + ACTION_GAP;
        let theme = config.identity.theme_color;

        let install = Button {
            frame: Rect::new(panel.x, button_top, button_width, action_height),
            label: Label::new("Install", Color::WHITE, ACTION_FONT).bold(),
            background: theme,
            corner_radius: action_height / 2.0,
            action: Action::Install,
        };
        let close = Button {
            frame: Rect::new(
                panel.x + button_width + ACTION_GAP,
                button_top,
                button_width,
                action_height,
            ),
            label: Label::new("Close", CLOSE_TEXT, ACTION_FONT),
            background: Color::WHITE,
            corner_radius: action_height / 2.0,
            action: Action::Close,
        };

        Ok(Some(WidgetLayout {
            kind: WidgetKind::Popup,
            anchor,
            frame,
            background: Fill::Solid {
                color: Color::BLACK.with_alpha(BACKDROP_ALPHA),
            },
            content: WidgetContent::Popup {
                panel,
                image: image.clone(),
                actions: vec![install, close],
            },
            accepts_pointer: true,
        }))
    }
}
