//! Screen furniture around the configurable widgets: the status bar and the
//! storefront body behind everything else.

use crate::{
    layout::{Anchor, BOTTOM_BAR_HEIGHT, Edge, EdgeOffset, Rect, STATUS_BAR_HEIGHT},
    model::Color,
    resolve::EffectiveConfig,
};

use super::{
    Block, Fill, Icon, Label, PLACEHOLDER_COLOR, RenderContext, RenderError, StorefrontBody,
    WidgetContent, WidgetKind, WidgetLayout, WidgetRenderer,
};

const CLOCK: &str = "9:41";
const INDICATORS: &str = "📶 🔋";
const STATUS_FONT: f64 = 12.0;

const PAGE_PADDING: f64 = 12.0;
const HEADER_HEIGHT: f64 = 50.0;
const HEADER_LOGO: f64 = 30.0;
const TITLE_FONT: f64 = 14.0;
const UNDERLINE: f64 = 2.0;
const BANNER_HEIGHT: f64 = 120.0;
const GRID_GAP: f64 = 10.0;
const CARD_HEIGHT: f64 = 110.0;
const PRICE_HEIGHT: f64 = 8.0;

/// Theme-colored status bar with a fixed clock.
pub struct StatusBarRenderer;

impl WidgetRenderer for StatusBarRenderer {
    fn kind(&self) -> WidgetKind {
        WidgetKind::StatusBar
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Option<WidgetLayout>, RenderError> {
        let Some(config) = ctx.scene.app() else {
            return Ok(None);
        };

        let anchor = Anchor::Band {
            vertical: EdgeOffset::new(Edge::Top, 0.0),
        };

        Ok(Some(WidgetLayout {
            kind: WidgetKind::StatusBar,
            anchor,
            frame: anchor.place(&ctx.viewport, ctx.viewport.width, STATUS_BAR_HEIGHT),
            background: Fill::Solid {
                color: config.identity.theme_color,
            },
            content: WidgetContent::StatusBar {
                clock: Label::new(CLOCK, Color::WHITE, STATUS_FONT).bold(),
                indicators: Label::new(INDICATORS, Color::WHITE, STATUS_FONT),
            },
            accepts_pointer: false,
        }))
    }
}

/// The page behind the widgets.
///
/// Embeds the live storefront when the store has a public address and draws
/// a skeleton shop otherwise.
pub struct StorefrontRenderer;

impl WidgetRenderer for StorefrontRenderer {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Storefront
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Option<WidgetLayout>, RenderError> {
        let Some(config) = ctx.scene.app() else {
            return Ok(None);
        };

        let bottom = if config.bottom_bar.enabled {
            BOTTOM_BAR_HEIGHT
        } else {
            0.0
        };
        let height = ctx.viewport.height - STATUS_BAR_HEIGHT - bottom;
        let anchor = Anchor::Band {
            vertical: EdgeOffset::new(Edge::Top, STATUS_BAR_HEIGHT),
        };

        if height <= 0.0 {
            return Err(RenderError::DoesNotFit {
                widget: WidgetKind::Storefront,
                region: ctx.viewport.bounds(),
                needed: STATUS_BAR_HEIGHT + bottom,
                available: ctx.viewport.height,
            });
        }

        let frame = anchor.place(&ctx.viewport, ctx.viewport.width, height);
        let body = match &config.storefront {
            Some(url) => StorefrontBody::Embedded { url: url.clone() },
            None => skeleton(config, frame),
        };

        Ok(Some(WidgetLayout {
            kind: WidgetKind::Storefront,
            anchor,
            frame,
            background: Fill::Solid {
                color: Color::WHITE,
            },
            content: WidgetContent::Storefront(body),
            accepts_pointer: true,
        }))
    }
}

fn skeleton(config: &EffectiveConfig, frame: Rect) -> StorefrontBody {
    let theme = config.identity.theme_color;
    let left = frame.x + PAGE_PADDING;
    let inner_width = frame.width - 2.0 * PAGE_PADDING;

    let logo = Icon {
        frame: Rect::new(
            left,
            frame.y + (HEADER_HEIGHT - HEADER_LOGO) / 2.0,
            HEADER_LOGO,
            HEADER_LOGO,
        ),
        logo: config.identity.logo.clone(),
        background: theme,
        corner_radius: 6.0,
    };
    let title = Label::new(config.identity.app_name.clone(), theme, TITLE_FONT).bold();
    let underline = Block {
        frame: Rect::new(frame.x, frame.y + HEADER_HEIGHT, frame.width, UNDERLINE),
        color: theme,
    };

    let banner_top = frame.y + HEADER_HEIGHT + UNDERLINE + PAGE_PADDING;
    let banner = Block {
        frame: Rect::new(left, banner_top, inner_width, BANNER_HEIGHT),
        color: theme.with_alpha(0x33),
    };

    let grid_top = banner_top + BANNER_HEIGHT + PAGE_PADDING;
    let card_width = (inner_width - GRID_GAP) / 2.0;
    let cells = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)];

    let products: Vec<Block> = cells
        .iter()
        .map(|&(col, row)| Block {
            frame: Rect::new(
                left + col * (card_width + GRID_GAP),
                grid_top + row * (CARD_HEIGHT + GRID_GAP),
                card_width,
                CARD_HEIGHT,
            ),
            color: PLACEHOLDER_COLOR,
        })
        .collect();

    let prices = products
        .iter()
        .map(|card| Block {
            frame: Rect::new(
                card.frame.x + 8.0,
                card.frame.bottom() - 8.0 - PRICE_HEIGHT,
                card.frame.width / 2.0,
                PRICE_HEIGHT,
            ),
            color: theme,
        })
        .collect();

    StorefrontBody::Skeleton {
        logo,
        title,
        underline,
        banner,
        products,
        prices,
    }
}
