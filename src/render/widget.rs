use std::fmt;

use serde::Serialize;

use crate::{
    layout::{Anchor, Rect},
    model::{Color, ImageUrl},
    resolve::LogoSource,
};

/// Every kind of layer a preview can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// Clock and signal indicators.
    StatusBar,
    /// Simulated or embedded storefront.
    Storefront,
    /// Launch screen identity block.
    Splash,
    /// Promotional bar.
    TopBar,
    /// Floating action button.
    Fab,
    /// Bottom navigation bar.
    BottomBar,
    /// Install popup.
    Popup,
}

impl WidgetKind {
    /// Stable name used in logs and text output.
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetKind::StatusBar => "status_bar",
            WidgetKind::Storefront => "storefront",
            WidgetKind::Splash => "splash",
            WidgetKind::TopBar => "topbar",
            WidgetKind::Fab => "fab",
            WidgetKind::BottomBar => "bottom_bar",
            WidgetKind::Popup => "popup",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a widget's background is painted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fill {
    /// Flat color.
    Solid {
        /// Paint color.
        color: Color,
    },
    /// Cover-fitted image, painted over `fallback` while loading or when the
    /// image cannot be fetched.
    Image {
        /// Image location.
        url: ImageUrl,
        /// Color shown underneath.
        fallback: Color,
    },
}

impl Fill {
    /// Image fill when artwork is set, solid otherwise.
    pub fn image_or(image: Option<&ImageUrl>, color: Color) -> Self {
        match image {
            Some(url) => Fill::Image {
                url: url.clone(),
                fallback: color,
            },
            None => Fill::Solid { color },
        }
    }

    /// The color visible when no image is drawn.
    pub fn base_color(&self) -> Color {
        match self {
            Fill::Solid { color } => *color,
            Fill::Image { fallback, .. } => *fallback,
        }
    }
}

/// A run of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    /// Characters to draw.
    pub text: String,
    /// Text color.
    pub color: Color,
    /// Font size in logical pixels.
    pub font_size: f64,
    /// Bold weight.
    pub bold: bool,
}

impl Label {
    /// Regular-weight label.
    pub fn new(text: impl Into<String>, color: Color, font_size: f64) -> Self {
        Self {
            text: text.into(),
            color,
            font_size,
            bold: false,
        }
    }

    /// Same label in bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// App icon: logo image or letter avatar on a rounded square.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icon {
    /// Where the icon is drawn.
    pub frame: Rect,
    /// Image or avatar.
    pub logo: LogoSource,
    /// Square color behind an avatar letter.
    pub background: Color,
    /// Corner radius.
    pub corner_radius: f64,
}

/// What pressing a button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Open the install page.
    Install,
    /// Dismiss the popup.
    Close,
}

/// A pressable pill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    /// Where the button is drawn.
    pub frame: Rect,
    /// Caption.
    pub label: Label,
    /// Button color.
    pub background: Color,
    /// Corner radius.
    pub corner_radius: f64,
    /// Effect of pressing it.
    pub action: Action,
}

/// One slot of the bottom navigation bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavSlot {
    /// Where the slot is drawn.
    pub frame: Rect,
    /// Emoji glyph.
    pub icon: &'static str,
    /// Caption under the glyph.
    pub label: Label,
}

/// A skeleton block standing in for storefront content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    /// Where the block is drawn.
    pub frame: Rect,
    /// Block color.
    pub color: Color,
}

/// The body drawn behind every widget in app mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "body", rename_all = "snake_case")]
pub enum StorefrontBody {
    /// The live storefront, framed.
    Embedded {
        /// Normalized storefront address.
        url: String,
    },
    /// A drawn stand-in when the store has no public address.
    Skeleton {
        /// Small logo in the header.
        logo: Icon,
        /// App name next to the logo.
        title: Label,
        /// Theme-colored line under the header.
        underline: Block,
        /// Promotional banner.
        banner: Block,
        /// 2×2 product cards.
        products: Vec<Block>,
        /// Theme-colored price bars, one per card.
        prices: Vec<Block>,
    },
}

/// Widget-specific content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetContent {
    /// Clock on the left, indicators on the right.
    StatusBar {
        /// Fixed clock.
        clock: Label,
        /// Signal and battery glyphs.
        indicators: Label,
    },
    /// Storefront body.
    Storefront(StorefrontBody),
    /// Centered identity block.
    Splash {
        /// App icon.
        icon: Icon,
        /// App name.
        name: Label,
        /// Loading caption.
        caption: Label,
    },
    /// Pill-shaped floating button.
    Fab {
        /// Icon followed by text.
        label: Label,
        /// Corner radius.
        corner_radius: f64,
        /// Whether the label was cut to fit the screen.
        truncated: bool,
    },
    /// Promotional bar content.
    TopBar {
        /// Leading icon.
        icon: Label,
        /// Message.
        message: Label,
        /// Box the message is clipped to, between the icon and the button.
        message_frame: Rect,
        /// Call to action.
        button: Button,
        /// Whether the message or the button label was cut to fit.
        truncated: bool,
    },
    /// Modal install prompt.
    Popup {
        /// Aspect-locked artwork panel.
        panel: Rect,
        /// Artwork.
        image: ImageUrl,
        /// Install and Close.
        actions: Vec<Button>,
    },
    /// Navigation slots, left to right.
    BottomBar {
        /// The four slots.
        slots: Vec<NavSlot>,
    },
    /// Stand-in for a widget that failed to lay out.
    Placeholder {
        /// Why the widget could not be drawn.
        reason: String,
    },
}

/// A laid-out widget, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetLayout {
    /// Kind of widget.
    pub kind: WidgetKind,
    /// Edge-relative attachment.
    pub anchor: Anchor,
    /// Resolved frame in the viewport.
    pub frame: Rect,
    /// Background paint.
    pub background: Fill,
    /// Widget content.
    pub content: WidgetContent,
    /// Whether the widget takes taps.
    pub accepts_pointer: bool,
}

impl WidgetLayout {
    /// Gray block shown where a widget could not be laid out.
    pub fn placeholder(kind: WidgetKind, frame: Rect, reason: impl Into<String>) -> Self {
        Self {
            kind,
            anchor: Anchor::Centered,
            frame,
            background: Fill::Solid {
                color: PLACEHOLDER_COLOR,
            },
            content: WidgetContent::Placeholder {
                reason: reason.into(),
            },
            accepts_pointer: false,
        }
    }

    /// Whether this layer is a placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.content, WidgetContent::Placeholder { .. })
    }
}

/// Neutral gray for placeholders and skeleton blocks.
pub const PLACEHOLDER_COLOR: Color = Color::rgb(0xE5, 0xE7, 0xEB);
