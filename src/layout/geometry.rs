use serde::Serialize;

/// Logical width of the phone screen inside a 300px mockup with a 12px bezel.
pub const SCREEN_WIDTH: f64 = 276.0;
/// Logical height of the phone screen inside a 600px mockup with a 12px bezel.
pub const SCREEN_HEIGHT: f64 = 576.0;

/// Height of the simulated status bar.
pub const STATUS_BAR_HEIGHT: f64 = 30.0;
/// Height of the bottom navigation bar.
pub const BOTTOM_BAR_HEIGHT: f64 = 60.0;

/// Horizontal distance between the FAB and the screen edge.
pub const FAB_EDGE_INSET: f64 = 20.0;
/// Vertical gap kept between the FAB and whatever sits below it.
pub const FAB_BOTTOM_GAP: f64 = 20.0;

/// Average glyph advance as a fraction of the font size.
const GLYPH_ADVANCE: f64 = 0.6;
/// Line height as a multiple of the font size.
pub const LINE_HEIGHT: f64 = 1.2;

/// The screen area a preview is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Width in logical pixels.
    pub width: f64,
    /// Height in logical pixels.
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl Viewport {
    /// Creates a viewport with the given logical size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The whole viewport as a rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Axis-aligned rectangle in logical pixels, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its origin and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Vertical center.
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Whether the point lies inside the rectangle (right/bottom edges exclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether two rectangles share any area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Shrinks the rectangle by the given insets.
    pub fn inset(&self, insets: Insets) -> Rect {
        Rect::new(
            self.x + insets.left,
            self.y + insets.top,
            (self.width - insets.left - insets.right).max(0.0),
            (self.height - insets.top - insets.bottom).max(0.0),
        )
    }
}

/// Padding around content, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Insets {
    /// Top padding.
    pub top: f64,
    /// Right padding.
    pub right: f64,
    /// Bottom padding.
    pub bottom: f64,
    /// Left padding.
    pub left: f64,
}

impl Insets {
    /// Same padding vertically and horizontally, like CSS `padding: v h`.
    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Uniform padding on all sides.
    pub fn uniform(value: f64) -> Self {
        Self::symmetric(value, value)
    }
}

/// Estimated rendered width of a single line of text.
///
/// Uses terminal column widths so emoji and CJK glyphs count double.
pub fn text_width(text: &str, font_size: f64) -> f64 {
    unicode_width::UnicodeWidthStr::width(text) as f64 * font_size * GLYPH_ADVANCE
}

/// Height of one line of text at the given font size.
pub fn line_height(font_size: f64) -> f64 {
    font_size * LINE_HEIGHT
}

/// Trailing mark of a cut label.
pub const ELLIPSIS: char = '…';

/// Cuts `text` so it fits `max_width`, ending it with an ellipsis if cut.
///
/// Returns the fitted text and whether it was cut. The text is empty when
/// not even one character and the ellipsis fit.
pub fn ellipsize(text: &str, font_size: f64, max_width: f64) -> (String, bool) {
    if text_width(text, font_size) <= max_width {
        return (text.to_string(), false);
    }

    let mut fitted = String::new();
    for c in text.chars() {
        let candidate = format!("{fitted}{c}{ELLIPSIS}");
        if text_width(&candidate, font_size) > max_width {
            break;
        }
        fitted.push(c);
    }

    if fitted.trim().is_empty() {
        return (String::new(), true);
    }

    let mut fitted = fitted.trim_end().to_string();
    fitted.push(ELLIPSIS);
    (fitted, true)
}
