//! Formatting utilities for CLI output.
//!
//! Human-readable renderings of screens, effective configurations and field
//! values, with ANSI styling for terminals.

use serde_json::Value;

use crate::{
    compose::Screen,
    layout::Rect,
    model::FieldIssue,
    render::{Fill, WidgetContent},
};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats field names with styling
pub fn format_field(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats warnings with yellow styling
pub fn format_warning(text: &str) -> String {
    format!("{}{}{}", Colors::YELLOW, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats a JSON value for human-readable CLI output.
///
/// Strings are quoted, `null` reads as `(unset)`, and objects and arrays show
/// their size rather than full contents.
///
/// ```
/// use appwrap::cli::formatting::format_json_value;
/// use serde_json::json;
///
/// assert_eq!(format_json_value(&json!("hello")), "\"hello\"");
/// assert_eq!(format_json_value(&json!(null)), "(unset)");
/// ```
pub fn format_json_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "(unset)".to_string(),
        Value::Array(arr) => format!("[{}]", arr.len()),
        Value::Object(map) => format!("{{{}}}", map.len()),
    }
}

/// Formats a rectangle as `x,y w×h`.
pub fn format_rect(rect: &Rect) -> String {
    format!(
        "{:.0},{:.0} {:.0}×{:.0}",
        rect.x, rect.y, rect.width, rect.height
    )
}

/// One line per layer, bottom first.
pub fn format_screen(screen: &Screen) -> String {
    let mut lines = vec![format_header(&format!(
        "Preview ({}, {:.0}×{:.0})",
        screen.mode, screen.viewport.width, screen.viewport.height
    ))];

    for (z, layer) in screen.layers.iter().enumerate() {
        let widget = &layer.widget;
        let paint = match &widget.background {
            Fill::Solid { color } => color.to_hex(),
            Fill::Image { url, fallback } => format!("{url} over {fallback}"),
        };

        let mut line = format!(
            "  {z} {:<11} {:<16} {paint}",
            widget.kind.as_str(),
            format_rect(&widget.frame)
        );
        if let Some(summary) = summarize(&widget.content) {
            line.push_str(&format_description(&format!("  {summary}")));
        }
        if widget.is_placeholder() {
            line = format_warning(&line);
        }
        lines.push(line);
    }

    if screen.modal {
        lines.push(format_description("  (modal: only the popup accepts taps)"));
    }

    lines.join("\n")
}

fn summarize(content: &WidgetContent) -> Option<String> {
    match content {
        WidgetContent::Splash { name, caption, .. } => {
            Some(format!("\"{}\" {}", name.text, caption.text))
        }
        WidgetContent::Fab {
            label, truncated, ..
        } => Some(if *truncated {
            format!("\"{}\" (truncated)", label.text)
        } else {
            format!("\"{}\"", label.text)
        }),
        WidgetContent::TopBar {
            message, button, ..
        } => Some(format!("\"{}\" [{}]", message.text, button.label.text)),
        WidgetContent::Popup { image, .. } => Some(format!("{image} [Install] [Close]")),
        WidgetContent::BottomBar { slots } => Some(
            slots
                .iter()
                .map(|slot| slot.label.text.as_str())
                .collect::<Vec<_>>()
                .join(" · "),
        ),
        WidgetContent::Placeholder { reason } => Some(reason.clone()),
        WidgetContent::StatusBar { clock, .. } => Some(clock.text.clone()),
        WidgetContent::Storefront(_) => None,
    }
}

/// `field = value` lines for a set of values.
pub fn format_values<'a>(values: impl IntoIterator<Item = (&'a String, &'a Value)>) -> String {
    values
        .into_iter()
        .map(|(field, value)| format!("{} = {}", format_field(field), format_json_value(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One warning line per malformed stored value.
pub fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| {
            format_warning(&format!(
                "warning: {} = {} is not {}, using the default",
                issue.field, issue.value, issue.expected
            ))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
