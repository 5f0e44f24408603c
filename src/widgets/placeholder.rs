//! Placeholder widget
//!
//! Drawn for any panel whose kind has no registered widget. Shows the kind
//! name when a font is loaded, and a crossed box otherwise.

use super::{Widget, WidgetCanvas};

/// Smallest content box that still gets the crossed-box glyph
const MIN_ICON_SIZE: f32 = 24.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderWidget;

impl PlaceholderWidget {
    /// Message shown under the kind name
    pub fn message(&self) -> &'static str {
        "No renderer attached"
    }
}

impl Widget for PlaceholderWidget {
    fn render(&self, ctx: &mut WidgetCanvas, _data: &serde_json::Value) {
        let background = ctx.theme.placeholder_background.to_argb_u32();
        let foreground = ctx.theme.placeholder_foreground.to_argb_u32();
        ctx.fill(background);

        let (width, height) = (ctx.width(), ctx.height());

        if let Some(line_height) = ctx.line_height() {
            let name = ctx.kind.display_name().to_string();
            let message = self.message();
            let name_width = ctx.measure_text(&name).unwrap_or(0.0).min(width);
            let message_width = ctx.measure_text(message).unwrap_or(0.0).min(width);
            let top = (height - 2.0 * line_height) / 2.0;

            ctx.text((width - name_width) / 2.0, top, &name, width, foreground);
            ctx.text(
                (width - message_width) / 2.0,
                top + line_height,
                message,
                width,
                foreground,
            );
            return;
        }

        let size = width.min(height) / 3.0;
        if size < MIN_ICON_SIZE {
            return;
        }
        let x0 = (width - size) / 2.0;
        let y0 = (height - size) / 2.0;
        let (x1, y1) = (x0 + size, y0 + size);
        ctx.line(x0, y0, x1, y0, foreground);
        ctx.line(x0, y1, x1, y1, foreground);
        ctx.line(x0, y0, x0, y1, foreground);
        ctx.line(x1, y0, x1, y1, foreground);
        ctx.line(x0, y0, x1, y1, foreground);
        ctx.line(x1, y0, x0, y1, foreground);
    }
}
