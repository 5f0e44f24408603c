//! Tabular widget
//!
//! Reads `props.columns` (array of header strings) and `props.rows` (array
//! of arrays). Cells may be any JSON value and are shown in their compact
//! display form. Without a font only the row/column rules are drawn.

use super::{PlaceholderWidget, Widget, WidgetCanvas};

const CELL_PADDING: f32 = 6.0;
/// Row height used when no font is loaded
const FALLBACK_ROW_HEIGHT: f32 = 20.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct TableWidget;

/// Display text for one cell
pub fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Widget for TableWidget {
    fn render(&self, ctx: &mut WidgetCanvas, data: &serde_json::Value) {
        let columns: Vec<String> = data
            .get("columns")
            .and_then(|c| c.as_array())
            .map(|c| c.iter().map(cell_text).collect())
            .unwrap_or_default();
        if columns.is_empty() {
            return PlaceholderWidget.render(ctx, data);
        }
        let rows = data
            .get("rows")
            .and_then(|r| r.as_array())
            .cloned()
            .unwrap_or_default();

        let rule = ctx.theme.muted.to_argb_u32();
        let text_color = ctx.theme.placeholder_foreground.to_argb_u32();
        let header_color = ctx.theme.accent.to_argb_u32();

        let row_height = ctx
            .line_height()
            .map_or(FALLBACK_ROW_HEIGHT, |h| h + CELL_PADDING);
        let col_width = ctx.width() / columns.len() as f32;
        let width = ctx.width();
        let height = ctx.height();

        for (col, name) in columns.iter().enumerate() {
            let x = col as f32 * col_width;
            ctx.text(
                x + CELL_PADDING,
                CELL_PADDING / 2.0,
                name,
                col_width - 2.0 * CELL_PADDING,
                header_color,
            );
            if col > 0 {
                ctx.line(x, 0.0, x, height, rule);
            }
        }
        ctx.line(0.0, row_height, width, row_height, rule);

        for (index, row) in rows.iter().enumerate() {
            let y = row_height * (index + 1) as f32;
            if y >= height {
                break;
            }
            let Some(cells) = row.as_array() else {
                continue;
            };
            for (col, cell) in cells.iter().take(columns.len()).enumerate() {
                ctx.text(
                    col as f32 * col_width + CELL_PADDING,
                    y + CELL_PADDING / 2.0,
                    &cell_text(cell),
                    col_width - 2.0 * CELL_PADDING,
                    text_color,
                );
            }
            ctx.line(0.0, y + row_height, width, y + row_height, rule);
        }
    }
}
