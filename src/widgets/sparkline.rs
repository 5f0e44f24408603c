//! Sparkline chart over a numeric series
//!
//! Reads `props.series` as an array of numbers. Non-numeric entries are
//! skipped; fewer than two points falls back to the placeholder.

use super::{PlaceholderWidget, Widget, WidgetCanvas};

const PADDING: f32 = 12.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct SparklineWidget;

impl SparklineWidget {
    /// Numeric points from `props.series`
    pub fn series(data: &serde_json::Value) -> Vec<f64> {
        data.get("series")
            .and_then(|s| s.as_array())
            .map(|values| values.iter().filter_map(|v| v.as_f64()).collect())
            .unwrap_or_default()
    }
}

impl Widget for SparklineWidget {
    fn render(&self, ctx: &mut WidgetCanvas, data: &serde_json::Value) {
        let series = Self::series(data);
        if series.len() < 2 {
            return PlaceholderWidget.render(ctx, data);
        }

        let accent = ctx.theme.accent.to_argb_u32();
        let muted = ctx.theme.muted.to_argb_u32();

        let chart_w = ctx.width() - 2.0 * PADDING;
        let chart_h = ctx.height() - 2.0 * PADDING;
        if chart_w <= 1.0 || chart_h <= 1.0 {
            return;
        }

        let min = series.iter().copied().fold(f64::INFINITY, f64::min);
        let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = if max > min { max - min } else { 1.0 };

        let baseline = PADDING + chart_h;
        ctx.line(PADDING, baseline, PADDING + chart_w, baseline, muted);

        let step = chart_w / (series.len() - 1) as f32;
        let point = |i: usize, v: f64| {
            let x = PADDING + step * i as f32;
            let y = baseline - ((v - min) / range) as f32 * chart_h;
            (x, y)
        };

        let mut prev = point(0, series[0]);
        for (i, &value) in series.iter().enumerate().skip(1) {
            let next = point(i, value);
            ctx.line(prev.0, prev.1, next.0, next.1, accent);
            prev = next;
        }

        if let Some(&last) = series.last() {
            let label = format!("{}", last);
            if let Some(width) = ctx.measure_text(&label) {
                ctx.text(
                    ctx.width() - PADDING - width,
                    PADDING / 2.0,
                    &label,
                    width + 1.0,
                    accent,
                );
            }
        }
    }
}
