//! Widgets mounted inside panels
//!
//! The workspace knows nothing about what a panel shows. Each panel's
//! `WidgetKind` is looked up in a `WidgetRegistry`, and the widget found
//! there draws into the panel's content rect with the panel's `props`.
//!
//! ## Built-in widgets
//!
//! - **PlaceholderWidget**: drawn for any kind without a registered widget
//! - **SparklineWidget**: line chart over `props.series`
//! - **TableWidget**: rows and columns from `props.columns` / `props.rows`

mod placeholder;
mod sparkline;
mod table;

pub use placeholder::PlaceholderWidget;
pub use sparkline::SparklineWidget;
pub use table::TableWidget;

use std::collections::HashMap;

use crate::model::{PanelRect, WidgetKind};
use crate::theme::WidgetTheme;
use crate::view::{Frame, TextPainter};

/// Drawing surface handed to a widget for one frame
///
/// `rect` is the panel's content area in window pixels and the frame is
/// already clipped to it. Widget code positions things relative to `rect`
/// through the helpers below.
pub struct WidgetCanvas<'a, 'f, 'p> {
    pub frame: &'a mut Frame<'f>,
    pub text: Option<&'a mut TextPainter<'p>>,
    pub rect: PanelRect,
    pub theme: &'a WidgetTheme,
    pub kind: &'a WidgetKind,
}

impl WidgetCanvas<'_, '_, '_> {
    #[inline]
    pub fn width(&self) -> f32 {
        self.rect.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.rect.height
    }

    /// Fill the whole content area
    pub fn fill(&mut self, color: u32) {
        self.frame.fill_rect(self.rect, color);
    }

    /// Fill a rect given relative to the content origin
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: u32) {
        self.frame.fill_rect(
            PanelRect::new(self.rect.x + x, self.rect.y + y, width, height),
            color,
        );
    }

    /// Draw a line given in content-relative coordinates
    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: u32) {
        let (ox, oy) = (self.rect.x, self.rect.y);
        self.frame.draw_line(ox + x0, oy + y0, ox + x1, oy + y1, color);
    }

    /// Line height of the text painter, `None` when no font is loaded
    pub fn line_height(&self) -> Option<f32> {
        self.text.as_ref().map(|t| t.line_height() as f32)
    }

    /// Measure text width, `None` when no font is loaded
    pub fn measure_text(&mut self, text: &str) -> Option<f32> {
        self.text.as_mut().map(|t| t.measure_width(text))
    }

    /// Draw text at a content-relative position, clipped to `max_width`
    ///
    /// Returns false when no font is available and nothing was drawn.
    pub fn text(&mut self, x: f32, y: f32, text: &str, max_width: f32, color: u32) -> bool {
        let Some(painter) = self.text.as_mut() else {
            return false;
        };
        painter.draw_fitted(
            self.frame,
            self.rect.x + x,
            self.rect.y + y,
            text,
            max_width,
            color,
        );
        true
    }
}

/// A renderable mounted inside a panel
///
/// `data` is the panel's `props`, passed through untouched. Widgets must
/// tolerate any JSON shape and fall back to something sensible.
pub trait Widget {
    fn render(&self, ctx: &mut WidgetCanvas, data: &serde_json::Value);
}

/// Maps widget kinds to their renderers
pub struct WidgetRegistry {
    widgets: HashMap<WidgetKind, Box<dyn Widget>>,
    fallback: PlaceholderWidget,
}

impl WidgetRegistry {
    /// Registry with no widgets: every panel renders the placeholder
    pub fn empty() -> Self {
        Self {
            widgets: HashMap::new(),
            fallback: PlaceholderWidget,
        }
    }

    /// Register (or replace) the widget for `kind`
    pub fn register(&mut self, kind: WidgetKind, widget: Box<dyn Widget>) {
        tracing::debug!(kind = %kind, "Registered widget");
        self.widgets.insert(kind, widget);
    }

    pub fn is_registered(&self, kind: &WidgetKind) -> bool {
        self.widgets.contains_key(kind)
    }

    /// Widget for `kind`, or the placeholder when none is registered
    pub fn get(&self, kind: &WidgetKind) -> &dyn Widget {
        match self.widgets.get(kind) {
            Some(widget) => widget.as_ref(),
            None => &self.fallback,
        }
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(WidgetKind::TimeseriesChart, Box::new(SparklineWidget));
        registry.register(WidgetKind::DataTable, Box::new(TableWidget));
        registry
    }
}
