//! Application model - the complete state of one workspace view
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod gesture;
pub mod grid;
pub mod layout;
pub mod palette;
pub mod panel;

pub use gesture::{
    resize_rect, CanvasPoint, DragGesture, GestureState, PointerButton, ResizeGesture,
    ResizeHandle,
};
pub use grid::{snap, snap_rect};
pub use layout::{LayoutSettings, LayoutSnapshot, LayoutState};
pub use palette::{PaletteEntry, WidgetPalette};
pub use panel::{MinSize, Panel, PanelConfig, PanelId, PanelPatch, PanelRect, WidgetKind};

use crate::config::WorkspaceConfig;
use crate::theme::{load_theme, Theme};

/// Scrollable window onto the canvas
///
/// Panels live in canvas coordinates; the viewport maps window pixels to
/// canvas pixels by adding the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasViewport {
    pub scroll_x: f32,
    pub scroll_y: f32,
    pub width: f32,
    pub height: f32,
}

impl CanvasViewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width: width as f32,
            height: height as f32,
        }
    }

    /// Convert a window point to canvas coordinates
    #[inline]
    pub fn to_canvas(&self, x: f64, y: f64) -> CanvasPoint {
        CanvasPoint::new(x as f32 + self.scroll_x, y as f32 + self.scroll_y)
    }

    /// Whether a window point lies inside the visible canvas
    pub fn contains_window_point(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && (x as f32) < self.width && (y as f32) < self.height
    }

    /// Scroll by a delta, limited to the area spanned by `content` and the
    /// canvas origin so the user cannot scroll into empty space forever
    pub fn scroll_by(&mut self, dx: f32, dy: f32, content: Option<PanelRect>) {
        let (min_x, min_y, max_x, max_y) = match content {
            Some(bounds) => (
                bounds.x.min(0.0),
                bounds.y.min(0.0),
                (bounds.right() - self.width).max(0.0),
                (bounds.bottom() - self.height).max(0.0),
            ),
            None => (0.0, 0.0, 0.0, 0.0),
        };
        self.scroll_x = (self.scroll_x + dx).clamp(min_x, max_x.max(min_x));
        self.scroll_y = (self.scroll_y + dy).clamp(min_y, max_y.max(min_y));
    }
}

/// Bounding box of every panel, `None` for an empty layout
pub fn content_bounds(layout: &LayoutState) -> Option<PanelRect> {
    let mut panels = layout.panels().iter();
    let first = panels.next()?.rect;
    let (mut x0, mut y0, mut x1, mut y1) = (first.x, first.y, first.right(), first.bottom());
    for panel in panels {
        x0 = x0.min(panel.rect.x);
        y0 = y0.min(panel.rect.y);
        x1 = x1.max(panel.rect.right());
        y1 = y1.max(panel.rect.bottom());
    }
    Some(PanelRect::new(x0, y0, x1 - x0, y1 - y0))
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Panels and grid settings
    pub layout: LayoutState,
    /// Active drag/resize gesture, if any
    pub gesture: GestureState,
    /// Visible part of the canvas
    pub viewport: CanvasViewport,
    /// Widgets available for "add widget"
    pub palette: WidgetPalette,
    /// Colors for canvas and panel chrome
    pub theme: Theme,
}

impl AppModel {
    /// Create the model from a loaded workspace config
    pub fn new(config: &WorkspaceConfig, window_width: u32, window_height: u32) -> Self {
        let layout = LayoutState::from_configs(config.layout_settings(), config.panels.clone());

        let theme = load_theme(&config.theme).unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to load theme '{}': {}, using default",
                config.theme,
                e
            );
            Theme::default()
        });

        tracing::info!(
            panels = layout.len(),
            grid_size = layout.grid_size(),
            snap = layout.snap_to_grid(),
            "Workspace initialized"
        );

        Self {
            layout,
            gesture: GestureState::Idle,
            viewport: CanvasViewport::new(window_width, window_height),
            palette: WidgetPalette::default(),
            theme,
        }
    }

    /// Create a model around an existing layout with default theme and palette
    pub fn with_layout(layout: LayoutState, window_width: u32, window_height: u32) -> Self {
        Self {
            layout,
            gesture: GestureState::Idle,
            viewport: CanvasViewport::new(window_width, window_height),
            palette: WidgetPalette::default(),
            theme: Theme::default(),
        }
    }

    /// Update viewport dimensions after window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.width = width as f32;
        self.viewport.height = height as f32;
    }
}
