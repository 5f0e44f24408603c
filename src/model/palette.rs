//! Available-widget palette
//!
//! Catalogue of widget kinds the user can add, with the default size each
//! one opens at. New panels cascade from the top-left of the visible canvas
//! so repeated adds don't land exactly on top of each other.

use super::panel::{PanelConfig, PanelRect, WidgetKind};

/// Cascade step between consecutive palette adds
const CASCADE_STEP: f32 = 30.0;
/// Number of cascade steps before wrapping back to the start
const CASCADE_WRAP: usize = 8;
/// Inset from the visible top-left corner for the first panel
const CASCADE_INSET: f32 = 40.0;

/// One entry in the palette
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    pub kind: WidgetKind,
    pub title: String,
    pub default_size: (f32, f32),
}

/// Widgets offered to the user
#[derive(Debug, Clone)]
pub struct WidgetPalette {
    entries: Vec<PaletteEntry>,
    adds: usize,
}

impl Default for WidgetPalette {
    fn default() -> Self {
        let entries = WidgetKind::builtin()
            .into_iter()
            .map(|kind| {
                let default_size = match kind {
                    WidgetKind::GraphExplorer => (800.0, 600.0),
                    WidgetKind::GeoMap | WidgetKind::FlowSankey => (600.0, 400.0),
                    _ => (400.0, 300.0),
                };
                PaletteEntry {
                    title: kind.display_name().to_string(),
                    kind,
                    default_size,
                }
            })
            .collect();
        Self { entries, adds: 0 }
    }
}

impl WidgetPalette {
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn entry(&self, kind: &WidgetKind) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| &e.kind == kind)
    }

    /// Register an extra widget kind (or replace the defaults of a known one)
    pub fn register(&mut self, entry: PaletteEntry) {
        match self.entries.iter_mut().find(|e| e.kind == entry.kind) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Build a panel config for `kind`, placed relative to the visible origin
    ///
    /// Kinds missing from the palette still produce a panel (it renders as a
    /// placeholder) using the smallest default size.
    pub fn place(&mut self, kind: WidgetKind, visible_origin: (f32, f32)) -> PanelConfig {
        let (width, height, title) = match self.entry(&kind) {
            Some(entry) => (entry.default_size.0, entry.default_size.1, entry.title.clone()),
            None => (400.0, 300.0, kind.display_name().to_string()),
        };

        let step = (self.adds % CASCADE_WRAP) as f32 * CASCADE_STEP;
        self.adds += 1;

        let rect = PanelRect::new(
            visible_origin.0 + CASCADE_INSET + step,
            visible_origin.1 + CASCADE_INSET + step,
            width,
            height,
        );
        PanelConfig::new(kind, rect).with_title(title)
    }
}
