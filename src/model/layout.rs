//! Layout state - the panel registry and its mutation surface
//!
//! `LayoutState` owns every panel of one workspace view plus the shared grid
//! settings. All mutations go through the methods here so the invariants hold
//! after every call:
//!
//! - panel ids are unique and never reused (monotonic counter)
//! - `width >= min_size.width` and `height >= min_size.height`
//! - after `bring_to_front(id)` that panel's z-index is the strict maximum
//!
//! Z-indices are compacted to dense ranks when the counter would pass
//! `u32::MAX`, and on every snapshot restore. Relative order and ties survive.
//!
//! Operations on ids that are not present are silent no-ops. Gesture events
//! can arrive for a panel that was closed a moment earlier, and that must not
//! disturb the rest of the workspace.

use serde::{Deserialize, Serialize};

use super::panel::{MinSize, Panel, PanelConfig, PanelId, PanelPatch, PanelRect};

/// Highest panel id accepted from a snapshot; the rest of the range stays free
/// for ids handed out after the restore
pub const MAX_RESTORED_PANEL_ID: u64 = i64::MAX as u64;

/// Grid and sizing settings shared by all panels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    pub grid_size: u32,
    pub snap_to_grid: bool,
    pub is_grid_visible: bool,
    pub min_size: MinSize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            grid_size: 20,
            snap_to_grid: true,
            is_grid_visible: false,
            min_size: MinSize::default(),
        }
    }
}

/// Complete layout of one workspace view
#[derive(Debug, Clone)]
pub struct LayoutState {
    panels: Vec<Panel>,
    grid_size: u32,
    snap_to_grid: bool,
    is_grid_visible: bool,
    min_size: MinSize,
    next_panel_id: u64,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new(LayoutSettings::default())
    }
}

impl LayoutState {
    pub fn new(settings: LayoutSettings) -> Self {
        Self {
            panels: Vec::new(),
            grid_size: settings.grid_size.max(1),
            snap_to_grid: settings.snap_to_grid,
            is_grid_visible: settings.is_grid_visible,
            min_size: settings.min_size,
            next_panel_id: 1,
        }
    }

    /// Build the initial layout from a list of panel configurations
    pub fn from_configs(
        settings: LayoutSettings,
        configs: impl IntoIterator<Item = PanelConfig>,
    ) -> Self {
        let mut layout = Self::new(settings);
        for config in configs {
            layout.add_panel(config);
        }
        layout
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// Panels in insertion order
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.panel(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panel_ids(&self) -> Vec<PanelId> {
        self.panels.iter().map(|p| p.id).collect()
    }

    /// Highest z-index in use, 0 when there are no panels
    pub fn max_z(&self) -> u32 {
        self.panels.iter().map(|p| p.z_index).max().unwrap_or(0)
    }

    /// Panels ordered bottom to top: ascending z, insertion order breaks ties
    pub fn panels_in_paint_order(&self) -> Vec<&Panel> {
        let mut ordered: Vec<&Panel> = self.panels.iter().collect();
        // Stable sort keeps insertion order among equal z
        ordered.sort_by_key(|p| p.z_index);
        ordered
    }

    /// The panel painted last (the one on top), if any
    pub fn topmost(&self) -> Option<&Panel> {
        self.panels_in_paint_order().last().copied()
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    pub fn is_grid_visible(&self) -> bool {
        self.is_grid_visible
    }

    pub fn min_size(&self) -> MinSize {
        self.min_size
    }

    pub fn settings(&self) -> LayoutSettings {
        LayoutSettings {
            grid_size: self.grid_size,
            snap_to_grid: self.snap_to_grid,
            is_grid_visible: self.is_grid_visible,
            min_size: self.min_size,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a new panel on top of the stack and return its fresh id
    pub fn add_panel(&mut self, config: PanelConfig) -> PanelId {
        let id = PanelId(self.next_panel_id);
        self.next_panel_id += 1;

        let z_index = self.next_z();
        let rect = PanelRect {
            width: self.min_size.clamp_width(config.rect.width),
            height: self.min_size.clamp_height(config.rect.height),
            ..config.rect
        };

        tracing::debug!(panel = %id, kind = %config.kind, z_index, "add panel");

        self.panels.push(Panel {
            id,
            kind: config.kind,
            title: config.title,
            subtitle: config.subtitle,
            rect,
            is_draggable: config.is_draggable,
            is_resizable: config.is_resizable,
            z_index,
            props: config.props,
        });
        id
    }

    /// Merge `patch` into the panel; width/height are floored at the minimum
    pub fn update_panel(&mut self, id: PanelId, patch: PanelPatch) {
        let min_size = self.min_size;
        let Some(panel) = self.panels.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(panel = %id, "update ignored: no such panel");
            return;
        };

        if let Some(title) = patch.title {
            panel.title = title;
        }
        if let Some(subtitle) = patch.subtitle {
            panel.subtitle = subtitle;
        }
        if let Some(x) = patch.x {
            panel.rect.x = x;
        }
        if let Some(y) = patch.y {
            panel.rect.y = y;
        }
        if let Some(width) = patch.width {
            panel.rect.width = min_size.clamp_width(width);
        }
        if let Some(height) = patch.height {
            panel.rect.height = min_size.clamp_height(height);
        }
        if let Some(draggable) = patch.is_draggable {
            panel.is_draggable = draggable;
        }
        if let Some(resizable) = patch.is_resizable {
            panel.is_resizable = resizable;
        }
        if let Some(props) = patch.props {
            panel.props = props;
        }
    }

    /// Delete the panel; returns the removed record, `None` if it was absent
    pub fn remove_panel(&mut self, id: PanelId) -> Option<Panel> {
        let Some(index) = self.panels.iter().position(|p| p.id == id) else {
            tracing::debug!(panel = %id, "remove ignored: no such panel");
            return None;
        };
        tracing::debug!(panel = %id, "remove panel");
        Some(self.panels.remove(index))
    }

    /// Raise the panel above every other panel
    ///
    /// Returns whether anything changed: absent panels and panels that are
    /// already the unique maximum are left alone.
    pub fn bring_to_front(&mut self, id: PanelId) -> bool {
        let Some(current) = self.panel(id).map(|p| p.z_index) else {
            tracing::debug!(panel = %id, "bring to front ignored: no such panel");
            return false;
        };

        let others_max = self
            .panels
            .iter()
            .filter(|p| p.id != id)
            .map(|p| p.z_index)
            .max();

        match others_max {
            Some(max) if current <= max => {
                let z_index = self.next_z();
                if let Some(panel) = self.panels.iter_mut().find(|p| p.id == id) {
                    panel.z_index = z_index;
                }
                tracing::debug!(panel = %id, z_index, "bring to front");
                true
            }
            _ => false,
        }
    }

    /// z-index one above the current maximum, compacting first if that would overflow
    fn next_z(&mut self) -> u32 {
        if let Some(z_index) = self.max_z().checked_add(1) {
            return z_index;
        }
        tracing::warn!("z-index space exhausted, compacting stacking order");
        self.compact_z();
        self.max_z().saturating_add(1)
    }

    /// Renumber z-indices to dense ranks `1..=k`, keeping order and ties
    fn compact_z(&mut self) {
        let mut levels: Vec<u32> = self.panels.iter().map(|p| p.z_index).collect();
        levels.sort_unstable();
        levels.dedup();
        for panel in &mut self.panels {
            if let Ok(rank) = levels.binary_search(&panel.z_index) {
                panel.z_index = rank as u32 + 1;
            }
        }
    }

    /// Set the snap granularity; zero is rejected and leaves the grid unchanged
    pub fn set_grid_size(&mut self, grid_size: u32) -> bool {
        if grid_size == 0 {
            tracing::warn!("Ignoring invalid grid size 0");
            return false;
        }
        self.grid_size = grid_size;
        true
    }

    pub fn set_snap_to_grid(&mut self, enabled: bool) {
        self.snap_to_grid = enabled;
    }

    pub fn set_grid_visible(&mut self, visible: bool) {
        self.is_grid_visible = visible;
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Serializable copy of the layout
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            settings: self.settings(),
            panels: self.panels.clone(),
        }
    }

    /// Rebuild a layout from a snapshot
    ///
    /// Duplicate ids (first wins) and ids above [`MAX_RESTORED_PANEL_ID`] are
    /// dropped, sizes are re-clamped and z-indices compacted, so a hand-edited
    /// snapshot cannot break the invariants.
    pub fn from_snapshot(snapshot: LayoutSnapshot) -> Self {
        let mut layout = Self::new(snapshot.settings);
        for mut panel in snapshot.panels {
            if panel.id.0 > MAX_RESTORED_PANEL_ID {
                tracing::warn!(panel = %panel.id, "Dropping out-of-range panel id in snapshot");
                continue;
            }
            if layout.contains(panel.id) {
                tracing::warn!(panel = %panel.id, "Dropping duplicate panel id in snapshot");
                continue;
            }
            panel.rect.width = layout.min_size.clamp_width(panel.rect.width);
            panel.rect.height = layout.min_size.clamp_height(panel.rect.height);
            layout.next_panel_id = layout.next_panel_id.max(panel.id.0 + 1);
            layout.panels.push(panel);
        }
        layout.compact_z();
        layout
    }
}

/// Layout contents in a serde-friendly shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub settings: LayoutSettings,
    pub panels: Vec<Panel>,
}

impl LayoutSnapshot {
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize layout: {}", e))
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse layout: {}", e))
    }
}
