//! Layout store update handlers
//!
//! Thin message layer over `LayoutState`. Every handler is total: stale ids
//! and invalid settings fall through to `None` (nothing to redraw).

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::AppModel;

/// Handle layout messages (add/update/remove panels, grid settings)
pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::AddPanel(config) => {
            model.layout.add_panel(config);
            Some(Cmd::Redraw)
        }

        LayoutMsg::AddFromPalette(kind) => {
            let origin = (model.viewport.scroll_x, model.viewport.scroll_y);
            let config = model.palette.place(kind, origin);
            let id = model.layout.add_panel(config);
            tracing::info!(panel = %id, "Added widget from palette");
            Some(Cmd::Redraw)
        }

        LayoutMsg::UpdatePanel { id, patch } => {
            if !model.layout.contains(id) || patch.is_empty() {
                return None;
            }
            model.layout.update_panel(id, patch);
            Some(Cmd::Redraw)
        }

        LayoutMsg::RemovePanel(id) => model.layout.remove_panel(id).map(|_| Cmd::Redraw),

        LayoutMsg::BringToFront(id) => model.layout.bring_to_front(id).then_some(Cmd::Redraw),

        LayoutMsg::SetGridSize(size) => model.layout.set_grid_size(size).then_some(Cmd::Redraw),

        LayoutMsg::SetSnapToGrid(enabled) => {
            model.layout.set_snap_to_grid(enabled);
            Some(Cmd::Redraw)
        }

        LayoutMsg::ToggleSnapToGrid => {
            let enabled = !model.layout.snap_to_grid();
            model.layout.set_snap_to_grid(enabled);
            tracing::info!(enabled, "Snap to grid toggled");
            Some(Cmd::Redraw)
        }

        LayoutMsg::SetGridVisible(visible) => {
            model.layout.set_grid_visible(visible);
            Some(Cmd::Redraw)
        }

        LayoutMsg::ToggleGridVisible => {
            let visible = !model.layout.is_grid_visible();
            model.layout.set_grid_visible(visible);
            Some(Cmd::Redraw)
        }
    }
}
