//! Grid snapping

use super::panel::PanelRect;

/// Snap `value` to the nearest multiple of `grid_size` when `enabled`
///
/// Ties round up (`137.5 -> 140` on a 5px grid, `-10 -> 0` on a 20px grid).
/// A zero grid size leaves the value untouched.
pub fn snap(value: f32, grid_size: u32, enabled: bool) -> f32 {
    if !enabled || grid_size == 0 {
        return value;
    }
    let grid = grid_size as f32;
    (value / grid + 0.5).floor() * grid
}

/// Snap each edge component of a rect independently
pub fn snap_rect(rect: PanelRect, grid_size: u32, enabled: bool) -> PanelRect {
    PanelRect {
        x: snap(rect.x, grid_size, enabled),
        y: snap(rect.y, grid_size, enabled),
        width: snap(rect.width, grid_size, enabled),
        height: snap(rect.height, grid_size, enabled),
    }
}
