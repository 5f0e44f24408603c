//! Gesture state for drag-to-move and edge/corner resize
//!
//! Exactly one gesture can be in flight per workspace. The controller in
//! `update::gesture` drives the transitions:
//!
//! ```text
//! Idle --BeginDrag--> Dragging --PointerUp/Cancel--> Idle
//! Idle --BeginResize--> Resizing --PointerUp/Cancel--> Idle
//! ```

use super::panel::{MinSize, PanelId, PanelRect};

/// A point in canvas coordinates (window point plus scroll offset)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

impl CanvasPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Which mouse button started a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// Edge or corner grabbed for a resize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeHandle {
    /// Handle for a point near the given edges, if any
    pub fn from_edges(north: bool, south: bool, east: bool, west: bool) -> Option<Self> {
        match (north, south, east, west) {
            (true, _, true, _) => Some(ResizeHandle::NorthEast),
            (true, _, _, true) => Some(ResizeHandle::NorthWest),
            (_, true, true, _) => Some(ResizeHandle::SouthEast),
            (_, true, _, true) => Some(ResizeHandle::SouthWest),
            (true, _, _, _) => Some(ResizeHandle::North),
            (_, true, _, _) => Some(ResizeHandle::South),
            (_, _, true, _) => Some(ResizeHandle::East),
            (_, _, _, true) => Some(ResizeHandle::West),
            _ => None,
        }
    }

    #[inline]
    pub fn moves_left(&self) -> bool {
        matches!(
            self,
            ResizeHandle::West | ResizeHandle::NorthWest | ResizeHandle::SouthWest
        )
    }

    #[inline]
    pub fn moves_right(&self) -> bool {
        matches!(
            self,
            ResizeHandle::East | ResizeHandle::NorthEast | ResizeHandle::SouthEast
        )
    }

    #[inline]
    pub fn moves_top(&self) -> bool {
        matches!(
            self,
            ResizeHandle::North | ResizeHandle::NorthEast | ResizeHandle::NorthWest
        )
    }

    #[inline]
    pub fn moves_bottom(&self) -> bool {
        matches!(
            self,
            ResizeHandle::South | ResizeHandle::SouthEast | ResizeHandle::SouthWest
        )
    }
}

/// In-flight move of one panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub panel_id: PanelId,
    /// Pointer position at pointer-down
    pub pointer_start: CanvasPoint,
    /// Panel rect at pointer-down
    pub origin: PanelRect,
}

impl DragGesture {
    /// Raw (unsnapped) rect for the current pointer position
    pub fn rect_at(&self, pointer: CanvasPoint) -> PanelRect {
        PanelRect {
            x: self.origin.x + (pointer.x - self.pointer_start.x),
            y: self.origin.y + (pointer.y - self.pointer_start.y),
            ..self.origin
        }
    }
}

/// In-flight resize of one panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeGesture {
    pub panel_id: PanelId,
    pub handle: ResizeHandle,
    pub pointer_start: CanvasPoint,
    pub origin: PanelRect,
}

impl ResizeGesture {
    /// Rect for the current pointer position, clamped to `min`
    pub fn rect_at(&self, pointer: CanvasPoint, min: MinSize) -> PanelRect {
        resize_rect(
            self.origin,
            self.handle,
            pointer.x - self.pointer_start.x,
            pointer.y - self.pointer_start.y,
            min,
        )
    }
}

/// Apply a pointer delta to `origin` through `handle`
///
/// Edges not owned by the handle stay fixed. When the size hits the minimum
/// on a west/north handle, the moving edge stops at `right - min` /
/// `bottom - min` instead of pushing the panel.
pub fn resize_rect(
    origin: PanelRect,
    handle: ResizeHandle,
    dx: f32,
    dy: f32,
    min: MinSize,
) -> PanelRect {
    let mut rect = origin;

    if handle.moves_right() {
        rect.width = min.clamp_width(origin.width + dx);
    } else if handle.moves_left() {
        rect.width = min.clamp_width(origin.width - dx);
        rect.x = origin.right() - rect.width;
    }

    if handle.moves_bottom() {
        rect.height = min.clamp_height(origin.height + dy);
    } else if handle.moves_top() {
        rect.height = min.clamp_height(origin.height - dy);
        rect.y = origin.bottom() - rect.height;
    }

    rect
}

/// Interaction controller state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragGesture),
    Resizing(ResizeGesture),
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    /// Panel targeted by the active gesture
    pub fn panel_id(&self) -> Option<PanelId> {
        match self {
            GestureState::Idle => None,
            GestureState::Dragging(drag) => Some(drag.panel_id),
            GestureState::Resizing(resize) => Some(resize.panel_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: MinSize = MinSize {
        width: 120.0,
        height: 80.0,
    };

    fn origin() -> PanelRect {
        PanelRect::new(100.0, 100.0, 400.0, 300.0)
    }

    #[test]
    fn test_drag_rect_follows_pointer_delta() {
        let drag = DragGesture {
            panel_id: PanelId(1),
            pointer_start: CanvasPoint::new(110.0, 105.0),
            origin: origin(),
        };
        let rect = drag.rect_at(CanvasPoint::new(90.0, 155.0));
        assert_eq!(rect, PanelRect::new(80.0, 150.0, 400.0, 300.0));
    }

    #[test]
    fn test_resize_east_grows_width_only() {
        let rect = resize_rect(origin(), ResizeHandle::East, 50.0, 999.0, MIN);
        assert_eq!(rect, PanelRect::new(100.0, 100.0, 450.0, 300.0));
    }

    #[test]
    fn test_resize_east_clamps_to_min() {
        let rect = resize_rect(origin(), ResizeHandle::East, -350.0, 0.0, MIN);
        assert_eq!(rect.width, 120.0);
        assert_eq!(rect.x, 100.0);
    }

    #[test]
    fn test_resize_west_keeps_right_edge() {
        let rect = resize_rect(origin(), ResizeHandle::West, 30.0, 0.0, MIN);
        assert_eq!(rect, PanelRect::new(130.0, 100.0, 370.0, 300.0));
        assert_eq!(rect.right(), origin().right());
    }

    #[test]
    fn test_resize_west_clamped_stops_left_edge() {
        let rect = resize_rect(origin(), ResizeHandle::West, 1000.0, 0.0, MIN);
        assert_eq!(rect.width, 120.0);
        assert_eq!(rect.x, 500.0 - 120.0);
    }

    #[test]
    fn test_resize_north_west_corner() {
        let rect = resize_rect(origin(), ResizeHandle::NorthWest, -20.0, -10.0, MIN);
        assert_eq!(rect, PanelRect::new(80.0, 90.0, 420.0, 310.0));
    }

    #[test]
    fn test_resize_south_clamps_height() {
        let rect = resize_rect(origin(), ResizeHandle::South, 0.0, -290.0, MIN);
        assert_eq!(rect.height, 80.0);
        assert_eq!(rect.y, 100.0);
    }

    #[test]
    fn test_handle_from_edges_prefers_corners() {
        assert_eq!(
            ResizeHandle::from_edges(true, false, true, false),
            Some(ResizeHandle::NorthEast)
        );
        assert_eq!(
            ResizeHandle::from_edges(false, true, false, true),
            Some(ResizeHandle::SouthWest)
        );
        assert_eq!(
            ResizeHandle::from_edges(false, false, true, false),
            Some(ResizeHandle::East)
        );
        assert_eq!(ResizeHandle::from_edges(false, false, false, false), None);
    }

    #[test]
    fn test_gesture_state_panel_id() {
        assert_eq!(GestureState::Idle.panel_id(), None);
        let drag = GestureState::Dragging(DragGesture {
            panel_id: PanelId(3),
            pointer_start: CanvasPoint::default(),
            origin: origin(),
        });
        assert_eq!(drag.panel_id(), Some(PanelId(3)));
        assert!(!drag.is_idle());
    }
}
