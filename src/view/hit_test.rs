//! Hit-testing types and functions for mouse event handling
//!
//! The design follows a "hit-test → dispatch" pattern:
//! 1. `hit_test_canvas()` determines the `HitTarget` under a window point
//! 2. `runtime::mouse` matches on `(HitTarget, button)` to build messages
//! 3. Handlers return `EventResult` to indicate consumption and redraw needs

use crate::commands::Cmd;
use crate::model::{AppModel, GestureState, PanelId, ResizeHandle};

use super::chrome::{resize_handle_at, PanelChrome};

// ============================================================================
// Core Types
// ============================================================================

/// A point in window coordinates (physical pixels)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Hit Targets
// ============================================================================

/// Logical targets on the canvas that can receive mouse events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// The close affordance in a panel's title bar
    CloseButton { panel_id: PanelId },
    /// Edge or corner band of a resizable panel
    ResizeHandle {
        panel_id: PanelId,
        handle: ResizeHandle,
    },
    /// Title bar (drag affordance)
    TitleBar { panel_id: PanelId },
    /// Widget content area
    Content { panel_id: PanelId },
    /// Empty canvas
    Canvas,
}

impl HitTarget {
    pub fn panel_id(&self) -> Option<PanelId> {
        match self {
            HitTarget::CloseButton { panel_id }
            | HitTarget::ResizeHandle { panel_id, .. }
            | HitTarget::TitleBar { panel_id }
            | HitTarget::Content { panel_id } => Some(*panel_id),
            HitTarget::Canvas => None,
        }
    }
}

// ============================================================================
// Event Results
// ============================================================================

/// Result of handling a mouse event
#[derive(Clone, Debug)]
pub enum EventResult {
    /// Event was handled; `cmd` is the outcome of `update()`
    Consumed { cmd: Option<Cmd> },
    /// Nothing on the canvas wanted the event
    Bubble,
}

impl EventResult {
    pub fn consumed(cmd: Option<Cmd>) -> Self {
        Self::Consumed { cmd }
    }

    pub fn needs_redraw(&self) -> bool {
        match self {
            Self::Consumed { cmd } => cmd.as_ref().is_some_and(Cmd::needs_redraw),
            Self::Bubble => false,
        }
    }

    pub fn cmd(&self) -> Option<&Cmd> {
        match self {
            Self::Consumed { cmd } => cmd.as_ref(),
            Self::Bubble => None,
        }
    }
}

// ============================================================================
// Hit-Testing Functions
// ============================================================================

/// Hit-test the canvas at a window point.
///
/// Panels are tested from the top of the stack down: highest z first, and
/// among equal z the later-inserted panel. Within a panel the close button
/// wins over the resize band, which wins over the title bar and content.
pub fn hit_test_canvas(model: &AppModel, pt: Point) -> HitTarget {
    let canvas = model.viewport.to_canvas(pt.x, pt.y);

    for panel in model.layout.panels_in_paint_order().into_iter().rev() {
        if !panel.rect.contains(canvas.x, canvas.y) {
            continue;
        }
        let panel_id = panel.id;
        let chrome = PanelChrome::for_panel(panel);

        if chrome.close_button.contains(canvas.x, canvas.y) {
            return HitTarget::CloseButton { panel_id };
        }
        if panel.is_resizable {
            if let Some(handle) = resize_handle_at(panel.rect, canvas.x, canvas.y) {
                return HitTarget::ResizeHandle { panel_id, handle };
            }
        }
        if chrome.title_bar.contains(canvas.x, canvas.y) {
            return HitTarget::TitleBar { panel_id };
        }
        return HitTarget::Content { panel_id };
    }

    HitTarget::Canvas
}

// ============================================================================
// Cursor Feedback
// ============================================================================

/// Platform-neutral cursor shape; the runtime maps it to the window system
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorShape {
    Default,
    Pointer,
    Grab,
    Grabbing,
    ResizeNorthSouth,
    ResizeEastWest,
    ResizeNorthEastSouthWest,
    ResizeNorthWestSouthEast,
}

impl CursorShape {
    pub fn for_handle(handle: ResizeHandle) -> Self {
        match handle {
            ResizeHandle::North | ResizeHandle::South => CursorShape::ResizeNorthSouth,
            ResizeHandle::East | ResizeHandle::West => CursorShape::ResizeEastWest,
            ResizeHandle::NorthEast | ResizeHandle::SouthWest => {
                CursorShape::ResizeNorthEastSouthWest
            }
            ResizeHandle::NorthWest | ResizeHandle::SouthEast => {
                CursorShape::ResizeNorthWestSouthEast
            }
        }
    }
}

/// Cursor to show while hovering `target` with no gesture in progress
pub fn cursor_for_hit(model: &AppModel, target: HitTarget) -> CursorShape {
    match target {
        HitTarget::CloseButton { .. } => CursorShape::Pointer,
        HitTarget::ResizeHandle { handle, .. } => CursorShape::for_handle(handle),
        HitTarget::TitleBar { panel_id } => match model.layout.panel(panel_id) {
            Some(panel) if panel.is_draggable => CursorShape::Grab,
            _ => CursorShape::Default,
        },
        HitTarget::Content { .. } | HitTarget::Canvas => CursorShape::Default,
    }
}

/// Cursor pinned for the duration of a gesture, `None` when idle
pub fn cursor_for_gesture(gesture: &GestureState) -> Option<CursorShape> {
    match gesture {
        GestureState::Idle => None,
        GestureState::Dragging(_) => Some(CursorShape::Grabbing),
        GestureState::Resizing(resize) => Some(CursorShape::for_handle(resize.handle)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_target_panel_id() {
        let id = PanelId(3);
        assert_eq!(HitTarget::TitleBar { panel_id: id }.panel_id(), Some(id));
        assert_eq!(HitTarget::Canvas.panel_id(), None);
    }

    #[test]
    fn test_cursor_for_handle() {
        assert_eq!(
            CursorShape::for_handle(ResizeHandle::West),
            CursorShape::ResizeEastWest
        );
        assert_eq!(
            CursorShape::for_handle(ResizeHandle::SouthEast),
            CursorShape::ResizeNorthWestSouthEast
        );
    }

    #[test]
    fn test_event_result_helpers() {
        assert!(EventResult::consumed(Some(Cmd::Redraw)).needs_redraw());
        assert!(!EventResult::consumed(None).needs_redraw());
        assert!(!EventResult::Bubble.needs_redraw());
        assert!(EventResult::Bubble.cmd().is_none());
    }
}
