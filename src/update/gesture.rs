//! Interaction controller - drag and resize gestures
//!
//! Turns pointer messages into layout store mutations. Intermediate pointer
//! moves write raw (unsnapped) geometry so the panel tracks the pointer; the
//! pointer-up commits the final geometry through the grid snap.
//!
//! Cancelling only stops the gesture. Geometry already written by earlier
//! moves stays where it is.

use crate::commands::Cmd;
use crate::messages::GestureMsg;
use crate::model::{
    snap_rect, AppModel, CanvasPoint, DragGesture, GestureState, PanelId, PanelPatch,
    PointerButton, ResizeGesture, ResizeHandle,
};

/// Handle gesture messages
pub fn update_gesture(model: &mut AppModel, msg: GestureMsg) -> Option<Cmd> {
    match msg {
        GestureMsg::BeginDrag { id, x, y, button } => {
            let pointer = model.viewport.to_canvas(x, y);
            begin_drag(model, id, pointer, button)
        }

        GestureMsg::BeginResize {
            id,
            handle,
            x,
            y,
            button,
        } => {
            let pointer = model.viewport.to_canvas(x, y);
            begin_resize(model, id, handle, pointer, button)
        }

        GestureMsg::PointerMove { x, y } => {
            let pointer = model.viewport.to_canvas(x, y);
            pointer_move(model, pointer)
        }

        GestureMsg::PointerUp { x, y } => {
            if !model.viewport.contains_window_point(x, y) {
                return cancel(model);
            }
            let pointer = model.viewport.to_canvas(x, y);
            pointer_up(model, pointer)
        }

        GestureMsg::Cancel => cancel(model),
    }
}

/// Whether a new gesture may start
fn can_begin(model: &AppModel, button: PointerButton) -> bool {
    if button != PointerButton::Primary {
        return false;
    }
    if !model.gesture.is_idle() {
        tracing::debug!(active = ?model.gesture.panel_id(), "gesture already active, ignoring");
        return false;
    }
    true
}

fn begin_drag(
    model: &mut AppModel,
    id: PanelId,
    pointer: CanvasPoint,
    button: PointerButton,
) -> Option<Cmd> {
    if !can_begin(model, button) {
        return None;
    }
    let origin = match model.layout.panel(id) {
        Some(panel) if panel.is_draggable => panel.rect,
        Some(_) => return raise_only(model, id),
        None => return None,
    };

    model.layout.bring_to_front(id);
    model.gesture = GestureState::Dragging(DragGesture {
        panel_id: id,
        pointer_start: pointer,
        origin,
    });
    tracing::debug!(panel = %id, "drag started");
    Some(Cmd::Redraw)
}

fn begin_resize(
    model: &mut AppModel,
    id: PanelId,
    handle: ResizeHandle,
    pointer: CanvasPoint,
    button: PointerButton,
) -> Option<Cmd> {
    if !can_begin(model, button) {
        return None;
    }
    let origin = match model.layout.panel(id) {
        Some(panel) if panel.is_resizable => panel.rect,
        Some(_) => return raise_only(model, id),
        None => return None,
    };

    model.layout.bring_to_front(id);
    model.gesture = GestureState::Resizing(ResizeGesture {
        panel_id: id,
        handle,
        pointer_start: pointer,
        origin,
    });
    tracing::debug!(panel = %id, ?handle, "resize started");
    Some(Cmd::Redraw)
}

/// A press on a locked panel still brings it to front, without starting a gesture
fn raise_only(model: &mut AppModel, id: PanelId) -> Option<Cmd> {
    model.layout.bring_to_front(id).then_some(Cmd::Redraw)
}

fn pointer_move(model: &mut AppModel, pointer: CanvasPoint) -> Option<Cmd> {
    let (id, patch) = match model.gesture {
        GestureState::Idle => return None,
        GestureState::Dragging(drag) => {
            let rect = drag.rect_at(pointer);
            (drag.panel_id, PanelPatch::position(rect.x, rect.y))
        }
        GestureState::Resizing(resize) => {
            let rect = resize.rect_at(pointer, model.layout.min_size());
            (resize.panel_id, PanelPatch::rect(rect))
        }
    };

    // The panel may have been closed mid-gesture; the store ignores it then
    model.layout.update_panel(id, patch);
    Some(Cmd::Redraw)
}

fn pointer_up(model: &mut AppModel, pointer: CanvasPoint) -> Option<Cmd> {
    let gesture = std::mem::take(&mut model.gesture);
    let grid = model.layout.grid_size();
    let snap = model.layout.snap_to_grid();

    let (id, patch) = match gesture {
        GestureState::Idle => return None,
        GestureState::Dragging(drag) => {
            let rect = snap_rect(drag.rect_at(pointer), grid, snap);
            (drag.panel_id, PanelPatch::position(rect.x, rect.y))
        }
        GestureState::Resizing(resize) => {
            // Edges snap independently and the store re-floors the size, so a
            // west/north commit can move the fixed edge by up to one grid step
            let rect = snap_rect(resize.rect_at(pointer, model.layout.min_size()), grid, snap);
            (resize.panel_id, PanelPatch::rect(rect))
        }
    };

    tracing::debug!(panel = %id, "gesture committed");
    model.layout.update_panel(id, patch);
    Some(Cmd::Redraw)
}

fn cancel(model: &mut AppModel) -> Option<Cmd> {
    let gesture = std::mem::take(&mut model.gesture);
    let id = gesture.panel_id()?;
    tracing::debug!(panel = %id, "gesture cancelled");
    Some(Cmd::Redraw)
}
