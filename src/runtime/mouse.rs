//! Mouse event handling using the hit-test system
//!
//! This module provides centralized mouse event dispatch that:
//! - Uses `hit_test_canvas()` to determine the target under the cursor
//! - Dispatches behavior based on (target, button)
//! - Routes moves and releases to the interaction controller

use winit::event::MouseButton;

use paneldock::messages::{GestureMsg, LayoutMsg, Msg};
use paneldock::model::{AppModel, PointerButton};
use paneldock::update::update;
use paneldock::view::{
    cursor_for_gesture, cursor_for_hit, hit_test_canvas, CursorShape, EventResult, HitTarget,
    Point,
};
use paneldock::Cmd;

/// Map a winit button to the controller's button type
pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

/// Handle a mouse press
///
/// 1. Performs hit-testing to find the target
/// 2. Dispatches to the controller or layout store based on (target, button)
pub fn handle_mouse_press(model: &mut AppModel, pt: Point, button: MouseButton) -> EventResult {
    let target = hit_test_canvas(model, pt);
    let button = pointer_button(button);
    tracing::trace!(?target, ?button, x = pt.x, y = pt.y, "mouse press");

    let msg = match target {
        HitTarget::CloseButton { panel_id } if button == PointerButton::Primary => {
            Msg::Layout(LayoutMsg::RemovePanel(panel_id))
        }
        HitTarget::ResizeHandle { panel_id, handle } => Msg::Gesture(GestureMsg::BeginResize {
            id: panel_id,
            handle,
            x: pt.x,
            y: pt.y,
            button,
        }),
        HitTarget::TitleBar { panel_id } => Msg::Gesture(GestureMsg::BeginDrag {
            id: panel_id,
            x: pt.x,
            y: pt.y,
            button,
        }),
        HitTarget::Content { panel_id } if button == PointerButton::Primary => {
            Msg::Layout(LayoutMsg::BringToFront(panel_id))
        }
        HitTarget::CloseButton { .. } | HitTarget::Content { .. } | HitTarget::Canvas => {
            return EventResult::Bubble;
        }
    };

    EventResult::consumed(update(model, msg))
}

/// Handle cursor movement: feed the active gesture and pick a cursor
pub fn handle_mouse_move(model: &mut AppModel, pt: Point) -> (Option<Cmd>, CursorShape) {
    if let Some(cursor) = cursor_for_gesture(&model.gesture) {
        let cmd = update(
            model,
            Msg::Gesture(GestureMsg::PointerMove { x: pt.x, y: pt.y }),
        );
        return (cmd, cursor);
    }

    let target = hit_test_canvas(model, pt);
    (None, cursor_for_hit(model, target))
}

/// Handle a mouse release; only the primary button ends a gesture
pub fn handle_mouse_release(model: &mut AppModel, pt: Point, button: MouseButton) -> Option<Cmd> {
    if pointer_button(button) != PointerButton::Primary || model.gesture.is_idle() {
        return None;
    }
    update(model, Msg::Gesture(GestureMsg::PointerUp { x: pt.x, y: pt.y }))
}
