//! Tests for canvas hit-testing and cursor feedback

mod common;

use common::{
    begin_drag, begin_resize, layout_msg, panel_config, test_model, test_model_with_panels,
};
use paneldock::messages::LayoutMsg;
use paneldock::model::{AppModel, ResizeHandle};
use paneldock::view::{
    cursor_for_gesture, cursor_for_hit, hit_test_canvas, CursorShape, HitTarget, Point,
};

fn hit(model: &AppModel, x: f64, y: f64) -> HitTarget {
    hit_test_canvas(model, Point::new(x, y))
}

// ============================================================================
// Regions within a panel
// ============================================================================

#[test]
fn test_regions_of_single_panel() {
    // Panel spans 100..500 x 100..400; title bar is the top 32px
    let (model, ids) = test_model_with_panels(&[(100.0, 100.0, 400.0, 300.0)]);
    let panel_id = ids[0];

    assert_eq!(hit(&model, 480.0, 115.0), HitTarget::CloseButton { panel_id });
    assert_eq!(hit(&model, 250.0, 115.0), HitTarget::TitleBar { panel_id });
    assert_eq!(hit(&model, 250.0, 250.0), HitTarget::Content { panel_id });
    assert_eq!(hit(&model, 50.0, 50.0), HitTarget::Canvas);
    assert_eq!(hit(&model, 500.0, 250.0), HitTarget::Canvas);
}

#[test]
fn test_resize_bands() {
    let (model, ids) = test_model_with_panels(&[(100.0, 100.0, 400.0, 300.0)]);
    let panel_id = ids[0];

    let cases = [
        ((498.0, 250.0), ResizeHandle::East),
        ((102.0, 250.0), ResizeHandle::West),
        ((300.0, 397.0), ResizeHandle::South),
        ((300.0, 102.0), ResizeHandle::North),
        ((499.0, 399.0), ResizeHandle::SouthEast),
        ((100.0, 100.0), ResizeHandle::NorthWest),
    ];
    for ((x, y), handle) in cases {
        assert_eq!(
            hit(&model, x, y),
            HitTarget::ResizeHandle { panel_id, handle },
            "at ({}, {})",
            x,
            y
        );
    }
}

#[test]
fn test_locked_panel_has_no_resize_band() {
    let mut model = test_model();
    let panel_id = model
        .layout
        .add_panel(panel_config(100.0, 100.0, 400.0, 300.0).locked());

    assert_eq!(hit(&model, 102.0, 250.0), HitTarget::Content { panel_id });
    assert_eq!(hit(&model, 300.0, 102.0), HitTarget::TitleBar { panel_id });
    // Close still works on a locked panel
    assert_eq!(hit(&model, 480.0, 115.0), HitTarget::CloseButton { panel_id });
}

// ============================================================================
// Stacking
// ============================================================================

#[test]
fn test_topmost_panel_wins_overlap() {
    let (mut model, ids) =
        test_model_with_panels(&[(0.0, 0.0, 300.0, 300.0), (100.0, 100.0, 300.0, 300.0)]);

    assert_eq!(hit(&model, 200.0, 200.0), HitTarget::Content { panel_id: ids[1] });

    layout_msg(&mut model, LayoutMsg::BringToFront(ids[0]));
    assert_eq!(hit(&model, 200.0, 200.0), HitTarget::Content { panel_id: ids[0] });
}

#[test]
fn test_removed_panel_is_not_hit() {
    let (mut model, ids) = test_model_with_panels(&[(100.0, 100.0, 400.0, 300.0)]);
    layout_msg(&mut model, LayoutMsg::RemovePanel(ids[0]));
    assert_eq!(hit(&model, 250.0, 250.0), HitTarget::Canvas);
}

#[test]
fn test_hit_respects_scroll_offset() {
    let (mut model, ids) = test_model_with_panels(&[(600.0, 100.0, 400.0, 300.0)]);
    model.viewport.scroll_x = 500.0;

    // Window x=200 is canvas x=700
    assert_eq!(hit(&model, 200.0, 250.0), HitTarget::Content { panel_id: ids[0] });
    assert_eq!(hit(&model, 50.0, 250.0), HitTarget::Canvas);
}

// ============================================================================
// Cursor feedback
// ============================================================================

#[test]
fn test_hover_cursors() {
    let mut model = test_model();
    let movable = model.layout.add_panel(panel_config(0.0, 0.0, 300.0, 300.0));
    let locked = model
        .layout
        .add_panel(panel_config(400.0, 0.0, 300.0, 300.0).locked());

    let title = |panel_id| HitTarget::TitleBar { panel_id };
    assert_eq!(cursor_for_hit(&model, title(movable)), CursorShape::Grab);
    assert_eq!(cursor_for_hit(&model, title(locked)), CursorShape::Default);
    assert_eq!(
        cursor_for_hit(&model, HitTarget::CloseButton { panel_id: movable }),
        CursorShape::Pointer
    );
    assert_eq!(
        cursor_for_hit(
            &model,
            HitTarget::ResizeHandle {
                panel_id: movable,
                handle: ResizeHandle::North
            }
        ),
        CursorShape::ResizeNorthSouth
    );
    assert_eq!(cursor_for_hit(&model, HitTarget::Canvas), CursorShape::Default);
}

#[test]
fn test_gesture_cursor_is_pinned() {
    let (mut model, ids) = test_model_with_panels(&[(0.0, 0.0, 300.0, 300.0)]);
    assert_eq!(cursor_for_gesture(&model.gesture), None);

    begin_drag(&mut model, ids[0], 10.0, 10.0);
    assert_eq!(cursor_for_gesture(&model.gesture), Some(CursorShape::Grabbing));

    model.gesture = Default::default();
    begin_resize(&mut model, ids[0], ResizeHandle::NorthEast, 299.0, 1.0);
    assert_eq!(
        cursor_for_gesture(&model.gesture),
        Some(CursorShape::ResizeNorthEastSouthWest)
    );
}
