//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use paneldock::commands::Cmd;
use paneldock::messages::{GestureMsg, LayoutMsg, Msg};
use paneldock::model::{
    AppModel, LayoutSettings, LayoutState, PanelConfig, PanelId, PanelRect, PointerButton,
    ResizeHandle, WidgetKind,
};
use paneldock::update::update;

pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 800;

/// A data-table panel config at the given rect
pub fn panel_config(x: f32, y: f32, width: f32, height: f32) -> PanelConfig {
    PanelConfig::new(WidgetKind::DataTable, PanelRect::new(x, y, width, height))
}

/// Empty model with default settings (grid 20, snap on, min 120x80)
pub fn test_model() -> AppModel {
    AppModel::with_layout(LayoutState::default(), WINDOW_WIDTH, WINDOW_HEIGHT)
}

/// Model with custom layout settings and no panels
pub fn test_model_with_settings(settings: LayoutSettings) -> AppModel {
    AppModel::with_layout(LayoutState::new(settings), WINDOW_WIDTH, WINDOW_HEIGHT)
}

/// Model with one panel per rect, returning ids in insertion order
pub fn test_model_with_panels(rects: &[(f32, f32, f32, f32)]) -> (AppModel, Vec<PanelId>) {
    let mut model = test_model();
    let ids = rects
        .iter()
        .map(|&(x, y, w, h)| model.layout.add_panel(panel_config(x, y, w, h)))
        .collect();
    (model, ids)
}

pub fn rect_of(model: &AppModel, id: PanelId) -> PanelRect {
    model
        .layout
        .panel(id)
        .map(|p| p.rect)
        .expect("panel should exist")
}

pub fn z_of(model: &AppModel, id: PanelId) -> u32 {
    model
        .layout
        .panel(id)
        .map(|p| p.z_index)
        .expect("panel should exist")
}

pub fn begin_drag(model: &mut AppModel, id: PanelId, x: f64, y: f64) -> Option<Cmd> {
    update(
        model,
        Msg::Gesture(GestureMsg::BeginDrag {
            id,
            x,
            y,
            button: PointerButton::Primary,
        }),
    )
}

pub fn begin_resize(
    model: &mut AppModel,
    id: PanelId,
    handle: ResizeHandle,
    x: f64,
    y: f64,
) -> Option<Cmd> {
    update(
        model,
        Msg::Gesture(GestureMsg::BeginResize {
            id,
            handle,
            x,
            y,
            button: PointerButton::Primary,
        }),
    )
}

pub fn pointer_move(model: &mut AppModel, x: f64, y: f64) -> Option<Cmd> {
    update(model, Msg::Gesture(GestureMsg::PointerMove { x, y }))
}

pub fn pointer_up(model: &mut AppModel, x: f64, y: f64) -> Option<Cmd> {
    update(model, Msg::Gesture(GestureMsg::PointerUp { x, y }))
}

pub fn layout_msg(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    update(model, Msg::Layout(msg))
}
