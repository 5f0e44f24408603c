//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{PanelConfig, PanelId, PanelPatch, PointerButton, ResizeHandle, WidgetKind};

/// Layout store messages (panel registry and grid settings)
#[derive(Debug, Clone)]
pub enum LayoutMsg {
    /// Add a panel from a full configuration
    AddPanel(PanelConfig),
    /// Add a panel of the given kind from the widget palette
    AddFromPalette(WidgetKind),
    /// Merge fields into an existing panel (no-op for unknown ids)
    UpdatePanel { id: PanelId, patch: PanelPatch },
    /// Close a panel (no-op for unknown ids)
    RemovePanel(PanelId),
    /// Raise a panel above all others
    BringToFront(PanelId),
    /// Change the snap granularity (0 is ignored)
    SetGridSize(u32),
    SetSnapToGrid(bool),
    ToggleSnapToGrid,
    SetGridVisible(bool),
    ToggleGridVisible,
}

/// Pointer gesture messages
///
/// Coordinates are window pixels; the controller converts them to canvas
/// coordinates using the current scroll offset.
#[derive(Debug, Clone)]
pub enum GestureMsg {
    /// Pointer pressed on a panel's drag region (title bar)
    BeginDrag {
        id: PanelId,
        x: f64,
        y: f64,
        button: PointerButton,
    },
    /// Pointer pressed on a panel's resize handle
    BeginResize {
        id: PanelId,
        handle: ResizeHandle,
        x: f64,
        y: f64,
        button: PointerButton,
    },
    /// Pointer moved while a gesture may be active
    PointerMove { x: f64, y: f64 },
    /// Pointer released
    PointerUp { x: f64, y: f64 },
    /// Escape, pointer capture loss or the cursor leaving the window
    Cancel,
}

/// Application-level messages (window events)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
    /// Scroll the canvas by a delta in pixels
    Scroll { dx: f32, dy: f32 },
    /// Log the current layout as JSON (debug aid)
    DumpLayout,
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Layout(LayoutMsg),
    Gesture(GestureMsg),
    App(AppMsg),
}
