//! Panel chrome geometry
//!
//! Single source of truth for where the title bar, close button, resize
//! grip and content area of a panel sit. Both rendering and hit-testing use
//! these rects, so a pixel that looks like the close button is the close
//! button. All rects are in canvas coordinates.

use crate::model::{Panel, PanelRect, ResizeHandle};

/// Height of the title bar strip at the top of every panel
pub const TITLE_BAR_HEIGHT: f32 = 32.0;

/// Side length of the square close button
pub const CLOSE_BUTTON_SIZE: f32 = 18.0;

/// Width of the band inside each panel edge that starts a resize
pub const RESIZE_BORDER: f32 = 6.0;

/// Side length of the drawn grip in the bottom-right corner
pub const RESIZE_GRIP_SIZE: f32 = 12.0;

/// Panel border thickness
pub const BORDER_WIDTH: f32 = 1.0;

/// Inner padding between the title bar edge and its text/button
pub const TITLE_PADDING: f32 = 8.0;

/// Resolved chrome rects for one panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelChrome {
    pub frame: PanelRect,
    pub title_bar: PanelRect,
    pub close_button: PanelRect,
    pub content: PanelRect,
    /// Grip drawn in the bottom-right corner, only for resizable panels
    pub resize_grip: Option<PanelRect>,
}

impl PanelChrome {
    pub fn for_panel(panel: &Panel) -> Self {
        Self::new(panel.rect, panel.is_resizable)
    }

    pub fn new(frame: PanelRect, resizable: bool) -> Self {
        let title_height = TITLE_BAR_HEIGHT.min(frame.height);
        let title_bar = PanelRect::new(frame.x, frame.y, frame.width, title_height);

        let close_button = PanelRect::new(
            frame.right() - TITLE_PADDING - CLOSE_BUTTON_SIZE,
            frame.y + (title_height - CLOSE_BUTTON_SIZE) / 2.0,
            CLOSE_BUTTON_SIZE,
            CLOSE_BUTTON_SIZE,
        );

        let content = PanelRect::new(
            frame.x + BORDER_WIDTH,
            frame.y + title_height,
            (frame.width - 2.0 * BORDER_WIDTH).max(0.0),
            (frame.height - title_height - BORDER_WIDTH).max(0.0),
        );

        let resize_grip = resizable.then(|| {
            PanelRect::new(
                frame.right() - RESIZE_GRIP_SIZE - BORDER_WIDTH,
                frame.bottom() - RESIZE_GRIP_SIZE - BORDER_WIDTH,
                RESIZE_GRIP_SIZE,
                RESIZE_GRIP_SIZE,
            )
        });

        Self {
            frame,
            title_bar,
            close_button,
            content,
            resize_grip,
        }
    }
}

/// Which resize handle (if any) is under a canvas point
///
/// The handle band is `RESIZE_BORDER` pixels inside each edge. A point near
/// two edges resolves to the corner handle.
pub fn resize_handle_at(rect: PanelRect, x: f32, y: f32) -> Option<ResizeHandle> {
    if !rect.contains(x, y) {
        return None;
    }
    let border_x = RESIZE_BORDER.min(rect.width / 2.0);
    let border_y = RESIZE_BORDER.min(rect.height / 2.0);

    let west = x < rect.x + border_x;
    let east = x >= rect.right() - border_x;
    let north = y < rect.y + border_y;
    let south = y >= rect.bottom() - border_y;

    ResizeHandle::from_edges(north, south, east, west)
}
