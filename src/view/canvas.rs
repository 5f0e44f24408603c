//! Canvas rendering: background, grid dots and panels in stacking order

use crate::model::{AppModel, GestureState, Panel};
use crate::widgets::{WidgetCanvas, WidgetRegistry};

use super::chrome::{PanelChrome, TITLE_PADDING};
use super::frame::{Frame, TextPainter};

/// Offset of the shadow drawn under a dragged panel
const DRAG_SHADOW_OFFSET: f32 = 6.0;
/// Spacing and size of the grab dots in a draggable title bar
const GRAB_DOT_SPACING: f32 = 4.0;
const GRAB_AREA_WIDTH: f32 = 10.0;

/// Render the whole canvas into `frame`
///
/// Panels are painted bottom to top, so later (higher) panels overdraw
/// earlier ones where they overlap.
pub fn render_canvas(
    frame: &mut Frame,
    model: &AppModel,
    registry: &WidgetRegistry,
    mut text: Option<&mut TextPainter>,
) {
    let theme = &model.theme;
    frame.clear(theme.canvas.background.to_argb_u32());

    if model.layout.is_grid_visible() {
        frame.draw_dot_grid(
            model.layout.grid_size(),
            model.viewport.scroll_x,
            model.viewport.scroll_y,
            1,
            theme.canvas.grid_dot.to_argb_u32(),
        );
    }

    let active = model.gesture.panel_id();
    for panel in model.layout.panels_in_paint_order() {
        let is_active = active == Some(panel.id);
        let is_dragging = is_active && matches!(model.gesture, GestureState::Dragging(_));
        render_panel(
            frame,
            model,
            registry,
            text.as_deref_mut(),
            panel,
            is_active,
            is_dragging,
        );
    }
}

fn render_panel(
    frame: &mut Frame,
    model: &AppModel,
    registry: &WidgetRegistry,
    mut text: Option<&mut TextPainter>,
    panel: &Panel,
    is_active: bool,
    is_dragging: bool,
) {
    let colors = &model.theme.panel;
    let rect = panel
        .rect
        .offset(model.viewport.scroll_x, model.viewport.scroll_y);

    // Skip panels entirely outside the window
    if rect.right() <= 0.0
        || rect.bottom() <= 0.0
        || rect.x >= frame.width() as f32
        || rect.y >= frame.height() as f32
    {
        return;
    }

    let chrome = PanelChrome::new(rect, panel.is_resizable);

    if is_dragging {
        frame.fill_rect_blended(
            rect.offset(-DRAG_SHADOW_OFFSET, -DRAG_SHADOW_OFFSET),
            colors.drag_shadow.to_argb_u32(),
        );
    }

    frame.fill_rect(rect, colors.background.to_argb_u32());
    frame.fill_rect(chrome.title_bar, colors.title_bar_background.to_argb_u32());

    // Title bar: grab dots, title, subtitle
    let mut title_x = chrome.title_bar.x + TITLE_PADDING;
    if panel.is_draggable {
        draw_grab_dots(frame, title_x, &chrome, colors.resize_grip.to_argb_u32());
        title_x += GRAB_AREA_WIDTH + TITLE_PADDING / 2.0;
    }
    if let Some(painter) = text.as_deref_mut() {
        frame.set_clip(chrome.title_bar);
        let text_y =
            chrome.title_bar.y + (chrome.title_bar.height - painter.line_height() as f32) / 2.0;
        let available = chrome.close_button.x - TITLE_PADDING - title_x;
        let title_width = painter.measure_width(&panel.title).min(available);
        painter.draw_fitted(
            frame,
            title_x,
            text_y,
            &panel.title,
            available,
            colors.title_foreground.to_argb_u32(),
        );
        if let Some(subtitle) = &panel.subtitle {
            let subtitle_x = title_x + title_width + TITLE_PADDING;
            painter.draw_fitted(
                frame,
                subtitle_x,
                text_y,
                subtitle,
                chrome.close_button.x - TITLE_PADDING - subtitle_x,
                colors.subtitle_foreground.to_argb_u32(),
            );
        }
        frame.clear_clip();
    }

    // Close button glyph
    let close = chrome.close_button;
    let inset = close.width / 4.0;
    let close_color = colors.close_button.to_argb_u32();
    frame.draw_line(
        close.x + inset,
        close.y + inset,
        close.right() - inset,
        close.bottom() - inset,
        close_color,
    );
    frame.draw_line(
        close.right() - inset,
        close.y + inset,
        close.x + inset,
        close.bottom() - inset,
        close_color,
    );

    // Widget content, clipped to its rect
    if chrome.content.width > 0.0 && chrome.content.height > 0.0 {
        frame.set_clip(chrome.content);
        let mut ctx = WidgetCanvas {
            frame: &mut *frame,
            text: text.as_deref_mut(),
            rect: chrome.content,
            theme: &model.theme.widget,
            kind: &panel.kind,
        };
        registry.get(&panel.kind).render(&mut ctx, &panel.props);
        frame.clear_clip();
    }

    if let Some(grip) = chrome.resize_grip {
        let grip_color = colors.resize_grip.to_argb_u32();
        for step in [0.0, grip.width / 3.0, 2.0 * grip.width / 3.0] {
            frame.draw_line(
                grip.x + step,
                grip.bottom(),
                grip.right(),
                grip.y + step,
                grip_color,
            );
        }
    }

    let border = if is_active {
        colors.border_active
    } else {
        colors.border
    };
    frame.draw_border(rect, 1.0, border.to_argb_u32());
}

/// Two columns of dots marking the title bar as a drag handle
fn draw_grab_dots(frame: &mut Frame, x: f32, chrome: &PanelChrome, color: u32) {
    let center_y = chrome.title_bar.y + chrome.title_bar.height / 2.0;
    for row in -1..=1 {
        for col in 0..2 {
            let px = x + 2.0 + col as f32 * GRAB_DOT_SPACING;
            let py = center_y + row as f32 * GRAB_DOT_SPACING;
            if px >= 0.0 && py >= 0.0 {
                frame.set_pixel(px as usize, py as usize, color);
                frame.set_pixel(px as usize + 1, py as usize, color);
            }
        }
    }
}
