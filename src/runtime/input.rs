//! Keyboard input handling
//!
//! The workspace has a small fixed set of shortcuts:
//! - Escape cancels the active drag/resize
//! - G toggles grid dots, S toggles snapping
//! - 1-5 add a widget from the palette
//! - D logs the layout as JSON
//! - Cmd/Ctrl+Q quits

use winit::keyboard::{Key, NamedKey};

use paneldock::commands::Cmd;
use paneldock::messages::{AppMsg, GestureMsg, LayoutMsg, Msg};
use paneldock::model::AppModel;
use paneldock::update::update;

/// Handle a key press; returns `None` for keys without a binding
pub fn handle_key(model: &mut AppModel, key: &Key, ctrl: bool, logo: bool) -> Option<Cmd> {
    let msg = match key {
        Key::Named(NamedKey::Escape) => Msg::Gesture(GestureMsg::Cancel),
        Key::Character(ch) => match ch.to_lowercase().as_str() {
            "q" if ctrl || logo => Msg::App(AppMsg::Quit),
            _ if ctrl || logo => return None,
            "g" => Msg::Layout(LayoutMsg::ToggleGridVisible),
            "s" => Msg::Layout(LayoutMsg::ToggleSnapToGrid),
            "d" => Msg::App(AppMsg::DumpLayout),
            digit => {
                let index = digit.parse::<usize>().ok()?.checked_sub(1)?;
                let kind = model.palette.entries().get(index)?.kind.clone();
                Msg::Layout(LayoutMsg::AddFromPalette(kind))
            }
        },
        _ => return None,
    };

    update(model, msg)
}
