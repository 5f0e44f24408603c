//! App update handlers (window size, canvas scrolling)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{content_bounds, AppModel};

pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.resize(width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::Scroll { dx, dy } => {
            let before = (model.viewport.scroll_x, model.viewport.scroll_y);
            let bounds = content_bounds(&model.layout);
            model.viewport.scroll_by(dx, dy, bounds);
            let after = (model.viewport.scroll_x, model.viewport.scroll_y);
            (before != after).then_some(Cmd::Redraw)
        }

        AppMsg::DumpLayout => {
            match model.layout.snapshot().to_json() {
                Ok(json) => tracing::info!("Layout snapshot:\n{}", json),
                Err(e) => tracing::warn!("{}", e),
            }
            None
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}
