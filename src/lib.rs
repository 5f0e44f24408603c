//! paneldock - Elm-style dockable panel workspace
//!
//! This crate provides the core types and logic for a canvas of freely
//! positioned, resizable, stacked panels, implementing the Elm Architecture
//! pattern. The `paneldock` binary hosts it in a native window.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;
pub mod widgets;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::WorkspaceConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
