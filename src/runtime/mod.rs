//! Runtime module - winit/platform integration
//!
//! This module contains platform-specific code for running the workspace:
//! - `app` - ApplicationHandler and window management
//! - `input` - Keyboard event to message mapping
//! - `mouse` - Mouse event handling with hit-testing

pub mod app;
pub mod input;
pub mod mouse;

pub use app::App;
