//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! Update functions return `Option<Cmd>`; `None` means nothing to do.

/// Commands returned by update functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Request a full redraw of the canvas
    Redraw,
    /// Exit the event loop
    Quit,
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Cmd::Redraw)
    }

    /// Check if this command asks the runtime to exit
    pub fn is_quit(&self) -> bool {
        matches!(self, Cmd::Quit)
    }
}
