// error.rs - Per-tick Render Errors
//
// A failed tick never stops the loop: the frame is skipped, the tray keeps the
// last published icon, and the next tick starts over.

use thiserror::Error;

/// Reasons a single frame could not be produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The OS did not report a cursor position
    #[error("cursor position unavailable: {0}")]
    CursorUnavailable(String),

    /// The finished frame could not be handed to the tray
    #[error("failed to publish tray icon: {0}")]
    Publish(String),
}
