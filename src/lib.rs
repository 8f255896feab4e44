//! Googly Eyes - tray icon eyes that follow the mouse cursor
//!
//! The library holds the geometry, gaze math, drawing, and the per-tick render
//! loop. The binary wires it to the OS event loop and tray.

pub mod app;
pub mod appearance;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod error;
pub mod gaze;
pub mod layout;
pub mod platform;
pub mod render;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::{RenderContext, UserEvent};
pub use appearance::{Appearance, AppearanceProbe, ProbeResult};
pub use canvas::Canvas;
pub use config::Config;
pub use error::RenderError;
pub use layout::Layout;
pub use render::{EyeRenderer, IconSurface, RenderLoop, TickOutcome};
