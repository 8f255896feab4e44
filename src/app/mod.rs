// app/mod.rs - Application State and Events
//
// This module contains the per-loop state that replaces process-wide globals,
// and the events the tray posts back into the event loop.

mod state;

pub use state::*;

/// Custom user events for the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {
    /// "Exit" was chosen from the tray menu
    Exit,
}
