// platform/mod.rs - Platform Abstraction Layer
//
// This module provides platform-specific implementations behind common traits.
// The goal is to isolate Windows/macOS/Linux specific code here.

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "linux")]
pub mod linux;

use std::time::Duration;

use crate::appearance::CommandProbe;
use crate::error::RenderError;
use crate::gaze::GazeSample;

/// Source of the live cursor position
pub trait CursorSource {
    /// Current pointer position in screen coordinates, origin top-left
    fn position(&mut self) -> Result<GazeSample, RenderError>;
}

/// The OS cursor
#[derive(Debug, Clone, Copy)]
pub struct SystemCursor {
    /// Deadline for platforms that have to ask an external tool
    timeout: Duration,
}

impl SystemCursor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl CursorSource for SystemCursor {
    fn position(&mut self) -> Result<GazeSample, RenderError> {
        #[cfg(target_os = "windows")]
        {
            windows::cursor_position(self.timeout)
        }
        #[cfg(target_os = "macos")]
        {
            macos::cursor_position(self.timeout)
        }
        #[cfg(target_os = "linux")]
        {
            linux::cursor_position(self.timeout)
        }
    }
}

/// Size of the primary screen in pixels
pub fn primary_screen_size(timeout: Duration) -> anyhow::Result<(u32, u32)> {
    #[cfg(target_os = "windows")]
    {
        windows::primary_screen_size(timeout)
    }
    #[cfg(target_os = "macos")]
    {
        macos::primary_screen_size(timeout)
    }
    #[cfg(target_os = "linux")]
    {
        linux::primary_screen_size(timeout)
    }
}

/// Appearance probe for the current platform
pub fn appearance_probe(timeout: Duration) -> CommandProbe {
    #[cfg(target_os = "windows")]
    {
        windows::appearance_probe(timeout)
    }
    #[cfg(target_os = "macos")]
    {
        macos::appearance_probe(timeout)
    }
    #[cfg(target_os = "linux")]
    {
        linux::appearance_probe(timeout)
    }
}
