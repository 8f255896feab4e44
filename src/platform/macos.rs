// platform/macos.rs - macOS Platform Implementation
//
// AppKit reports positions with the origin at the bottom-left of the primary
// screen; everything here is flipped to a top-left origin.

use std::time::Duration;

use anyhow::Context;
use objc2::MainThreadMarker;
use objc2_app_kit::{NSEvent, NSScreen};

use crate::appearance::{interpret_macos_defaults, CommandProbe};
use crate::error::RenderError;
use crate::gaze::GazeSample;

/// Frame size of the primary (menu bar) screen, in points
fn primary_frame(mtm: MainThreadMarker) -> Option<(f64, f64)> {
    let screens = NSScreen::screens(mtm);
    let primary = screens.firstObject()?;
    let frame = primary.frame();
    Some((frame.size.width, frame.size.height))
}

/// Current cursor position, top-left origin; AppKit answers synchronously,
/// so the deadline is not needed
pub fn cursor_position(_timeout: Duration) -> Result<GazeSample, RenderError> {
    let mtm = MainThreadMarker::new()
        .ok_or_else(|| RenderError::CursorUnavailable("not on the main thread".into()))?;
    let (_, height) = primary_frame(mtm)
        .ok_or_else(|| RenderError::CursorUnavailable("no screens attached".into()))?;

    #[allow(unused_unsafe)]
    let location = unsafe { NSEvent::mouseLocation() };
    Ok(GazeSample::new(location.x, height - location.y))
}

pub fn primary_screen_size(_timeout: Duration) -> anyhow::Result<(u32, u32)> {
    let mtm = MainThreadMarker::new().context("screen size must be read on the main thread")?;
    let (width, height) = primary_frame(mtm).context("no screens attached")?;
    Ok((width as u32, height as u32))
}

pub fn appearance_probe(timeout: Duration) -> CommandProbe {
    CommandProbe::new(
        "defaults",
        &["read", "-g", "AppleInterfaceStyle"],
        timeout,
        interpret_macos_defaults,
    )
}
