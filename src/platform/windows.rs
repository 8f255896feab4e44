// platform/windows.rs - Windows-specific Platform Implementation
//
// Cursor and monitor queries through Win32; the theme comes from the registry
// value the taskbar itself follows.

use std::time::Duration;

use anyhow::bail;
use windows::Win32::{
    Foundation::POINT,
    Graphics::Gdi::{GetMonitorInfoW, MonitorFromPoint, MONITORINFO, MONITOR_DEFAULTTOPRIMARY},
    UI::WindowsAndMessaging::GetCursorPos,
};

use crate::appearance::{interpret_windows_registry, CommandProbe};
use crate::error::RenderError;
use crate::gaze::GazeSample;

const PERSONALIZE_KEY: &str = r"HKCU\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize";

/// Current cursor position in virtual-screen pixels; Win32 answers
/// synchronously, so the deadline is not needed
pub fn cursor_position(_timeout: Duration) -> Result<GazeSample, RenderError> {
    let mut point = POINT::default();
    unsafe { GetCursorPos(&mut point) }
        .map_err(|e| RenderError::CursorUnavailable(e.to_string()))?;
    Ok(GazeSample::new(point.x as f64, point.y as f64))
}

/// Full bounds of the primary monitor (taskbar included)
pub fn primary_screen_size(_timeout: Duration) -> anyhow::Result<(u32, u32)> {
    unsafe {
        let monitor = MonitorFromPoint(POINT { x: 0, y: 0 }, MONITOR_DEFAULTTOPRIMARY);
        let mut info = MONITORINFO {
            cbSize: std::mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };

        if !GetMonitorInfoW(monitor, &mut info).as_bool() {
            bail!("GetMonitorInfoW failed for the primary monitor");
        }
        let rc = info.rcMonitor;
        Ok(((rc.right - rc.left) as u32, (rc.bottom - rc.top) as u32))
    }
}

pub fn appearance_probe(timeout: Duration) -> CommandProbe {
    CommandProbe::new(
        "reg",
        &["query", PERSONALIZE_KEY, "/v", "SystemUsesLightTheme"],
        timeout,
        interpret_windows_registry,
    )
}
