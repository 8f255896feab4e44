// platform/linux.rs - Linux Platform Implementation
//
// X11 has no single portable pointer API without a display connection of our
// own, so positions come from xdotool under the same deadline as the theme
// probe. GNOME's color-scheme setting decides light or dark.

use std::time::Duration;

use anyhow::{anyhow, bail};

use crate::appearance::{interpret_gsettings, CommandProbe};
use crate::error::RenderError;
use crate::gaze::GazeSample;
use crate::utils::{run_with_timeout, stdout_text};

/// Current cursor position via `xdotool getmouselocation --shell`
pub fn cursor_position(timeout: Duration) -> Result<GazeSample, RenderError> {
    let output = run_with_timeout("xdotool", &["getmouselocation", "--shell"], timeout)
        .map_err(|e| RenderError::CursorUnavailable(e.to_string()))?
        .ok_or_else(|| RenderError::CursorUnavailable("xdotool timed out".into()))?;
    if !output.status.success() {
        return Err(RenderError::CursorUnavailable(format!("xdotool exited with {}", output.status)));
    }

    parse_mouse_location(&stdout_text(&output))
        .ok_or_else(|| RenderError::CursorUnavailable("unexpected xdotool output".into()))
}

/// Primary screen size via `xdotool getdisplaygeometry`
pub fn primary_screen_size(timeout: Duration) -> anyhow::Result<(u32, u32)> {
    let Some(output) = run_with_timeout("xdotool", &["getdisplaygeometry"], timeout)? else {
        bail!("xdotool getdisplaygeometry timed out");
    };
    let text = stdout_text(&output);
    parse_display_geometry(&text).ok_or_else(|| anyhow!("unexpected display geometry {text:?}"))
}

pub fn appearance_probe(timeout: Duration) -> CommandProbe {
    CommandProbe::new(
        "gsettings",
        &["get", "org.gnome.desktop.interface", "color-scheme"],
        timeout,
        interpret_gsettings,
    )
}

/// Parse `X=..\nY=..\nSCREEN=..\nWINDOW=..`
fn parse_mouse_location(text: &str) -> Option<GazeSample> {
    let mut x = None;
    let mut y = None;
    for line in text.lines() {
        match line.split_once('=') {
            Some(("X", value)) => x = value.trim().parse::<f64>().ok(),
            Some(("Y", value)) => y = value.trim().parse::<f64>().ok(),
            _ => {}
        }
    }
    Some(GazeSample::new(x?, y?))
}

/// Parse `WIDTH HEIGHT`
fn parse_display_geometry(text: &str) -> Option<(u32, u32)> {
    let mut parts = text.split_whitespace();
    let width = parts.next()?.parse().ok()?;
    let height = parts.next()?.parse().ok()?;
    Some((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_xdotool_shell_output() {
        let sample = parse_mouse_location("X=1203\nY=44\nSCREEN=0\nWINDOW=94371855\n");
        assert_eq!(sample, Some(GazeSample::new(1203.0, 44.0)));
    }

    #[test]
    fn rejects_incomplete_location() {
        assert_eq!(parse_mouse_location("X=12\nSCREEN=0"), None);
        assert_eq!(parse_mouse_location(""), None);
    }

    #[test]
    fn parses_display_geometry() {
        assert_eq!(parse_display_geometry("2560 1440"), Some((2560, 1440)));
        assert_eq!(parse_display_geometry("oops"), None);
    }
}
