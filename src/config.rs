// config.rs - Runtime Configuration
//
// The only user-facing knob is the refresh interval, given as an optional
// positional argument in milliseconds. Everything else has fixed defaults.

use std::time::Duration;

use log::warn;

use crate::constants::anchor::{EYE_Y, LEFT_FROM_RIGHT, RIGHT_FROM_RIGHT};
use crate::constants::geometry::DEFAULT_SCALE;
use crate::constants::timing::{
    CHECK_MODE_INTERVAL_MS, DEFAULT_INTERVAL_MS, MIN_INTERVAL_MS, PROBE_TIMEOUT_MS,
};
use crate::gaze::EyeReference;

/// Result of interpreting the interval argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalChoice {
    pub interval: Duration,
    /// Set when the argument was rejected and the default was used instead
    pub warning: Option<String>,
}

/// Interpret the optional refresh interval argument.
///
/// Anything that is not an integer of at least `MIN_INTERVAL_MS` falls back to
/// `DEFAULT_INTERVAL_MS` and carries a warning naming the rejected value.
pub fn parse_interval(arg: Option<&str>) -> IntervalChoice {
    let default = Duration::from_millis(DEFAULT_INTERVAL_MS);
    let Some(raw) = arg else {
        return IntervalChoice { interval: default, warning: None };
    };

    match raw.trim().parse::<u64>() {
        Ok(ms) if ms >= MIN_INTERVAL_MS => IntervalChoice {
            interval: Duration::from_millis(ms),
            warning: None,
        },
        _ => IntervalChoice {
            interval: default,
            warning: Some(format!(
                "Invalid refresh interval \"{raw}\" (expected an integer >= {MIN_INTERVAL_MS} ms), using {DEFAULT_INTERVAL_MS} ms"
            )),
        },
    }
}

/// Offsets of the eye reference points from the primary screen's top-right
/// corner. They assume the tray sits top-right; other layouts can override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EyeAnchor {
    /// Left eye, pixels left of the right screen edge
    pub left_from_right: i32,
    /// Right eye, pixels left of the right screen edge
    pub right_from_right: i32,
    /// Both eyes, pixels below the top screen edge
    pub y: i32,
}

impl Default for EyeAnchor {
    fn default() -> Self {
        Self {
            left_from_right: LEFT_FROM_RIGHT,
            right_from_right: RIGHT_FROM_RIGHT,
            y: EYE_Y,
        }
    }
}

impl EyeAnchor {
    /// Reference points for a screen `screen_width` pixels wide, left eye first
    pub fn references(&self, screen_width: u32) -> [EyeReference; 2] {
        let width = screen_width as f64;
        let y = self.y as f64;
        [
            EyeReference::new(width - self.left_from_right as f64, y),
            EyeReference::new(width - self.right_from_right as f64, y),
        ]
    }
}

/// Everything the app needs to start
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Delay between the end of one tick and the start of the next
    pub interval: Duration,
    /// How often the OS appearance is re-read
    pub check_mode_interval: Duration,
    /// Deadline for any external command
    pub probe_timeout: Duration,
    pub anchor: EyeAnchor,
    pub scale: f64,
    /// Why the interval argument was rejected, if it was
    pub interval_warning: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            check_mode_interval: Duration::from_millis(CHECK_MODE_INTERVAL_MS),
            probe_timeout: Duration::from_millis(PROBE_TIMEOUT_MS),
            anchor: EyeAnchor::default(),
            scale: DEFAULT_SCALE,
            interval_warning: None,
        }
    }
}

impl Config {
    /// Build from process arguments (program name first). Extra arguments are
    /// ignored. A bad interval is replaced with the default and the warning is
    /// printed to stderr whether or not logging is enabled.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let interval_arg = args.into_iter().nth(1);
        let choice = parse_interval(interval_arg.as_deref());
        if let Some(warning) = &choice.warning {
            eprintln!("googly-eyes: {warning}");
            warn!("{}", warning);
        }

        Self {
            interval: choice.interval,
            interval_warning: choice.warning,
            ..Default::default()
        }
    }
}
