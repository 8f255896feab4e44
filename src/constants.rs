// constants.rs - Application-wide Constants
//
// Centralized constants for geometry, timing, and colors.
// The geometry values reproduce the classic 64px googly eyes icon.

/// Base icon geometry, before scaling
pub mod geometry {
    /// Icon edge length at scale 1.0
    pub const BASE_IMAGE_SIZE: u32 = 64;
    /// Pupil diameter at scale 1.0
    pub const BASE_PUPIL_SIZE: u32 = 16;
    /// Default scale for tray icons
    pub const DEFAULT_SCALE: f64 = 0.5;
    /// Horizontal pupil travel at scale 1.0
    pub const BASE_X_RADIUS: f64 = 7.0;
    /// Vertical pupil travel at scale 1.0
    pub const BASE_Y_RADIUS: f64 = 13.0;
    /// Outline stroke width at scale 1.0
    pub const BASE_STROKE: f64 = 3.0;
    /// Eye width as a fraction of half the icon
    pub const EYE_WIDTH_RATIO: f64 = 0.9;
    /// Eye height as a fraction of the icon
    pub const EYE_HEIGHT_RATIO: f64 = 0.75;
}

/// Refresh and probe timing
pub mod timing {
    /// Refresh interval when none (or an invalid one) is given
    pub const DEFAULT_INTERVAL_MS: u64 = 100;
    /// Smallest refresh interval accepted from the command line
    pub const MIN_INTERVAL_MS: u64 = 50;
    /// How often the OS appearance is re-checked
    pub const CHECK_MODE_INTERVAL_MS: u64 = 5000;
    /// Upper bound for any external command we shell out to
    pub const PROBE_TIMEOUT_MS: u64 = 100;
    /// Poll step while waiting on an external command
    pub const PROBE_POLL_MS: u64 = 5;
}

/// Where the eyes "look from", relative to the primary screen's top-right corner
pub mod anchor {
    /// Left eye reference, pixels left of the right screen edge
    pub const LEFT_FROM_RIGHT: i32 = 65;
    /// Right eye reference, pixels left of the right screen edge
    pub const RIGHT_FROM_RIGHT: i32 = 50;
    /// Both references, pixels below the top screen edge
    pub const EYE_Y: i32 = 15;
    /// Screen size assumed when the platform query fails
    pub const FALLBACK_SCREEN_WIDTH: u32 = 1920;
    pub const FALLBACK_SCREEN_HEIGHT: u32 = 1080;
}

/// Stroke and pupil colors (RGBA)
pub mod colors {
    /// Used on light menu bars
    pub const LIGHT_STROKE: [u8; 4] = [0, 0, 0, 255];
    /// Used on dark menu bars
    pub const DARK_STROKE: [u8; 4] = [255, 255, 255, 255];
    /// Fully transparent
    pub const CLEAR: [u8; 4] = [0, 0, 0, 0];
}
