// app/state.rs - Render Loop Context
//
// The mutable state one render loop carries from tick to tick. It is owned by
// the loop and passed into each tick, never shared.

use std::time::{Duration, Instant};

use crate::appearance::{Appearance, ProbeResult};

/// State carried between ticks
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Theme the next frame is drawn for
    pub appearance: Appearance,

    /// When the OS appearance was last probed; `None` until the first probe
    pub last_mode_check: Option<Instant>,

    /// Frames published to the tray
    pub frames_rendered: u64,

    /// Ticks that ended without publishing
    pub frames_skipped: u64,

    /// Loop creation time
    pub startup_time: Instant,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderContext {
    /// Fresh context: light appearance, no probe yet
    pub fn new() -> Self {
        Self {
            appearance: Appearance::default(),
            last_mode_check: None,
            frames_rendered: 0,
            frames_skipped: 0,
            startup_time: Instant::now(),
        }
    }

    /// Whether the appearance should be probed at `now`
    pub fn mode_check_due(&self, now: Instant, every: Duration) -> bool {
        match self.last_mode_check {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= every,
        }
    }

    /// Record a probe made at `now`. `Unknown` keeps the held appearance.
    /// Returns true when the appearance changed.
    pub fn apply_mode_check(&mut self, now: Instant, result: ProbeResult) -> bool {
        self.last_mode_check = Some(now);
        match result.appearance() {
            Some(appearance) if appearance != self.appearance => {
                self.appearance = appearance;
                true
            }
            _ => false,
        }
    }

    /// Count a published frame
    pub fn record_rendered(&mut self) {
        self.frames_rendered += 1;
    }

    /// Count a skipped frame
    pub fn record_skipped(&mut self) {
        self.frames_skipped += 1;
    }

    /// Time since the loop started
    pub fn elapsed(&self) -> Duration {
        self.startup_time.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVERY: Duration = Duration::from_millis(5000);

    #[test]
    fn first_check_is_always_due() {
        let ctx = RenderContext::new();
        assert!(ctx.mode_check_due(Instant::now(), EVERY));
        assert_eq!(ctx.appearance, Appearance::Light);
    }

    #[test]
    fn checks_are_spaced_by_interval() {
        let mut ctx = RenderContext::new();
        let t0 = Instant::now();
        ctx.apply_mode_check(t0, ProbeResult::Dark);
        assert!(!ctx.mode_check_due(t0 + Duration::from_millis(4999), EVERY));
        assert!(ctx.mode_check_due(t0 + EVERY, EVERY));
    }

    #[test]
    fn unknown_keeps_previous_appearance() {
        let mut ctx = RenderContext::new();
        let t0 = Instant::now();
        assert!(ctx.apply_mode_check(t0, ProbeResult::Dark));
        assert!(!ctx.apply_mode_check(t0 + EVERY, ProbeResult::Unknown));
        assert_eq!(ctx.appearance, Appearance::Dark);
        assert_eq!(ctx.last_mode_check, Some(t0 + EVERY));
    }

    #[test]
    fn same_appearance_is_not_a_change() {
        let mut ctx = RenderContext::new();
        assert!(!ctx.apply_mode_check(Instant::now(), ProbeResult::Light));
    }

    #[test]
    fn counters_track_outcomes() {
        let mut ctx = RenderContext::new();
        ctx.record_rendered();
        ctx.record_rendered();
        ctx.record_skipped();
        assert_eq!((ctx.frames_rendered, ctx.frames_skipped), (2, 1));
    }
}
