// gaze.rs - Cursor Tracking Math
//
// Turns a cursor position into a pupil offset for each eye. Each eye looks
// from a fixed screen point near the tray icon; the pupil runs along an
// ellipse with the layout's travel radii.

use crate::layout::Layout;

/// Cursor position in screen coordinates (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazeSample {
    pub x: f64,
    pub y: f64,
}

impl GazeSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Screen point an eye looks from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeReference {
    pub x: f64,
    pub y: f64,
}

impl EyeReference {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pupil displacement from its travel center
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PupilOffset {
    pub dx: f64,
    pub dy: f64,
}

impl PupilOffset {
    /// Whole-pixel offset, truncated toward zero
    pub fn truncated(&self) -> (i32, i32) {
        (self.dx as i32, self.dy as i32)
    }
}

/// Per-tick state of one eye
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeState {
    pub angle: f64,
    pub offset: PupilOffset,
}

impl EyeState {
    /// Where the pupil of an eye at `reference` points for this sample
    pub fn track(reference: EyeReference, sample: GazeSample, layout: &Layout) -> Self {
        let dx = sample.x - reference.x;
        let dy = sample.y - reference.y;
        let angle = dx.atan2(dy);

        // A cursor resting on the reference point has no direction
        let offset = if dx == 0.0 && dy == 0.0 {
            PupilOffset::default()
        } else {
            PupilOffset {
                dx: angle.sin() * layout.x_radius as f64,
                dy: angle.cos() * layout.y_radius as f64,
            }
        };

        Self { angle, offset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn references() -> [EyeReference; 2] {
        [EyeReference::new(1855.0, 15.0), EyeReference::new(1870.0, 15.0)]
    }

    #[test]
    fn cursor_on_reference_point_centers_pupil() {
        let layout = Layout::default();
        for reference in references() {
            let state = EyeState::track(reference, GazeSample::new(reference.x, reference.y), &layout);
            assert_eq!(state.angle, 0.0);
            assert_eq!(state.offset, PupilOffset::default());
            assert_eq!(state.offset.truncated(), (0, 0));
        }
    }

    #[test]
    fn cursor_far_left_deflects_both_pupils_left() {
        let layout = Layout::default();
        for reference in references() {
            let sample = GazeSample::new(-10000.0, reference.y);
            let state = EyeState::track(reference, sample, &layout);
            assert!((state.offset.dx + layout.x_radius as f64).abs() < EPS);
            assert!(state.offset.dy.abs() < EPS);
            assert_eq!(state.offset.truncated(), (-layout.x_radius, 0));
        }
    }

    #[test]
    fn cursor_below_looks_down() {
        let layout = Layout::default();
        let [left, _] = references();
        let state = EyeState::track(left, GazeSample::new(left.x, 900.0), &layout);
        assert!(state.offset.dx.abs() < EPS);
        assert!((state.offset.dy - layout.y_radius as f64).abs() < EPS);
    }

    #[test]
    fn cursor_above_looks_up() {
        let layout = Layout::default();
        let [_, right] = references();
        let state = EyeState::track(right, GazeSample::new(right.x, 0.0), &layout);
        assert_eq!(state.offset.truncated(), (0, -layout.y_radius));
    }

    #[test]
    fn eyes_between_references_look_apart() {
        let layout = Layout::new(64, 16, 1.0);
        let [left, right] = references();
        let sample = GazeSample::new(1862.5, 15.0);
        let l = EyeState::track(left, sample, &layout);
        let r = EyeState::track(right, sample, &layout);
        assert!(l.offset.dx > 0.0);
        assert!(r.offset.dx < 0.0);
    }

    #[test]
    fn offsets_truncate_toward_zero() {
        let offset = PupilOffset { dx: -2.9, dy: 2.9 };
        assert_eq!(offset.truncated(), (-2, 2));
    }
}
