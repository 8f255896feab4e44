// layout.rs - Icon Geometry
//
// Every pixel position used while drawing is derived here, once, from the base
// sizes and a scale factor. The integer truncation matches the classic icon so
// frames stay pixel-identical.

use crate::constants::geometry::{
    BASE_IMAGE_SIZE, BASE_PUPIL_SIZE, BASE_STROKE, BASE_X_RADIUS, BASE_Y_RADIUS, DEFAULT_SCALE,
    EYE_HEIGHT_RATIO, EYE_WIDTH_RATIO,
};

/// Axis-aligned box in canvas pixels; ellipses are inscribed in it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Grow the box by `margin` on every side
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }
}

/// Derived icon geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Canvas edge length (the canvas is square)
    pub image_size: u32,
    /// Pupil diameter
    pub pupil_size: i32,
    /// Width of one eye outline
    pub eye_width: i32,
    /// Height of one eye outline
    pub eye_height: i32,
    /// Horizontal gap around and between the eyes
    pub gap: i32,
    /// Vertical margin above and below the eyes
    pub y_gap: i32,
    /// Pupil travel center, left eye
    pub left_center_x: i32,
    /// Pupil travel center, right eye
    pub right_center_x: i32,
    /// Pupil travel center, both eyes
    pub center_y: i32,
    /// Horizontal pupil travel radius
    pub x_radius: i32,
    /// Vertical pupil travel radius
    pub y_radius: i32,
    /// Outline stroke width
    pub stroke_width: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(BASE_IMAGE_SIZE, BASE_PUPIL_SIZE, DEFAULT_SCALE)
    }
}

impl Layout {
    /// Compute the layout for the given base sizes and scale.
    ///
    /// A non-positive or non-finite scale is replaced by the default scale.
    /// The canvas is never smaller than one pixel, and pupil centers are kept
    /// inside the canvas for degenerate (tiny) scales.
    pub fn new(base_image_size: u32, base_pupil_size: u32, scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            DEFAULT_SCALE
        };

        let image = ((base_image_size as f64 * scale) as i32).max(1);
        let pupil_size = (base_pupil_size as f64 * scale) as i32;
        let eye_width = (image as f64 / 2.0 * EYE_WIDTH_RATIO) as i32;
        let eye_height = (image as f64 * EYE_HEIGHT_RATIO) as i32;
        let gap = ((image as f64 - 2.0 * eye_width as f64) / 3.0) as i32;
        let y_gap = (image - eye_height) / 2;

        let left_center_x = ((gap + eye_width) / 2 + 1).clamp(0, image);
        let right_center_x = (image - gap - eye_width / 2 + 1).clamp(0, image);
        let center_y = ((image - y_gap) / 2 - 2).clamp(0, image);

        Self {
            image_size: image as u32,
            pupil_size,
            eye_width,
            eye_height,
            gap,
            y_gap,
            left_center_x,
            right_center_x,
            center_y,
            x_radius: (BASE_X_RADIUS * scale) as i32,
            y_radius: (BASE_Y_RADIUS * scale) as i32,
            stroke_width: BASE_STROKE * scale,
        }
    }

    /// Outline box of the left eye
    pub fn left_eye_bounds(&self) -> Bounds {
        Bounds::new(
            self.gap as f64,
            self.y_gap as f64,
            self.eye_width as f64,
            self.eye_height as f64,
        )
    }

    /// Outline box of the right eye
    pub fn right_eye_bounds(&self) -> Bounds {
        Bounds::new(
            (self.image_size as i32 - self.gap - self.eye_width) as f64,
            self.y_gap as f64,
            self.eye_width as f64,
            self.eye_height as f64,
        )
    }

    /// Pupil box for a travel center and an already truncated offset.
    /// The offset moves the box's top-left corner, the box is `pupil_size` wide.
    pub fn pupil_bounds(&self, center_x: i32, (dx, dy): (i32, i32)) -> Bounds {
        Bounds::new(
            (center_x + dx - self.pupil_size / 2) as f64,
            (self.center_y + dy) as f64,
            self.pupil_size as f64,
            self.pupil_size as f64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scale_matches_classic_icon() {
        let layout = Layout::default();
        assert_eq!(layout.image_size, 32);
        assert_eq!(layout.pupil_size, 8);
        assert_eq!(layout.eye_width, 14);
        assert_eq!(layout.eye_height, 24);
        assert_eq!(layout.gap, 1);
        assert_eq!(layout.y_gap, 4);
        assert_eq!(layout.left_center_x, 8);
        assert_eq!(layout.right_center_x, 25);
        assert_eq!(layout.center_y, 12);
        assert_eq!(layout.x_radius, 3);
        assert_eq!(layout.y_radius, 6);
        assert!((layout.stroke_width - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn full_scale_layout() {
        let layout = Layout::new(64, 16, 1.0);
        assert_eq!(layout.image_size, 64);
        assert_eq!(layout.eye_width, 28);
        assert_eq!(layout.eye_height, 48);
        assert_eq!(layout.gap, 2);
        assert_eq!(layout.y_gap, 8);
        assert_eq!(layout.left_center_x, 16);
        assert_eq!(layout.right_center_x, 49);
        assert_eq!(layout.center_y, 26);
        assert_eq!((layout.x_radius, layout.y_radius), (7, 13));
    }

    #[test]
    fn layout_is_deterministic() {
        assert_eq!(Layout::new(64, 16, 0.75), Layout::new(64, 16, 0.75));
    }

    #[test]
    fn invariants_hold_for_any_positive_scale() {
        let scales = (1..=400).map(|i| i as f64 * 0.01).chain([0.001, 0.0001, 7.3, 16.0]);
        for scale in scales {
            let layout = Layout::new(64, 16, scale);
            let size = layout.image_size as i32;
            assert!(layout.eye_width < size, "eye_width at scale {scale}");
            assert!(layout.gap >= 0, "gap at scale {scale}");
            for x in [layout.left_center_x, layout.right_center_x] {
                assert!((0..=size).contains(&x), "center x {x} at scale {scale}");
            }
            assert!((0..=size).contains(&layout.center_y), "center y at scale {scale}");
        }
    }

    #[test]
    fn invalid_scale_uses_default() {
        assert_eq!(Layout::new(64, 16, 0.0), Layout::default());
        assert_eq!(Layout::new(64, 16, -2.0), Layout::default());
        assert_eq!(Layout::new(64, 16, f64::NAN), Layout::default());
    }

    #[test]
    fn eye_bounds_are_mirrored() {
        let layout = Layout::default();
        let left = layout.left_eye_bounds();
        let right = layout.right_eye_bounds();
        assert_eq!(left, Bounds::new(1.0, 4.0, 14.0, 24.0));
        assert_eq!(right, Bounds::new(17.0, 4.0, 14.0, 24.0));
    }

    #[test]
    fn pupil_bounds_offset_top_left() {
        let layout = Layout::default();
        let bounds = layout.pupil_bounds(layout.left_center_x, (-3, 2));
        assert_eq!(bounds, Bounds::new(1.0, 14.0, 8.0, 8.0));
    }
}
