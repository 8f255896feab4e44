// canvas.rs - Software Drawing Surface
//
// A small RGBA bitmap with the two primitives the eyes need: an ellipse
// outline and a filled ellipse. Edges are anti-aliased by supersampling and
// composited src-over onto straight (non-premultiplied) alpha.

use image::{Rgba, RgbaImage};

use crate::constants::colors::CLEAR;
use crate::layout::Bounds;

/// Samples per pixel along each axis
const SUBSAMPLES: u32 = 4;

/// Square RGBA canvas the icon is drawn into
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas
    pub fn new(size: u32) -> Self {
        Self {
            image: RgbaImage::new(size, size),
        }
    }

    /// Edge length in pixels
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Reset every pixel to fully transparent
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba(CLEAR);
        }
    }

    /// RGBA value at (x, y)
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Raw RGBA bytes, row-major
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.image.into_raw()
    }

    /// Stroke the outline of the ellipse inscribed in `bounds`.
    /// Strokes follow pixel centers, like a 1px-aligned vector outline.
    pub fn stroke_ellipse(&mut self, bounds: Bounds, stroke_width: f64, color: [u8; 4]) {
        let half = stroke_width / 2.0;
        let rx = bounds.width / 2.0;
        let ry = bounds.height / 2.0;
        let cx = bounds.x + rx + 0.5;
        let cy = bounds.y + ry + 0.5;

        let (outer_rx, outer_ry) = (rx + half, ry + half);
        let (inner_rx, inner_ry) = (rx - half, ry - half);
        if outer_rx <= 0.0 || outer_ry <= 0.0 {
            return;
        }

        self.rasterize(bounds.expanded(half + 1.0), color, |x, y| {
            let (dx, dy) = (x - cx, y - cy);
            let outside_inner =
                inner_rx <= 0.0 || inner_ry <= 0.0 || ellipse_norm(dx, dy, inner_rx, inner_ry) >= 1.0;
            outside_inner && ellipse_norm(dx, dy, outer_rx, outer_ry) <= 1.0
        });
    }

    /// Fill the ellipse inscribed in `bounds`
    pub fn fill_ellipse(&mut self, bounds: Bounds, color: [u8; 4]) {
        let rx = bounds.width / 2.0;
        let ry = bounds.height / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let cx = bounds.x + rx;
        let cy = bounds.y + ry;

        self.rasterize(bounds.expanded(1.0), color, |x, y| {
            ellipse_norm(x - cx, y - cy, rx, ry) <= 1.0
        });
    }

    /// Blend `color` into every pixel of `area` in proportion to the share of
    /// its subsamples that `covers` accepts
    fn rasterize(&mut self, area: Bounds, color: [u8; 4], covers: impl Fn(f64, f64) -> bool) {
        let (width, height) = self.image.dimensions();
        let x0 = (area.x.floor() as i64).clamp(0, width as i64) as u32;
        let y0 = (area.y.floor() as i64).clamp(0, height as i64) as u32;
        let x1 = ((area.x + area.width).ceil() as i64).clamp(0, width as i64) as u32;
        let y1 = ((area.y + area.height).ceil() as i64).clamp(0, height as i64) as u32;

        let step = 1.0 / SUBSAMPLES as f64;
        for py in y0..y1 {
            for px in x0..x1 {
                let mut hits = 0u32;
                for sy in 0..SUBSAMPLES {
                    for sx in 0..SUBSAMPLES {
                        let x = px as f64 + (sx as f64 + 0.5) * step;
                        let y = py as f64 + (sy as f64 + 0.5) * step;
                        if covers(x, y) {
                            hits += 1;
                        }
                    }
                }
                if hits > 0 {
                    let coverage = hits as f64 / (SUBSAMPLES * SUBSAMPLES) as f64;
                    self.blend(px, py, color, coverage);
                }
            }
        }
    }

    /// Src-over composite of `color` at `coverage` onto (x, y)
    fn blend(&mut self, x: u32, y: u32, color: [u8; 4], coverage: f64) {
        let dst = &mut self.image.get_pixel_mut(x, y).0;

        let src_a = color[3] as f64 / 255.0 * coverage;
        let dst_a = dst[3] as f64 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            return;
        }

        for c in 0..3 {
            let value = (color[c] as f64 * src_a + dst[c] as f64 * dst_a * (1.0 - src_a)) / out_a;
            dst[c] = value.round().clamp(0.0, 255.0) as u8;
        }
        dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

/// Squared normalized distance of (dx, dy) for an ellipse with radii (rx, ry);
/// <= 1.0 means inside
#[inline]
fn ellipse_norm(dx: f64, dy: f64, rx: f64, ry: f64) -> f64 {
    let nx = dx / rx;
    let ny = dy / ry;
    nx * nx + ny * ny
}
