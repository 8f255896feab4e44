// render.rs - Eye Rendering and the Per-tick Loop Step
//
// `EyeRenderer` draws one frame from a cursor sample. `RenderLoop` owns the
// collaborators and runs one tick at a time: refresh the appearance when due,
// draw, publish. A failed tick is reported, never raised.

use std::time::{Duration, Instant};

use log::{debug, trace, warn};

use crate::app::RenderContext;
use crate::appearance::{Appearance, AppearanceProbe, ProbeResult};
use crate::canvas::Canvas;
use crate::error::RenderError;
use crate::gaze::{EyeReference, EyeState, GazeSample};
use crate::layout::Layout;
use crate::platform::CursorSource;

/// Where finished frames go (the tray icon, or a test double)
pub trait IconSurface {
    fn publish(&mut self, canvas: &Canvas) -> Result<(), RenderError>;
}

/// Draws the eyes for a fixed layout and pair of reference points
#[derive(Debug, Clone)]
pub struct EyeRenderer {
    layout: Layout,
    left: EyeReference,
    right: EyeReference,
}

impl EyeRenderer {
    pub fn new(layout: Layout, [left, right]: [EyeReference; 2]) -> Self {
        Self { layout, left, right }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Gaze of both eyes for a sample, left eye first
    pub fn eye_states(&self, sample: GazeSample) -> [EyeState; 2] {
        [
            EyeState::track(self.left, sample, &self.layout),
            EyeState::track(self.right, sample, &self.layout),
        ]
    }

    /// A cleared canvas of the layout's size
    pub fn blank_canvas(&self) -> Canvas {
        let mut canvas = Canvas::new(self.layout.image_size);
        canvas.clear();
        canvas
    }

    /// Both eye outlines
    pub fn draw_outlines(&self, canvas: &mut Canvas, appearance: Appearance) {
        let color = appearance.stroke_color();
        let stroke = self.layout.stroke_width;
        canvas.stroke_ellipse(self.layout.left_eye_bounds(), stroke, color);
        canvas.stroke_ellipse(self.layout.right_eye_bounds(), stroke, color);
    }

    /// Both pupils, placed by `eye_states` (left eye first)
    pub fn draw_pupils(&self, canvas: &mut Canvas, [left, right]: [EyeState; 2], appearance: Appearance) {
        let color = appearance.stroke_color();
        let centers = [
            (self.layout.left_center_x, left),
            (self.layout.right_center_x, right),
        ];
        for (center_x, state) in centers {
            let bounds = self.layout.pupil_bounds(center_x, state.offset.truncated());
            canvas.fill_ellipse(bounds, color);
        }
    }

    /// A complete frame for `sample`
    #[cfg(test)]
    fn draw(&self, sample: GazeSample, appearance: Appearance) -> Canvas {
        let mut canvas = self.blank_canvas();
        self.draw_outlines(&mut canvas, appearance);
        self.draw_pupils(&mut canvas, self.eye_states(sample), appearance);
        canvas
    }
}

/// How a tick ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new frame was published
    Rendered,
    /// The frame was dropped; the tray still shows the previous one
    Skipped(RenderError),
}

/// One render loop: a renderer plus the collaborators it reads from and
/// publishes to
pub struct RenderLoop<C, P, S> {
    renderer: EyeRenderer,
    cursor: C,
    probe: P,
    surface: S,
    context: RenderContext,
    check_mode_interval: Duration,
}

impl<C, P, S> RenderLoop<C, P, S>
where
    C: CursorSource,
    P: AppearanceProbe,
    S: IconSurface,
{
    pub fn new(renderer: EyeRenderer, cursor: C, probe: P, surface: S, check_mode_interval: Duration) -> Self {
        Self {
            renderer,
            cursor,
            probe,
            surface,
            context: RenderContext::new(),
            check_mode_interval,
        }
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Run one tick at `now`
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        self.refresh_appearance(now);

        match self.render_frame() {
            Ok(()) => {
                self.context.record_rendered();
                TickOutcome::Rendered
            }
            Err(e) => {
                self.context.record_skipped();
                debug!("Skipping frame: {}", e);
                TickOutcome::Skipped(e)
            }
        }
    }

    fn refresh_appearance(&mut self, now: Instant) {
        if !self.context.mode_check_due(now, self.check_mode_interval) {
            return;
        }

        let result = self.probe.query();
        if result == ProbeResult::Unknown {
            warn!(
                "Could not determine OS appearance, keeping {:?}",
                self.context.appearance
            );
        }
        if self.context.apply_mode_check(now, result) {
            debug!("Appearance changed to {:?}", self.context.appearance);
        }
    }

    /// Draw and publish one frame. The canvas lives only for this call.
    fn render_frame(&mut self) -> Result<(), RenderError> {
        let appearance = self.context.appearance;
        let mut canvas = self.renderer.blank_canvas();
        self.renderer.draw_outlines(&mut canvas, appearance);

        let sample = self.cursor.position()?;
        let states = self.renderer.eye_states(sample);
        trace!(
            "Cursor at ({}, {}), gaze {:.3} / {:.3} rad",
            sample.x,
            sample.y,
            states[0].angle,
            states[1].angle
        );
        self.renderer.draw_pupils(&mut canvas, states, appearance);

        self.surface.publish(&canvas)
    }
}
