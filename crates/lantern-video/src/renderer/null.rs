use crate::canvas::{DrawingRequest, DrawingTarget, RequestKind};
use crate::layer::Layer;
use crate::paint::Color;

use super::Renderer;

/// One submission seen by a [`NullRenderer`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Submission {
    pub target: DrawingTarget,
    pub layer: Layer,
    pub kind: &'static str,
}

/// Headless renderer: records what it is asked to draw and draws nothing.
///
/// Used for dedicated servers, tests, and tooling. Pixel read-backs are
/// answered with `pixel_color`.
#[derive(Debug)]
pub struct NullRenderer {
    pixel_color: Color,
    current: Option<DrawingTarget>,
    submissions: Vec<Submission>,
    composites: usize,
    passes: usize,
}

impl NullRenderer {
    pub fn new() -> Self {
        Self {
            pixel_color: Color::BLACK,
            current: None,
            submissions: Vec::new(),
            composites: 0,
            passes: 0,
        }
    }

    /// Color written into every pixel probe.
    pub fn with_pixel_color(mut self, color: Color) -> Self {
        self.pixel_color = color;
        self
    }

    /// Submissions since the last [`reset`](Self::reset), in order.
    #[inline]
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Number of `composite_lightmap` calls.
    #[inline]
    pub fn composites(&self) -> usize {
        self.composites
    }

    /// Number of completed `start_draw`/`end_draw` passes.
    #[inline]
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn reset(&mut self) {
        self.submissions.clear();
        self.composites = 0;
        self.passes = 0;
        self.current = None;
    }
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for NullRenderer {
    fn start_draw(&mut self, target: DrawingTarget, clear: Option<Color>) {
        debug_assert!(self.current.is_none(), "start_draw called inside an open pass");
        log::trace!("null renderer: begin {:?} pass (clear {:?})", target, clear);
        self.current = Some(target);
    }

    fn end_draw(&mut self) {
        debug_assert!(self.current.is_some(), "end_draw called without start_draw");
        self.current = None;
        self.passes += 1;
    }

    fn submit(&mut self, request: &DrawingRequest) {
        if let RequestKind::GetPixel(req) = &request.kind {
            req.probe.set(self.pixel_color);
        }
        log::trace!("null renderer: {} at layer {}", request.kind.name(), request.layer.0);
        self.submissions.push(Submission {
            target: self.current.unwrap_or(request.target),
            layer: request.layer,
            kind: request.kind.name(),
        });
    }

    fn composite_lightmap(&mut self) {
        self.composites += 1;
    }
}
