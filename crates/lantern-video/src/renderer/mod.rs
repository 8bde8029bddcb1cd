//! Renderer contract.
//!
//! Renderers consume canvas requests in paint order. Each backend owns its
//! own GPU resources; the canvas never touches them.
//!
//! Call sequence per frame (driven by `Compositor`):
//! `start_draw(target)`, any number of `submit`, `end_draw`. The colormap pass
//! of a lit frame calls `composite_lightmap` once, between its two halves.

mod null;

pub use null::{NullRenderer, Submission};

use crate::canvas::{DrawingRequest, DrawingTarget};
use crate::paint::Color;

/// Backend that turns drawing requests into pixels.
pub trait Renderer {
    /// Begins drawing into `target`, clearing it to `clear` if given.
    fn start_draw(&mut self, target: DrawingTarget, clear: Option<Color>) {
        let _ = (target, clear);
    }

    /// Finishes the pass started by `start_draw`.
    fn end_draw(&mut self) {}

    /// Draws one request. Requests arrive back-to-front.
    fn submit(&mut self, request: &DrawingRequest);

    /// Multiplies the lightmap over the colormap drawn so far.
    fn composite_lightmap(&mut self) {}
}
