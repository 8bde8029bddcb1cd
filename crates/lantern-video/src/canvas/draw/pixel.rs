use std::cell::Cell;
use std::rc::Rc;

use crate::canvas::{Canvas, RequestKind};
use crate::coords::{Rect, Vec2};
use crate::layer::Layer;
use crate::paint::Color;

/// Shared slot a renderer writes a read-back color into.
///
/// Returned by [`Canvas::get_pixel`]; the value is filled in when the canvas
/// is rendered, so game code reads it on the following frame.
#[derive(Debug, Clone)]
pub struct PixelProbe(Rc<Cell<Color>>);

impl PixelProbe {
    /// A probe holding black.
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(Color::BLACK)))
    }

    #[inline]
    pub fn get(&self) -> Color {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, color: Color) {
        self.0.set(color);
    }
}

impl Default for PixelProbe {
    fn default() -> Self {
        Self::new()
    }
}

/// Pixel read-back payload.
#[derive(Debug, Clone)]
pub struct GetPixelRequest {
    /// Screen position relative to the viewport's top-left corner.
    pub pos: Vec2,
    pub probe: PixelProbe,
}

impl Canvas {
    /// Requests the color at world position `pos` once this canvas is rendered.
    ///
    /// There is no light off-screen: for positions outside the viewport the
    /// probe is set to black immediately and nothing is recorded.
    pub fn get_pixel(&mut self, pos: Vec2) -> PixelProbe {
        let probe = PixelProbe::new();
        let pos = self.transform().apply(pos);
        let viewport = self.transform().viewport;
        if !Rect::from_origin_size(Vec2::zero(), viewport.size).contains(pos) {
            probe.set(Color::BLACK);
            return probe;
        }

        self.push_kind(Layer::GETPIXEL, RequestKind::GetPixel(GetPixelRequest {
            pos,
            probe: probe.clone(),
        }));
        probe
    }
}
