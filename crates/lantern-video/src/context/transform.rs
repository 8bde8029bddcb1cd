use crate::coords::{Rect, Vec2};
use crate::paint::Flip;

/// World-to-screen state applied by a canvas when recording requests.
///
/// `translation` is the world position shown at the viewport's top-left
/// corner (the camera). World positions map to screen positions as
/// `(pos - translation) * scale`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translation: Vec2,
    pub scale: f32,
    /// Composed (`^`) onto every surface draw.
    pub flip: Flip,
    /// Multiplied into every request's alpha.
    pub alpha: f32,
    /// Screen rectangle being drawn into.
    pub viewport: Rect,
}

impl Transform {
    /// Identity transform over `viewport`.
    #[inline]
    pub fn new(viewport: Rect) -> Self {
        Self {
            translation: Vec2::zero(),
            scale: 1.0,
            flip: Flip::NONE,
            alpha: 1.0,
            viewport,
        }
    }

    #[inline]
    pub fn apply(&self, pos: Vec2) -> Vec2 {
        (pos - self.translation) * self.scale
    }

    /// Maps a world rectangle to screen space (origin mapped, size scaled).
    #[inline]
    pub fn apply_rect(&self, rect: Rect) -> Rect {
        Rect::from_origin_size(self.apply(rect.origin), rect.size * self.scale)
    }

    /// World rectangle visible through the viewport.
    #[inline]
    pub fn cliprect(&self) -> Rect {
        let scale = if self.scale > 0.0 { self.scale } else { 1.0 };
        Rect::from_origin_size(self.translation, self.viewport.size / scale)
    }
}
