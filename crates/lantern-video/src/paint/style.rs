use super::{Blend, Color, Flip};

/// Per-draw paint parameters, passed by value.
///
/// Builder-style setters allow `PaintStyle::new().set_alpha(0.5).set_flip(Flip::HORIZONTAL)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PaintStyle {
    color: Color,
    alpha: f32,
    blend: Blend,
    flip: Flip,
}

impl PaintStyle {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn set_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn set_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    #[inline]
    pub fn set_blend(mut self, blend: Blend) -> Self {
        self.blend = blend;
        self
    }

    #[inline]
    pub fn set_flip(mut self, flip: Flip) -> Self {
        self.flip = flip;
        self
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    #[inline]
    pub fn blend(&self) -> Blend {
        self.blend
    }

    #[inline]
    pub fn flip(&self) -> Flip {
        self.flip
    }
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            alpha: 1.0,
            blend: Blend::default(),
            flip: Flip::NONE,
        }
    }
}
