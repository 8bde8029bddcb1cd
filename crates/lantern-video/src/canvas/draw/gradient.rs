use crate::canvas::{Canvas, RequestKind};
use crate::coords::Rect;
use crate::layer::Layer;
use crate::paint::{Color, GradientDirection};

/// Two-color gradient payload.
///
/// `top` is the start color (top edge for vertical gradients, left edge for
/// horizontal ones), `bottom` the end color.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientRequest {
    pub top: Color,
    pub bottom: Color,
    pub direction: GradientDirection,
    /// Screen-space area covered by the gradient.
    pub region: Rect,
}

impl GradientRequest {
    /// Interpolated color at `t` in `[0, 1]` along the gradient axis.
    pub fn color_at(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: f32, b: f32| a + (b - a) * t;
        Color::new(
            lerp(self.top.r, self.bottom.r),
            lerp(self.top.g, self.bottom.g),
            lerp(self.top.b, self.bottom.b),
            lerp(self.top.a, self.bottom.a),
        )
    }
}

impl Canvas {
    /// Records a gradient filling `region` (world space).
    pub fn draw_gradient(
        &mut self,
        from: Color,
        to: Color,
        layer: Layer,
        direction: GradientDirection,
        region: Rect,
    ) {
        let region = self.transform().apply_rect(region);
        self.push_kind(layer, RequestKind::Gradient(GradientRequest {
            top: from,
            bottom: to,
            direction,
            region,
        }));
    }
}
