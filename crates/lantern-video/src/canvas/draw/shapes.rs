use crate::canvas::{Canvas, RequestKind};
use crate::coords::{Rect, Vec2};
use crate::layer::Layer;
use crate::paint::Color;

/// Solid (optionally rounded) rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FillRectRequest {
    pub rect: Rect,
    pub color: Color,
    /// Corner radius in screen pixels; `0` for square corners.
    pub radius: f32,
}

/// Fills everything *outside* an ellipse; used for spotlight/iris effects.
#[derive(Debug, Clone, PartialEq)]
pub struct InverseEllipseRequest {
    /// Ellipse center in screen pixels.
    pub pos: Vec2,
    /// Full ellipse width/height in screen pixels.
    pub size: Vec2,
    pub color: Color,
}

/// One-pixel line payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRequest {
    pub pos: Vec2,
    pub dest_pos: Vec2,
    pub color: Color,
}

/// Solid triangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleRequest {
    pub pos1: Vec2,
    pub pos2: Vec2,
    pub pos3: Vec2,
    pub color: Color,
}

impl Canvas {
    /// Records a solid rectangle.
    #[inline]
    pub fn draw_filled_rect(&mut self, rect: Rect, color: Color, layer: Layer) {
        self.draw_filled_rect_rounded(rect, color, 0.0, layer);
    }

    /// Records a solid rectangle with rounded corners.
    pub fn draw_filled_rect_rounded(&mut self, rect: Rect, color: Color, radius: f32, layer: Layer) {
        let rect = self.transform().apply_rect(rect.normalized());
        let radius = radius * self.transform().scale;
        self.push_kind(layer, RequestKind::FillRect(FillRectRequest { rect, color, radius }));
    }

    /// Records an inverse ellipse centred at `pos`.
    pub fn draw_inverse_ellipse(&mut self, pos: Vec2, size: Vec2, color: Color, layer: Layer) {
        let pos = self.transform().apply(pos);
        let size = size * self.transform().scale;
        self.push_kind(layer, RequestKind::InverseEllipse(InverseEllipseRequest { pos, size, color }));
    }

    /// Records a line from `pos1` to `pos2`.
    pub fn draw_line(&mut self, pos1: Vec2, pos2: Vec2, color: Color, layer: Layer) {
        let t = *self.transform();
        self.push_kind(layer, RequestKind::Line(LineRequest {
            pos: t.apply(pos1),
            dest_pos: t.apply(pos2),
            color,
        }));
    }

    /// Records a triangle.
    pub fn draw_triangle(&mut self, pos1: Vec2, pos2: Vec2, pos3: Vec2, color: Color, layer: Layer) {
        let t = *self.transform();
        self.push_kind(layer, RequestKind::Triangle(TriangleRequest {
            pos1: t.apply(pos1),
            pos2: t.apply(pos2),
            pos3: t.apply(pos3),
            color,
        }));
    }
}
