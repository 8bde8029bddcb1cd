use std::rc::Rc;

use crate::canvas::{Canvas, RequestKind};
use crate::coords::Vec2;
use crate::font::{FontAlignment, FontPtr};
use crate::layer::Layer;
use crate::paint::Color;

/// Text draw payload.
#[derive(Debug, Clone)]
pub struct TextRequest {
    pub font: FontPtr,
    pub text: String,
    /// Anchor in screen pixels; meaning depends on `alignment`.
    pub pos: Vec2,
    pub alignment: FontAlignment,
    pub color: Color,
}

impl TextRequest {
    /// Top-left corner of the widest line after alignment.
    pub fn origin(&self) -> Vec2 {
        let width = self.font.text_width(&self.text);
        let x = match self.alignment {
            FontAlignment::Left => self.pos.x,
            FontAlignment::Center => self.pos.x - width / 2.0,
            FontAlignment::Right => self.pos.x - width,
        };
        Vec2::new(x, self.pos.y)
    }
}

impl Canvas {
    /// Records a text draw request.
    pub fn draw_text(
        &mut self,
        font: &FontPtr,
        text: impl Into<String>,
        pos: Vec2,
        alignment: FontAlignment,
        layer: Layer,
        color: Color,
    ) {
        let pos = self.transform().apply(pos);
        self.push_kind(layer, RequestKind::Text(TextRequest {
            font: Rc::clone(font),
            text: text.into(),
            pos,
            alignment,
            color,
        }));
    }

    /// Records text centred on the viewport, `pos.x` pixels right of the middle.
    #[inline]
    pub fn draw_center_text(
        &mut self,
        font: &FontPtr,
        text: impl Into<String>,
        pos: Vec2,
        layer: Layer,
        color: Color,
    ) {
        let center = Vec2::new(pos.x + self.transform().viewport.width() / 2.0, pos.y);
        self.draw_text(font, text, center, FontAlignment::Center, layer, color);
    }
}
