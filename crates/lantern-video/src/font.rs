use std::fmt;
use std::rc::Rc;

/// Shared font handle recorded in text requests.
pub type FontPtr = Rc<dyn Font>;

/// Horizontal anchoring of a text run relative to its position.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FontAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Text metrics needed to lay out and align text.
///
/// Glyph rasterisation belongs to the renderer; the canvas only needs sizes.
pub trait Font: fmt::Debug {
    /// Line height in pixels.
    fn height(&self) -> f32;

    /// Width in pixels of a single line of text.
    fn line_width(&self, line: &str) -> f32;

    /// Width of the widest line of `text`.
    fn text_width(&self, text: &str) -> f32 {
        text.lines().map(|l| self.line_width(l)).fold(0.0, f32::max)
    }

    /// Total height of `text` (one `height()` per line, at least one line).
    fn text_height(&self, text: &str) -> f32 {
        self.height() * text.lines().count().max(1) as f32
    }
}

/// Monospaced font metrics, as used by bitmap fonts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedFont {
    pub glyph_width: f32,
    pub glyph_height: f32,
    /// Extra spacing added after every glyph.
    pub shadow_size: f32,
}

impl FixedFont {
    pub const fn new(glyph_width: f32, glyph_height: f32) -> Self {
        Self { glyph_width, glyph_height, shadow_size: 0.0 }
    }
}

impl Font for FixedFont {
    fn height(&self) -> f32 {
        self.glyph_height
    }

    fn line_width(&self, line: &str) -> f32 {
        line.chars().count() as f32 * (self.glyph_width + self.shadow_size)
    }
}
