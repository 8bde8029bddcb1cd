//! Drawing context: the pair of canvases a frame is recorded into, plus the
//! camera transform stack shared by both.

mod transform;

pub use transform::Transform;

use crate::canvas::{Canvas, DrawingTarget};
use crate::coords::{Rect, Vec2};
use crate::paint::{Color, Flip};

/// Owns the colormap and lightmap canvases of a frame.
///
/// Game objects draw scene content into [`color`](Self::color) and light
/// sources into [`light`](Self::light). Transform changes are mirrored to both
/// canvases immediately, so requests recorded after `set_translation` use the
/// new camera position.
///
/// ```
/// use lantern_video::context::DrawingContext;
/// use lantern_video::coords::{Rect, Vec2};
///
/// let mut ctx = DrawingContext::new(Rect::new(0.0, 0.0, 640.0, 480.0));
/// ctx.push_transform();
/// ctx.set_translation(Vec2::new(320.0, 0.0));
/// // ... draw the level ...
/// ctx.pop_transform();
/// // ... draw the HUD in screen space ...
/// ```
#[derive(Debug)]
pub struct DrawingContext {
    colormap: Canvas,
    lightmap: Canvas,
    /// Never empty; the bottom entry is the base transform.
    transform_stack: Vec<Transform>,
    ambient_color: Color,
}

impl DrawingContext {
    pub fn new(viewport: Rect) -> Self {
        Self {
            colormap: Canvas::new(DrawingTarget::Colormap, viewport),
            lightmap: Canvas::new(DrawingTarget::Lightmap, viewport),
            transform_stack: vec![Transform::new(viewport)],
            ambient_color: Color::WHITE,
        }
    }

    /// Scene canvas.
    #[inline]
    pub fn color(&mut self) -> &mut Canvas {
        &mut self.colormap
    }

    /// Light canvas.
    #[inline]
    pub fn light(&mut self) -> &mut Canvas {
        &mut self.lightmap
    }

    /// Canvas for `target`.
    #[inline]
    pub fn canvas(&mut self, target: DrawingTarget) -> &mut Canvas {
        match target {
            DrawingTarget::Colormap => &mut self.colormap,
            DrawingTarget::Lightmap => &mut self.lightmap,
        }
    }

    // ── transform stack ───────────────────────────────────────────────────

    #[inline]
    pub fn transform(&self) -> &Transform {
        self.top()
    }

    fn top(&self) -> &Transform {
        // Invariant: the stack always holds the base transform.
        &self.transform_stack[self.transform_stack.len() - 1]
    }

    fn top_mut(&mut self) -> &mut Transform {
        let last = self.transform_stack.len() - 1;
        &mut self.transform_stack[last]
    }

    fn sync(&mut self) {
        let t = *self.top();
        self.colormap.set_transform(t);
        self.lightmap.set_transform(t);
    }

    /// Saves the current transform; pair with [`pop_transform`](Self::pop_transform).
    pub fn push_transform(&mut self) {
        let t = *self.top();
        self.transform_stack.push(t);
    }

    /// Restores the transform saved by the matching `push_transform`.
    ///
    /// The base transform is never popped.
    pub fn pop_transform(&mut self) {
        debug_assert!(self.transform_stack.len() > 1, "pop_transform called without matching push_transform");
        if self.transform_stack.len() > 1 {
            self.transform_stack.pop();
            self.sync();
        } else {
            log::warn!("pop_transform called without matching push_transform");
        }
    }

    /// Sets the world position shown at the viewport's top-left corner.
    pub fn set_translation(&mut self, translation: Vec2) {
        debug_assert!(translation.is_finite(), "non-finite camera translation {:?}", translation);
        self.top_mut().translation = translation;
        self.sync();
    }

    #[inline]
    pub fn translation(&self) -> Vec2 {
        self.top().translation
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.top_mut().scale = scale;
        self.sync();
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.top().scale
    }

    pub fn set_flip(&mut self, flip: Flip) {
        self.top_mut().flip = flip;
        self.sync();
    }

    #[inline]
    pub fn flip(&self) -> Flip {
        self.top().flip
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.top_mut().alpha = alpha;
        self.sync();
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.top().alpha
    }

    // ── viewport ──────────────────────────────────────────────────────────

    #[inline]
    pub fn viewport(&self) -> Rect {
        self.top().viewport
    }

    /// Sets the viewport of the current transform.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.top_mut().viewport = viewport;
        self.sync();
    }

    /// World rectangle currently visible through the viewport.
    #[inline]
    pub fn cliprect(&self) -> Rect {
        self.top().cliprect()
    }

    // ── lighting ──────────────────────────────────────────────────────────

    /// Color the lightmap is cleared to before lights are added.
    pub fn set_ambient_color(&mut self, color: Color) {
        debug_assert!(color.is_finite(), "non-finite ambient color {:?}", color);
        self.ambient_color = color;
    }

    #[inline]
    pub fn ambient_color(&self) -> Color {
        self.ambient_color
    }

    /// The lightmap pass only runs when the ambient light is not full white.
    #[inline]
    pub fn use_lightmap(&self) -> bool {
        let c = self.ambient_color;
        c.r != 1.0 || c.g != 1.0 || c.b != 1.0
    }

    /// Discards all requests recorded on both canvases.
    pub fn clear(&mut self) {
        self.colormap.clear();
        self.lightmap.clear();
    }

    /// Both canvases, for passes that need to borrow them together.
    pub(crate) fn canvases_mut(&mut self) -> (&mut Canvas, &mut Canvas) {
        (&mut self.colormap, &mut self.lightmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RequestKind;
    use crate::layer::Layer;

    fn ctx() -> DrawingContext {
        DrawingContext::new(Rect::new(0.0, 0.0, 640.0, 480.0))
    }

    fn first_rect(canvas: &Canvas) -> Rect {
        match &canvas.requests().next().unwrap().kind {
            RequestKind::FillRect(r) => r.rect,
            other => panic!("unexpected request {}", other.name()),
        }
    }

    #[test]
    fn translation_reaches_both_canvases() {
        let mut ctx = ctx();
        ctx.set_translation(Vec2::new(100.0, 10.0));
        ctx.color().draw_filled_rect(Rect::new(110.0, 20.0, 4.0, 4.0), Color::RED, Layer::OBJECTS);
        ctx.light().draw_filled_rect(Rect::new(100.0, 10.0, 4.0, 4.0), Color::WHITE, Layer::OBJECTS);
        assert_eq!(first_rect(ctx.color()), Rect::new(10.0, 10.0, 4.0, 4.0));
        assert_eq!(first_rect(ctx.light()), Rect::new(0.0, 0.0, 4.0, 4.0));
    }

    #[test]
    fn pop_restores_previous_transform() {
        let mut ctx = ctx();
        ctx.set_translation(Vec2::new(5.0, 5.0));
        ctx.push_transform();
        ctx.set_translation(Vec2::new(50.0, 50.0));
        ctx.set_alpha(0.5);
        assert_eq!(ctx.color().transform().translation, Vec2::new(50.0, 50.0));
        ctx.pop_transform();
        assert_eq!(ctx.translation(), Vec2::new(5.0, 5.0));
        assert_eq!(ctx.alpha(), 1.0);
        assert_eq!(ctx.light().transform().translation, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn alpha_and_flip_are_stamped_on_requests() {
        let mut ctx = ctx();
        ctx.set_alpha(0.25);
        ctx.set_flip(Flip::VERTICAL);
        ctx.color().draw_line(Vec2::zero(), Vec2::one(), Color::WHITE, Layer::HUD);
        let req = ctx.color().requests().next().unwrap().clone();
        assert_eq!(req.alpha, 0.25);
        assert_eq!(req.flip, Flip::VERTICAL);
    }

    #[test]
    fn lightmap_only_when_ambient_is_not_white() {
        let mut ctx = ctx();
        assert!(!ctx.use_lightmap());
        ctx.set_ambient_color(Color::rgb(0.2, 0.2, 0.3));
        assert!(ctx.use_lightmap());
    }

    #[test]
    fn clear_empties_both_canvases() {
        let mut ctx = ctx();
        ctx.color().draw_line(Vec2::zero(), Vec2::one(), Color::WHITE, Layer::HUD);
        ctx.light().draw_line(Vec2::zero(), Vec2::one(), Color::WHITE, Layer::HUD);
        ctx.clear();
        assert!(ctx.color().is_empty());
        assert!(ctx.light().is_empty());
    }

    #[test]
    fn cliprect_follows_camera() {
        let mut ctx = ctx();
        ctx.set_translation(Vec2::new(64.0, 32.0));
        assert_eq!(ctx.cliprect(), Rect::new(64.0, 32.0, 640.0, 480.0));
    }
}
