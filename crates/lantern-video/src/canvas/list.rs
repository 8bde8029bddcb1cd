use crate::context::Transform;
use crate::coords::Rect;
use crate::layer::{Layer, LightmapFilter};
use crate::paint::Blend;
use crate::renderer::Renderer;

use super::{DrawingRequest, DrawingTarget, RequestArena, RequestHandle, RequestKind, SortKey};

#[derive(Debug, Copy, Clone)]
struct Entry {
    key: SortKey,
    handle: RequestHandle,
}

/// Recorded draw requests for one render target, for one frame.
///
/// Performance characteristics:
/// - `draw_*` is O(1) amortised (one arena push)
/// - paint-order replay reuses an internal index buffer; no per-frame allocation once warmed
///
/// Positions passed to `draw_*` are in world space and are mapped through the
/// current [`Transform`] when recorded. A `DrawingContext` keeps the transform
/// of its canvases in sync; a standalone canvas uses the identity.
#[derive(Debug)]
pub struct Canvas {
    target: DrawingTarget,
    transform: Transform,

    arena: RequestArena,
    entries: Vec<Entry>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl Canvas {
    pub fn new(target: DrawingTarget, viewport: Rect) -> Self {
        Self {
            target,
            transform: Transform::new(viewport),
            arena: RequestArena::new(),
            entries: Vec::new(),
            next_order: 0,
            sorted_indices: Vec::new(),
            sorted_dirty: false,
        }
    }

    #[inline]
    pub fn target(&self) -> DrawingTarget {
        self.target
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Replaces the transform applied to subsequent `draw_*` calls.
    #[inline]
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discards all pending requests and resets the arena. Keeps allocated
    /// capacity for reuse. Every previously issued handle becomes stale.
    pub fn clear(&mut self) {
        log::trace!("{:?} canvas cleared ({} requests)", self.target, self.entries.len());
        self.arena.reset();
        self.entries.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = false;
    }

    /// Requests in insertion order.
    pub fn requests(&self) -> impl Iterator<Item = &DrawingRequest> {
        self.entries.iter().filter_map(|e| self.arena.get(e.handle))
    }

    /// Handles of the recorded requests, in insertion order.
    pub fn handles(&self) -> impl Iterator<Item = RequestHandle> + '_ {
        self.entries.iter().map(|e| e.handle)
    }

    /// Resolves a handle; `None` once the canvas has been cleared since it was issued.
    #[inline]
    pub fn get(&self, handle: RequestHandle) -> Option<&DrawingRequest> {
        self.arena.get(handle)
    }

    /// Builds a request for this canvas with the transform's alpha and flip
    /// and default blending.
    pub(crate) fn request(&self, layer: Layer, kind: RequestKind) -> DrawingRequest {
        DrawingRequest {
            layer,
            target: self.target,
            alpha: self.transform.alpha,
            blend: Blend::default(),
            flip: self.transform.flip,
            viewport: self.transform.viewport,
            kind,
        }
    }

    /// Records a fully built request.
    pub fn push(&mut self, request: DrawingRequest) -> RequestHandle {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        let key = SortKey::new(request.layer, order);
        let handle = self.arena.alloc(request);
        self.entries.push(Entry { key, handle });

        self.sorted_dirty = true;
        handle
    }

    #[inline]
    pub(crate) fn push_kind(&mut self, layer: Layer, kind: RequestKind) -> RequestHandle {
        let request = self.request(layer, kind);
        self.push(request)
    }

    /// Iterates requests in paint order (ascending layer, insertion order within a layer).
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawingRequest> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices
            .iter()
            .filter_map(|&i| self.arena.get(self.entries[i].handle))
    }

    /// Submits the requests accepted by `filter` to `renderer`, back-to-front.
    pub fn render<R: Renderer + ?Sized>(&mut self, renderer: &mut R, filter: LightmapFilter) {
        let mut submitted = 0usize;
        for request in self.iter_in_paint_order() {
            if filter.accepts(request.layer) {
                renderer.submit(request);
                submitted += 1;
            }
        }
        log::trace!(
            "{:?} canvas rendered {} of {} requests ({:?})",
            self.target,
            submitted,
            self.entries.len(),
            filter
        );
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.entries.len());

        // Stable ordering is ensured by SortKey including insertion order.
        let entries = &self.entries;
        self.sorted_indices.sort_unstable_by_key(|&i| entries[i].key);

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::canvas::{DrawingRequest, RequestKind};
    use crate::coords::{PixelRect, Vec2};
    use crate::font::{FixedFont, FontAlignment, FontPtr};
    use crate::paint::{Color, Flip, GradientDirection, PaintStyle};
    use crate::surface::{Surface, SurfacePtr};
    use crate::texture::fake_manager;

    const VIEW: Rect = Rect::new(0.0, 0.0, 640.0, 480.0);

    /// Collects `(layer, x)` of every submitted fill rect; `x` identifies the draw call.
    #[derive(Default)]
    struct Collect {
        seen: Vec<(i32, f32)>,
    }

    impl Renderer for Collect {
        fn submit(&mut self, request: &DrawingRequest) {
            if let RequestKind::FillRect(r) = &request.kind {
                self.seen.push((request.layer.0, r.rect.origin.x));
            }
        }
    }

    fn canvas() -> Canvas {
        Canvas::new(DrawingTarget::Colormap, VIEW)
    }

    fn mark(canvas: &mut Canvas, id: usize, layer: i32) {
        canvas.draw_filled_rect(Rect::new(id as f32, 0.0, 1.0, 1.0), Color::WHITE, Layer(layer));
    }

    fn tux() -> SurfacePtr {
        let mut tm = fake_manager(&[("tux.png", 32, 48)]);
        Surface::from_file(&mut tm, "tux.png", None)
    }

    fn texture_request(canvas: &Canvas) -> (DrawingRequest, crate::canvas::TextureRequest) {
        let req = canvas.requests().last().unwrap().clone();
        match &req.kind {
            RequestKind::Texture(t) => {
                let t = t.clone();
                (req, t)
            }
            other => panic!("expected texture request, got {}", other.name()),
        }
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn render_sorts_by_layer_keeping_insertion_order() {
        let mut c = canvas();
        mark(&mut c, 0, 500);
        mark(&mut c, 1, 0);
        mark(&mut c, 2, 500);
        mark(&mut c, 3, -300);
        mark(&mut c, 4, 0);

        let mut r = Collect::default();
        c.render(&mut r, LightmapFilter::All);
        assert_eq!(r.seen, vec![(-300, 3.0), (0, 1.0), (0, 4.0), (500, 0.0), (500, 2.0)]);

        let in_order: Vec<i32> = c.requests().map(|r| r.layer.0).collect();
        assert_eq!(in_order, vec![500, 0, 500, -300, 0], "requests() keeps insertion order");
    }

    #[test]
    fn filters_split_at_lightmap_layer() {
        let mut c = canvas();
        mark(&mut c, 0, 449);
        mark(&mut c, 1, 450);
        mark(&mut c, 2, 451);

        let mut below = Collect::default();
        c.render(&mut below, LightmapFilter::BelowLightmap);
        assert_eq!(below.seen, vec![(449, 0.0)]);

        let mut above = Collect::default();
        c.render(&mut above, LightmapFilter::AboveLightmap);
        assert_eq!(above.seen, vec![(450, 1.0), (451, 2.0)]);
    }

    #[test]
    fn render_after_more_draws_resorts() {
        let mut c = canvas();
        mark(&mut c, 0, 10);
        c.render(&mut Collect::default(), LightmapFilter::All);
        mark(&mut c, 1, 5);
        let mut r = Collect::default();
        c.render(&mut r, LightmapFilter::All);
        assert_eq!(r.seen, vec![(5, 1.0), (10, 0.0)]);
    }

    // ── clear / arena ─────────────────────────────────────────────────────

    #[test]
    fn clear_invalidates_handles() {
        let mut c = canvas();
        mark(&mut c, 0, 0);
        let handle = c.handles().next().unwrap();
        assert!(c.get(handle).is_some());

        c.clear();
        assert!(c.is_empty());
        assert!(c.get(handle).is_none());

        mark(&mut c, 1, 0);
        assert!(c.get(handle).is_none(), "new frame does not resurrect old handles");
        let mut r = Collect::default();
        c.render(&mut r, LightmapFilter::All);
        assert_eq!(r.seen, vec![(0, 1.0)]);
    }

    // ── surfaces ──────────────────────────────────────────────────────────

    #[test]
    fn draw_surface_applies_translation() {
        let mut c = canvas();
        let mut t = *c.transform();
        t.translation = Vec2::new(100.0, 20.0);
        c.set_transform(t);

        let s = tux();
        c.draw_surface(&s, Vec2::new(110.0, 30.0), Layer::OBJECTS);
        let (req, tex) = texture_request(&c);
        assert_eq!(req.layer, Layer::OBJECTS);
        assert_eq!(tex.dstrects, vec![Rect::new(10.0, 10.0, 32.0, 48.0)]);
        assert_eq!(tex.srcrects, vec![Rect::new(0.0, 0.0, 32.0, 48.0)]);
        assert_eq!(tex.angles, vec![0.0]);
    }

    #[test]
    fn draw_surface_culls_offscreen() {
        let mut c = canvas();
        let s = tux();
        c.draw_surface(&s, Vec2::new(-100.0, 0.0), Layer::OBJECTS);
        c.draw_surface(&s, Vec2::new(700.0, 0.0), Layer::OBJECTS);
        assert!(c.is_empty());
        c.draw_surface(&s, Vec2::new(-16.0, 0.0), Layer::OBJECTS);
        assert_eq!(c.len(), 1, "partially visible surfaces are kept");
    }

    #[test]
    fn draw_surface_ex_combines_flip_alpha_and_rotation() {
        let mut c = canvas();
        let mut t = *c.transform();
        t.flip = Flip::HORIZONTAL;
        t.alpha = 0.5;
        c.set_transform(t);

        let s = tux().flipped(Flip::BOTH);
        c.draw_surface_ex(&s, Vec2::zero(), 30.0, Color::RED, Blend::ADD, Layer::TILES);
        let (req, tex) = texture_request(&c);
        assert_eq!(req.flip, Flip::VERTICAL);
        assert_eq!(req.alpha, 0.5);
        assert_eq!(req.blend, Blend::ADD);
        assert_eq!(tex.color, Color::RED);
        assert_eq!(tex.angles, vec![30.0]);
    }

    #[test]
    fn draw_surface_part_offsets_by_region() {
        let mut c = canvas();
        let s = tux().region(PixelRect::from_size(16, 8, 16, 16));
        let style = PaintStyle::new().set_alpha(0.5).set_flip(Flip::HORIZONTAL);
        c.draw_surface_part(&s, Rect::new(2.0, 2.0, 4.0, 4.0), Rect::new(0.0, 0.0, 8.0, 8.0), Layer::HUD, style);
        let (req, tex) = texture_request(&c);
        assert_eq!(tex.srcrects, vec![Rect::new(18.0, 10.0, 4.0, 4.0)]);
        assert_eq!(tex.dstrects, vec![Rect::new(0.0, 0.0, 8.0, 8.0)]);
        assert_eq!(req.alpha, 0.5);
        assert_eq!(req.flip, Flip::HORIZONTAL);
    }

    #[test]
    fn draw_surface_scaled_uses_whole_region() {
        let mut c = canvas();
        let s = tux();
        c.draw_surface_scaled(&s, Rect::new(0.0, 0.0, 64.0, 96.0), Layer::HUD, PaintStyle::default());
        let (_, tex) = texture_request(&c);
        assert_eq!(tex.srcrects, vec![Rect::new(0.0, 0.0, 32.0, 48.0)]);
        assert_eq!(tex.dstrects, vec![Rect::new(0.0, 0.0, 64.0, 96.0)]);
    }

    #[test]
    fn draw_surface_batch_truncates_mismatched_lists() {
        let mut c = canvas();
        let s = tux();
        let src = [Rect::new(0.0, 0.0, 16.0, 16.0), Rect::new(16.0, 0.0, 16.0, 16.0)];
        let dst = [Rect::new(0.0, 0.0, 16.0, 16.0)];
        c.draw_surface_batch(&s, &src, &dst, Color::WHITE, Layer::TILES);
        let (_, tex) = texture_request(&c);
        assert_eq!(tex.len(), 1);
        assert_eq!((tex.srcrects.len(), tex.angles.len()), (1, 1));

        c.draw_surface_batch(&s, &[], &[], Color::WHITE, Layer::TILES);
        assert_eq!(c.len(), 1, "empty batch records nothing");
    }

    // ── text, shapes, pixels ──────────────────────────────────────────────

    #[test]
    fn center_text_is_anchored_mid_viewport() {
        let mut c = canvas();
        let font: FontPtr = std::rc::Rc::new(FixedFont::new(8.0, 16.0));
        c.draw_center_text(&font, "PAUSE", Vec2::new(0.0, 100.0), Layer::GUI, Color::WHITE);
        let req = c.requests().next().unwrap();
        let RequestKind::Text(text) = &req.kind else { panic!("expected text") };
        assert_eq!(text.alignment, FontAlignment::Center);
        assert_eq!(text.pos, Vec2::new(320.0, 100.0));
        assert_eq!(text.origin(), Vec2::new(300.0, 100.0));
    }

    #[test]
    fn gradient_and_shapes_are_translated() {
        let mut c = canvas();
        let mut t = *c.transform();
        t.translation = Vec2::new(10.0, 10.0);
        c.set_transform(t);

        c.draw_gradient(Color::BLUE, Color::BLACK, Layer::BACKGROUND0, GradientDirection::Vertical, Rect::new(10.0, 10.0, 640.0, 480.0));
        c.draw_triangle(Vec2::new(10.0, 10.0), Vec2::new(20.0, 10.0), Vec2::new(10.0, 20.0), Color::RED, Layer::OBJECTS);
        c.draw_inverse_ellipse(Vec2::new(330.0, 250.0), Vec2::new(100.0, 80.0), Color::BLACK, Layer::GUI);

        let kinds: Vec<_> = c.requests().map(|r| r.kind.clone()).collect();
        let RequestKind::Gradient(g) = &kinds[0] else { panic!() };
        assert_eq!(g.region, Rect::new(0.0, 0.0, 640.0, 480.0));
        assert_eq!(g.color_at(0.0), Color::BLUE);
        let RequestKind::Triangle(tri) = &kinds[1] else { panic!() };
        assert_eq!((tri.pos1, tri.pos2, tri.pos3), (Vec2::zero(), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)));
        let RequestKind::InverseEllipse(e) = &kinds[2] else { panic!() };
        assert_eq!(e.pos, Vec2::new(320.0, 240.0));
    }

    #[test]
    fn get_pixel_offscreen_is_black_and_unrecorded() {
        let mut c = canvas();
        let probe = c.get_pixel(Vec2::new(-1.0, 10.0));
        assert_eq!(probe.get(), Color::BLACK);
        let probe = c.get_pixel(Vec2::new(640.0, 10.0));
        assert_eq!(probe.get(), Color::BLACK);
        assert!(c.is_empty());

        c.get_pixel(Vec2::new(5.0, 5.0));
        assert_eq!(c.requests().next().unwrap().layer, Layer::GETPIXEL);
    }

    // ── properties ────────────────────────────────────────────────────────

    fn stable_sorted(layers: &[i32]) -> Vec<(i32, f32)> {
        let mut expected: Vec<(i32, f32)> = layers.iter().enumerate().map(|(i, &l)| (l, i as f32)).collect();
        expected.sort_by_key(|&(l, _)| l);
        expected
    }

    proptest! {
        #[test]
        fn render_all_is_sorted_and_stable(layers in prop::collection::vec(-400i32..700, 0..64)) {
            let mut c = canvas();
            for (i, &l) in layers.iter().enumerate() {
                mark(&mut c, i, l);
            }
            let mut r = Collect::default();
            c.render(&mut r, LightmapFilter::All);
            prop_assert_eq!(r.seen, stable_sorted(&layers));
        }

        #[test]
        fn lightmap_partitions_cover_all(layers in prop::collection::vec(-400i32..700, 0..64)) {
            let mut c = canvas();
            for (i, &l) in layers.iter().enumerate() {
                mark(&mut c, i, l);
            }
            let mut all = Collect::default();
            let mut below = Collect::default();
            let mut above = Collect::default();
            c.render(&mut all, LightmapFilter::All);
            c.render(&mut below, LightmapFilter::BelowLightmap);
            c.render(&mut above, LightmapFilter::AboveLightmap);

            prop_assert!(below.seen.iter().all(|&(l, _)| l < Layer::LIGHTMAP.0));
            prop_assert!(above.seen.iter().all(|&(l, _)| l >= Layer::LIGHTMAP.0));

            let mut union = below.seen.clone();
            union.extend(above.seen.iter().copied());
            prop_assert_eq!(union, all.seen);
        }
    }
}
