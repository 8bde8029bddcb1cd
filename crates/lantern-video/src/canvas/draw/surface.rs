use std::rc::Rc;

use crate::canvas::{Canvas, RequestKind};
use crate::coords::{Rect, Vec2};
use crate::layer::Layer;
use crate::paint::{Blend, Color, PaintStyle};
use crate::surface::SurfacePtr;
use crate::texture::TexturePtr;

/// Textured quad batch payload.
///
/// `srcrects[i]` (texel space) is drawn into `dstrects[i]` (screen space),
/// rotated by `angles[i]` degrees about the destination center. The three
/// vectors always have the same length.
#[derive(Debug, Clone)]
pub struct TextureRequest {
    pub texture: TexturePtr,
    pub displacement_texture: Option<TexturePtr>,
    pub color: Color,
    pub srcrects: Vec<Rect>,
    pub dstrects: Vec<Rect>,
    pub angles: Vec<f32>,
}

impl TextureRequest {
    fn single(surface: &SurfacePtr, color: Color, src: Rect, dst: Rect, angle: f32) -> Self {
        Self {
            texture: Rc::clone(surface.texture()),
            displacement_texture: surface.displacement_texture().cloned(),
            color,
            srcrects: vec![src],
            dstrects: vec![dst],
            angles: vec![angle],
        }
    }

    /// Number of quads in the batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.dstrects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dstrects.is_empty()
    }
}

impl Canvas {
    /// Records `surface` at world position `pos`, untinted.
    #[inline]
    pub fn draw_surface(&mut self, surface: &SurfacePtr, pos: Vec2, layer: Layer) {
        self.draw_surface_ex(surface, pos, 0.0, Color::WHITE, Blend::default(), layer);
    }

    /// Records `surface` at world position `pos` with rotation, tint, and blending.
    ///
    /// The surface's own translate, scale, and rotation are applied on top.
    /// Surfaces entirely outside the visible world rectangle are skipped.
    pub fn draw_surface_ex(
        &mut self,
        surface: &SurfacePtr,
        pos: Vec2,
        angle: f32,
        color: Color,
        blend: Blend,
        layer: Layer,
    ) {
        let size = surface.size();
        let scale = surface.scale();
        let world = Rect::from_origin_size(
            pos + surface.translate(),
            Vec2::new(size.x * scale.x, size.y * scale.y),
        );

        if !world.overlaps(self.transform().cliprect()) {
            log::trace!("surface at {:?} culled", world.origin);
            return;
        }

        let dst = self.transform().apply_rect(world);
        let src = Rect::from(surface.source_region());
        let kind = RequestKind::Texture(TextureRequest::single(surface, color, src, dst, angle + surface.rotate()));

        let mut request = self.request(layer, kind);
        request.flip ^= surface.flip();
        request.blend = blend;
        self.push(request);
    }

    /// Records the part `srcrect` of `surface` stretched into `dstrect`.
    ///
    /// `srcrect` is relative to the surface's region.
    pub fn draw_surface_part(
        &mut self,
        surface: &SurfacePtr,
        srcrect: Rect,
        dstrect: Rect,
        layer: Layer,
        style: PaintStyle,
    ) {
        let region = surface.source_region();
        let src = srcrect.moved(Vec2::new(region.left as f32, region.top as f32));
        let dst = self.transform().apply_rect(dstrect);
        let kind = RequestKind::Texture(TextureRequest::single(surface, style.color(), src, dst, 0.0));

        let mut request = self.request(layer, kind);
        request.flip ^= surface.flip() ^ style.flip();
        request.alpha *= style.alpha();
        request.blend = style.blend();
        self.push(request);
    }

    /// Records the whole of `surface` stretched into `dstrect`.
    #[inline]
    pub fn draw_surface_scaled(&mut self, surface: &SurfacePtr, dstrect: Rect, layer: Layer, style: PaintStyle) {
        let size = surface.size();
        self.draw_surface_part(surface, Rect::new(0.0, 0.0, size.x, size.y), dstrect, layer, style);
    }

    /// Records many quads from one texture as a single request.
    ///
    /// `srcrects` are in texel space of the surface's texture (tilemaps pass
    /// tileset coordinates directly). Lists of different lengths are truncated
    /// to the shorter one; an empty batch records nothing.
    pub fn draw_surface_batch(
        &mut self,
        surface: &SurfacePtr,
        srcrects: &[Rect],
        dstrects: &[Rect],
        color: Color,
        layer: Layer,
    ) {
        if srcrects.len() != dstrects.len() {
            log::warn!(
                "surface batch with {} source and {} destination rects; truncating",
                srcrects.len(),
                dstrects.len()
            );
        }
        let n = srcrects.len().min(dstrects.len());
        if n == 0 {
            return;
        }

        let transform = *self.transform();
        let kind = RequestKind::Texture(TextureRequest {
            texture: Rc::clone(surface.texture()),
            displacement_texture: surface.displacement_texture().cloned(),
            color,
            srcrects: srcrects[..n].to_vec(),
            dstrects: dstrects[..n].iter().map(|&r| transform.apply_rect(r)).collect(),
            angles: vec![0.0; n],
        });

        let mut request = self.request(layer, kind);
        request.flip ^= surface.flip();
        self.push(request);
    }
}
