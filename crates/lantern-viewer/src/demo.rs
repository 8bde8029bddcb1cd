//! The demo frame the viewer records.

use std::rc::Rc;

use lantern_video::canvas::PixelProbe;
use lantern_video::coords::{Rect, Vec2};
use lantern_video::font::{FixedFont, FontAlignment, FontPtr};
use lantern_video::paint::{Blend, Color, Flip, GradientDirection, PaintStyle};
use lantern_video::{DrawingContext, Layer, SurfacePtr};

pub const SCREEN: Rect = Rect::new(0.0, 0.0, 640.0, 480.0);

/// Camera position for the scrolled part of the frame.
const CAMERA: Vec2 = Vec2::new(160.0, 0.0);

/// Records one frame showing `surface` in the ways a level would use it.
///
/// Returns a probe for the color under the screen center.
pub fn record_frame(ctx: &mut DrawingContext, surface: &SurfacePtr) -> PixelProbe {
    let font: FontPtr = Rc::new(FixedFont::new(8.0, 16.0));
    let size = surface.size();

    // Screen-space background.
    ctx.color().draw_gradient(
        Color::rgb(0.1, 0.1, 0.3),
        Color::rgb(0.4, 0.6, 0.9),
        Layer::BACKGROUND0,
        GradientDirection::Vertical,
        SCREEN,
    );

    ctx.push_transform();
    ctx.set_translation(CAMERA);

    // A row of tiles, then the surface as an object, mirrored and tinted.
    let tiles: Vec<Rect> = (0..8)
        .map(|i| Rect::new(CAMERA.x + i as f32 * size.x, 400.0, size.x, size.y))
        .collect();
    let src = vec![Rect::from(surface.source_region()); tiles.len()];
    ctx.color().draw_surface_batch(surface, &src, &tiles, Color::WHITE, Layer::TILES);

    let center = CAMERA + SCREEN.size / 2.0;
    ctx.color().draw_surface(surface, center, Layer::OBJECTS);
    ctx.color().draw_surface_ex(
        &surface.flipped(Flip::HORIZONTAL),
        center - Vec2::new(96.0, 0.0),
        15.0,
        Color::rgb(1.0, 0.8, 0.8),
        Blend::BLEND,
        Layer::OBJECTS.offset(1),
    );
    ctx.color().draw_surface_part(
        surface,
        Rect::new(0.0, 0.0, size.x / 2.0, size.y / 2.0),
        Rect::from_origin_size(center + Vec2::new(96.0, 0.0), size),
        Layer::FOREGROUND0,
        PaintStyle::new().set_alpha(0.5),
    );
    // Off to the left of the camera; culled.
    ctx.color().draw_surface(surface, Vec2::new(-500.0, 0.0), Layer::OBJECTS);

    // Lights around the objects.
    ctx.light().draw_filled_rect_rounded(
        Rect::from_origin_size(center - Vec2::new(64.0, 64.0), Vec2::new(128.0, 128.0)),
        Color::rgb(1.0, 0.9, 0.6),
        32.0,
        Layer::OBJECTS,
    );
    ctx.light().draw_triangle(
        center,
        center + Vec2::new(-80.0, 200.0),
        center + Vec2::new(80.0, 200.0),
        Color::rgb(0.5, 0.5, 0.7),
        Layer::OBJECTS,
    );

    let probe = ctx.color().get_pixel(center);
    ctx.pop_transform();

    // HUD, unaffected by the camera and the lightmap.
    ctx.color().draw_line(Vec2::new(0.0, 24.0), Vec2::new(SCREEN.width(), 24.0), Color::WHITE, Layer::HUD);
    ctx.color().draw_text(
        &font,
        format!("{}x{}", surface.width(), surface.height()),
        Vec2::new(8.0, 4.0),
        FontAlignment::Left,
        Layer::HUD,
        Color::WHITE,
    );
    ctx.color().draw_center_text(&font, "lantern", Vec2::new(0.0, 4.0), Layer::HUD, Color::YELLOW);
    ctx.color().draw_inverse_ellipse(SCREEN.center(), Vec2::new(560.0, 400.0), Color::BLACK, Layer::GUI);

    probe
}
