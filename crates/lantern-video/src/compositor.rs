use crate::canvas::DrawingTarget;
use crate::context::DrawingContext;
use crate::layer::LightmapFilter;
use crate::renderer::Renderer;

/// Replays a drawing context into a renderer, compositing the lightmap.
///
/// Lit frame (ambient light is not white):
/// 1. light canvas, all layers, into the lightmap (cleared to the ambient color)
/// 2. color canvas below `Layer::LIGHTMAP` into the colormap
/// 3. lightmap multiplied over the colormap
/// 4. color canvas at and above `Layer::LIGHTMAP` (HUD, GUI) on top
///
/// Unlit frame: the color canvas in one pass.
#[derive(Debug, Default, Copy, Clone)]
pub struct Compositor;

impl Compositor {
    pub fn render<R: Renderer + ?Sized>(context: &mut DrawingContext, renderer: &mut R) {
        let use_lightmap = context.use_lightmap();
        let ambient = context.ambient_color();
        let (color, light) = context.canvases_mut();

        if use_lightmap {
            renderer.start_draw(DrawingTarget::Lightmap, Some(ambient));
            light.render(renderer, LightmapFilter::All);
            renderer.end_draw();

            renderer.start_draw(DrawingTarget::Colormap, None);
            color.render(renderer, LightmapFilter::BelowLightmap);
            renderer.composite_lightmap();
            color.render(renderer, LightmapFilter::AboveLightmap);
            renderer.end_draw();
        } else {
            renderer.start_draw(DrawingTarget::Colormap, None);
            color.render(renderer, LightmapFilter::All);
            renderer.end_draw();
        }

        log::trace!(
            "composited frame: {} color + {} light requests (lightmap {})",
            color.len(),
            light.len(),
            if use_lightmap { "on" } else { "off" }
        );
    }
}
