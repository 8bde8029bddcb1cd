use crate::coords::Rect;
use crate::layer::Layer;
use crate::paint::{Blend, Flip};

use super::draw::gradient::GradientRequest;
use super::draw::pixel::GetPixelRequest;
use super::draw::shapes::{FillRectRequest, InverseEllipseRequest, LineRequest, TriangleRequest};
use super::draw::surface::TextureRequest;
use super::draw::text::TextRequest;

/// Render target a canvas records for.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DrawingTarget {
    /// The visible scene.
    #[default]
    Colormap,
    /// The light accumulation buffer multiplied over the scene.
    Lightmap,
}

/// Renderer-agnostic request payload.
///
/// Extending the canvas:
/// - add a payload type and its `draw_*` helpers under `canvas::draw::*`
/// - add a new variant here
/// - handle it in renderers
#[derive(Debug, Clone)]
pub enum RequestKind {
    Texture(TextureRequest),
    Text(TextRequest),
    Gradient(GradientRequest),
    FillRect(FillRectRequest),
    InverseEllipse(InverseEllipseRequest),
    Line(LineRequest),
    Triangle(TriangleRequest),
    GetPixel(GetPixelRequest),
}

impl RequestKind {
    /// Stable short name, used by logging and the null renderer.
    pub fn name(&self) -> &'static str {
        match self {
            RequestKind::Texture(_) => "texture",
            RequestKind::Text(_) => "text",
            RequestKind::Gradient(_) => "gradient",
            RequestKind::FillRect(_) => "fill-rect",
            RequestKind::InverseEllipse(_) => "inverse-ellipse",
            RequestKind::Line(_) => "line",
            RequestKind::Triangle(_) => "triangle",
            RequestKind::GetPixel(_) => "get-pixel",
        }
    }
}

/// A recorded draw call.
///
/// Positions in the payload are already in screen space (the canvas
/// transform has been applied). `alpha` and `flip` include the transform's
/// contribution.
#[derive(Debug, Clone)]
pub struct DrawingRequest {
    pub layer: Layer,
    pub target: DrawingTarget,
    pub alpha: f32,
    pub blend: Blend,
    pub flip: Flip,
    /// Screen rectangle the request was recorded against.
    pub viewport: Rect,
    pub kind: RequestKind,
}
