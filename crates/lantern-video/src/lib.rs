//! Lantern video layer.
//!
//! Records a frame's draw calls into layered canvases and replays them
//! back-to-front into a [`Renderer`](renderer::Renderer), with an optional
//! lightmap pass. Surfaces pair shared textures with a source region and a
//! transform, and can be described in S-expression data files.

pub mod canvas;
pub mod compositor;
pub mod context;
pub mod coords;
pub mod error;
pub mod font;
pub mod layer;
pub mod logging;
pub mod paint;
pub mod renderer;
pub mod surface;
pub mod texture;

pub use canvas::{Canvas, DrawingRequest, DrawingTarget, RequestKind};
pub use compositor::Compositor;
pub use context::DrawingContext;
pub use error::{VideoError, VideoResult};
pub use layer::{Layer, LightmapFilter};
pub use surface::{Surface, SurfacePtr};
