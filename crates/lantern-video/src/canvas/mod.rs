//! Canvas: per-frame draw request recording and layered replay.
//!
//! Responsibilities:
//! - store renderer-agnostic draw requests in a frame-scoped arena
//! - provide deterministic ordering (layer + insertion order)
//! - partition replay around the lightmap layer
//! - keep request-specific helpers isolated per file under `canvas::draw`

mod arena;
mod key;
mod list;
mod request;

pub mod draw;

pub use arena::{RequestArena, RequestHandle};
pub use draw::gradient::GradientRequest;
pub use draw::pixel::{GetPixelRequest, PixelProbe};
pub use draw::shapes::{FillRectRequest, InverseEllipseRequest, LineRequest, TriangleRequest};
pub use draw::surface::TextureRequest;
pub use draw::text::TextRequest;
pub use key::SortKey;
pub use list::Canvas;
pub use request::{DrawingRequest, DrawingTarget, RequestKind};
