//! Coordinate and geometry types shared by the canvas, surfaces, and renderers.
//!
//! Canonical space:
//! - Pixels, origin top-left
//! - +X right, +Y down
//!
//! Float geometry (`Vec2`, `Rect`) is used for positions and destinations;
//! integer geometry (`PixelRect`) addresses texels inside a texture.

mod pixel_rect;
mod rect;
mod vec2;

pub use pixel_rect::PixelRect;
pub use rect::Rect;
pub use vec2::Vec2;
