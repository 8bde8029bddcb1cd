//! Paint model shared by the canvas and renderers.
//!
//! Scope:
//! - color representation (straight alpha)
//! - blend equations, flip flags, per-draw paint style
//! - gradient directions
//!
//! Geometry types remain in `coords`.

pub mod blend;
pub mod color;
pub mod flip;
pub mod gradient;
pub mod style;

pub use blend::{Blend, BlendFactor, UnknownBlendMode};
pub use color::Color;
pub use flip::Flip;
pub use gradient::GradientDirection;
pub use style::PaintStyle;
