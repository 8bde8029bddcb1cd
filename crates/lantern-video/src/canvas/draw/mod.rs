//! Request payloads and the `Canvas::draw_*` helpers that record them.

pub mod gradient;
pub mod pixel;
pub mod shapes;
pub mod surface;
pub mod text;
