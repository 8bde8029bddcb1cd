/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// Unlike premultiplied UI colors, game assets and level files express colors
/// with independent alpha, and blending is selected per request via [`Blend`].
///
/// [`Blend`]: super::Blend
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Builds a color from 3 (opaque) or 4 components, as found in data files.
    pub fn from_components(c: &[f32]) -> Option<Self> {
        match *c {
            [r, g, b] => Some(Self::rgb(r, g, b)),
            [r, g, b, a] => Some(Self::new(r, g, b, a)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl Default for Color {
    /// Opaque white: the neutral tint.
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_white() {
        assert_eq!(Color::default(), Color::WHITE);
    }

    #[test]
    fn from_components_accepts_rgb_and_rgba() {
        assert_eq!(Color::from_components(&[1.0, 0.5, 0.0]), Some(Color::rgb(1.0, 0.5, 0.0)));
        assert_eq!(Color::from_components(&[0.0, 0.0, 0.0, 0.5]), Some(Color::new(0.0, 0.0, 0.0, 0.5)));
        assert_eq!(Color::from_components(&[1.0]), None);
    }
}
