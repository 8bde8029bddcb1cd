use super::{PixelRect, Vec2};

/// Axis-aligned float rectangle, origin at the top-left corner.
///
/// Used for destination rectangles and world-space regions. Sizes may be
/// negative until [`normalized`](Self::normalized).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::from_origin_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Smallest rectangle with `p1` and `p2` as opposite corners.
    #[inline]
    pub fn from_corners(p1: Vec2, p2: Vec2) -> Self {
        Self::from_origin_size(p1, p2 - p1).normalized()
    }

    /// Bottom-right corner.
    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn moved(self, offset: Vec2) -> Self {
        Self::from_origin_size(self.origin + offset, self.size)
    }

    /// Same area with non-negative width and height.
    pub fn normalized(self) -> Self {
        let (x, w) = if self.size.x < 0.0 { (self.origin.x + self.size.x, -self.size.x) } else { (self.origin.x, self.size.x) };
        let (y, h) = if self.size.y < 0.0 { (self.origin.y + self.size.y, -self.size.y) } else { (self.origin.y, self.size.y) };
        Rect::new(x, y, w, h)
    }

    /// Half-open containment: the right and bottom edges are outside.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        let max = r.max();
        (r.origin.x..max.x).contains(&p.x) && (r.origin.y..max.y).contains(&p.y)
    }

    /// Closed overlap test: rectangles touching at an edge overlap.
    pub fn overlaps(self, other: Rect) -> bool {
        let (a, b) = (self.normalized(), other.normalized());
        let (a_max, b_max) = (a.max(), b.max());
        a.origin.x <= b_max.x && b.origin.x <= a_max.x && a.origin.y <= b_max.y && b.origin.y <= a_max.y
    }
}

impl From<PixelRect> for Rect {
    #[inline]
    fn from(r: PixelRect) -> Self {
        Rect::new(r.left as f32, r.top as f32, r.width() as f32, r.height() as f32)
    }
}
