/// Integer rectangle in texel space, stored as edges (`right`/`bottom` exclusive).
///
/// Used for texture regions. Negative or inverted rectangles are representable;
/// callers validating against a texture must check bounds themselves.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelRect {
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Rectangle at `(left, top)` with the given size.
    ///
    /// Edges past `i32::MAX` saturate; use [`checked_from_size`](Self::checked_from_size)
    /// for sizes read from data files.
    #[inline]
    pub const fn from_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left.saturating_add(width),
            bottom: top.saturating_add(height),
        }
    }

    /// Like [`from_size`](Self::from_size), but `None` if an edge overflows.
    #[inline]
    pub const fn checked_from_size(left: i32, top: i32, width: i32, height: i32) -> Option<Self> {
        match (left.checked_add(width), top.checked_add(height)) {
            (Some(right), Some(bottom)) => Some(Self { left, top, right, bottom }),
            _ => None,
        }
    }

    #[inline]
    pub const fn width(self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub const fn height(self) -> i32 {
        self.bottom - self.top
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// True if `self` lies entirely inside `[0, width) x [0, height)`.
    #[inline]
    pub const fn fits_within(self, width: i32, height: i32) -> bool {
        self.left >= 0 && self.top >= 0 && self.right <= width && self.bottom <= height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_size_sets_edges() {
        let r = PixelRect::from_size(3, 4, 10, 20);
        assert_eq!(r, PixelRect::new(3, 4, 13, 24));
        assert_eq!((r.width(), r.height()), (10, 20));
    }

    #[test]
    fn oversized_edges_do_not_wrap() {
        assert_eq!(PixelRect::checked_from_size(i32::MAX - 10, 0, 11, 4), None);
        assert_eq!(PixelRect::checked_from_size(0, i32::MAX, 1, 1), None);
        assert_eq!(PixelRect::checked_from_size(2, 3, 4, 5), Some(PixelRect::new(2, 3, 6, 8)));
        assert_eq!(PixelRect::from_size(i32::MAX - 10, 0, 11, 4).right, i32::MAX);
    }

    #[test]
    fn fits_within_bounds() {
        assert!(PixelRect::new(0, 0, 32, 32).fits_within(32, 32));
        assert!(!PixelRect::new(0, 0, 33, 32).fits_within(32, 32));
        assert!(!PixelRect::new(-1, 0, 4, 4).fits_within(32, 32));
    }

    #[test]
    fn empty_when_inverted() {
        assert!(PixelRect::new(5, 5, 2, 9).is_empty());
        assert!(!PixelRect::new(0, 0, 1, 1).is_empty());
    }
}
