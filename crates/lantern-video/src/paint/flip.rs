use core::ops::{BitOr, BitXor, BitXorAssign};

/// Mirroring applied to a surface at draw time.
///
/// A two-bit set: horizontal and vertical. Flips compose with `^`, so applying
/// the same flip twice restores the original orientation.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Flip(u8);

impl Flip {
    pub const NONE: Flip = Flip(0);
    pub const HORIZONTAL: Flip = Flip(1);
    pub const VERTICAL: Flip = Flip(2);
    pub const BOTH: Flip = Flip(3);

    /// Builds a flip from the `(horizontal, vertical)` pair used in data files.
    #[inline]
    pub const fn from_axes(horizontal: bool, vertical: bool) -> Self {
        Flip((horizontal as u8) | ((vertical as u8) << 1))
    }

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        self.0 & Self::HORIZONTAL.0 != 0
    }

    #[inline]
    pub const fn is_vertical(self) -> bool {
        self.0 & Self::VERTICAL.0 != 0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl BitXor for Flip {
    type Output = Flip;
    #[inline]
    fn bitxor(self, rhs: Flip) -> Flip {
        Flip(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Flip {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Flip) {
        self.0 ^= rhs.0;
    }
}

impl BitOr for Flip {
    type Output = Flip;
    #[inline]
    fn bitor(self, rhs: Flip) -> Flip {
        Flip(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_is_an_involution() {
        for f in [Flip::NONE, Flip::HORIZONTAL, Flip::VERTICAL, Flip::BOTH] {
            for g in [Flip::NONE, Flip::HORIZONTAL, Flip::VERTICAL, Flip::BOTH] {
                assert_eq!(f ^ g ^ g, f);
            }
        }
    }

    #[test]
    fn from_axes_matches_constants() {
        assert_eq!(Flip::from_axes(false, false), Flip::NONE);
        assert_eq!(Flip::from_axes(true, false), Flip::HORIZONTAL);
        assert_eq!(Flip::from_axes(false, true), Flip::VERTICAL);
        assert_eq!(Flip::from_axes(true, true), Flip::HORIZONTAL | Flip::VERTICAL);
    }

    #[test]
    fn axis_queries() {
        assert!(Flip::BOTH.is_horizontal() && Flip::BOTH.is_vertical());
        assert!(!Flip::VERTICAL.is_horizontal());
        assert!(Flip::default().is_none());
    }
}
