/// Axis along which a two-color gradient is interpolated.
///
/// The `*Sector` variants interpolate across the request's region instead of
/// the whole viewport, which is how sky gradients are split into bands.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum GradientDirection {
    #[default]
    Vertical,
    Horizontal,
    VerticalSector,
    HorizontalSector,
}

impl GradientDirection {
    /// Parses the names used in level files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "vertical" => Some(Self::Vertical),
            "horizontal" => Some(Self::Horizontal),
            "vertical_sector" => Some(Self::VerticalSector),
            "horizontal_sector" => Some(Self::HorizontalSector),
            _ => None,
        }
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::VerticalSector)
    }
}
