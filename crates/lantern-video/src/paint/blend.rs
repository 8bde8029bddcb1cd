use std::str::FromStr;

/// Source/destination factor for fixed-function blending.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstColor,
    OneMinusDstColor,
    DstAlpha,
    OneMinusDstAlpha,
}

/// Blend equation `src * sfactor + dst * dfactor`.
///
/// The default is standard straight-alpha blending.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Blend {
    pub sfactor: BlendFactor,
    pub dfactor: BlendFactor,
}

impl Blend {
    /// Overwrites the destination.
    pub const NONE: Blend = Blend::new(BlendFactor::One, BlendFactor::Zero);
    /// Straight-alpha "over".
    pub const BLEND: Blend = Blend::new(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
    /// Additive, used for lights and glows.
    pub const ADD: Blend = Blend::new(BlendFactor::SrcAlpha, BlendFactor::One);
    /// Multiplicative, used to darken with the lightmap.
    pub const MOD: Blend = Blend::new(BlendFactor::DstColor, BlendFactor::Zero);

    #[inline]
    pub const fn new(sfactor: BlendFactor, dfactor: BlendFactor) -> Self {
        Self { sfactor, dfactor }
    }
}

impl Default for Blend {
    fn default() -> Self {
        Self::BLEND
    }
}

/// Error returned when a blend mode name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown blend mode {0:?} (expected none, blend, add or mod)")]
pub struct UnknownBlendMode(pub String);

impl FromStr for Blend {
    type Err = UnknownBlendMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Blend::NONE),
            "blend" => Ok(Blend::BLEND),
            "add" => Ok(Blend::ADD),
            "mod" => Ok(Blend::MOD),
            other => Err(UnknownBlendMode(other.to_string())),
        }
    }
}
