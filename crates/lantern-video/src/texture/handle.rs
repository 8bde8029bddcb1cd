use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::coords::PixelRect;

/// Shared texture handle. Surfaces and draw requests hold clones.
pub type TexturePtr = Rc<Texture>;

/// Minification/magnification filter.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextureFilter {
    Nearest,
    #[default]
    Linear,
}

impl TextureFilter {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "nearest" => Some(Self::Nearest),
            "linear" => Some(Self::Linear),
            _ => None,
        }
    }
}

/// Behavior when sampling outside `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum WrapMode {
    #[default]
    Clamp,
    Repeat,
    Mirror,
}

impl WrapMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "clamp" => Some(Self::Clamp),
            "repeat" => Some(Self::Repeat),
            "mirror" => Some(Self::Mirror),
            _ => None,
        }
    }
}

/// Sampling options; part of the texture cache key.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Sampler {
    pub filter: TextureFilter,
    pub wrap: WrapMode,
}

/// Texture metadata.
///
/// `width`/`height` are the pixel size of the texture as seen by surfaces:
/// for a texture loaded pre-cropped, that is the crop size, not the size of
/// the source image.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    source: PathBuf,
    crop: Option<PixelRect>,
    width: u32,
    height: u32,
    sampler: Sampler,
}

impl Texture {
    /// Source key of the shared placeholder used when a load fails.
    pub const MISSING_SOURCE: &'static str = "<missing>";
    const MISSING_SIZE: u32 = 16;

    pub fn new(source: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            source: source.into(),
            crop: None,
            width,
            height,
            sampler: Sampler::default(),
        }
    }

    /// Texture covering `crop` of `source`; its size is the crop size.
    pub(crate) fn cropped(source: PathBuf, crop: PixelRect, sampler: Sampler) -> Self {
        Self {
            source,
            crop: Some(crop),
            width: crop.width().max(0) as u32,
            height: crop.height().max(0) as u32,
            sampler,
        }
    }

    pub(crate) fn with_sampler(mut self, sampler: Sampler) -> Self {
        self.sampler = sampler;
        self
    }

    pub(crate) fn missing() -> Self {
        Self::new(Self::MISSING_SOURCE, Self::MISSING_SIZE, Self::MISSING_SIZE)
    }

    #[inline]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Sub-rectangle of the source image this texture covers, if cropped.
    #[inline]
    pub fn crop(&self) -> Option<PixelRect> {
        self.crop
    }

    #[inline]
    pub fn image_width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn image_height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn sampler(&self) -> Sampler {
        self.sampler
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        self.source.as_os_str() == Self::MISSING_SOURCE
    }

    /// The full-texture region `(0, 0, width, height)`.
    #[inline]
    pub fn bounds(&self) -> PixelRect {
        PixelRect::from_size(0, 0, self.width as i32, self.height as i32)
    }
}
