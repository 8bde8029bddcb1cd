use std::path::Path;

use crate::error::{VideoError, VideoResult};

/// Source of image sizes for the texture manager.
///
/// Implementations report the pixel size of the image at `path` without
/// keeping any pixel data around.
pub trait TextureLoader {
    fn probe(&mut self, path: &Path) -> VideoResult<(u32, u32)>;
}

/// Reads sizes from image file headers via the `image` crate.
#[derive(Debug, Default, Copy, Clone)]
pub struct ImageProbe;

impl TextureLoader for ImageProbe {
    fn probe(&mut self, path: &Path) -> VideoResult<(u32, u32)> {
        image::image_dimensions(path).map_err(|source| VideoError::Image {
            path: path.to_path_buf(),
            source,
        })
    }
}
