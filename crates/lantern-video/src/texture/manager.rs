use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::{Rc, Weak};

use lantern_reader::ReaderMapping;

use crate::coords::PixelRect;
use crate::error::{VideoError, VideoResult};

use super::{ImageProbe, Sampler, Texture, TextureFilter, TextureLoader, TexturePtr, WrapMode};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TextureKey {
    path: PathBuf,
    crop: Option<PixelRect>,
    sampler: Sampler,
}

/// Entry counts reported by [`TextureManager::cache_stats`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct CacheStats {
    /// Entries whose texture is still referenced somewhere.
    pub live: usize,
    /// All entries, including ones whose texture has been dropped.
    pub total: usize,
}

/// Shared texture cache.
///
/// Entries are weak: the cache never keeps a texture alive on its own, so a
/// texture is released as soon as the last surface using it is dropped and
/// reloaded on the next request. Dead entries are swept by [`prune`](Self::prune)
/// or replaced on lookup.
///
/// Loading never fails from the caller's point of view: unreadable images and
/// out-of-bounds crops log a warning and yield the shared placeholder texture.
pub struct TextureManager {
    root: PathBuf,
    loader: Box<dyn TextureLoader>,
    cache: HashMap<TextureKey, Weak<Texture>>,
    missing: TexturePtr,
}

impl TextureManager {
    /// Manager resolving relative paths against the current directory.
    pub fn new() -> Self {
        Self::with_root(PathBuf::new())
    }

    /// Manager resolving relative paths against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::with_loader(root, ImageProbe)
    }

    pub fn with_loader(root: impl Into<PathBuf>, loader: impl TextureLoader + 'static) -> Self {
        Self {
            root: root.into(),
            loader: Box::new(loader),
            cache: HashMap::new(),
            missing: Rc::new(Texture::missing()),
        }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The shared placeholder handed out for failed loads.
    #[inline]
    pub fn missing_texture(&self) -> TexturePtr {
        Rc::clone(&self.missing)
    }

    /// Returns the texture for `path`, cropped to `rect` if given.
    pub fn get(&mut self, path: impl AsRef<Path>, rect: Option<PixelRect>) -> TexturePtr {
        self.get_with_sampler(path.as_ref(), rect, Sampler::default())
    }

    /// Returns the texture described by a `(file ...) (rect ...) (filter ...) (wrap-mode ...)`
    /// mapping.
    ///
    /// An explicit `rect` argument takes precedence over the mapping's own `rect`.
    pub fn get_from_mapping(
        &mut self,
        mapping: &ReaderMapping<'_>,
        rect: Option<PixelRect>,
    ) -> VideoResult<TexturePtr> {
        let file = mapping.get_string("file")?.ok_or(VideoError::MissingKey("file"))?;

        let rect = match rect {
            Some(r) => Some(r),
            None => match mapping.get_i32_vec("rect")? {
                None => None,
                Some(v) => match v[..] {
                    [x, y, w, h] => match PixelRect::checked_from_size(x, y, w, h) {
                        Some(r) => Some(r),
                        None => {
                            return Err(VideoError::InvalidValue {
                                key: "rect",
                                message: format!("rect {} {} {} {} exceeds the integer range", x, y, w, h),
                            });
                        }
                    },
                    _ => {
                        return Err(VideoError::InvalidValue {
                            key: "rect",
                            message: format!("expected 4 integers (x y w h), got {}", v.len()),
                        });
                    }
                },
            },
        };

        let mut sampler = Sampler::default();
        if let Some(name) = mapping.get_string("filter")? {
            sampler.filter = TextureFilter::from_name(name).ok_or_else(|| VideoError::InvalidValue {
                key: "filter",
                message: format!("unknown filter {:?}", name),
            })?;
        }
        if let Some(name) = mapping.get_string("wrap-mode")? {
            sampler.wrap = WrapMode::from_name(name).ok_or_else(|| VideoError::InvalidValue {
                key: "wrap-mode",
                message: format!("unknown wrap mode {:?}", name),
            })?;
        }

        Ok(self.get_with_sampler(Path::new(file), rect, sampler))
    }

    fn get_with_sampler(&mut self, path: &Path, crop: Option<PixelRect>, sampler: Sampler) -> TexturePtr {
        let key = TextureKey { path: self.root.join(path), crop, sampler };

        if let Some(texture) = self.cache.get(&key).and_then(Weak::upgrade) {
            log::debug!("texture cache hit: {}", key.path.display());
            return texture;
        }

        match self.load(&key) {
            Some(texture) => {
                let texture = Rc::new(texture);
                self.cache.insert(key, Rc::downgrade(&texture));
                texture
            }
            None => self.missing_texture(),
        }
    }

    fn load(&mut self, key: &TextureKey) -> Option<Texture> {
        let (width, height) = match self.loader.probe(&key.path) {
            Ok(size) => size,
            Err(err) => {
                log::warn!("{}; using placeholder texture", err);
                return None;
            }
        };
        log::debug!("texture loaded: {} ({}x{})", key.path.display(), width, height);

        match key.crop {
            None => Some(Texture::new(key.path.clone(), width, height).with_sampler(key.sampler)),
            Some(crop) if !crop.is_empty() && crop.fits_within(width as i32, height as i32) => {
                Some(Texture::cropped(key.path.clone(), crop, key.sampler))
            }
            Some(crop) => {
                log::warn!(
                    "crop {:?} does not fit {} ({}x{}); using placeholder texture",
                    crop,
                    key.path.display(),
                    width,
                    height
                );
                None
            }
        }
    }

    /// Drops cache entries whose textures are no longer referenced.
    pub fn prune(&mut self) {
        let before = self.cache.len();
        self.cache.retain(|_, t| t.strong_count() > 0);
        log::debug!("texture cache pruned {} dead entries", before - self.cache.len());
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            live: self.cache.values().filter(|t| t.strong_count() > 0).count(),
            total: self.cache.len(),
        }
    }
}

impl Default for TextureManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextureManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureManager")
            .field("root", &self.root)
            .field("cache", &self.cache_stats())
            .finish_non_exhaustive()
    }
}
