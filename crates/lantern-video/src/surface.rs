use std::path::Path;
use std::rc::Rc;

use lantern_reader::{parse_str, ReaderMapping};

use crate::coords::{PixelRect, Vec2};
use crate::error::{VideoError, VideoResult};
use crate::paint::Flip;
use crate::texture::{TextureManager, TexturePtr};

/// Shared surface handle. Draw requests and game objects hold clones.
pub type SurfacePtr = Rc<Surface>;

/// A drawable region of a texture plus the transform it is drawn with.
///
/// Surfaces share their textures; each surface has its own region and
/// transform. Derived surfaces ([`flipped`](Self::flipped),
/// [`region`](Self::region)) are cheap: they clone texture handles only.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    diffuse_texture: TexturePtr,
    displacement_texture: Option<TexturePtr>,
    region: PixelRect,
    translate: Vec2,
    scale: Vec2,
    rotate: f32,
    rotate_center: Vec2,
    flip: Flip,
}

impl Surface {
    /// Root list name of a surface description file.
    pub const DESCRIPTION_ROOT: &'static str = "surface";

    /// Surface over the whole of `texture` with an identity transform.
    pub fn from_texture(texture: &TexturePtr) -> SurfacePtr {
        Rc::new(Self::whole(Rc::clone(texture), None))
    }

    /// Surface over an image file, optionally loaded pre-cropped to `rect`.
    ///
    /// Unreadable files produce a surface over the placeholder texture.
    pub fn from_file(
        textures: &mut TextureManager,
        filename: impl AsRef<Path>,
        rect: Option<PixelRect>,
    ) -> SurfacePtr {
        let texture = textures.get(filename, rect);
        Rc::new(Self::whole(texture, None))
    }

    /// Surface from a description mapping:
    ///
    /// ```text
    /// (diffuse-texture (file "tux.png"))
    /// (displacement-texture (file "tux-displace.png"))
    /// (translate 0 -4) (scale 1 1) (rotate 90) (rotate-center 16 16)
    /// (flip #t #f)
    /// ```
    ///
    /// Absent keys keep the identity transform. `rect` crops both textures.
    pub fn from_reader(
        textures: &mut TextureManager,
        mapping: &ReaderMapping<'_>,
        rect: Option<PixelRect>,
    ) -> VideoResult<SurfacePtr> {
        let diffuse_texture = match mapping.get_mapping("diffuse-texture")? {
            Some(m) => textures.get_from_mapping(&m, rect)?,
            None => return Err(VideoError::MissingDiffuseTexture),
        };

        let displacement_texture = match mapping.get_mapping("displacement-texture")? {
            Some(m) => Some(textures.get_from_mapping(&m, rect)?),
            None => None,
        };

        let mut surface = Self::whole(diffuse_texture, displacement_texture);

        if let Some(v) = read_vec2(mapping, "translate")? {
            surface.translate = v;
        }
        if let Some(v) = read_vec2(mapping, "scale")? {
            surface.scale = v;
        }
        if let Some(r) = mapping.get_f32("rotate")? {
            surface.rotate = r;
        }
        if let Some(v) = read_vec2(mapping, "rotate-center")? {
            surface.rotate_center = v;
        }
        if let Some(flags) = mapping.get_bool_vec("flip")? {
            let [h, v, ..] = flags[..] else {
                return Err(VideoError::InvalidValue {
                    key: "flip",
                    message: format!("expected 2 booleans (horizontal vertical), got {}", flags.len()),
                });
            };
            surface.flip ^= Flip::from_axes(h, v);
        }

        Ok(Rc::new(surface))
    }

    /// Parses a description document whose root is `(surface ...)`.
    pub fn from_description(textures: &mut TextureManager, src: &str) -> VideoResult<SurfacePtr> {
        let doc = parse_str(src)?;
        let root = doc.root().ok_or(VideoError::MissingKey(Self::DESCRIPTION_ROOT))?;
        if root.name != Self::DESCRIPTION_ROOT {
            return Err(VideoError::InvalidValue {
                key: Self::DESCRIPTION_ROOT,
                message: format!("expected root ({} ...), found ({} ...)", Self::DESCRIPTION_ROOT, root.name),
            });
        }
        Self::from_reader(textures, &root.mapping, None)
    }

    /// Loads `path`: `.surface` files are parsed as descriptions, anything
    /// else is treated as an image.
    pub fn load(textures: &mut TextureManager, path: impl AsRef<Path>) -> VideoResult<SurfacePtr> {
        let path = path.as_ref();
        if path.extension().is_some_and(|e| e == "surface") {
            let src = std::fs::read_to_string(textures.root().join(path))?;
            Self::from_description(textures, &src)
        } else {
            Ok(Self::from_file(textures, path, None))
        }
    }

    fn whole(diffuse_texture: TexturePtr, displacement_texture: Option<TexturePtr>) -> Self {
        Self {
            region: diffuse_texture.bounds(),
            diffuse_texture,
            displacement_texture,
            translate: Vec2::zero(),
            scale: Vec2::one(),
            rotate: 0.0,
            rotate_center: Vec2::zero(),
            flip: Flip::NONE,
        }
    }

    /// Copy sharing the textures, with `flip` composed onto the current flip.
    pub fn flipped(&self, flip: Flip) -> SurfacePtr {
        Rc::new(Self { flip: self.flip ^ flip, ..self.clone() })
    }

    /// Copy sharing the textures, showing `rect` of the texture.
    ///
    /// `rect` is not checked against the texture bounds.
    pub fn region(&self, rect: PixelRect) -> SurfacePtr {
        Rc::new(Self { region: rect, ..self.clone() })
    }

    #[inline]
    pub fn texture(&self) -> &TexturePtr {
        &self.diffuse_texture
    }

    #[inline]
    pub fn displacement_texture(&self) -> Option<&TexturePtr> {
        self.displacement_texture.as_ref()
    }

    #[inline]
    pub fn source_region(&self) -> PixelRect {
        self.region
    }

    #[inline]
    pub fn translate(&self) -> Vec2 {
        self.translate
    }

    #[inline]
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    #[inline]
    pub fn rotate(&self) -> f32 {
        self.rotate
    }

    #[inline]
    pub fn rotate_center(&self) -> Vec2 {
        self.rotate_center
    }

    #[inline]
    pub fn flip(&self) -> Flip {
        self.flip
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.region.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.region.height()
    }

    /// Region size as a float vector.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }
}

fn read_vec2(mapping: &ReaderMapping<'_>, key: &'static str) -> VideoResult<Option<Vec2>> {
    match mapping.get_f32_vec(key)? {
        None => Ok(None),
        Some(v) => match v[..] {
            [x, y, ..] => Ok(Some(Vec2::new(x, y))),
            _ => Err(VideoError::InvalidValue {
                key,
                message: format!("expected 2 numbers, got {}", v.len()),
            }),
        },
    }
}
