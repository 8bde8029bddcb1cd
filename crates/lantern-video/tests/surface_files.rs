//! Surfaces and textures backed by real files on disk.

use std::fs;
use std::path::Path;
use std::rc::Rc;

use lantern_video::coords::{PixelRect, Vec2};
use lantern_video::paint::Flip;
use lantern_video::texture::{ImageProbe, TextureLoader, TextureManager, WrapMode};
use lantern_video::{Surface, VideoError};

fn write_png(dir: &Path, name: &str, w: u32, h: u32) {
    image::RgbaImage::new(w, h).save(dir.join(name)).unwrap();
}

#[test]
fn image_probe_reads_header_size() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "tiles.png", 48, 16);

    let size = ImageProbe.probe(&dir.path().join("tiles.png")).unwrap();
    assert_eq!(size, (48, 16));

    let err = ImageProbe.probe(&dir.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, VideoError::Image { .. }));
}

#[test]
fn plain_image_loads_relative_to_root() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "tux.png", 32, 48);

    let mut tm = TextureManager::with_root(dir.path());
    let s = Surface::load(&mut tm, "tux.png").unwrap();
    assert_eq!((s.width(), s.height()), (32, 48));
    assert!(!s.texture().is_missing());
}

#[test]
fn surface_description_file() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "tux.png", 64, 64);
    write_png(dir.path(), "tux-displace.png", 64, 64);
    fs::write(
        dir.path().join("tux.surface"),
        r#"
        ; big tux, mirrored
        (surface
          (diffuse-texture (file "tux.png") (rect 0 0 32 48) (wrap-mode "repeat"))
          (displacement-texture (file "tux-displace.png") (rect 0 0 32 48))
          (translate 0 -4)
          (scale 2 2)
          (flip #t #f))
        "#,
    )
    .unwrap();

    let mut tm = TextureManager::with_root(dir.path());
    let s = Surface::load(&mut tm, "tux.surface").unwrap();
    assert_eq!(s.source_region(), PixelRect::new(0, 0, 32, 48));
    assert_eq!(s.translate(), Vec2::new(0.0, -4.0));
    assert_eq!(s.scale(), Vec2::new(2.0, 2.0));
    assert_eq!(s.flip(), Flip::HORIZONTAL);
    assert_eq!(s.texture().sampler().wrap, WrapMode::Repeat);
    assert!(s.displacement_texture().is_some());

    // A second load shares the cached texture.
    let again = Surface::load(&mut tm, "tux.surface").unwrap();
    assert!(Rc::ptr_eq(again.texture(), s.texture()));
}

#[test]
fn missing_image_falls_back_to_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let mut tm = TextureManager::with_root(dir.path());
    let s = Surface::load(&mut tm, "ghost.png").unwrap();
    assert!(s.texture().is_missing());
    assert!(Rc::ptr_eq(s.texture(), &tm.missing_texture()));
}

#[test]
fn missing_description_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut tm = TextureManager::with_root(dir.path());
    let err = Surface::load(&mut tm, "ghost.surface").unwrap_err();
    assert!(matches!(err, VideoError::Io(_)));
}
