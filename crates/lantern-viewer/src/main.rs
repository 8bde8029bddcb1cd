mod demo;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use lantern_video::logging::{LoggingConfig, init_logging};
use lantern_video::paint::Color;
use lantern_video::renderer::NullRenderer;
use lantern_video::texture::TextureManager;
use lantern_video::{Compositor, DrawingContext, LightmapFilter, Surface};

#[derive(Parser, Debug)]
#[command(name = "lantern-viewer")]
#[command(about = "Loads a surface, records a demo frame and replays it headless")]
#[command(version)]
struct Args {
    /// Surface description (`.surface`) or image file
    surface: PathBuf,

    /// Directory texture paths are resolved against; `SURFACE` is then
    /// relative to it. Defaults to the directory containing `SURFACE`.
    #[arg(long)]
    texture_root: Option<PathBuf>,

    /// Ambient light color; anything but white enables the lightmap
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"])]
    ambient: Option<Vec<f32>>,

    /// Which layers to list in the replay summary
    #[arg(long, value_enum, default_value_t = Filter::All)]
    filter: Filter,

    /// Log filter in env_logger syntax (falls back to RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Filter {
    All,
    Below,
    Above,
}

impl From<Filter> for LightmapFilter {
    fn from(f: Filter) -> Self {
        match f {
            Filter::All => LightmapFilter::All,
            Filter::Below => LightmapFilter::BelowLightmap,
            Filter::Above => LightmapFilter::AboveLightmap,
        }
    }
}

/// Splits `SURFACE` into a texture root and a path relative to it.
fn resolve(surface: &Path, texture_root: Option<&Path>) -> (PathBuf, PathBuf) {
    match texture_root {
        Some(root) => (root.to_path_buf(), surface.to_path_buf()),
        None => {
            let root = surface.parent().map(Path::to_path_buf).unwrap_or_default();
            let file = surface.file_name().map(PathBuf::from).unwrap_or_default();
            (root, file)
        }
    }
}

fn ambient_color(components: Option<&[f32]>) -> Result<Color> {
    let Some(components) = components else {
        return Ok(Color::WHITE);
    };
    if let Some(c) = components.iter().find(|c| !(0.0..=1.0).contains(*c)) {
        bail!("ambient components must be within 0..=1, got {c}");
    }
    let color = Color::from_components(components)
        .with_context(|| format!("expected R G B ambient components, got {} values", components.len()))?;
    // The lightmap is cleared to the ambient color; it is always opaque.
    Ok(Color { a: 1.0, ..color })
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig::with_filter(args.log.clone()));

    let ambient = ambient_color(args.ambient.as_deref())?;
    let (root, file) = resolve(&args.surface, args.texture_root.as_deref());
    log::info!("texture root: {}", root.display());

    let mut textures = TextureManager::with_root(&root);
    let surface = Surface::load(&mut textures, &file)
        .with_context(|| format!("failed to load surface {}", args.surface.display()))?;
    if surface.texture().is_missing() {
        log::warn!("{} has no usable texture; drawing the placeholder", file.display());
    }
    log::info!(
        "surface {}: {}x{} from {}",
        file.display(),
        surface.width(),
        surface.height(),
        surface.texture().source().display()
    );

    let mut ctx = DrawingContext::new(demo::SCREEN);
    ctx.set_ambient_color(ambient);
    let probe = demo::record_frame(&mut ctx, &surface);

    let mut renderer = NullRenderer::new().with_pixel_color(ambient);
    Compositor::render(&mut ctx, &mut renderer);

    let filter = LightmapFilter::from(args.filter);
    println!("frame: {} passes, {} lightmap composites", renderer.passes(), renderer.composites());
    for s in renderer.submissions().iter().filter(|s| filter.accepts(s.layer)) {
        println!("  {:<9} {:>5}  {}", format!("{:?}", s.target), s.layer.0, s.kind);
    }
    println!("center pixel: {:?}", probe.get());

    let stats = textures.cache_stats();
    println!("textures: {} live / {} cached", stats.live, stats.total);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_command_line() {
        let args = Args::try_parse_from([
            "lantern-viewer",
            "tux.surface",
            "--texture-root",
            "data/images",
            "--ambient",
            "0.2",
            "0.3",
            "0.4",
            "--filter",
            "below",
        ])
        .unwrap();
        assert_eq!(args.surface, PathBuf::from("tux.surface"));
        assert_eq!(args.ambient, Some(vec![0.2, 0.3, 0.4]));
        assert_eq!(args.filter, Filter::Below);
        assert!(args.log.is_none());
    }

    #[test]
    fn ambient_needs_three_components() {
        assert!(Args::try_parse_from(["lantern-viewer", "a.png", "--ambient", "0.5"]).is_err());
        assert_eq!(ambient_color(None).unwrap(), Color::WHITE);
        assert!(ambient_color(Some(&[1.5, 0.0, 0.0])).is_err());
        assert!(ambient_color(Some(&[0.5, 0.5])).is_err());
        assert_eq!(ambient_color(Some(&[0.2, 0.3, 0.4])).unwrap(), Color::rgb(0.2, 0.3, 0.4));
        assert_eq!(ambient_color(Some(&[0.2, 0.3, 0.4, 0.0])).unwrap(), Color::rgb(0.2, 0.3, 0.4));
    }

    #[test]
    fn surface_path_defaults_to_its_directory() {
        let (root, file) = resolve(Path::new("assets/demo.surface"), None);
        assert_eq!((root, file), (PathBuf::from("assets"), PathBuf::from("demo.surface")));

        let (root, file) = resolve(Path::new("demo.surface"), Some(Path::new("assets")));
        assert_eq!((root, file), (PathBuf::from("assets"), PathBuf::from("demo.surface")));
    }

    #[test]
    fn bundled_demo_surface_loads() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let mut textures = TextureManager::with_root(&dir);
        let surface = Surface::load(&mut textures, "demo.surface").unwrap();
        assert!(!surface.texture().is_missing());
        assert_eq!((surface.width(), surface.height()), (32, 32));
    }
}
