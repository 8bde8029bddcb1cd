use core::cmp::Ordering;

/// Draw-order key for canvas requests.
///
/// Lower values are drawn first (further back). The predefined constants
/// describe where the game places each kind of content.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Layer(pub i32);

impl Layer {
    /// Image/gradient backgrounds (should cover the entire screen).
    pub const BACKGROUND0: Layer = Layer(-300);
    /// Particle backgrounds.
    pub const BACKGROUND1: Layer = Layer(-200);
    /// Tilemap backgrounds.
    pub const BACKGROUNDTILES: Layer = Layer(-100);
    /// Solid tilemaps.
    pub const TILES: Layer = Layer(0);
    /// Ordinary objects.
    pub const OBJECTS: Layer = Layer(50);
    /// Objects that pass through walls.
    pub const FLOATINGOBJECTS: Layer = Layer(150);
    pub const FOREGROUNDTILES: Layer = Layer(200);
    pub const FOREGROUND0: Layer = Layer(300);
    pub const FOREGROUND1: Layer = Layer(400);
    /// Split point between the lit scene and unlit overlays.
    pub const LIGHTMAP: Layer = Layer(450);
    /// Hitpoints, time, coins, etc.
    pub const HUD: Layer = Layer(500);
    /// Menus, mouse, console etc.
    pub const GUI: Layer = Layer(600);
    /// Pixel read-backs run after everything else has been drawn.
    pub const GETPIXEL: Layer = Layer(8000);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    /// Layer offset by `delta`, e.g. `Layer::OBJECTS.offset(1)` to draw just above objects.
    #[inline]
    pub const fn offset(self, delta: i32) -> Self {
        Self(self.0 + delta)
    }

    #[inline]
    pub const fn is_below_lightmap(self) -> bool {
        self.0 < Self::LIGHTMAP.0
    }
}

impl Ord for Layer {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for Layer {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i32> for Layer {
    #[inline]
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// Which requests a [`Canvas::render`](crate::canvas::Canvas::render) pass replays.
///
/// `BelowLightmap` and `AboveLightmap` partition all layers: a request lands in
/// exactly one of them.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LightmapFilter {
    /// Layers `< Layer::LIGHTMAP`.
    BelowLightmap,
    /// Layers `>= Layer::LIGHTMAP`.
    AboveLightmap,
    #[default]
    All,
}

impl LightmapFilter {
    #[inline]
    pub fn accepts(self, layer: Layer) -> bool {
        match self {
            LightmapFilter::BelowLightmap => layer.is_below_lightmap(),
            LightmapFilter::AboveLightmap => !layer.is_below_lightmap(),
            LightmapFilter::All => true,
        }
    }
}
