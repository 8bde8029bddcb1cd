use crate::layer::Layer;

/// Position of a request in the replay of its canvas.
///
/// Requests replay by `layer`, so backgrounds end up under tiles, tiles under
/// objects, and the HUD above the lightmap. Requests sharing a layer replay in
/// the order they were recorded. Field order matters: the derived `Ord`
/// compares `layer` first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub layer: Layer,
    /// Recording index within the current frame.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(layer: Layer, order: u32) -> Self {
        Self { layer, order }
    }
}
