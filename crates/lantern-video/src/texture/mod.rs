//! Texture handles and the shared texture cache.
//!
//! A `Texture` here is metadata: where the pixels come from, how large they
//! are, and how they are sampled. Uploading pixels is the renderer backend's
//! business.

mod loader;
mod manager;
mod handle;

pub use loader::{ImageProbe, TextureLoader};
pub use manager::{CacheStats, TextureManager};
pub use handle::{Sampler, Texture, TextureFilter, TexturePtr, WrapMode};

#[cfg(test)]
pub(crate) use manager::tests::manager as fake_manager;
