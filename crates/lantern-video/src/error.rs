use std::path::PathBuf;

use lantern_reader::{ParseError, ReaderError};

/// Errors produced by the video layer.
///
/// Texture load failures are not listed here: the texture manager recovers
/// from them with a placeholder. What remains are malformed data files.
#[derive(thiserror::Error, Debug)]
pub enum VideoError {
    /// Data file is not valid S-expression syntax.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Data file has a key holding the wrong kind of value.
    #[error(transparent)]
    Reader(#[from] ReaderError),

    /// A required key is absent.
    #[error("missing required key '{0}'")]
    MissingKey(&'static str),

    /// A key is present with a value outside its allowed set.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: &'static str, message: String },

    /// A surface description has no `diffuse-texture`.
    #[error("surface description has no diffuse-texture")]
    MissingDiffuseTexture,

    /// Image header could not be read.
    #[error("cannot read image '{}': {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// File could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used throughout the video layer.
pub type VideoResult<T> = Result<T, VideoError>;
