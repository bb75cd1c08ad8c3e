//! Error type shared by every pipeline stage and the batch driver.

use std::path::PathBuf;

use thiserror::Error;

use crate::color::ColorVariant;
use crate::icon::SizePx;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while generating icons.
#[derive(Debug, Error)]
pub enum Error {
    /// The mask has no pixel with a non-zero alpha, so it has no bounding box.
    #[error("mask contains no non-transparent pixels")]
    EmptyMask,

    /// A base texture is smaller than the square that must be cut out of it.
    #[error("texture is {width}x{height} but a {required}x{required} sample is required")]
    TextureTooSmall {
        width: u32,
        height: u32,
        required: u32,
    },

    /// The sample region and the normalized mask disagree in size.
    #[error(
        "sample is {}x{} but mask is {}x{}",
        .sample.width,
        .sample.height,
        .mask.width,
        .mask.height
    )]
    DimensionMismatch { sample: SizePx, mask: SizePx },

    /// A color name outside of `blue`, `red` and `traveler`.
    #[error("unknown color `{0}`")]
    UnknownColor(String),

    /// A mask was requested for a color name outside of the known set.
    #[error("unknown color `{color}` for mask {}", .path.display())]
    UnknownMaskColor { color: String, path: PathBuf },

    /// A directory the batch expects to read from does not exist.
    #[error("directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// Generating the icon for one particular mask failed.
    #[error("failed to generate {color} icon from {}: {source}", .path.display())]
    Mask {
        path: PathBuf,
        color: ColorVariant,
        #[source]
        source: Box<Error>,
    },

    /// Decoding or encoding an image file failed.
    #[error("image error at {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A filesystem operation failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration could not be parsed or serialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Attaches the offending mask path and color to an error.
    pub fn for_mask(self, path: impl Into<PathBuf>, color: ColorVariant) -> Self {
        Self::Mask {
            path: path.into(),
            color,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping any [`Error::Mask`] wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Self::Mask { source, .. } => source.root(),
            other => other,
        }
    }
}
