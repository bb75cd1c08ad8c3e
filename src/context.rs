//! Run-wide state handed to every pipeline stage.
//!
//! A [`GeneratorContext`] owns the two read-only base textures and the single
//! seeded random stream. Stages borrow what they need from it instead of
//! reaching for globals, and the random stream is consumed strictly in icon
//! order so a fixed seed reproduces a run exactly.

use std::path::Path;

use image::RgbaImage;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::color::ColorVariant;
use crate::config::{AssetLayout, GeneratorConfig};
use crate::error::{Error, Result};

// ============================================================================
// BaseTextures
// ============================================================================

/// The large per-color textures icons are cut from.
#[derive(Debug, Clone)]
pub struct BaseTextures {
    pub blue: RgbaImage,
    pub red: RgbaImage,
}

impl BaseTextures {
    pub fn new(blue: RgbaImage, red: RgbaImage) -> Self {
        Self { blue, red }
    }

    /// Decodes both textures named by the layout and converts them to RGBA.
    pub fn load(layout: &AssetLayout) -> Result<Self> {
        Ok(Self {
            blue: load_rgba(&layout.blue_texture)?,
            red: load_rgba(&layout.red_texture)?,
        })
    }

    /// The texture backing a single-color variant.
    ///
    /// `Traveler` draws from both textures and has no single texture.
    pub fn for_color(&self, color: ColorVariant) -> Option<&RgbaImage> {
        match color {
            ColorVariant::Blue => Some(&self.blue),
            ColorVariant::Red => Some(&self.red),
            ColorVariant::Traveler => None,
        }
    }
}

/// Decodes an image file into RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|source| Error::Image {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgba8())
}

// ============================================================================
// GeneratorContext
// ============================================================================

/// Configuration, textures and the random stream for one run.
pub struct GeneratorContext {
    pub config: GeneratorConfig,
    pub textures: BaseTextures,
    pub rng: ChaCha8Rng,
}

impl GeneratorContext {
    /// Creates a context whose random stream is seeded from `config.seed`.
    pub fn new(config: GeneratorConfig, textures: BaseTextures) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            textures,
            rng,
        }
    }

    /// Restarts the random stream from the configured seed.
    pub fn reseed(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
    }
}
