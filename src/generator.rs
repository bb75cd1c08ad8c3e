//! Icon generation engine.

use image::RgbaImage;

use crate::color::ColorVariant;
use crate::config::{AssetLayout, GeneratorConfig};
use crate::context::{BaseTextures, GeneratorContext};
use crate::error::Result;
use crate::icon::IconImage;
use crate::stage::{
    compose_icon, normalize_mask, offset_mask, sample_region, sample_traveler_region,
};

// ============================================================================
// IconGenerator
// ============================================================================

/// Turns masks into finished icons.
///
/// `IconGenerator` owns the [`GeneratorContext`] for a run: the configuration,
/// the base textures and the seeded random stream. Icons must be generated in
/// a stable order for a run to be reproducible, since every icon consumes
/// draws from the same stream.
///
/// # Pipeline
///
/// 1. **Sample** - cut a texture sample for the color (split blue/red for
///    traveler)
/// 2. **Normalize** - frame the filled part of the mask in a square of the
///    sample's size
/// 3. **Compose** - stencil the sample through the mask and downsample
///
/// # Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use iconsmith::{BaseTextures, ColorVariant, GeneratorConfig, IconGenerator};
///
/// let config = GeneratorConfig::new().with_sample_size(32).with_output_size(8);
/// let textures = BaseTextures::new(
///     RgbaImage::from_pixel(64, 64, Rgba([0, 0, 255, 255])),
///     RgbaImage::from_pixel(64, 64, Rgba([255, 0, 0, 255])),
/// );
/// let mut generator = IconGenerator::new(config, textures).unwrap();
///
/// let mask = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
/// let icon = generator.make_icon(ColorVariant::Red, "Shield", &mask).unwrap();
/// assert_eq!(icon.name, "shield");
/// assert_eq!(icon.data.dimensions(), (8, 8));
/// ```
pub struct IconGenerator {
    ctx: GeneratorContext,
}

impl IconGenerator {
    /// Creates a generator from a validated configuration and loaded textures.
    pub fn new(config: GeneratorConfig, textures: BaseTextures) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            ctx: GeneratorContext::new(config, textures),
        })
    }

    /// Loads the base textures named by `layout` and creates a generator.
    pub fn from_layout(config: GeneratorConfig, layout: &AssetLayout) -> Result<Self> {
        let textures = BaseTextures::load(layout)?;
        Self::new(config, textures)
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.ctx.config
    }

    /// Restarts the random stream, so the next icons repeat a previous run.
    pub fn reset(&mut self) {
        self.ctx.reseed();
    }

    /// Cuts the texture sample that fills an icon of `color`.
    pub fn sample(&mut self, color: ColorVariant) -> Result<RgbaImage> {
        let size = self.ctx.config.sample_size;
        let flip = self.ctx.config.flip;
        let textures = &self.ctx.textures;
        let rng = &mut self.ctx.rng;

        match textures.for_color(color) {
            Some(texture) => sample_region(texture, size, flip, rng),
            None => sample_traveler_region(&textures.blue, &textures.red, size, flip, rng),
        }
    }

    /// Normalizes `mask` and applies the configured vertical roll, if any.
    pub fn prepare_mask(&self, mask: &RgbaImage) -> Result<RgbaImage> {
        let normalized = normalize_mask(mask, &self.ctx.config)?;
        let dy = self.ctx.config.mask_offset_px();
        Ok(if dy == 0 {
            normalized
        } else {
            offset_mask(&normalized, dy)
        })
    }

    /// Generates one icon. `name` is lower-cased to form the output name.
    pub fn make_icon(
        &mut self,
        color: ColorVariant,
        name: &str,
        mask: &RgbaImage,
    ) -> Result<IconImage> {
        let sample = self.sample(color)?;
        let mask = self.prepare_mask(mask)?;
        let data = compose_icon(&sample, &mask, self.ctx.config.output_size)?;
        Ok(IconImage::new(name.to_lowercase(), color, data))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image::Rgba;

    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn create_generator(config: GeneratorConfig) -> IconGenerator {
        let textures = BaseTextures::new(
            RgbaImage::from_pixel(320, 320, BLUE),
            RgbaImage::from_pixel(320, 320, RED),
        );
        IconGenerator::new(config, textures).unwrap()
    }

    fn small_config() -> GeneratorConfig {
        GeneratorConfig::new().with_sample_size(40).with_output_size(20)
    }

    /// 200x200 transparent canvas with a centered 50x50 opaque square.
    fn square_mask() -> RgbaImage {
        RgbaImage::from_fn(200, 200, |x, y| {
            if (75..125).contains(&x) && (75..125).contains(&y) {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    #[test]
    fn generator_rejects_invalid_config() {
        let textures = BaseTextures::new(RgbaImage::new(4, 4), RgbaImage::new(4, 4));
        let result = IconGenerator::new(GeneratorConfig::new().with_sample_size(0), textures);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn samples_use_color_texture() {
        let mut generator = create_generator(small_config());
        let blue = generator.sample(ColorVariant::Blue).unwrap();
        let red = generator.sample(ColorVariant::Red).unwrap();
        assert!(blue.pixels().all(|p| *p == BLUE));
        assert!(red.pixels().all(|p| *p == RED));
    }

    #[test]
    fn traveler_sample_is_split() {
        let mut generator = create_generator(small_config());
        let sample = generator.sample(ColorVariant::Traveler).unwrap();
        assert_eq!(sample.dimensions(), (40, 40));
        assert_eq!(*sample.get_pixel(19, 20), BLUE);
        assert_eq!(*sample.get_pixel(20, 20), RED);
    }

    #[test]
    fn square_mask_gives_centered_square_icon() {
        let mut generator = create_generator(GeneratorConfig::new().with_sample_size(295));
        let icon = generator
            .make_icon(ColorVariant::Blue, "Square", &square_mask())
            .unwrap();

        assert_eq!(icon.name, "square");
        assert_eq!(icon.data.dimensions(), (100, 100));

        let center = icon.data.get_pixel(50, 50);
        assert_eq!(center[3], 255);
        assert_eq!(center[2], 255);
        for corner in [(0, 0), (99, 0), (0, 99), (99, 99)] {
            assert_eq!(icon.data.get_pixel(corner.0, corner.1)[3], 0);
        }

        // Roughly symmetric; the crop window is half a pixel off center.
        let opaque_cols: Vec<u32> = (0..100)
            .filter(|&x| icon.data.get_pixel(x, 50)[3] > 127)
            .collect();
        let opaque_rows: Vec<u32> = (0..100)
            .filter(|&y| icon.data.get_pixel(50, y)[3] > 127)
            .collect();
        assert_eq!(opaque_cols.len(), opaque_rows.len());
        let first = opaque_cols[0];
        let last = opaque_cols[opaque_cols.len() - 1];
        assert!((first + last).abs_diff(99) <= 2);
    }

    #[test]
    fn empty_mask_fails() {
        let mut generator = create_generator(small_config());
        let err = generator
            .make_icon(ColorVariant::Red, "empty", &RgbaImage::new(10, 10))
            .unwrap_err();
        assert!(matches!(err, Error::EmptyMask));
    }

    #[test]
    fn texture_too_small_fails() {
        let mut generator = create_generator(GeneratorConfig::new().with_sample_size(400));
        let err = generator
            .make_icon(ColorVariant::Blue, "big", &square_mask())
            .unwrap_err();
        assert!(matches!(err, Error::TextureTooSmall { required: 400, .. }));
    }

    #[test]
    fn reset_reproduces_icons() {
        let textures = BaseTextures::new(
            RgbaImage::from_fn(80, 80, |x, y| Rgba([x as u8, y as u8, 0, 255])),
            RgbaImage::from_fn(80, 80, |x, y| Rgba([0, x as u8, y as u8, 255])),
        );
        let mut generator = IconGenerator::new(small_config(), textures).unwrap();

        let first: Vec<_> = ColorVariant::ALL
            .iter()
            .map(|&c| generator.make_icon(c, "a", &square_mask()).unwrap())
            .collect();
        generator.reset();
        let second: Vec<_> = ColorVariant::ALL
            .iter()
            .map(|&c| generator.make_icon(c, "a", &square_mask()).unwrap())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn mask_offset_moves_shape_up() {
        let plain = create_generator(small_config());
        let shifted = create_generator(small_config().with_mask_offset(-0.1));

        let a = plain.prepare_mask(&square_mask()).unwrap();
        let b = shifted.prepare_mask(&square_mask()).unwrap();
        for y in 0..40 {
            assert_eq!(a.get_pixel(20, y), b.get_pixel(20, (y + 40 - 4) % 40));
        }
    }
}
