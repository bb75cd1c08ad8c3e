//! Random square samples cut out of a base texture.

use image::imageops;
use image::RgbaImage;
use rand::Rng;

use crate::error::{Error, Result};

/// Where a sample is cut and how it is mirrored.
///
/// `x` and `y` address the texture *after* the flips have been applied to it,
/// exactly as if the whole texture had been mirrored before cropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOrigin {
    pub x: u32,
    pub y: u32,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
}

impl SampleOrigin {
    /// Draws an origin for a `size` square inside a `width × height` texture.
    ///
    /// The draw order is fixed (x, y, horizontal flip, vertical flip) so the
    /// random stream stays reproducible. Flips are only drawn when `flip` is
    /// set.
    pub fn draw<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        size: u32,
        flip: bool,
        rng: &mut R,
    ) -> Result<Self> {
        if width < size || height < size {
            return Err(Error::TextureTooSmall {
                width,
                height,
                required: size,
            });
        }

        let x = rng.gen_range(0..=width - size);
        let y = rng.gen_range(0..=height - size);
        let (flip_horizontal, flip_vertical) = if flip {
            (rng.gen_bool(0.5), rng.gen_bool(0.5))
        } else {
            (false, false)
        };

        Ok(Self {
            x,
            y,
            flip_horizontal,
            flip_vertical,
        })
    }

    /// Cuts the `size` square this origin describes out of `texture`.
    ///
    /// Mirroring the whole texture and cropping at `(x, y)` gives the same
    /// pixels as cropping the mirrored position and mirroring only the crop,
    /// which is what this does.
    pub fn cut(&self, texture: &RgbaImage, size: u32) -> RgbaImage {
        let src_x = if self.flip_horizontal {
            texture.width() - size - self.x
        } else {
            self.x
        };
        let src_y = if self.flip_vertical {
            texture.height() - size - self.y
        } else {
            self.y
        };

        let mut sample = imageops::crop_imm(texture, src_x, src_y, size, size).to_image();
        if self.flip_horizontal {
            imageops::flip_horizontal_in_place(&mut sample);
        }
        if self.flip_vertical {
            imageops::flip_vertical_in_place(&mut sample);
        }
        sample
    }
}

/// Cuts a random `size × size` square out of `texture`, randomly mirrored
/// when `flip` is set.
pub fn sample_region<R: Rng + ?Sized>(
    texture: &RgbaImage,
    size: u32,
    flip: bool,
    rng: &mut R,
) -> Result<RgbaImage> {
    let origin = SampleOrigin::draw(texture.width(), texture.height(), size, flip, rng)?;
    log::debug!("sampling {size}x{size} at {origin:?}");
    Ok(origin.cut(texture, size))
}
