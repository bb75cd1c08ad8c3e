//! The two-tone sample used by traveler icons.

use image::imageops;
use image::RgbaImage;
use rand::Rng;

use super::sample::sample_region;
use crate::error::Result;

/// Keeps the leftmost `width` columns of `image`.
pub fn left_part(image: &RgbaImage, width: u32) -> RgbaImage {
    let width = width.min(image.width());
    imageops::crop_imm(image, 0, 0, width, image.height()).to_image()
}

/// Places `right` next to `left`. The result is as tall as `left`; a shorter
/// `right` leaves the uncovered rows transparent.
pub fn concat_horizontal(left: &RgbaImage, right: &RgbaImage) -> RgbaImage {
    let mut dst = RgbaImage::new(left.width() + right.width(), left.height());
    imageops::replace(&mut dst, left, 0, 0);
    imageops::replace(&mut dst, right, i64::from(left.width()), 0);
    dst
}

/// Samples both textures and joins the left half of the blue sample with the
/// left half of the red sample, blue first.
///
/// Blue is sampled before red. For odd sizes the red half gets the extra
/// column, so the result is always `size × size`.
pub fn sample_traveler_region<R: Rng + ?Sized>(
    blue: &RgbaImage,
    red: &RgbaImage,
    size: u32,
    flip: bool,
    rng: &mut R,
) -> Result<RgbaImage> {
    let blue_sample = sample_region(blue, size, flip, rng)?;
    let red_sample = sample_region(red, size, flip, rng)?;

    let blue_width = size / 2;
    let blue_half = left_part(&blue_sample, blue_width);
    let red_half = left_part(&red_sample, size - blue_width);

    Ok(concat_horizontal(&blue_half, &red_half))
}
