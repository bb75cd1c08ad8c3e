//! Compositing a texture sample through a normalized mask.

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

use crate::error::{Error, Result};
use crate::icon::SizePx;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Stencils `sample` through the alpha channel of `mask` onto a transparent
/// canvas.
///
/// Where the mask is opaque the sample shows through unchanged, where it is
/// transparent the canvas stays empty, and partial alpha blends all four
/// channels proportionally.
pub fn composite_through_mask(sample: &RgbaImage, mask: &RgbaImage) -> Result<RgbaImage> {
    let sample_size = SizePx::of(sample);
    let mask_size = SizePx::of(mask);
    if sample_size != mask_size {
        return Err(Error::DimensionMismatch {
            sample: sample_size,
            mask: mask_size,
        });
    }

    let mut canvas = RgbaImage::from_pixel(mask.width(), mask.height(), TRANSPARENT);
    for (dst, (src, stencil)) in canvas.pixels_mut().zip(sample.pixels().zip(mask.pixels())) {
        *dst = stencil_blend(*src, *dst, stencil[3]);
    }
    Ok(canvas)
}

/// Composites `sample` through `mask` and scales the result to
/// `output_size × output_size`.
///
/// Resampling happens on premultiplied alpha, so transparent pixels around
/// the silhouette do not bleed black into its edge.
pub fn compose_icon(sample: &RgbaImage, mask: &RgbaImage, output_size: u32) -> Result<RgbaImage> {
    let composited = premultiply(&composite_through_mask(sample, mask)?);
    let resized = imageops::resize(&composited, output_size, output_size, FilterType::Lanczos3);
    Ok(unpremultiply(&resized))
}

// ============================================================================
// Premultiplied alpha
// ============================================================================

fn premultiply(image: &RgbaImage) -> Rgba32FImage {
    Rgba32FImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0.map(|c| f32::from(c) / 255.0);
        Rgba([r * a, g * a, b * a, a])
    })
}

fn unpremultiply(image: &Rgba32FImage) -> RgbaImage {
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = to_channel(a);
        if alpha == 0 {
            TRANSPARENT
        } else {
            Rgba([to_channel(r / a), to_channel(g / a), to_channel(b / a), alpha])
        }
    })
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Linear blend of `src` over `dst`, weighted by `weight / 255`.
fn stencil_blend(src: Rgba<u8>, dst: Rgba<u8>, weight: u8) -> Rgba<u8> {
    let w = u32::from(weight);
    let mix = |s: u8, d: u8| -> u8 {
        ((u32::from(s) * w + u32::from(d) * (255 - w) + 127) / 255) as u8
    };
    Rgba([
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        mix(src[3], dst[3]),
    ])
}
