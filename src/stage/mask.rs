//! Mask normalization: find the filled part of a mask and frame it in a
//! canonical square.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::icon::{CropWindow, RectPx};

/// Bounding box of all pixels with a non-zero alpha, or `None` if the image is
/// fully transparent.
pub fn filled_bounds(mask: &RgbaImage) -> Option<RectPx> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in mask.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x), b.max(y)),
        });
    }

    bounds.map(|(l, t, r, b)| RectPx::from_inclusive(l, t, r, b))
}

/// Copies `window` out of `image`. Whatever falls outside the image is
/// transparent.
pub fn crop_padded(image: &RgbaImage, window: CropWindow) -> RgbaImage {
    let mut canvas = RgbaImage::new(window.side, window.side);
    imageops::replace(&mut canvas, image, -window.x, -window.y);
    canvas
}

/// Frames the filled part of `mask` in a square and scales it to
/// `config.sample_size`.
///
/// The square is centered on the filled region and its half side is the
/// larger half extent times `config.padding_factor`, so neither a wide nor a
/// tall shape gets clipped.
pub fn normalize_mask(mask: &RgbaImage, config: &GeneratorConfig) -> Result<RgbaImage> {
    let bounds = filled_bounds(mask).ok_or(Error::EmptyMask)?;

    let half = bounds.max_span() as f64 / 2.0 * config.padding_factor;
    let window = CropWindow::around(bounds.center(), half);
    log::debug!("mask bounds {:?}, crop window {:?}", bounds, window);

    let framed = crop_padded(mask, window);
    let side = config.sample_size;
    Ok(imageops::resize(&framed, side, side, FilterType::Lanczos3))
}

/// Rolls `mask` down by `dy` pixels (up if negative). Rows pushed past one
/// edge wrap around to the other.
pub fn offset_mask(mask: &RgbaImage, dy: i64) -> RgbaImage {
    let height = mask.height() as i64;
    if height == 0 || dy.rem_euclid(height) == 0 {
        return mask.clone();
    }

    RgbaImage::from_fn(mask.width(), mask.height(), |x, y| {
        let src_y = (y as i64 - dy).rem_euclid(height) as u32;
        *mask.get_pixel(x, src_y)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const OPAQUE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    /// A transparent canvas with an opaque axis-aligned block.
    fn block_mask(width: u32, height: u32, block: RectPx) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if x >= block.x && x < block.right() && y >= block.y && y < block.bottom() {
                OPAQUE
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    fn config(sample_size: u32) -> GeneratorConfig {
        GeneratorConfig::new().with_sample_size(sample_size)
    }

    #[test]
    fn filled_bounds_of_centered_square() {
        let mask = block_mask(200, 200, RectPx::new(75, 75, 50, 50));
        assert_eq!(filled_bounds(&mask), Some(RectPx::new(75, 75, 50, 50)));
    }

    #[test]
    fn filled_bounds_ignores_color_of_transparent_pixels() {
        let mut mask = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 0]));
        mask.put_pixel(3, 7, Rgba([0, 0, 0, 1]));
        assert_eq!(filled_bounds(&mask), Some(RectPx::new(3, 7, 1, 1)));
    }

    #[test]
    fn empty_mask_is_rejected() {
        let mask = RgbaImage::new(32, 32);
        assert!(filled_bounds(&mask).is_none());
        assert!(matches!(normalize_mask(&mask, &config(16)), Err(Error::EmptyMask)));
    }

    #[test]
    fn crop_padded_fills_outside_with_transparency() {
        let image = RgbaImage::from_pixel(4, 4, OPAQUE);
        let cropped = crop_padded(&image, CropWindow { x: -2, y: -2, side: 4 });
        assert_eq!(cropped.get_pixel(0, 0)[3], 0);
        assert_eq!(cropped.get_pixel(1, 3)[3], 0);
        assert_eq!(cropped.get_pixel(2, 2)[3], 255);
        assert_eq!(cropped.get_pixel(3, 3)[3], 255);
    }

    #[test]
    fn normalized_size_is_fixed() {
        let shapes = [
            block_mask(200, 200, RectPx::new(75, 75, 50, 50)),
            block_mask(300, 80, RectPx::new(0, 10, 300, 20)),
            block_mask(80, 300, RectPx::new(30, 0, 5, 300)),
            block_mask(9, 9, RectPx::new(4, 4, 1, 1)),
        ];
        for mask in &shapes {
            let normalized = normalize_mask(mask, &config(48)).unwrap();
            assert_eq!(normalized.dimensions(), (48, 48));
        }
    }

    #[test]
    fn normalized_square_is_centered_with_margin() {
        let mask = block_mask(200, 200, RectPx::new(75, 75, 50, 50));
        let normalized = normalize_mask(&mask, &config(60)).unwrap();

        assert_eq!(normalized.get_pixel(30, 30)[3], 255);
        assert_eq!(normalized.get_pixel(0, 0)[3], 0);
        assert_eq!(normalized.get_pixel(59, 59)[3], 0);
        assert_eq!(normalized.get_pixel(30, 0)[3], 0);
    }

    #[test]
    fn wide_shape_is_not_clipped() {
        let mask = block_mask(200, 100, RectPx::new(10, 20, 180, 60));
        let normalized = normalize_mask(&mask, &config(64)).unwrap();

        for y in 0..64 {
            assert_eq!(normalized.get_pixel(0, y)[3], 0);
            assert_eq!(normalized.get_pixel(63, y)[3], 0);
        }
        assert_eq!(normalized.get_pixel(32, 32)[3], 255);
    }

    #[test]
    fn offset_mask_wraps_rows() {
        let mut mask = RgbaImage::new(2, 4);
        mask.put_pixel(0, 0, OPAQUE);

        let down = offset_mask(&mask, 1);
        assert_eq!(down.get_pixel(0, 1)[3], 255);
        assert_eq!(down.get_pixel(0, 0)[3], 0);

        let up = offset_mask(&mask, -1);
        assert_eq!(up.get_pixel(0, 3)[3], 255);
    }

    #[test]
    fn zero_offset_is_identity() {
        let mask = block_mask(8, 8, RectPx::new(2, 2, 3, 3));
        assert_eq!(offset_mask(&mask, 0), mask);
        assert_eq!(offset_mask(&mask, 8), mask);
    }
}
