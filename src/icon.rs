//! Geometry and icon types shared by the pipeline stages.

use image::RgbaImage;

use crate::color::ColorVariant;

/// A rectangle defined in pixel coordinates.
///
/// Used for the bounding box of the filled part of a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the image
    pub x: u32,
    /// Y offset from the top edge of the image
    pub y: u32,
    /// Width of the rectangle
    pub width: u32,
    /// Height of the rectangle
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from inclusive first/last column and row indices.
    pub fn from_inclusive(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self::new(left, top, right - left + 1, bottom - top + 1)
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Center of the rectangle, measured between the first and last pixel.
    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + (self.width - 1) as f64 / 2.0,
            self.y as f64 + (self.height - 1) as f64 / 2.0,
        )
    }

    /// Largest distance between the first and last pixel along either axis.
    pub fn max_span(&self) -> u32 {
        (self.width - 1).max(self.height - 1)
    }
}

/// A square crop window that may extend past the image on any side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    pub x: i64,
    pub y: i64,
    pub side: u32,
}

impl CropWindow {
    /// Builds the window covering `[cx - half, cx + half]` on both axes,
    /// rounding the edges half-to-even. Never narrower than one pixel.
    pub fn around(center: (f64, f64), half: f64) -> Self {
        let (cx, cy) = center;
        let x0 = (cx - half).round_ties_even() as i64;
        let y0 = (cy - half).round_ties_even() as i64;
        let x1 = (cx + half).round_ties_even() as i64;
        let side = (x1 - x0).max(1) as u32;
        Self { x: x0, y: y0, side }
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the size of an image.
    pub fn of(image: &RgbaImage) -> Self {
        Self::new(image.width(), image.height())
    }
}

/// A finished icon, ready to be written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// Output file stem, already lower-cased.
    pub name: String,

    /// The color variant the icon was generated for.
    pub color: ColorVariant,

    /// The image data in RGBA format.
    pub data: RgbaImage,
}

impl IconImage {
    pub fn new(name: impl Into<String>, color: ColorVariant, data: RgbaImage) -> Self {
        Self {
            name: name.into(),
            color,
            data,
        }
    }

    /// File name the icon is persisted under (`<name>.png`).
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::of(&self.data)
    }
}
