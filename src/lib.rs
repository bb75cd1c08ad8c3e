//! iconsmith: Batch icon generation from shape masks and base textures
//!
//! This crate cuts random samples out of large base textures and stencils
//! them through shape masks to produce small, uniformly framed game icons in
//! three color variants: blue, red and the two-tone traveler.
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use iconsmith::{BaseTextures, ColorVariant, GeneratorConfig, IconGenerator};
//!
//! let textures = BaseTextures::new(
//!     RgbaImage::from_pixel(96, 96, Rgba([40, 80, 200, 255])),
//!     RgbaImage::from_pixel(96, 96, Rgba([200, 40, 40, 255])),
//! );
//!
//! // Work at a reduced size; the defaults are a 590px sample and 100px icons.
//! let config = GeneratorConfig::new().with_sample_size(64).with_output_size(16);
//! let mut generator = IconGenerator::new(config, textures).unwrap();
//!
//! // A 12x12 filled square in the middle of a 32x32 transparent mask.
//! let mask = RgbaImage::from_fn(32, 32, |x, y| {
//!     if (10..22).contains(&x) && (10..22).contains(&y) {
//!         Rgba([255, 255, 255, 255])
//!     } else {
//!         Rgba([0, 0, 0, 0])
//!     }
//! });
//!
//! let icon = generator.make_icon(ColorVariant::Traveler, "Boots", &mask).unwrap();
//! assert_eq!(icon.file_name(), "boots.png");
//! assert_eq!(icon.data.dimensions(), (16, 16));
//! ```
//!
//! # Batch Runs
//!
//! [`run_batch`] drives a whole asset directory laid out as described by
//! [`AssetLayout`]:
//!
//! ```no_run
//! use iconsmith::{run_batch, AssetLayout, GeneratorConfig, IconGenerator};
//!
//! let layout = AssetLayout::from_root("assets");
//! let mut generator = IconGenerator::from_layout(GeneratorConfig::default(), &layout)?;
//! let report = run_batch(&mut generator, &layout)?;
//! println!("{} icons written", report.generated.len());
//! # Ok::<(), iconsmith::Error>(())
//! ```

mod batch;
mod color;
mod config;
mod context;
mod error;
mod generator;
mod icon;
pub mod stage;

pub use batch::{
    discover_masks, generate_file, icon_name, prepare_output_dir, run_batch, BatchReport,
};
pub use color::ColorVariant;
pub use config::{
    default_padding_factor, AssetLayout, FailurePolicy, GeneratorConfig, DEFAULT_OUTPUT_SIZE,
    DEFAULT_SAMPLE_SIZE, DEFAULT_SEED,
};
pub use context::{load_rgba, BaseTextures, GeneratorContext};
pub use error::{Error, Result};
pub use generator::IconGenerator;
pub use icon::{CropWindow, IconImage, RectPx, SizePx};
