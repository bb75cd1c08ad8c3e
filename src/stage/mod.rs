//! The image-processing stages of the icon pipeline.
//!
//! Each stage is a function from images to a new image; none of them touch
//! the filesystem. Randomness is passed in explicitly as a generator.
//!
//! # Data Flow
//!
//! ```text
//! Base Texture(s)                 Mask
//!       │                           │
//!       ▼                           ▼
//! ┌──────────────┐          ┌───────────────┐
//! │    sample    │          │     mask      │ ◄── bounding box, padding, resize
//! │  (traveler)  │          │ normalization │
//! └──────┬───────┘          └───────┬───────┘
//!        │                          │
//!        └──────────┬───────────────┘
//!                   ▼
//!           ┌───────────────┐
//!           │   composite   │ ◄── stencil through mask alpha, downsample
//!           └───────┬───────┘
//!                   ▼
//!                 Icon
//! ```

pub mod composite;
pub mod mask;
pub mod sample;
pub mod traveler;

pub use composite::{composite_through_mask, compose_icon};
pub use mask::{crop_padded, filled_bounds, normalize_mask, offset_mask};
pub use sample::{sample_region, SampleOrigin};
pub use traveler::{concat_horizontal, left_part, sample_traveler_region};
