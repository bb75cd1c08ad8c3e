//! Serializable generator configuration.
//!
//! Every constant the pipeline depends on lives in [`GeneratorConfig`], so
//! tests and callers can work at small image sizes or with another seed.
//! The struct round-trips through camelCase JSON and every field has a
//! default, so a partial file only overrides what it names.
//!
//! # Example
//!
//! ```
//! use iconsmith::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_json(r#"{ "seed": 7, "outputSize": 64 }"#).unwrap();
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.output_size, 64);
//! assert_eq!(config.sample_size, 590);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::ColorVariant;
use crate::error::{Error, Result};

// ============================================================================
// Defaults
// ============================================================================

/// Side length of the generated icons.
pub const DEFAULT_OUTPUT_SIZE: u32 = 100;

/// Side length of the texture sample and of the normalized mask.
pub const DEFAULT_SAMPLE_SIZE: u32 = 295 * 2;

/// Seed of the random stream used for texture sampling.
pub const DEFAULT_SEED: u64 = 0;

/// Margin around the filled part of a mask; leaves room for rotated shapes.
pub fn default_padding_factor() -> f64 {
    std::f64::consts::SQRT_2 * 1.08
}

fn default_output_size() -> u32 {
    DEFAULT_OUTPUT_SIZE
}

fn default_sample_size() -> u32 {
    DEFAULT_SAMPLE_SIZE
}

fn default_true() -> bool {
    true
}

// ============================================================================
// FailurePolicy
// ============================================================================

/// What the batch driver does when a single mask fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop the whole batch on the first failure.
    #[default]
    Abort,
    /// Log the failure, skip the mask and keep going.
    Continue,
}

// ============================================================================
// GeneratorConfig
// ============================================================================

/// Tunable constants of the icon pipeline.
///
/// # JSON Format
///
/// ```json
/// {
///   "outputSize": 100,
///   "sampleSize": 590,
///   "paddingFactor": 1.5273506473629428,
///   "seed": 0,
///   "flip": true,
///   "maskOffset": 0.0,
///   "failurePolicy": "abort"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Side length of the final icon.
    #[serde(default = "default_output_size")]
    pub output_size: u32,

    /// Side length of the texture sample and normalized mask.
    #[serde(default = "default_sample_size")]
    pub sample_size: u32,

    /// Multiplier applied to the half extent of a mask's filled region.
    #[serde(default = "default_padding_factor")]
    pub padding_factor: f64,

    /// Seed of the random stream.
    #[serde(default)]
    pub seed: u64,

    /// Randomly mirror texture samples horizontally and vertically.
    #[serde(default = "default_true")]
    pub flip: bool,

    /// Vertical roll applied to the normalized mask, as a fraction of
    /// `sample_size`. Negative values move the shape up. `0.0` disables it.
    #[serde(default)]
    pub mask_offset: f64,

    /// How the batch reacts to a failing mask.
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_size: DEFAULT_OUTPUT_SIZE,
            sample_size: DEFAULT_SAMPLE_SIZE,
            padding_factor: default_padding_factor(),
            seed: DEFAULT_SEED,
            flip: true,
            mask_offset: 0.0,
            failure_policy: FailurePolicy::Abort,
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration holding the default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the icon side length.
    pub fn with_output_size(mut self, size: u32) -> Self {
        self.output_size = size;
        self
    }

    /// Sets the sample side length.
    pub fn with_sample_size(mut self, size: u32) -> Self {
        self.sample_size = size;
        self
    }

    /// Sets the padding factor.
    pub fn with_padding_factor(mut self, factor: f64) -> Self {
        self.padding_factor = factor;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables random flips.
    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    /// Sets the vertical mask roll.
    pub fn with_mask_offset(mut self, offset: f64) -> Self {
        self.mask_offset = offset;
        self
    }

    /// Sets the failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Rejects sizes and factors the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.output_size == 0 {
            return Err(Error::InvalidConfig("outputSize must be positive".into()));
        }
        if self.sample_size == 0 {
            return Err(Error::InvalidConfig("sampleSize must be positive".into()));
        }
        if !(self.padding_factor.is_finite() && self.padding_factor > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "paddingFactor must be a positive number, got {}",
                self.padding_factor
            )));
        }
        if !self.mask_offset.is_finite() {
            return Err(Error::InvalidConfig("maskOffset must be finite".into()));
        }
        Ok(())
    }

    /// Mask roll in whole pixels.
    pub fn mask_offset_px(&self) -> i64 {
        (self.mask_offset * self.sample_size as f64) as i64
    }

    /// Serializes the configuration to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

// ============================================================================
// AssetLayout
// ============================================================================

/// Where the batch finds its inputs and writes its outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetLayout {
    /// Directory holding one mask sub-directory per color.
    pub masks_dir: PathBuf,

    /// Blue base texture.
    pub blue_texture: PathBuf,

    /// Red base texture.
    pub red_texture: PathBuf,

    /// Directory the icons are written to. Cleared before every run.
    pub output_dir: PathBuf,
}

impl AssetLayout {
    /// The conventional layout below `root`:
    /// `masks/<color>/*.png`, `bases/{blue,red}.png` and `generated/`.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            masks_dir: root.join("masks"),
            blue_texture: root.join("bases").join("blue.png"),
            red_texture: root.join("bases").join("red.png"),
            output_dir: root.join("generated"),
        }
    }

    /// Mask directory of one color.
    pub fn mask_dir(&self, color: ColorVariant) -> PathBuf {
        self.masks_dir.join(color.as_str())
    }
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self::from_root(".")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_size, 100);
        assert_eq!(config.sample_size, 590);
        assert!((config.padding_factor - 1.527_350_647).abs() < 1e-6);
        assert_eq!(config.seed, 0);
        assert!(config.flip);
        assert_eq!(config.mask_offset_px(), 0);
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
    }

    #[test]
    fn empty_json_gives_defaults() {
        let config = GeneratorConfig::from_json("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn json_roundtrip_uses_camel_case() {
        let config = GeneratorConfig::new()
            .with_sample_size(40)
            .with_failure_policy(FailurePolicy::Continue);
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains("\"sampleSize\": 40"));
        assert!(json.contains("\"failurePolicy\": \"continue\""));

        let restored = GeneratorConfig::from_json(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn invalid_json_is_config_error() {
        let err = GeneratorConfig::from_json("{ \"seed\": \"zero\" }").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        assert!(GeneratorConfig::default().validate().is_ok());
        assert!(GeneratorConfig::new().with_sample_size(0).validate().is_err());
        assert!(GeneratorConfig::new().with_output_size(0).validate().is_err());
        let err = GeneratorConfig::new()
            .with_padding_factor(-1.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn mask_offset_in_pixels() {
        let config = GeneratorConfig::new().with_mask_offset(-0.045);
        assert_eq!(config.mask_offset_px(), -26);
    }

    #[test]
    fn layout_from_root() {
        let layout = AssetLayout::from_root("assets");
        assert_eq!(layout.mask_dir(ColorVariant::Traveler), Path::new("assets/masks/traveler"));
        assert_eq!(layout.blue_texture, Path::new("assets/bases/blue.png"));
        assert_eq!(layout.red_texture, Path::new("assets/bases/red.png"));
        assert_eq!(layout.output_dir, Path::new("assets/generated"));
    }
}
