//! Batch driver: discovers masks, generates one icon per mask and writes the
//! results to the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::color::ColorVariant;
use crate::config::{AssetLayout, FailurePolicy};
use crate::context::load_rgba;
use crate::error::{Error, Result};
use crate::generator::IconGenerator;

// ============================================================================
// Filesystem helpers
// ============================================================================

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Direct children of `dir`, sorted by file name.
fn list_dir(dir: &Path) -> Result<Vec<walkdir::DirEntry>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.map_err(|e| io_error(dir)(e.into())))
        .collect()
}

/// Creates `dir` if needed and deletes the files directly inside it.
/// Sub-directories are left alone.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(io_error(dir))?;

    for entry in list_dir(dir)? {
        if entry.file_type().is_file() {
            fs::remove_file(entry.path()).map_err(io_error(entry.path()))?;
        }
    }
    Ok(())
}

/// PNG files directly inside `dir`, sorted by file name so every platform
/// processes them in the same order.
pub fn discover_masks(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::MissingDirectory(dir.to_path_buf()));
    }

    Ok(list_dir(dir)?
        .into_iter()
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        })
        .collect())
}

/// Output name for a mask: its file stem, lower-cased.
pub fn icon_name(mask_path: &Path) -> String {
    mask_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

// ============================================================================
// Single icon
// ============================================================================

/// Generates the icon for one mask file and writes it to `output_dir`.
///
/// `color` is parsed first, so an unknown color fails with
/// [`Error::UnknownMaskColor`] before anything is read or written. Returns the
/// path of the written icon.
pub fn generate_file(
    generator: &mut IconGenerator,
    color: &str,
    mask_path: &Path,
    output_dir: &Path,
) -> Result<PathBuf> {
    let Ok(color) = color.parse::<ColorVariant>() else {
        return Err(Error::UnknownMaskColor {
            color: color.to_string(),
            path: mask_path.to_path_buf(),
        });
    };
    generate_icon(generator, color, mask_path, output_dir)
        .map_err(|e| e.for_mask(mask_path, color))
}

fn generate_icon(
    generator: &mut IconGenerator,
    color: ColorVariant,
    mask_path: &Path,
    output_dir: &Path,
) -> Result<PathBuf> {
    let mask = load_rgba(mask_path)?;
    let icon = generator.make_icon(color, &icon_name(mask_path), &mask)?;

    let out_path = output_dir.join(icon.file_name());
    icon.data.save(&out_path).map_err(|source| Error::Image {
        path: out_path.clone(),
        source,
    })?;
    log::info!("{}", icon.name);
    Ok(out_path)
}

// ============================================================================
// BatchReport
// ============================================================================

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Icons written, in processing order.
    pub generated: Vec<PathBuf>,

    /// Masks that failed. Only populated under [`FailurePolicy::Continue`].
    pub failures: Vec<Error>,
}

impl BatchReport {
    /// Returns true if no mask failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

// ============================================================================
// Batch
// ============================================================================

/// Generates an icon for every mask of every color.
///
/// The output directory is emptied first. Colors are processed blue, red,
/// traveler; masks within a color in file-name order. On a failing mask the
/// generator's [`FailurePolicy`] decides between aborting and recording the
/// failure in the report.
pub fn run_batch(generator: &mut IconGenerator, layout: &AssetLayout) -> Result<BatchReport> {
    prepare_output_dir(&layout.output_dir)?;

    let policy = generator.config().failure_policy;
    let mut report = BatchReport::default();

    for color in ColorVariant::ALL {
        let masks = discover_masks(&layout.mask_dir(color))?;
        log::debug!("{} {} masks", masks.len(), color);

        for mask_path in masks {
            match generate_file(generator, color.as_str(), &mask_path, &layout.output_dir) {
                Ok(path) => report.generated.push(path),
                Err(err) => match policy {
                    FailurePolicy::Abort => return Err(err),
                    FailurePolicy::Continue => {
                        log::error!("{err}");
                        report.failures.push(err);
                    }
                },
            }
        }
    }

    Ok(report)
}

// ============================================================================
// Tests
// ============================================================================
