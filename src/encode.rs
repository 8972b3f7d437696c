//! Image → text-format encoder (`to_text`).
//!
//! Loads an image as grayscale, optionally resizes it, and writes the pixel
//! matrix in the testbench text format. The returned [`EncodeReport`]
//! carries everything the CLI prints; this module does no output itself.
//!
//! Resizing needs both dimensions. With only one, the image keeps its
//! original size and the report records the ignored value so the CLI can say
//! so.

use crate::imaging::{
    BackendError, Dimensions, ImageBackend, ResizeFilter, ResizeParams, resize_target,
};
use crate::matrix::MatrixStats;
use crate::text_format::{self, TextFormatError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("{0}")]
    Backend(#[from] BackendError),
    #[error("{0}")]
    TextFormat(#[from] TextFormatError),
    #[error("invalid {name} {value:?}: expected a positive integer")]
    InvalidDimension { name: &'static str, value: String },
}

/// Resize request and filter for one encode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub filter: ResizeFilter,
}

/// A lone dimension that was supplied but not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredDimension {
    Width(u32),
    Height(u32),
}

/// What `image_to_text` did, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub original: Dimensions,
    pub color: String,
    pub converted: bool,
    pub resized: Option<Dimensions>,
    pub ignored: Option<IgnoredDimension>,
    /// Dimensions of the written matrix.
    pub dimensions: Dimensions,
    pub stats: MatrixStats,
}

/// Parse a width/height argument. Zero, negatives and non-numbers are rejected.
pub fn parse_dimension(name: &'static str, value: &str) -> Result<u32, EncodeError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(EncodeError::InvalidDimension {
            name,
            value: value.to_string(),
        }),
    }
}

fn ignored_dimension(options: &EncodeOptions) -> Option<IgnoredDimension> {
    match (options.width, options.height) {
        (Some(w), None) => Some(IgnoredDimension::Width(w)),
        (None, Some(h)) => Some(IgnoredDimension::Height(h)),
        _ => None,
    }
}

/// Convert the image at `source` into a text-format file at `output`.
pub fn image_to_text(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    options: &EncodeOptions,
) -> Result<EncodeReport, EncodeError> {
    let loaded = backend.load_gray(source)?;
    let original = loaded.dimensions();

    let (matrix, resized) = match resize_target(options.width, options.height) {
        Some((width, height)) => {
            let params = ResizeParams {
                width,
                height,
                filter: options.filter,
            };
            let resized = backend.resize(&loaded.matrix, &params)?;
            let dims = Dimensions::of(&resized);
            (resized, Some(dims))
        }
        None => (loaded.matrix, None),
    };

    text_format::write_matrix_file(&matrix, output)?;

    Ok(EncodeReport {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        original,
        color: loaded.color,
        converted: loaded.converted,
        resized,
        ignored: ignored_dimension(options),
        dimensions: Dimensions::of(&matrix),
        stats: matrix.stats(),
    })
}
