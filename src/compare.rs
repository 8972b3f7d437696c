//! Side-by-side comparison canvas (`compare`).
//!
//! ```text
//! ┌──────────┬────────┬──────────┐
//! │          │ gutter │          │
//! │  left    │  (bg)  │  right   │
//! │          │        ├──────────┤
//! │          │        │   (bg)   │
//! └──────────┴────────┴──────────┘
//! ```
//!
//! Each input is either an image or a text-format matrix, chosen by
//! extension. Text inputs are parsed straight into memory; nothing is written
//! besides the final canvas.

use crate::config::CompareConfig;
use crate::imaging::{
    BackendError, Dimensions, ImageBackend, comparison_canvas, right_offset,
};
use crate::matrix::{MatrixError, PixelMatrix};
use crate::naming::is_text_input;
use crate::text_format::{self, TextFormatError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("{}: {source}", path.display())]
    TextFormat {
        path: PathBuf,
        source: TextFormatError,
    },
    #[error("{0}")]
    Backend(#[from] BackendError),
    #[error("{0}")]
    Matrix(#[from] MatrixError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareReport {
    pub output: PathBuf,
    pub left: Dimensions,
    pub right: Dimensions,
    pub canvas: Dimensions,
}

/// Load one comparison input as a grayscale matrix.
pub fn load_input(
    backend: &impl ImageBackend,
    path: &Path,
    text_extension: &str,
) -> Result<PixelMatrix, CompareError> {
    if is_text_input(path, text_extension) {
        text_format::read_matrix_file(path).map_err(|source| CompareError::TextFormat {
            path: path.to_path_buf(),
            source,
        })
    } else {
        Ok(backend.load_gray(path)?.matrix)
    }
}

/// Place `left` and `right` side by side on a `background`-filled canvas.
pub fn compose(
    left: &PixelMatrix,
    right: &PixelMatrix,
    gutter: u32,
    background: u8,
) -> Result<PixelMatrix, MatrixError> {
    let left_dims = Dimensions::of(left);
    let too_large = || MatrixError::TooLarge {
        height: left.height().max(right.height()),
        width: left
            .width()
            .saturating_add(gutter as usize)
            .saturating_add(right.width()),
    };
    let canvas_dims =
        comparison_canvas(left_dims, Dimensions::of(right), gutter).ok_or_else(too_large)?;
    let offset = right_offset(left_dims, gutter).ok_or_else(too_large)?;
    let mut canvas = PixelMatrix::filled(
        canvas_dims.height as usize,
        canvas_dims.width as usize,
        background,
    )?;
    canvas.paste(left, 0, 0);
    canvas.paste(right, offset as usize, 0);
    Ok(canvas)
}

/// Compose the two inputs and save the canvas at `output`.
pub fn compare(
    backend: &impl ImageBackend,
    left: &Path,
    right: &Path,
    output: &Path,
    config: &CompareConfig,
    text_extension: &str,
) -> Result<CompareReport, CompareError> {
    let left_matrix = load_input(backend, left, text_extension)?;
    let right_matrix = load_input(backend, right, text_extension)?;
    let canvas = compose(&left_matrix, &right_matrix, config.gutter, config.background)?;
    backend.save_gray(&canvas, output)?;

    Ok(CompareReport {
        output: output.to_path_buf(),
        left: Dimensions::of(&left_matrix),
        right: Dimensions::of(&right_matrix),
        canvas: Dimensions::of(&canvas),
    })
}
