//! Image backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three operations the bridge needs
//! from an image library: load (as grayscale), resize, and save.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use a recording mock so operation logic can be checked
//! without touching codecs.

use super::params::ResizeParams;
use crate::matrix::{MatrixError, PixelMatrix};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

impl From<MatrixError> for BackendError {
    fn from(err: MatrixError) -> Self {
        BackendError::ProcessingFailed(err.to_string())
    }
}

/// Pixel dimensions of an image or matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Shape of a matrix. Lossless: a matrix holds at most
    /// [`MAX_PIXELS`](crate::matrix::MAX_PIXELS), so each side fits in a `u32`.
    pub fn of(matrix: &PixelMatrix) -> Self {
        Self {
            width: matrix.width() as u32,
            height: matrix.height() as u32,
        }
    }
}

/// A decoded image, already coerced to a single grayscale channel.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    pub matrix: PixelMatrix,
    /// Native color mode before conversion, e.g. `Rgb8` or `L8`.
    pub color: String,
    /// Whether a grayscale conversion was applied on load.
    pub converted: bool,
}

impl SourceImage {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::of(&self.matrix)
    }
}

/// Trait for image backends.
pub trait ImageBackend {
    /// Decode an image and convert it to 8-bit grayscale if it is not already.
    fn load_gray(&self, path: &Path) -> Result<SourceImage, BackendError>;

    /// Resample a matrix to exactly `params.width × params.height`.
    fn resize(&self, matrix: &PixelMatrix, params: &ResizeParams)
    -> Result<PixelMatrix, BackendError>;

    /// Encode a matrix as a grayscale image, format chosen by extension.
    fn save_gray(&self, matrix: &PixelMatrix, path: &Path) -> Result<(), BackendError>;
}
