//! The in-memory pixel matrix shared by every operation.
//!
//! A [`PixelMatrix`] is an owned, row-major grid of 8-bit intensities with an
//! explicit height and width. It is the hand-off type between the text codec
//! ([`text_format`](crate::text_format)), the imaging backend, the comparison
//! composer, and the sample generators. Nothing in here touches the
//! filesystem or an image codec.

use std::ops::Range;
use thiserror::Error;

/// Largest pixel count a matrix may hold (256 MiB of intensities).
///
/// Both sides of any matrix therefore fit in a `u32`.
pub const MAX_PIXELS: usize = 1 << 28;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatrixError {
    #[error("matrix dimensions must be positive, got {height}x{width}")]
    ZeroDimension { height: usize, width: usize },
    #[error("matrix {height}x{width} exceeds the {max} pixel limit", max = MAX_PIXELS)]
    TooLarge { height: usize, width: usize },
    #[error("buffer holds {actual} pixels, {height}x{width} needs {expected}")]
    BufferLength {
        height: usize,
        width: usize,
        expected: usize,
        actual: usize,
    },
}

/// Row-major H×W grid of intensities in `0..=255`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMatrix {
    height: usize,
    width: usize,
    data: Vec<u8>,
}

/// Summary statistics printed after encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixStats {
    pub min: u8,
    pub max: u8,
    pub mean: f64,
}

impl PixelMatrix {
    /// A matrix with every pixel set to `value`.
    pub fn filled(height: usize, width: usize, value: u8) -> Result<Self, MatrixError> {
        let len = check_dimensions(height, width)?;
        Ok(Self {
            height,
            width,
            data: vec![value; len],
        })
    }

    /// An all-zero matrix.
    pub fn zeros(height: usize, width: usize) -> Result<Self, MatrixError> {
        Self::filled(height, width, 0)
    }

    /// Wrap a row-major buffer. The buffer length must equal `height * width`.
    pub fn from_raw(height: usize, width: usize, data: Vec<u8>) -> Result<Self, MatrixError> {
        let expected = check_dimensions(height, width)?;
        if data.len() != expected {
            return Err(MatrixError::BufferLength {
                height,
                width,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn(
        height: usize,
        width: usize,
        mut f: impl FnMut(usize, usize) -> u8,
    ) -> Result<Self, MatrixError> {
        let len = check_dimensions(height, width)?;
        let mut data = Vec::with_capacity(len);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.height && col < self.width {
            Some(self.data[row * self.width + col])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        if row < self.height && col < self.width {
            self.data[row * self.width + col] = value;
        }
    }

    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [u8] {
        let start = row * self.width;
        &mut self.data[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width)
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Set every cell in `rows × cols` to `value`. Ranges are clipped to the matrix.
    pub fn fill_rect(&mut self, rows: Range<usize>, cols: Range<usize>, value: u8) {
        let cols = cols.start.min(self.width)..cols.end.min(self.width);
        for row in rows.start.min(self.height)..rows.end.min(self.height) {
            self.row_mut(row)[cols.clone()].fill(value);
        }
    }

    /// Copy `other` into this matrix with its top-left corner at (`x`, `y`).
    ///
    /// Pixels falling outside this matrix are dropped.
    pub fn paste(&mut self, other: &PixelMatrix, x: usize, y: usize) {
        if x >= self.width || y >= self.height {
            return;
        }
        let copy_w = other.width.min(self.width - x);
        let copy_h = other.height.min(self.height - y);
        for row in 0..copy_h {
            self.row_mut(y + row)[x..x + copy_w].copy_from_slice(&other.row(row)[..copy_w]);
        }
    }

    pub fn stats(&self) -> MatrixStats {
        let mut min = u8::MAX;
        let mut max = u8::MIN;
        let mut sum = 0u64;
        for &px in &self.data {
            min = min.min(px);
            max = max.max(px);
            sum += px as u64;
        }
        MatrixStats {
            min,
            max,
            mean: sum as f64 / self.data.len() as f64,
        }
    }
}

/// Validate a shape and return its pixel count.
fn check_dimensions(height: usize, width: usize) -> Result<usize, MatrixError> {
    if height == 0 || width == 0 {
        return Err(MatrixError::ZeroDimension { height, width });
    }
    height
        .checked_mul(width)
        .filter(|&len| len <= MAX_PIXELS)
        .ok_or(MatrixError::TooLarge { height, width })
}
