//! Shared test utilities for the pixel-bridge test suite.
//!
//! Fixture writers produce real image files through the `image` crate
//! directly, so backend tests don't depend on the backend they exercise.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let path = tmp.path().join("in.png");
//! write_gray_png(&path, &matrix_from_rows(&[&[0, 255], &[10, 20]]));
//! assert_eq!(read_gray(&path).width(), 2);
//! ```

use crate::matrix::PixelMatrix;
use image::{GrayImage, RgbImage};
use std::path::Path;

// =========================================================================
// Fixture writers
// =========================================================================

/// Write `matrix` as an 8-bit grayscale PNG.
pub fn write_gray_png(path: &Path, matrix: &PixelMatrix) {
    let img = GrayImage::from_raw(
        matrix.width() as u32,
        matrix.height() as u32,
        matrix.as_raw().to_vec(),
    )
    .unwrap();
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Write a `width × height` RGB PNG with a deterministic colour pattern.
pub fn write_rgb_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

// =========================================================================
// Readers and builders
// =========================================================================

/// Decode any image file into a grayscale matrix. Panics on failure.
pub fn read_gray(path: &Path) -> PixelMatrix {
    let img = image::open(path)
        .unwrap_or_else(|e| panic!("failed to open {}: {e}", path.display()))
        .into_luma8();
    let (w, h) = img.dimensions();
    PixelMatrix::from_raw(h as usize, w as usize, img.into_raw()).unwrap()
}

/// Build a matrix from literal rows. All rows must have the same length.
pub fn matrix_from_rows(rows: &[&[u8]]) -> PixelMatrix {
    let width = rows[0].len();
    assert!(
        rows.iter().all(|r| r.len() == width),
        "ragged rows in test matrix"
    );
    PixelMatrix::from_raw(rows.len(), width, rows.concat()).unwrap()
}
