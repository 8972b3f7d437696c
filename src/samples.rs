//! Deterministic synthetic test images (`samples`).
//!
//! | File | Size | Content |
//! |---|---|---|
//! | `sample_shapes.png` | 128×128 | white square, gray disc drawn over it |
//! | `sample_letter.png` | 64×64 | block letter "E" |
//! | `sample_gradient.png` | 64×64 | 0→255 ramp in row-major order |
//!
//! The generators are pure; [`generate_samples`] only writes their output.

use crate::imaging::{BackendError, Dimensions, ImageBackend, ramp_value};
use crate::matrix::{MatrixError, PixelMatrix};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamplesError {
    #[error("{0}")]
    Backend(#[from] BackendError),
    #[error("{0}")]
    Matrix(#[from] MatrixError),
}

/// A generator and the file name it is written under.
pub struct Sample {
    pub file_name: &'static str,
    pub generate: fn() -> Result<PixelMatrix, MatrixError>,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        file_name: "sample_shapes.png",
        generate: shapes,
    },
    Sample {
        file_name: "sample_letter.png",
        generate: letter_e,
    },
    Sample {
        file_name: "sample_gradient.png",
        generate: gradient,
    },
];

/// 128×128: square of 255 over [32,96)², then a disc of 180, radius 32, centred at (64,64).
pub fn shapes() -> Result<PixelMatrix, MatrixError> {
    const SIZE: usize = 128;
    const CENTER: i64 = (SIZE / 2) as i64;
    const RADIUS: i64 = (SIZE / 4) as i64;

    let mut img = PixelMatrix::zeros(SIZE, SIZE)?;
    img.fill_rect(32..96, 32..96, 255);
    for row in 0..SIZE {
        for col in 0..SIZE {
            let dx = col as i64 - CENTER;
            let dy = row as i64 - CENTER;
            if dx * dx + dy * dy <= RADIUS * RADIUS {
                img.set(row, col, 180);
            }
        }
    }
    Ok(img)
}

/// 64×64 block letter "E", value 255 on 0.
pub fn letter_e() -> Result<PixelMatrix, MatrixError> {
    let mut img = PixelMatrix::zeros(64, 64)?;
    img.fill_rect(10..54, 10..15, 255); // spine
    img.fill_rect(10..15, 10..45, 255); // top
    img.fill_rect(30..34, 10..40, 255); // middle
    img.fill_rect(49..54, 10..45, 255); // bottom
    Ok(img)
}

/// 64×64 linear ramp: 4096 evenly spaced values from 0 to 255, row-major.
pub fn gradient() -> Result<PixelMatrix, MatrixError> {
    const SIZE: usize = 64;
    PixelMatrix::from_fn(SIZE, SIZE, |row, col| {
        ramp_value(row * SIZE + col, SIZE * SIZE)
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct SamplesReport {
    pub written: Vec<(PathBuf, Dimensions)>,
}

/// Write every sample image into `dir`.
pub fn generate_samples(
    backend: &impl ImageBackend,
    dir: &Path,
) -> Result<SamplesReport, SamplesError> {
    let mut written = Vec::with_capacity(SAMPLES.len());
    for sample in SAMPLES {
        let matrix = (sample.generate)()?;
        let path = dir.join(sample.file_name);
        backend.save_gray(&matrix, &path)?;
        written.push((path, Dimensions::of(&matrix)));
    }
    Ok(SamplesReport { written })
}
