//! Text-format → image decoder (`from_text`).

use crate::imaging::{BackendError, Dimensions, ImageBackend};
use crate::text_format::{self, TextFormatError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("{}: {source}", path.display())]
    TextFormat {
        path: PathBuf,
        source: TextFormatError,
    },
    #[error("{0}")]
    Backend(#[from] BackendError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodeReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub dimensions: Dimensions,
}

/// Parse the text matrix at `input` and save it as a grayscale image at `output`.
pub fn text_to_image(
    backend: &impl ImageBackend,
    input: &Path,
    output: &Path,
) -> Result<DecodeReport, DecodeError> {
    let matrix =
        text_format::read_matrix_file(input).map_err(|source| DecodeError::TextFormat {
            path: input.to_path_buf(),
            source,
        })?;
    backend.save_gray(&matrix, output)?;

    Ok(DecodeReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        dimensions: Dimensions::of(&matrix),
    })
}
