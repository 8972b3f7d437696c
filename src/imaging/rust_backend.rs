//! Pure Rust image backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP, BMP, PNM) | `image::ImageReader` with content sniffing |
//! | Grayscale | `DynamicImage::into_luma8` (Rec. 709 luma weights) |
//! | Resize | `image::imageops::resize` with the configured filter |
//! | Encode | `GrayImage::save_with_format`, format from the output extension |

use super::backend::{BackendError, ImageBackend, SourceImage};
use super::params::{ResizeFilter, ResizeParams};
use crate::matrix::PixelMatrix;
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, ImageFormat, ImageReader};
use std::path::Path;

/// Formats whose codecs are compiled in.
const FORMAT_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
    ("bmp", ImageFormat::Bmp),
    ("pgm", ImageFormat::Pnm),
];

/// Returns the image file extensions the backend can write.
fn supported_output_extensions() -> Vec<&'static str> {
    FORMAT_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.writing_enabled())
        .map(|(ext, _)| *ext)
        .collect()
}

/// Backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn filter_type(filter: ResizeFilter) -> FilterType {
    match filter {
        ResizeFilter::Nearest => FilterType::Nearest,
        ResizeFilter::Triangle => FilterType::Triangle,
        ResizeFilter::CatmullRom => FilterType::CatmullRom,
        ResizeFilter::Gaussian => FilterType::Gaussian,
        ResizeFilter::Lanczos3 => FilterType::Lanczos3,
    }
}

/// Look up the output format for `path` from its extension.
fn output_format(path: &Path) -> Result<ImageFormat, BackendError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    FORMAT_CANDIDATES
        .iter()
        .find(|(candidate, fmt)| *candidate == ext && fmt.writing_enabled())
        .map(|(_, fmt)| *fmt)
        .ok_or_else(|| {
            BackendError::ProcessingFailed(format!(
                "Unsupported output format {:?} for {} (supported: {})",
                ext,
                path.display(),
                supported_output_extensions().join(", ")
            ))
        })
}

/// Load and decode an image from disk, sniffing the format from content.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

fn gray_to_matrix(gray: GrayImage) -> Result<PixelMatrix, BackendError> {
    let (width, height) = gray.dimensions();
    Ok(PixelMatrix::from_raw(
        height as usize,
        width as usize,
        gray.into_raw(),
    )?)
}

fn matrix_to_gray(matrix: &PixelMatrix) -> Result<GrayImage, BackendError> {
    GrayImage::from_raw(
        matrix.width() as u32,
        matrix.height() as u32,
        matrix.as_raw().to_vec(),
    )
    .ok_or_else(|| BackendError::ProcessingFailed("Matrix buffer does not fit image".into()))
}

impl ImageBackend for RustBackend {
    fn load_gray(&self, path: &Path) -> Result<SourceImage, BackendError> {
        let img = load_image(path)?;
        let color = format!("{:?}", img.color());
        let converted = !matches!(img, DynamicImage::ImageLuma8(_));
        let matrix = gray_to_matrix(img.into_luma8())?;
        Ok(SourceImage {
            matrix,
            color,
            converted,
        })
    }

    fn resize(
        &self,
        matrix: &PixelMatrix,
        params: &ResizeParams,
    ) -> Result<PixelMatrix, BackendError> {
        if params.width == 0 || params.height == 0 {
            return Err(BackendError::ProcessingFailed(format!(
                "Cannot resize to {}x{}",
                params.width, params.height
            )));
        }
        let gray = matrix_to_gray(matrix)?;
        let resized = image::imageops::resize(
            &gray,
            params.width,
            params.height,
            filter_type(params.filter),
        );
        gray_to_matrix(resized)
    }

    fn save_gray(&self, matrix: &PixelMatrix, path: &Path) -> Result<(), BackendError> {
        let format = output_format(path)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let gray = matrix_to_gray(matrix)?;
        let result = if format == ImageFormat::Pnm {
            save_pgm(&gray, path)
        } else {
            gray.save_with_format(path, format)
        };
        result.map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to encode {}: {}", path.display(), e))
        })
    }
}

/// Write a binary graymap (`P5`); the generic PNM path would pick a PAM header.
fn save_pgm(gray: &GrayImage, path: &Path) -> image::ImageResult<()> {
    use image::ImageEncoder;
    use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};

    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    PnmEncoder::new(writer)
        .with_subtype(PnmSubtype::Graymap(SampleEncoding::Binary))
        .write_image(
            gray.as_raw(),
            gray.width(),
            gray.height(),
            image::ExtendedColorType::L8,
        )
}
