//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They sit between
//! the operation modules (which decide what to produce) and the
//! [`backend`](super::backend) (which does the pixel work), so a mock backend
//! can stand in during tests.
//!
//! ## Types
//!
//! - [`ResizeFilter`] — Resampling kernel, selectable from config. Lanczos3 by default.
//! - [`ResizeParams`] — Exact target size plus filter for a resize.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resampling filter used when resizing before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResizeFilter::Nearest => "nearest",
            ResizeFilter::Triangle => "triangle",
            ResizeFilter::CatmullRom => "catmull-rom",
            ResizeFilter::Gaussian => "gaussian",
            ResizeFilter::Lanczos3 => "lanczos3",
        };
        f.write_str(name)
    }
}

/// Parameters for resizing a matrix to an exact size (no aspect preservation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeParams {
    pub width: u32,
    pub height: u32,
    pub filter: ResizeFilter,
}
