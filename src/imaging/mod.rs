//! Image I/O — pure Rust via the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Load** | `ImageReader` decode + `into_luma8` |
//! | **Resize** | `imageops::resize`, Lanczos3 unless configured otherwise |
//! | **Save** | grayscale encode, format from extension |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math and ramps (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend, SourceImage};
pub use calculations::{comparison_canvas, ramp_value, resize_target, right_offset};
pub use params::{ResizeFilter, ResizeParams};
pub use rust_backend::RustBackend;
