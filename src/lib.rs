//! # pixel-bridge
//!
//! Moves images in and out of the plain-text pixel matrix format used by
//! hardware simulation testbenches (for example an HDL edge-detection core
//! driven from ModelSim).
//!
//! ```text
//!  photo.jpg ──to_text──▶ photo_input.txt ──▶ [ simulator ] ──▶ output_edges.txt
//!                                                                   │
//!  comparison.png ◀──compare── photo_input.txt + output_edges.txt ◀─┘
//!                                                    from_text ──▶ edges.png
//! ```
//!
//! The text format is a `"<height> <width>"` header followed by one line per
//! row of space-separated intensities in `0..=255`. See [`text_format`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`matrix`] | `PixelMatrix`, the in-memory grid every operation passes around |
//! | [`text_format`] | Text-format parser and writer (lenient rows, strict tokens) |
//! | [`imaging`] | `ImageBackend` trait, `image`-crate backend, dimension math |
//! | [`encode`] | `to_text`: image → grayscale → optional resize → text |
//! | [`decode`] | `from_text`: text → grayscale image |
//! | [`compare`] | `compare`: two inputs side by side on a gray canvas |
//! | [`samples`] | `samples`: three deterministic test images |
//! | [`naming`] | Output names and text-input detection |
//! | [`config`] | `pixel-bridge.toml` loading and validation |
//! | [`output`] | CLI output formatting for every report |
//!
//! # Design Decisions
//!
//! ## Reports, Not Prints
//!
//! Operations return `Result<Report, Error>` and never write to stdout. The
//! binary renders reports through [`output`] and prints failures as
//! `✗ Error: ...` without aborting, so one bad input in a script of many
//! invocations doesn't stop the rest.
//!
//! ## In-Memory Comparison
//!
//! `compare` parses text inputs straight into a [`matrix::PixelMatrix`]
//! instead of round-tripping through temporary image files. Two comparisons
//! running in the same directory cannot collide, and there is nothing to
//! clean up on failure.
//!
//! ## Explicit Output Directory
//!
//! Every file the CLI writes lands under `--output-dir` (default `.`), so tests
//! and scripts can isolate their output.

pub mod compare;
pub mod config;
pub mod decode;
pub mod encode;
pub mod imaging;
pub mod matrix;
pub mod naming;
pub mod output;
pub mod samples;
pub mod text_format;

#[cfg(test)]
pub(crate) mod test_helpers;
