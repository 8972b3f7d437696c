//! File naming conventions for text-format files.
//!
//! - `to_text` names its output after the image stem: `photo.jpg` →
//!   `photo_input.txt` (suffix and extension come from config).
//! - `compare` treats an input as a text matrix when its path ends in
//!   `.<extension>`. The match is case-sensitive, so `EDGES.TXT` is loaded as
//!   an image.

use std::path::{Path, PathBuf};

/// Output file name for the text form of `source`.
///
/// Only the last extension is stripped: `scan.raw.png` → `scan.raw_input.txt`.
/// A path with no file name falls back to `image`.
pub fn text_output_name(source: &Path, suffix: &str, extension: &str) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    format!("{stem}{suffix}.{extension}")
}

/// Whether `path` names a text-format matrix rather than an image.
pub fn is_text_input(path: &Path, extension: &str) -> bool {
    path.to_string_lossy().ends_with(&format!(".{extension}"))
}

/// Resolve `path` against `dir` unless it is already absolute.
pub fn resolve_in(dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}
