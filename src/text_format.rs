//! The plain-text pixel matrix format read and written by the testbench.
//!
//! ```text
//! 3 4
//! 0 12 255 7
//! 1 2 3 4
//! 9 9 9 9
//! ```
//!
//! Line 1 holds `<height> <width>`. Each of the next `height` lines holds up to
//! `width` whitespace-separated integers in `0..=255`.
//!
//! ## Lenient rows
//!
//! Simulators do not always emit perfectly shaped output, so the parser is
//! lenient about row *length* but strict about row *content*:
//!
//! - A row with fewer than `width` values is zero-filled on the right.
//! - A row with more than `width` values is truncated to the first `width`.
//! - Rows missing because the file ends early are all zeros.
//! - Lines after row `height` are ignored.
//! - Every token on a row, including ones past `width`, must be a valid pixel.

use crate::matrix::{MatrixError, PixelMatrix};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextFormatError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("missing header line")]
    MissingHeader,
    #[error("malformed header {0:?}: expected \"<height> <width>\"")]
    MalformedHeader(String),
    #[error("header declares an unusable matrix: {0}")]
    InvalidDimensions(#[from] MatrixError),
    #[error("line {line}: invalid pixel value {token:?} (expected 0-255)")]
    InvalidPixel { line: usize, token: String },
}

/// Parse the `<height> <width>` header line.
pub fn parse_header(line: &str) -> Result<(usize, usize), TextFormatError> {
    let malformed = || TextFormatError::MalformedHeader(line.trim().to_string());
    let mut tokens = line.split_whitespace();
    let (Some(h), Some(w), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed());
    };
    let height = h.parse::<usize>().map_err(|_| malformed())?;
    let width = w.parse::<usize>().map_err(|_| malformed())?;
    Ok((height, width))
}

/// Parse a full text-format document into a matrix.
pub fn parse_matrix(text: &str) -> Result<PixelMatrix, TextFormatError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(TextFormatError::MissingHeader)?;
    let (height, width) = parse_header(header)?;
    let mut matrix = PixelMatrix::zeros(height, width)?;

    for (row, line) in lines.take(height).enumerate() {
        let cells = matrix.row_mut(row);
        for (col, token) in line.split_whitespace().enumerate() {
            let value = token
                .parse::<u8>()
                .map_err(|_| TextFormatError::InvalidPixel {
                    // 1-based, counting the header
                    line: row + 2,
                    token: token.to_string(),
                })?;
            if col < width {
                cells[col] = value;
            }
        }
    }

    Ok(matrix)
}

/// Read and parse a text-format file.
pub fn read_matrix_file(path: &Path) -> Result<PixelMatrix, TextFormatError> {
    let text = fs::read_to_string(path)?;
    parse_matrix(&text)
}

/// Serialize `matrix` as header + rows, one newline per line.
pub fn write_matrix<W: Write>(matrix: &PixelMatrix, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{} {}", matrix.height(), matrix.width())?;
    for row in matrix.rows() {
        let mut first = true;
        for px in row {
            if !first {
                writer.write_all(b" ")?;
            }
            write!(writer, "{px}")?;
            first = false;
        }
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Write `matrix` to `path`, creating the parent directory if needed.
pub fn write_matrix_file(matrix: &PixelMatrix, path: &Path) -> Result<(), TextFormatError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    write_matrix(matrix, BufWriter::new(file))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn to_text(matrix: &PixelMatrix) -> String {
        let mut buf = Vec::new();
        write_matrix(matrix, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_line_matches_dimensions() {
        let m = PixelMatrix::from_fn(2, 3, |r, c| (r * 3 + c) as u8).unwrap();
        let text = to_text(&m);
        assert_eq!(text, "2 3\n0 1 2\n3 4 5\n");
        assert_eq!(text.lines().next(), Some("2 3"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn round_trip_preserves_values() {
        let m = PixelMatrix::from_fn(5, 7, |r, c| ((r * 37 + c * 11) % 256) as u8).unwrap();
        let parsed = parse_matrix(&to_text(&m)).unwrap();
        assert_eq!(parsed, m);
    }

    #[test]
    fn extremes_survive_round_trip() {
        let m = PixelMatrix::from_raw(1, 2, vec![0, 255]).unwrap();
        assert_eq!(parse_matrix(&to_text(&m)).unwrap(), m);
    }

    #[test]
    fn short_row_is_zero_filled() {
        let m = parse_matrix("2 4\n1 2\n5 6 7 8\n").unwrap();
        assert_eq!(m.row(0), &[1, 2, 0, 0]);
        assert_eq!(m.row(1), &[5, 6, 7, 8]);
    }

    #[test]
    fn long_row_is_truncated() {
        let m = parse_matrix("1 3\n1 2 3 4 5\n").unwrap();
        assert_eq!(m.row(0), &[1, 2, 3]);
    }

    #[test]
    fn missing_rows_are_zero() {
        let m = parse_matrix("3 2\n9 9\n").unwrap();
        assert_eq!(m.as_raw(), &[9, 9, 0, 0, 0, 0]);
    }

    #[test]
    fn blank_row_is_zero() {
        let m = parse_matrix("2 2\n\n4 4\n").unwrap();
        assert_eq!(m.as_raw(), &[0, 0, 4, 4]);
    }

    #[test]
    fn lines_past_height_ignored() {
        let m = parse_matrix("1 2\n1 1\nnot a row\n").unwrap();
        assert_eq!(m.as_raw(), &[1, 1]);
    }

    #[test]
    fn tabs_and_crlf_accepted() {
        let m = parse_matrix("2 2\r\n1\t2\r\n3  4\r\n").unwrap();
        assert_eq!(m.as_raw(), &[1, 2, 3, 4]);
    }

    #[test]
    fn empty_input_is_missing_header() {
        assert!(matches!(
            parse_matrix(""),
            Err(TextFormatError::MissingHeader)
        ));
    }

    #[test]
    fn malformed_headers_rejected() {
        for header in ["", "12", "1 2 3", "a b", "-1 4", "4 x"] {
            assert!(
                matches!(parse_header(header), Err(TextFormatError::MalformedHeader(_))),
                "header {header:?} should be rejected"
            );
        }
    }

    #[test]
    fn zero_dimension_header_rejected() {
        assert!(matches!(
            parse_matrix("0 4\n"),
            Err(TextFormatError::InvalidDimensions(MatrixError::ZeroDimension { .. }))
        ));
    }

    #[test]
    fn overflowing_header_rejected() {
        assert!(matches!(
            parse_matrix("4294967296 4294967296\n1\n"),
            Err(TextFormatError::InvalidDimensions(MatrixError::TooLarge { .. }))
        ));
    }

    #[test]
    fn oversized_header_rejected_before_allocating() {
        let err = parse_matrix("1000000 1000000\n1 2 3\n").unwrap_err();
        assert!(matches!(
            err,
            TextFormatError::InvalidDimensions(MatrixError::TooLarge {
                height: 1_000_000,
                width: 1_000_000
            })
        ));
        assert!(err.to_string().contains("pixel limit"));
    }

    #[test]
    fn non_numeric_token_reports_line() {
        let err = parse_matrix("2 2\n1 2\n3 x\n").unwrap_err();
        match err {
            TextFormatError::InvalidPixel { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn out_of_range_token_rejected() {
        assert!(matches!(
            parse_matrix("1 2\n1 256\n"),
            Err(TextFormatError::InvalidPixel { .. })
        ));
        assert!(matches!(
            parse_matrix("1 2\n-1 0\n"),
            Err(TextFormatError::InvalidPixel { .. })
        ));
    }

    #[test]
    fn bad_token_past_width_still_rejected() {
        assert!(parse_matrix("1 1\n5 oops\n").is_err());
    }

    #[test]
    fn file_round_trip_creates_parent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/matrix.txt");
        let m = PixelMatrix::from_fn(3, 3, |r, c| (r + c) as u8).unwrap();

        write_matrix_file(&m, &path).unwrap();
        assert_eq!(read_matrix_file(&path).unwrap(), m);
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let result = read_matrix_file(Path::new("/nonexistent/matrix.txt"));
        assert!(matches!(result, Err(TextFormatError::Io(_))));
    }
}
