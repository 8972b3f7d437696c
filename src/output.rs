//! CLI output formatting for every command.
//!
//! Operations return report structs and never print. This module turns
//! those reports into lines of text:
//!
//! ## to_text
//!
//! ```text
//! Loaded: photo.jpg
//! Original size: 640x480, Mode: Rgb8
//! Converted to grayscale
//! Resized to: 128x128
//!
//! ✓ Created: photo_input.txt
//! Dimensions: 128x128 pixels
//! Pixel range: [0, 255]
//! Mean: 97.3
//! ```
//!
//! `Dimensions` is reported height-first, matching the file header; the
//! other sizes are width-first.
//!
//! ## Failures
//!
//! ```text
//! ✗ Error: Failed to decode photo.jpg: ...
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability, and [`print_lines`] writes them to stdout. Format functions
//! are pure — no I/O, no side effects.

use crate::compare::CompareReport;
use crate::decode::DecodeReport;
use crate::encode::{EncodeReport, IgnoredDimension};
use crate::samples::SamplesReport;
use std::fmt::Display;
use std::path::Path;

const BIN: &str = "pixel-bridge";

/// Write lines to stdout.
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

pub fn format_error(err: &dyn Display) -> String {
    format!("✗ Error: {err}")
}

pub fn format_unknown_command(command: &str) -> String {
    format!("✗ Unknown command: {command}")
}

/// Banner printed when the binary runs with no command.
pub fn usage_banner() -> Vec<String> {
    let rule = "=".repeat(60);
    vec![
        rule.clone(),
        "Image Converter for Edge Detection Simulation".to_string(),
        rule,
        String::new(),
        "Usage:".to_string(),
        format!("  {BIN} to_text <image> [width height]"),
        format!("  {BIN} from_text <txtfile> <output>"),
        format!("  {BIN} compare <orig> <edges> [output]"),
        format!("  {BIN} samples"),
        format!("  {BIN} gen-config"),
        String::new(),
        "Examples:".to_string(),
        "  # Convert to text (original size)".to_string(),
        format!("  {BIN} to_text photo.jpg"),
        String::new(),
        "  # Convert to text (resize to 128x128)".to_string(),
        format!("  {BIN} to_text photo.jpg 128 128"),
        String::new(),
        "  # Convert simulation output to image".to_string(),
        format!("  {BIN} from_text output_edges.txt result.png"),
        String::new(),
        "  # Create comparison".to_string(),
        format!("  {BIN} compare input.txt output_edges.txt"),
        String::new(),
        "  # Generate sample images".to_string(),
        format!("  {BIN} samples"),
    ]
}

pub fn format_encode_report(report: &EncodeReport) -> Vec<String> {
    let mut lines = vec![
        format!("Loaded: {}", report.source.display()),
        format!(
            "Original size: {}x{}, Mode: {}",
            report.original.width, report.original.height, report.color
        ),
    ];
    if report.converted {
        lines.push("Converted to grayscale".to_string());
    }
    if let Some(resized) = report.resized {
        lines.push(format!("Resized to: {}x{}", resized.width, resized.height));
    }
    match report.ignored {
        Some(IgnoredDimension::Width(w)) => lines.push(format!(
            "Ignoring width {w}: resizing needs both width and height"
        )),
        Some(IgnoredDimension::Height(h)) => lines.push(format!(
            "Ignoring height {h}: resizing needs both width and height"
        )),
        None => {}
    }
    lines.push(String::new());
    lines.push(format!("✓ Created: {}", report.output.display()));
    lines.push(format!(
        "Dimensions: {}x{} pixels",
        report.dimensions.height, report.dimensions.width
    ));
    lines.push(format!(
        "Pixel range: [{}, {}]",
        report.stats.min, report.stats.max
    ));
    lines.push(format!("Mean: {:.1}", report.stats.mean));
    lines
}

/// Hints printed after a successful `to_text`.
pub fn format_next_steps(output: &Path) -> Vec<String> {
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.display().to_string());
    vec![
        String::new(),
        " Next steps:".to_string(),
        format!("1. Copy {name} to your ModelSim project directory"),
        "2. Update testbench parameters to match image size".to_string(),
        "3. Run: vsim -c -do 'do run.do'".to_string(),
    ]
}

pub fn format_decode_report(report: &DecodeReport) -> Vec<String> {
    vec![
        format!(
            "Reading {}x{} image from: {}",
            report.dimensions.height,
            report.dimensions.width,
            report.input.display()
        ),
        format!("✓ Created: {}", report.output.display()),
    ]
}

pub fn format_compare_report(report: &CompareReport) -> Vec<String> {
    vec![
        format!(
            "Left: {}x{}, Right: {}x{}, Canvas: {}x{}",
            report.left.width,
            report.left.height,
            report.right.width,
            report.right.height,
            report.canvas.width,
            report.canvas.height
        ),
        format!("✓ Created comparison: {}", report.output.display()),
    ]
}

pub fn format_samples_report(report: &SamplesReport) -> Vec<String> {
    let mut lines = vec!["Creating sample test images...".to_string(), String::new()];
    for (path, dims) in &report.written {
        lines.push(format!(
            "✓ Created: {} ({}x{})",
            path.display(),
            dims.width,
            dims.height
        ));
    }
    lines.push(String::new());
    lines.push("Use these commands to convert:".to_string());
    for (path, _) in report.written.iter().take(2) {
        lines.push(format!("  {BIN} to_text {}", path.display()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Dimensions;
    use crate::matrix::MatrixStats;
    use std::path::PathBuf;

    fn encode_report() -> EncodeReport {
        EncodeReport {
            source: PathBuf::from("photo.jpg"),
            output: PathBuf::from("out/photo_input.txt"),
            original: Dimensions {
                width: 640,
                height: 480,
            },
            color: "Rgb8".to_string(),
            converted: true,
            resized: Some(Dimensions {
                width: 128,
                height: 64,
            }),
            ignored: None,
            dimensions: Dimensions {
                width: 128,
                height: 64,
            },
            stats: MatrixStats {
                min: 3,
                max: 250,
                mean: 97.31,
            },
        }
    }

    #[test]
    fn encode_report_lines() {
        let lines = format_encode_report(&encode_report());
        assert_eq!(lines[0], "Loaded: photo.jpg");
        assert_eq!(lines[1], "Original size: 640x480, Mode: Rgb8");
        assert!(lines.contains(&"Converted to grayscale".to_string()));
        assert!(lines.contains(&"Resized to: 128x64".to_string()));
        assert!(lines.contains(&"✓ Created: out/photo_input.txt".to_string()));
        // Height first, like the file header
        assert!(lines.contains(&"Dimensions: 64x128 pixels".to_string()));
        assert!(lines.contains(&"Pixel range: [3, 250]".to_string()));
        assert_eq!(lines.last().unwrap(), "Mean: 97.3");
    }

    #[test]
    fn encode_report_gray_source_without_resize() {
        let mut report = encode_report();
        report.converted = false;
        report.resized = None;
        let lines = format_encode_report(&report);
        assert!(!lines.iter().any(|l| l.starts_with("Converted")));
        assert!(!lines.iter().any(|l| l.starts_with("Resized")));
    }

    #[test]
    fn encode_report_flags_ignored_dimension() {
        let mut report = encode_report();
        report.resized = None;
        report.ignored = Some(IgnoredDimension::Width(128));
        let lines = format_encode_report(&report);
        assert!(lines.contains(
            &"Ignoring width 128: resizing needs both width and height".to_string()
        ));
    }

    #[test]
    fn next_steps_name_the_file() {
        let lines = format_next_steps(Path::new("out/photo_input.txt"));
        assert!(lines[2].contains("photo_input.txt"));
        assert!(!lines[2].contains("out/"));
    }

    #[test]
    fn decode_report_is_height_first() {
        let lines = format_decode_report(&DecodeReport {
            input: PathBuf::from("edges.txt"),
            output: PathBuf::from("edges.png"),
            dimensions: Dimensions {
                width: 30,
                height: 20,
            },
        });
        assert_eq!(lines[0], "Reading 20x30 image from: edges.txt");
        assert_eq!(lines[1], "✓ Created: edges.png");
    }

    #[test]
    fn compare_report_names_output() {
        let d = Dimensions {
            width: 4,
            height: 2,
        };
        let lines = format_compare_report(&CompareReport {
            output: PathBuf::from("comparison.png"),
            left: d,
            right: d,
            canvas: Dimensions {
                width: 28,
                height: 2,
            },
        });
        assert_eq!(lines[0], "Left: 4x2, Right: 4x2, Canvas: 28x2");
        assert_eq!(lines[1], "✓ Created comparison: comparison.png");
    }

    #[test]
    fn samples_report_lists_files_and_hints() {
        let report = SamplesReport {
            written: vec![
                (
                    PathBuf::from("sample_shapes.png"),
                    Dimensions {
                        width: 128,
                        height: 128,
                    },
                ),
                (
                    PathBuf::from("sample_letter.png"),
                    Dimensions {
                        width: 64,
                        height: 64,
                    },
                ),
            ],
        };
        let lines = format_samples_report(&report);
        assert!(lines.contains(&"✓ Created: sample_shapes.png (128x128)".to_string()));
        assert!(lines.contains(&"  pixel-bridge to_text sample_letter.png".to_string()));
    }

    #[test]
    fn error_and_unknown_command_prefixes() {
        assert_eq!(format_error(&"boom"), "✗ Error: boom");
        assert_eq!(format_unknown_command("frobnicate"), "✗ Unknown command: frobnicate");
    }

    #[test]
    fn usage_lists_every_command() {
        let banner = usage_banner().join("\n");
        for cmd in ["to_text", "from_text", "compare", "samples", "gen-config"] {
            assert!(banner.contains(cmd), "usage should mention {cmd}");
        }
    }
}
