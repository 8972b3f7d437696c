use clap::{Parser, Subcommand};
use pixel_bridge::config::{self, BridgeConfig, ConfigError};
use pixel_bridge::encode::{self, EncodeOptions};
use pixel_bridge::imaging::RustBackend;
use pixel_bridge::{compare, decode, naming, output, samples};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "pixel-bridge")]
#[command(about = "Convert images to and from testbench pixel-matrix text files")]
#[command(long_about = "\
Convert images to and from testbench pixel-matrix text files

Text format:

  64 64              # <height> <width>
  0 0 12 255 ...     # one line per row, <width> values in 0-255
  ...

Rows shorter than <width> are zero-filled; longer rows are truncated.

Run with no command for usage examples, or 'pixel-bridge gen-config' for a
documented pixel-bridge.toml.")]
#[command(version)]
#[command(allow_external_subcommands = true)]
struct Cli {
    /// Directory that receives generated files; relative output paths resolve here
    #[arg(long, default_value = ".", global = true)]
    output_dir: PathBuf,

    /// Config file (default: ./pixel-bridge.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

// Positionals are optional and extras are swallowed so that argument mistakes
// are reported as `✗ Error:` lines like every other failure.
#[derive(Subcommand)]
enum Command {
    /// Convert an image to a text matrix (<stem>_input.txt)
    #[command(name = "to_text")]
    ToText {
        image: Option<PathBuf>,
        /// Target width; resizing happens only when height is also given
        #[arg(allow_hyphen_values = true)]
        width: Option<String>,
        /// Target height
        #[arg(allow_hyphen_values = true)]
        height: Option<String>,
        #[arg(hide = true, allow_hyphen_values = true)]
        _extra: Vec<String>,
    },
    /// Convert a text matrix back to a grayscale image
    #[command(name = "from_text")]
    FromText {
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        #[arg(hide = true, allow_hyphen_values = true)]
        _extra: Vec<String>,
    },
    /// Place two images or text matrices side by side
    Compare {
        left: Option<PathBuf>,
        right: Option<PathBuf>,
        /// Output image (default from config: comparison.png)
        output: Option<PathBuf>,
        #[arg(hide = true, allow_hyphen_values = true)]
        _extra: Vec<String>,
    },
    /// Write three synthetic test images
    Samples {
        #[arg(hide = true, allow_hyphen_values = true)]
        _extra: Vec<String>,
    },
    /// Print a stock pixel-bridge.toml with all options documented
    GenConfig,
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(Error, Debug)]
enum UsageError {
    #[error("Specify input image")]
    MissingImage,
    #[error("Specify input text and output image")]
    MissingFromTextArgs,
    #[error("Specify original and edges files")]
    MissingCompareArgs,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        println!("{}", output::format_error(&err));
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let backend = RustBackend::new();

    let Some(command) = cli.command else {
        output::print_lines(&output::usage_banner());
        return Ok(());
    };

    match command {
        Command::ToText {
            image,
            width,
            height,
            ..
        } => {
            let image = image.ok_or(UsageError::MissingImage)?;
            let config = load_config(cli.config.as_deref())?;
            let options = EncodeOptions {
                width: width
                    .as_deref()
                    .map(|w| encode::parse_dimension("width", w))
                    .transpose()?,
                height: height
                    .as_deref()
                    .map(|h| encode::parse_dimension("height", h))
                    .transpose()?,
                filter: config.resize.filter,
            };
            let name =
                naming::text_output_name(&image, &config.text.suffix, &config.text.extension);
            let target = cli.output_dir.join(name);
            let report = encode::image_to_text(&backend, &image, &target, &options)?;
            output::print_lines(&output::format_encode_report(&report));
            output::print_lines(&output::format_next_steps(&report.output));
        }
        Command::FromText {
            input,
            output: out,
            ..
        } => {
            let (Some(input), Some(out)) = (input, out) else {
                return Err(UsageError::MissingFromTextArgs.into());
            };
            let target = naming::resolve_in(&cli.output_dir, &out);
            let report = decode::text_to_image(&backend, &input, &target)?;
            output::print_lines(&output::format_decode_report(&report));
        }
        Command::Compare {
            left,
            right,
            output: out,
            ..
        } => {
            let (Some(left), Some(right)) = (left, right) else {
                return Err(UsageError::MissingCompareArgs.into());
            };
            let config = load_config(cli.config.as_deref())?;
            let out = out.unwrap_or_else(|| PathBuf::from(&config.compare.output));
            let target = naming::resolve_in(&cli.output_dir, &out);
            let report = compare::compare(
                &backend,
                &left,
                &right,
                &target,
                &config.compare,
                &config.text.extension,
            )?;
            output::print_lines(&output::format_compare_report(&report));
        }
        Command::Samples { .. } => {
            let report = samples::generate_samples(&backend, &cli.output_dir)?;
            output::print_lines(&output::format_samples_report(&report));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Unknown(args) => {
            let name = args.first().map(String::as_str).unwrap_or_default();
            println!("{}", output::format_unknown_command(name));
        }
    }

    Ok(())
}

/// Load the explicit `--config` file, or `pixel-bridge.toml` from the working directory.
fn load_config(explicit: Option<&Path>) -> Result<BridgeConfig, ConfigError> {
    match explicit {
        Some(path) => config::load_config_file(path),
        None => config::load_config(Path::new(".")),
    }
}
