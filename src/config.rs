//! Bridge configuration.
//!
//! Handles loading and validating `pixel-bridge.toml`. Every option has a
//! default matching the testbench conventions, so the file is optional and
//! sparse: override only the values you need.
//!
//! ## Config File Location
//!
//! By default the bridge looks for `pixel-bridge.toml` in the working
//! directory. Pass `--config <file>` to use another file.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [text]
//! extension = "txt"         # Inputs ending in .txt are read as pixel matrices
//! suffix = "_input"         # to_text writes <stem>_input.txt
//!
//! [resize]
//! filter = "lanczos3"       # nearest | triangle | catmull-rom | gaussian | lanczos3
//!
//! [compare]
//! gutter = 20               # Pixels between the two images (at most 4096)
//! background = 128          # Fill for uncovered canvas regions
//! output = "comparison.png" # Default comparison output path
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::ResizeFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Widest gutter `compare` accepts, in pixels.
pub const MAX_GUTTER: u32 = 4096;

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "pixel-bridge.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Bridge configuration loaded from `pixel-bridge.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Text-format file naming.
    pub text: TextConfig,
    /// Resampling used by `to_text` when both dimensions are given.
    pub resize: ResizeConfig,
    /// Comparison canvas layout.
    pub compare: CompareConfig,
}

impl BridgeConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ext = &self.text.extension;
        if ext.is_empty() {
            return Err(ConfigError::Validation(
                "text.extension must not be empty".into(),
            ));
        }
        if ext.contains(['.', '/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "text.extension must be a bare extension like \"txt\", got {ext:?}"
            )));
        }
        if self.text.suffix.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "text.suffix must not contain path separators".into(),
            ));
        }
        if self.compare.gutter > MAX_GUTTER {
            return Err(ConfigError::Validation(format!(
                "compare.gutter must be at most {MAX_GUTTER}, got {}",
                self.compare.gutter
            )));
        }
        if self.compare.output.trim().is_empty() {
            return Err(ConfigError::Validation(
                "compare.output must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    /// Extension (without the dot) identifying text-format inputs and outputs.
    pub extension: String,
    /// Appended to the source stem when naming `to_text` output.
    pub suffix: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            extension: "txt".to_string(),
            suffix: "_input".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeConfig {
    pub filter: ResizeFilter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareConfig {
    /// Width in pixels of the gap between the two images.
    pub gutter: u32,
    /// Gray level filling every canvas pixel not covered by an image.
    pub background: u8,
    /// Output path used when `compare` is not given one.
    pub output: String,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            gutter: 20,
            background: 128,
            output: "comparison.png".to_string(),
        }
    }
}

/// Parse and validate config from TOML text.
pub fn parse_config(content: &str) -> Result<BridgeConfig, ConfigError> {
    let config: BridgeConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from a specific file. The file must exist.
pub fn load_config_file(path: &Path) -> Result<BridgeConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load config from `pixel-bridge.toml` in the given directory.
///
/// Returns the defaults when no file exists there.
pub fn load_config(dir: &Path) -> Result<BridgeConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(BridgeConfig::default());
    }
    load_config_file(&config_path)
}

/// Returns a fully-commented stock `pixel-bridge.toml` with all keys.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# pixel-bridge configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Text-format files
# ---------------------------------------------------------------------------
[text]
# Extension (without the dot). `compare` reads inputs ending in it as pixel
# matrices instead of images, and `to_text` uses it for its output file.
extension = "txt"

# Appended to the image stem: photo.jpg -> photo_input.txt
suffix = "_input"

# ---------------------------------------------------------------------------
# Resizing (to_text with both width and height)
# ---------------------------------------------------------------------------
[resize]
# One of: nearest, triangle, catmull-rom, gaussian, lanczos3
filter = "lanczos3"

# ---------------------------------------------------------------------------
# Side-by-side comparison
# ---------------------------------------------------------------------------
[compare]
# Gap between the two images, in pixels (0-4096).
gutter = 20

# Gray level (0-255) for canvas regions no image covers.
background = 128

# Output path when none is given on the command line.
output = "comparison.png"
"##
}
