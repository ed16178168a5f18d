use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::builder::FormatOptions;
use crate::colorize::{JsonPalette, PaletteConfig, PaletteError};

pub const CONFIG_FILE_NAME: &str = "curlstring.json";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CurlstringConfig {
    #[serde(rename = "colorJson")]
    pub color_json: Option<bool>,
    #[serde(rename = "jsonIndentWidth")]
    pub json_indent_width: Option<usize>,
    pub palette: PaletteConfig,
}

impl CurlstringConfig {
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            color_json: self.color_json,
            json_indent_width: self.json_indent_width,
        }
    }

    pub fn palette(&self) -> Result<JsonPalette, PaletteError> {
        JsonPalette::try_from(&self.palette)
    }
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: CurlstringConfig,
    pub path: PathBuf,
}

/// Loads `curlstring.json` from a directory, or the given file directly.
/// A missing file is not an error.
pub fn load_config(target: &Path) -> Result<Option<LoadedConfig>> {
    let resolved = if target.is_absolute() {
        target.to_path_buf()
    } else {
        std::env::current_dir()?.join(target)
    };

    let file_path = if resolved.is_dir() {
        resolved.join(CONFIG_FILE_NAME)
    } else {
        resolved
    };

    if !file_path.exists() {
        debug!(path = %file_path.display(), "no config file found");
        return Ok(None);
    }

    let contents = fs::read_to_string(&file_path)
        .with_context(|| format!("reading config {}", file_path.display()))?;

    let config: CurlstringConfig = serde_json::from_str(&contents)
        .with_context(|| format!("parsing config {}", file_path.display()))?;

    debug!(path = %file_path.display(), "loaded config");

    Ok(Some(LoadedConfig {
        config,
        path: file_path,
    }))
}
