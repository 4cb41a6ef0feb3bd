//! Config file loading.

use crate::error::CliError;
use jprint_markup::MarkupStyle;
use jprint_printer::PrinterOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of a `--config` file. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub printer: PrinterOptions,
    pub markup: MarkupStyle,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The config at `path`, or the defaults when no path is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CliError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
