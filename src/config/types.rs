//! Configuration type definitions

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::application::{PrintOptions, DEFAULT_COUNT};
use crate::domain::value_objects::{DEFAULT_COLUMNS_PER_PAGE, DEFAULT_ROWS_PER_PAGE};
use crate::error::PrimeResult;
use crate::presentation::{OutputFormat, RowLayout, DEFAULT_COLUMN_WIDTH};

use super::loader::{self, ConfigWarning};

/// Table configuration: what to print and the page geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_count")]
    pub count: i64,

    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: i64,

    #[serde(default = "default_columns_per_page")]
    pub columns_per_page: i64,

    /// Page header; may contain `{count}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            rows_per_page: default_rows_per_page(),
            columns_per_page: default_columns_per_page(),
            header: None,
        }
    }
}

fn default_count() -> i64 {
    DEFAULT_COUNT
}

fn default_rows_per_page() -> i64 {
    DEFAULT_ROWS_PER_PAGE
}

fn default_columns_per_page() -> i64 {
    DEFAULT_COLUMNS_PER_PAGE
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub layout: RowLayout,

    #[serde(default = "default_column_width")]
    pub column_width: usize,

    #[serde(default)]
    pub verbosity: Verbosity,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            layout: RowLayout::default(),
            column_width: default_column_width(),
            verbosity: Verbosity::default(),
        }
    }
}

fn default_column_width() -> usize {
    DEFAULT_COLUMN_WIDTH
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Combine a configured level with `-q` / `-v` flags. Flags win.
    pub fn from_flags(configured: Verbosity, verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => configured,
            (false, 1) => configured.max(Verbosity::Verbose),
            (false, _) => Verbosity::Debug,
        }
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Verbosity::Quiet),
            "normal" => Ok(Verbosity::Normal),
            "verbose" => Ok(Verbosity::Verbose),
            "debug" => Ok(Verbosity::Debug),
            other => Err(format!("unknown verbosity '{}'", other)),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub table: TableConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PrimeResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> PrimeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Print options described by this configuration
    pub fn print_options(&self, format: OutputFormat) -> PrintOptions {
        PrintOptions {
            count: self.table.count,
            rows_per_page: self.table.rows_per_page,
            columns_per_page: self.table.columns_per_page,
            header: self.table.header.clone(),
            layout: self.output.layout,
            column_width: self.output.column_width,
            format,
        }
    }
}
