//! Error types for prime-pages
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for prime-pages operations
pub type PrimeResult<T> = Result<T, PrimeError>;

/// Main error type for prime-pages operations
#[derive(Error, Debug)]
pub enum PrimeError {
    /// A caller-supplied parameter is out of range
    #[error("invalid argument '{name}': {value} (must be a positive integer)")]
    InvalidArgument { name: &'static str, value: i64 },

    /// The requested primes do not fit under the numeric ceiling
    #[error("cannot generate {count} primes: candidates would exceed {ceiling}")]
    Capacity { count: u64, ceiling: u64 },

    /// Page geometry is too large to address
    #[error("page of {rows} rows x {columns} columns is too large")]
    PageTooLarge { rows: i64, columns: i64 },

    /// The output sink rejected a write
    #[error("output sink failed: {0}")]
    Sink(#[source] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Configuration file could not be read
    #[error("cannot read configuration {file}: {source}")]
    ConfigRead {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PrimeError {
    /// Stable machine-readable code used in JSON error events
    pub fn code(&self) -> &'static str {
        match self {
            PrimeError::InvalidArgument { .. } => "invalid_argument",
            PrimeError::Capacity { .. } | PrimeError::PageTooLarge { .. } => "capacity",
            PrimeError::Sink(_) => "sink_failure",
            PrimeError::InvalidConfig { .. } => "invalid_config",
            PrimeError::ConfigRead { .. } => "config_read",
        }
    }
}
