use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the payout history report.
#[derive(Error, Debug)]
pub enum HistoryError {
    /// A pay-period token did not match `YYYY-MM`.
    #[error("Invalid pay period: {0}")]
    InvalidPeriod(String),

    /// The configured date range runs backwards.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: String, end: String },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// The export file could not be written.
    #[error("Failed to write export file {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the history crates.
pub type Result<T> = std::result::Result<T, HistoryError>;
