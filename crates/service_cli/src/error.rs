//! Error types for the lab driver.

use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Statistics error
    #[error("Statistics error: {0}")]
    Stats(#[from] prng_stats::StatsError),

    /// Critical-value table error
    #[error("Critical-value table error: {0}")]
    Table(#[from] prng_stats::TableError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialisation error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
