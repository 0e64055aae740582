//! PRNG lab driver
//!
//! Generates samples with each configured generator, analyses them, and
//! renders the results as text, JSON or CSV.
//!
//! # Commands
//!
//! - `prng-lab analyze` - Moment statistics and chi-square verdicts per sample size
//! - `prng-lab bench` - Generation time per generator and sample size
//! - `prng-lab generate` - Print one raw sample
//! - `prng-lab check` - Validate configuration and critical-value table coverage

pub mod commands;
pub mod config;
pub mod error;
pub mod render;

pub use config::{build_config, CliOverrides, ConfigError, LabConfig, LogLevel, OutputFormat};
pub use error::{CliError, Result};

use prng_stats::CriticalValueTable;
use tracing::info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loads the configured critical-value table, or the standard one.
pub fn load_table(config: &LabConfig) -> Result<CriticalValueTable> {
    match &config.critical_table {
        Some(path) => {
            let table = CriticalValueTable::load(path)?;
            info!(path = %path.display(), rows = table.len(), "critical-value table loaded");
            Ok(table)
        }
        None => Ok(CriticalValueTable::standard()),
    }
}
