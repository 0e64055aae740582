//! Check command implementation
//!
//! Reports the effective configuration and verifies that the critical-value
//! table covers every configured sample size.

use std::io::Write;

use prng_stats::{sturges_interval_count, CriticalValueTable};
use tracing::{info, warn};

use crate::config::LabConfig;
use crate::Result;

/// Run the check command
pub fn run<W: Write>(out: &mut W, config: &LabConfig, table: &CriticalValueTable) -> Result<()> {
    info!("Checking configuration...");

    let (min_df, max_df) = table.degrees_range();
    let generators: Vec<&str> = config.generators.iter().map(|g| g.id()).collect();

    writeln!(out, "prng-lab v{}", crate::VERSION)?;
    writeln!(out, "Generators: {}", generators.join(", "))?;
    writeln!(out, "Output format: {}", config.format)?;
    writeln!(out, "Log level: {}", config.log_level)?;
    match &config.critical_table {
        Some(path) => writeln!(out, "Critical-value table: {}", path.display())?,
        None => writeln!(out, "Critical-value table: standard")?,
    }
    writeln!(
        out,
        "Degrees of freedom covered: {}..={} ({} rows)",
        min_df,
        max_df,
        table.len()
    )?;

    let mut first_error = None;
    for &size in &config.sample_sizes {
        let intervals = sturges_interval_count(size);
        match table.row_for_intervals(intervals) {
            Ok(_) => writeln!(out, "  {:>9} values: {} intervals, ok", size, intervals)?,
            Err(e) => {
                warn!(size, intervals, "sample size not covered by critical-value table");
                writeln!(out, "  {:>9} values: {} intervals, unsupported", size, intervals)?;
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e.into()),
        None => {
            writeln!(out, "Configuration OK")?;
            info!("Check complete");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_default_config_passes() {
        let mut out = Vec::new();
        run(&mut out, &LabConfig::default(), &CriticalValueTable::standard()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Generators: lcg, middle-products"));
        assert!(text.contains("Degrees of freedom covered: 5..=22 (18 rows)"));
        assert!(text.ends_with("Configuration OK\n"));
    }

    #[test]
    fn test_uncovered_size_is_listed_and_fails() {
        let config = LabConfig {
            sample_sizes: vec![10, 100],
            ..LabConfig::default()
        };
        let mut out = Vec::new();
        let result = run(&mut out, &config, &CriticalValueTable::standard());

        assert!(matches!(result, Err(CliError::Stats(_))));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("10 values: 4 intervals, unsupported"));
        assert!(text.contains("100 values: 7 intervals, ok"));
    }
}
