//! Analyze command implementation
//!
//! Generates one sample per configured size with each generator and reports
//! moment statistics and chi-square verdicts.

use std::io::Write;

use prng_generators::GeneratorKind;
use prng_stats::{analyze, sturges_interval_count, CriticalValueTable};
use tracing::info;

use crate::config::OutputFormat;
use crate::render::{render_analysis, GeneratorReports};
use crate::Result;

/// Checks that the table covers every size before any sample is generated.
pub fn ensure_supported(table: &CriticalValueTable, sizes: &[usize]) -> Result<()> {
    for &size in sizes {
        table.row_for_intervals(sturges_interval_count(size))?;
    }
    Ok(())
}

/// Run the analyze command
pub fn run<W: Write>(
    out: &mut W,
    generators: &[GeneratorKind],
    sizes: &[usize],
    table: &CriticalValueTable,
    format: OutputFormat,
) -> Result<()> {
    info!(
        generators = ?generators,
        sizes = ?sizes,
        "Analysing generators..."
    );

    ensure_supported(table, sizes)?;

    let mut sections = Vec::with_capacity(generators.len());
    for &generator in generators {
        let reports = sizes
            .iter()
            .map(|&size| analyze(&generator.generate(size), table))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        info!(generator = %generator, samples = reports.len(), "generator analysed");
        sections.push(GeneratorReports { generator, reports });
    }

    render_analysis(out, format, &sections)?;

    info!("Analysis complete");
    Ok(())
}
