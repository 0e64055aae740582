//! Bench command implementation
//!
//! Times sample generation for each generator across the benchmark sizes.

use std::io::Write;
use std::time::Instant;

use prng_generators::GeneratorKind;
use prng_stats::{round_to, DISPLAY_DIGITS};
use tracing::{debug, info};

use crate::config::OutputFormat;
use crate::render::{render_bench, BenchRecord};
use crate::Result;

/// Times one generation of `size` values.
pub fn time_generation(generator: GeneratorKind, size: usize) -> f64 {
    let start = Instant::now();
    let sample = generator.generate(size);
    let seconds = start.elapsed().as_secs_f64();

    debug!(generator = %generator, size, len = sample.len(), seconds, "sample timed");
    round_to(seconds, DISPLAY_DIGITS)
}

/// Run the bench command
pub fn run<W: Write>(
    out: &mut W,
    generators: &[GeneratorKind],
    sizes: &[usize],
    format: OutputFormat,
) -> Result<()> {
    info!(generators = ?generators, sizes = ?sizes, "Timing generators...");

    let records: Vec<BenchRecord> = generators
        .iter()
        .flat_map(|&generator| {
            sizes.iter().map(move |&size| BenchRecord {
                generator,
                sample_size: size,
                seconds: time_generation(generator, size),
            })
        })
        .collect();

    render_bench(out, format, sizes, &records)?;

    info!("Benchmark complete");
    Ok(())
}
