//! Generate command implementation

use std::io::Write;

use prng_generators::GeneratorKind;
use tracing::info;

use crate::config::OutputFormat;
use crate::render::render_sample;
use crate::{CliError, Result};

/// Run the generate command
pub fn run<W: Write>(
    out: &mut W,
    generator: GeneratorKind,
    size: usize,
    format: OutputFormat,
) -> Result<()> {
    if size == 0 {
        return Err(CliError::invalid_argument("size must be greater than 0"));
    }

    info!(generator = %generator, size, "Generating sample...");
    let sample = generator.generate(size);
    render_sample(out, format, &sample)
}
