//! prng-lab - command-line driver for the PRNG uniformity lab
//!
//! # Commands
//!
//! - `prng-lab analyze` - Analyse samples from each configured generator
//! - `prng-lab bench` - Time sample generation
//! - `prng-lab generate --generator <name> --size <n>` - Print one sample
//! - `prng-lab check` - Check configuration and table coverage

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use prng_generators::GeneratorKind;
use service_cli::config::DEFAULT_CONFIG_FILE;
use service_cli::{build_config, commands, load_table, CliOverrides, LogLevel, OutputFormat};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// PRNG uniformity lab
#[derive(Parser, Debug)]
#[command(name = "prng-lab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "PRNG_LAB_LOG_LEVEL")]
    log_level: Option<LogLevel>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Critical-value table file (TOML format)
    #[arg(long, global = true, value_name = "FILE")]
    critical_table: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyse samples from each generator
    Analyze {
        /// Generators to analyse (lcg, middle-products, builtin)
        #[arg(short, long, value_delimiter = ',')]
        generators: Option<Vec<GeneratorKind>>,

        /// Sample sizes
        #[arg(short, long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,
    },

    /// Time sample generation per generator and size
    Bench {
        /// Generators to time; all three by default
        #[arg(short, long, value_delimiter = ',')]
        generators: Option<Vec<GeneratorKind>>,

        /// Sample sizes
        #[arg(short, long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,
    },

    /// Print one raw sample
    Generate {
        /// Generator to use
        #[arg(short, long, default_value = "lcg")]
        generator: GeneratorKind,

        /// Number of values
        #[arg(short = 'n', long, default_value = "100")]
        size: usize,
    },

    /// Check configuration and critical-value table coverage
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut overrides = CliOverrides {
        format: cli.format,
        log_level: if cli.verbose {
            Some(LogLevel::Debug)
        } else {
            cli.log_level
        },
        critical_table: cli.critical_table.clone(),
        ..Default::default()
    };
    if let Commands::Analyze { generators, sizes } = &cli.command {
        overrides.generators = generators.clone();
        overrides.sample_sizes = sizes.clone();
    }

    let config = build_config(&cli.config, &overrides)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        version = service_cli::VERSION,
        format = %config.format,
        log_level = %config.log_level,
        "prng-lab configuration loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Analyze { .. } => {
            let table = load_table(&config)?;
            commands::analyze::run(
                &mut out,
                &config.generators,
                &config.sample_sizes,
                &table,
                config.format,
            )?;
        }
        Commands::Bench { generators, sizes } => {
            let generators = generators.unwrap_or_else(|| GeneratorKind::ALL.to_vec());
            let sizes = sizes.unwrap_or_else(|| config.benchmark_sizes.clone());
            commands::bench::run(&mut out, &generators, &sizes, config.format)?;
        }
        Commands::Generate { generator, size } => {
            commands::generate::run(&mut out, generator, size, config.format)?;
        }
        Commands::Check => {
            let table = load_table(&config)?;
            commands::check::run(&mut out, &config, &table)?;
        }
    }

    out.flush()?;
    Ok(())
}
