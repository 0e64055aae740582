//! Lab configuration management
//!
//! Configuration is layered: TOML file, then `PRNG_LAB_*` environment
//! variables, then command-line flags. The merged result is validated once.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use prng_generators::GeneratorKind;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Largest sample size accepted in configuration.
pub const MAX_SAMPLE_SIZE: usize = 10_000_000;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "prng-lab.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidFormat(String),

    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels supported by the lab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Report rendering formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// CSV with a header row
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Lab configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Sample sizes analysed per generator
    pub sample_sizes: Vec<usize>,
    /// Sample sizes used for the generation-time comparison
    pub benchmark_sizes: Vec<usize>,
    /// Generators analysed by default
    pub generators: Vec<GeneratorKind>,
    /// Output format
    pub format: OutputFormat,
    /// Log level
    pub log_level: LogLevel,
    /// Replacement critical-value table (TOML)
    pub critical_table: Option<PathBuf>,
}

fn default_sample_sizes() -> Vec<usize> {
    vec![
        50, 100, 500, 1_000, 5_000, 10_000, 50_000, 100_000, 500_000, 1_000_000, 2_000_000,
    ]
}

fn default_benchmark_sizes() -> Vec<usize> {
    vec![
        1_000, 2_500, 5_000, 7_500, 10_000, 25_000, 50_000, 75_000, 100_000, 250_000, 500_000,
        750_000, 1_000_000,
    ]
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            sample_sizes: default_sample_sizes(),
            benchmark_sizes: default_benchmark_sizes(),
            generators: vec![
                GeneratorKind::LinearCongruential,
                GeneratorKind::MiddleProducts,
            ],
            format: OutputFormat::default(),
            log_level: LogLevel::default(),
            critical_table: None,
        }
    }
}

/// Command-line values that override file and environment settings
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub sample_sizes: Option<Vec<usize>>,
    pub generators: Option<Vec<GeneratorKind>>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<LogLevel>,
    pub critical_table: Option<PathBuf>,
}

fn parse_list<T: FromStr>(raw: &str) -> Option<Vec<T>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().ok())
        .collect()
}

impl LabConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("{}: {}", path.display(), e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load configuration from `path` when it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`; malformed values are ignored
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("PRNG_LAB_SAMPLE_SIZES") {
            match parse_list(&raw) {
                Some(sizes) => self.sample_sizes = sizes,
                None => warn!(value = %raw, "ignoring malformed PRNG_LAB_SAMPLE_SIZES"),
            }
        }

        if let Some(raw) = lookup("PRNG_LAB_BENCHMARK_SIZES") {
            match parse_list(&raw) {
                Some(sizes) => self.benchmark_sizes = sizes,
                None => warn!(value = %raw, "ignoring malformed PRNG_LAB_BENCHMARK_SIZES"),
            }
        }

        if let Some(raw) = lookup("PRNG_LAB_GENERATORS") {
            match parse_list(&raw) {
                Some(generators) => self.generators = generators,
                None => warn!(value = %raw, "ignoring malformed PRNG_LAB_GENERATORS"),
            }
        }

        if let Some(format) = lookup("PRNG_LAB_FORMAT").and_then(|s| s.parse().ok()) {
            self.format = format;
        }

        if let Some(level) = lookup("PRNG_LAB_LOG_LEVEL").and_then(|s| s.parse().ok()) {
            self.log_level = level;
        }

        if let Some(path) = lookup("PRNG_LAB_CRITICAL_TABLE") {
            self.critical_table = Some(PathBuf::from(path));
        }

        self
    }

    /// Apply command-line overrides
    pub fn with_cli_override(mut self, cli: &CliOverrides) -> Self {
        if let Some(sizes) = &cli.sample_sizes {
            self.sample_sizes = sizes.clone();
        }
        if let Some(generators) = &cli.generators {
            self.generators = generators.clone();
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if let Some(path) = &cli.critical_table {
            self.critical_table = Some(path.clone());
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        check_sizes("sample_sizes", &self.sample_sizes, &mut errors);
        check_sizes("benchmark_sizes", &self.benchmark_sizes, &mut errors);

        if self.generators.is_empty() {
            errors.push("generators cannot be empty".to_string());
        }
        for (i, kind) in self.generators.iter().enumerate() {
            if self.generators[..i].contains(kind) {
                errors.push(format!("generator '{}' is listed more than once", kind));
            }
        }

        if let Some(path) = &self.critical_table {
            if path.as_os_str().is_empty() {
                errors.push("critical_table cannot be empty".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

fn check_sizes(name: &str, sizes: &[usize], errors: &mut Vec<String>) {
    if sizes.is_empty() {
        errors.push(format!("{} cannot be empty", name));
    }
    for &size in sizes {
        if size == 0 {
            errors.push(format!("{} entries must be greater than 0", name));
        }
        if size > MAX_SAMPLE_SIZE {
            errors.push(format!(
                "{} entry {} exceeds maximum allowed ({})",
                name, size, MAX_SAMPLE_SIZE
            ));
        }
    }
}

/// Build the effective configuration: file → environment → CLI, validated
pub fn build_config(path: &Path, cli: &CliOverrides) -> Result<LabConfig, ConfigError> {
    let config = LabConfig::load_or_default(path)?
        .with_env_override()
        .with_cli_override(cli);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = LabConfig::default();
        assert_eq!(config.sample_sizes.len(), 11);
        assert_eq!(config.sample_sizes[0], 50);
        assert_eq!(config.benchmark_sizes.len(), 13);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = LabConfig::from_toml_str(
            r#"
            sample_sizes = [100, 1000]
            generators = ["builtin"]
            format = "json"
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.sample_sizes, vec![100, 1_000]);
        assert_eq!(config.generators, vec![GeneratorKind::Builtin]);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.benchmark_sizes, default_benchmark_sizes());
    }

    #[test]
    fn test_from_toml_unknown_generator() {
        let result = LabConfig::from_toml_str(r#"generators = ["mersenne"]"#);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sample_sizes = [64]\nformat = \"csv\"").unwrap();

        let config = LabConfig::load(file.path()).unwrap();
        assert_eq!(config.sample_sizes, vec![64]);
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = LabConfig::load_or_default(Path::new("/nonexistent/prng-lab.toml")).unwrap();
        assert_eq!(config, LabConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = LabConfig::default().with_overrides_from(lookup_from(&[
            ("PRNG_LAB_SAMPLE_SIZES", "64, 128"),
            ("PRNG_LAB_GENERATORS", "builtin,lcg"),
            ("PRNG_LAB_FORMAT", "JSON"),
            ("PRNG_LAB_LOG_LEVEL", "warn"),
            ("PRNG_LAB_CRITICAL_TABLE", "tables/custom.toml"),
        ]));

        assert_eq!(config.sample_sizes, vec![64, 128]);
        assert_eq!(
            config.generators,
            vec![GeneratorKind::Builtin, GeneratorKind::LinearCongruential]
        );
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.critical_table, Some(PathBuf::from("tables/custom.toml")));
    }

    #[test]
    fn test_malformed_env_values_are_ignored() {
        let config = LabConfig::default().with_overrides_from(lookup_from(&[
            ("PRNG_LAB_SAMPLE_SIZES", "64,abc"),
            ("PRNG_LAB_FORMAT", "xml"),
        ]));

        assert_eq!(config.sample_sizes, default_sample_sizes());
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_cli_overrides_win() {
        let cli = CliOverrides {
            sample_sizes: Some(vec![1_000]),
            format: Some(OutputFormat::Csv),
            ..Default::default()
        };
        let config = LabConfig::default()
            .with_overrides_from(lookup_from(&[("PRNG_LAB_SAMPLE_SIZES", "64")]))
            .with_cli_override(&cli);

        assert_eq!(config.sample_sizes, vec![1_000]);
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn test_validate_multiple_errors() {
        let config = LabConfig {
            sample_sizes: vec![0, MAX_SAMPLE_SIZE + 1],
            benchmark_sizes: vec![],
            generators: vec![GeneratorKind::Builtin, GeneratorKind::Builtin],
            ..LabConfig::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("greater than 0")));
                assert!(errors.iter().any(|e| e.contains("exceeds maximum")));
                assert!(errors.iter().any(|e| e.contains("benchmark_sizes cannot be empty")));
                assert!(errors.iter().any(|e| e.contains("more than once")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_generators() {
        let config = LabConfig {
            generators: vec![],
            ..LabConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_log_level_parsing() {
        for level in ["trace", "debug", "info", "warn", "error", "INFO"] {
            assert!(level.parse::<LogLevel>().is_ok(), "{} should parse", level);
        }
        assert!(matches!(
            "loud".parse::<LogLevel>(),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = error.to_string();
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }
}
