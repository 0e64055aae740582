//! Output rendering for analysis, benchmark and sample results.
//!
//! Every renderer writes one of three formats: a plain-text layout, pretty
//! JSON, or CSV with a header row. JSON and CSV share the same flat records.

use std::io::Write;

use prng_generators::{GeneratorKind, Sample};
use prng_stats::{SampleReport, Verdict};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;

/// Reports for one generator, in sample-size order.
#[derive(Clone, Debug)]
pub struct GeneratorReports {
    pub generator: GeneratorKind,
    pub reports: Vec<SampleReport>,
}

/// One analysed sample as a flat record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisRecord {
    pub generator: GeneratorKind,
    pub sample_size: usize,
    pub mean: f64,
    pub variance: f64,
    pub std_deviation: f64,
    pub coefficient_of_variation: f64,
    pub chi_square: f64,
    pub intervals: usize,
    pub uniformity: Verdict,
    pub randomness: Verdict,
}

impl AnalysisRecord {
    /// Builds a record with floats rounded for display.
    pub fn new(generator: GeneratorKind, report: &SampleReport) -> Self {
        let r = report.rounded();
        Self {
            generator,
            sample_size: r.sample_size,
            mean: r.mean,
            variance: r.variance,
            std_deviation: r.std_deviation,
            coefficient_of_variation: r.coefficient_of_variation,
            chi_square: r.chi_square,
            intervals: r.intervals,
            uniformity: r.uniformity,
            randomness: r.randomness,
        }
    }
}

/// Generation time of one sample.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BenchRecord {
    pub generator: GeneratorKind,
    pub sample_size: usize,
    /// Wall-clock seconds, rounded to six decimals
    pub seconds: f64,
}

#[derive(Serialize)]
struct ValueRecord {
    value: u32,
}

fn write_csv<W, T, I>(out: &mut W, records: I) -> Result<()>
where
    W: Write,
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Renders analysis results.
pub fn render_analysis<W: Write>(
    out: &mut W,
    format: OutputFormat,
    sections: &[GeneratorReports],
) -> Result<()> {
    let records = || {
        sections.iter().flat_map(|section| {
            section
                .reports
                .iter()
                .map(move |report| AnalysisRecord::new(section.generator, report))
        })
    };

    match format {
        OutputFormat::Table => {
            for section in sections {
                writeln!(out, "{}:", section.generator.label())?;
                for report in &section.reports {
                    writeln!(out, "{}", report)?;
                    writeln!(out)?;
                }
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, &records().collect::<Vec<_>>()),
        OutputFormat::Csv => write_csv(out, records()),
    }
}

/// Renders benchmark timings.
pub fn render_bench<W: Write>(
    out: &mut W,
    format: OutputFormat,
    sizes: &[usize],
    records: &[BenchRecord],
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "Sample sizes: {:?}", sizes)?;
            writeln!(out, "Generation time (seconds):")?;

            let mut generators: Vec<GeneratorKind> = Vec::new();
            for record in records {
                if !generators.contains(&record.generator) {
                    generators.push(record.generator);
                }
            }

            for generator in generators {
                let times: Vec<f64> = records
                    .iter()
                    .filter(|r| r.generator == generator)
                    .map(|r| r.seconds)
                    .collect();
                writeln!(out, "    {}: {:?}", generator.label(), times)?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, records),
        OutputFormat::Csv => write_csv(out, records),
    }
}

/// Renders one raw sample.
pub fn render_sample<W: Write>(out: &mut W, format: OutputFormat, sample: &Sample) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for chunk in sample.values().chunks(10) {
                let line: Vec<String> = chunk.iter().map(|v| v.to_string()).collect();
                writeln!(out, "{}", line.join(" "))?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, sample),
        OutputFormat::Csv => write_csv(out, sample.iter().map(|&value| ValueRecord { value })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prng_generators::lcg_sequence;
    use prng_stats::{analyze, CriticalValueTable};

    fn sections() -> Vec<GeneratorReports> {
        let table = CriticalValueTable::standard();
        let reports = [100, 1_000]
            .into_iter()
            .map(|n| analyze(&lcg_sequence(7_919, n), &table).unwrap())
            .collect();
        vec![GeneratorReports {
            generator: GeneratorKind::LinearCongruential,
            reports,
        }]
    }

    fn render_to_string<F>(render: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buffer = Vec::new();
        render(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_analysis_table() {
        let text = render_to_string(|out| render_analysis(out, OutputFormat::Table, &sections()));
        assert!(text.starts_with("Linear congruential method:\n"));
        assert!(text.contains("Sample size: 100"));
        assert!(text.contains("Sample size: 1000"));
    }

    #[test]
    fn test_analysis_json() {
        let text = render_to_string(|out| render_analysis(out, OutputFormat::Json, &sections()));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let rows = value.as_array().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["generator"], "lcg");
        assert_eq!(rows[0]["sample_size"], 100);
        assert_eq!(rows[1]["intervals"], 10);
        assert!(rows[0]["uniformity"].is_string());
    }

    #[test]
    fn test_analysis_csv() {
        let text = render_to_string(|out| render_analysis(out, OutputFormat::Csv, &sections()));
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "generator,sample_size,mean,variance,std_deviation,coefficient_of_variation,\
             chi_square,intervals,uniformity,randomness"
        );
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_bench_table_groups_by_generator() {
        let records = vec![
            BenchRecord {
                generator: GeneratorKind::Builtin,
                sample_size: 10,
                seconds: 0.5,
            },
            BenchRecord {
                generator: GeneratorKind::Builtin,
                sample_size: 20,
                seconds: 1.25,
            },
        ];
        let text =
            render_to_string(|out| render_bench(out, OutputFormat::Table, &[10, 20], &records));

        assert!(text.contains("Sample sizes: [10, 20]"));
        assert!(text.contains("Builtin generator: [0.5, 1.25]"));
    }

    #[test]
    fn test_sample_formats() {
        let sample = Sample::from(vec![1, 2, 3]);

        let table = render_to_string(|out| render_sample(out, OutputFormat::Table, &sample));
        assert_eq!(table, "1 2 3\n");

        let json = render_to_string(|out| render_sample(out, OutputFormat::Json, &sample));
        let values: Vec<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(values, vec![1, 2, 3]);

        let csv = render_to_string(|out| render_sample(out, OutputFormat::Csv, &sample));
        assert_eq!(csv, "value\n1\n2\n3\n");
    }

    #[test]
    fn test_table_sample_wraps_every_ten_values() {
        let sample: Sample = (0..25).collect();
        let text = render_to_string(|out| render_sample(out, OutputFormat::Table, &sample));
        assert_eq!(text.lines().count(), 3);
    }
}
