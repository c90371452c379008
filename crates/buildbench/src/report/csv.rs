//! CSV report generator.
//!
//! Columns are scenarios in aggregate order; rows are a fixed metadata
//! block, one row per invocation ordinal, then seven statistic rows. The
//! layout is written in a single forward pass and is deterministic for a
//! given aggregate, so CI can diff successive reports.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use csv::Writer;

use super::{canonical_path, lookup_hostname, ReportGenerator};
use crate::results::{BenchmarkResult, BuildScenarioResult};
use crate::stats::DurationStatistics;

/// Generates the tabular CSV report for a benchmark run.
pub struct CsvGenerator {
    output_file: PathBuf,
}

impl CsvGenerator {
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }
}

fn row<W: Write>(
    out: &mut Writer<W>,
    label: &str,
    scenarios: &[BuildScenarioResult],
    cell: impl Fn(&BuildScenarioResult) -> String,
) -> csv::Result<()> {
    let mut record = Vec::with_capacity(scenarios.len() + 1);
    record.push(label.to_string());
    record.extend(scenarios.iter().map(cell));
    out.write_record(&record)
}

fn statistic_row<W: Write>(
    out: &mut Writer<W>,
    name: &str,
    scenarios: &[BuildScenarioResult],
    value: impl Fn(&DurationStatistics) -> f64,
) -> csv::Result<()> {
    // Scenarios with no measured data render blank cells.
    row(out, name, scenarios, |scenario| {
        scenario
            .statistics()
            .map(|stats| value(stats).to_string())
            .unwrap_or_default()
    })
}

impl ReportGenerator for CsvGenerator {
    fn output_file(&self) -> &Path {
        &self.output_file
    }

    fn write_report(&self, result: &BenchmarkResult, writer: &mut dyn Write) -> Result<()> {
        let mut out = Writer::from_writer(writer);
        let scenarios = result.scenarios();

        row(&mut out, "scenario", scenarios, |s| {
            s.scenario().name().to_string()
        })?;
        row(&mut out, "build tool", scenarios, |s| {
            s.scenario().build_tool().to_string()
        })?;
        row(&mut out, "version", scenarios, |s| {
            s.scenario().build_tool_version().to_string()
        })?;
        let host = lookup_hostname();
        row(&mut out, "hostname", scenarios, |_| host.clone())?;
        let source = canonical_path(&self.output_file).display().to_string();
        row(&mut out, "source", scenarios, |_| source.clone())?;
        row(&mut out, "tasks", scenarios, |s| {
            s.scenario().tasks_display_name()
        })?;
        row(&mut out, "commands", scenarios, |s| {
            s.scenario()
                .commands()
                .map(|commands| commands.join(" "))
                .unwrap_or_default()
        })?;

        // Scenarios may have unequal row counts when an invocation failed
        // before completing; shorter scenarios get blank cells.
        let max_rows = scenarios
            .iter()
            .map(|s| s.results().len())
            .max()
            .unwrap_or(0);
        for ordinal in 0..max_rows {
            let label = scenarios
                .iter()
                .find_map(|s| s.results().get(ordinal))
                .map(|invocation| invocation.display_name().to_string())
                .unwrap_or_default();
            let mut record = Vec::with_capacity(scenarios.len() + 1);
            record.push(label);
            for scenario in scenarios {
                record.push(
                    scenario
                        .results()
                        .get(ordinal)
                        .map(|invocation| invocation.execution_time().as_millis().to_string())
                        .unwrap_or_default(),
                );
            }
            out.write_record(&record)?;
        }

        statistic_row(&mut out, "mean", scenarios, |stats| stats.mean)?;
        statistic_row(&mut out, "min", scenarios, |stats| stats.min)?;
        statistic_row(&mut out, "25th percentile", scenarios, |stats| stats.p25)?;
        statistic_row(&mut out, "median", scenarios, |stats| stats.median)?;
        statistic_row(&mut out, "75th percentile", scenarios, |stats| stats.p75)?;
        statistic_row(&mut out, "max", scenarios, |stats| stats.max)?;
        statistic_row(&mut out, "stddev", scenarios, |stats| stats.std_dev)?;

        out.flush()?;
        Ok(())
    }
}
