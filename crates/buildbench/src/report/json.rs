//! JSON report generator, for CI ingestion and diffing.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use super::ReportGenerator;
use crate::results::BenchmarkResult;
use crate::stats::DurationStatistics;

/// Generates a machine-readable JSON report for a benchmark run.
pub struct JsonGenerator {
    output_file: PathBuf,
}

impl JsonGenerator {
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    scenarios: Vec<Scenario<'a>>,
}

#[derive(Serialize)]
struct Scenario<'a> {
    name: &'a str,
    display_name: String,
    build_tool: &'a str,
    version: &'a str,
    tasks: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    commands: Option<&'a [String]>,
    invocations: Vec<Invocation<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<&'a DurationStatistics>,
}

#[derive(Serialize)]
struct Invocation<'a> {
    name: &'a str,
    time_ms: u64,
}

impl ReportGenerator for JsonGenerator {
    fn output_file(&self) -> &Path {
        &self.output_file
    }

    fn write_report(&self, result: &BenchmarkResult, writer: &mut dyn Write) -> Result<()> {
        let report = Report {
            scenarios: result
                .scenarios()
                .iter()
                .map(|scenario_result| {
                    let scenario = scenario_result.scenario();
                    Scenario {
                        name: scenario.name(),
                        display_name: scenario.display_name(),
                        build_tool: scenario.build_tool(),
                        version: scenario.build_tool_version(),
                        tasks: scenario.tasks_display_name(),
                        commands: scenario.commands(),
                        invocations: scenario_result
                            .results()
                            .iter()
                            .map(|invocation| Invocation {
                                name: invocation.display_name(),
                                time_ms: invocation.execution_time().as_millis() as u64,
                            })
                            .collect(),
                        statistics: scenario_result.statistics(),
                    }
                })
                .collect(),
        };
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
