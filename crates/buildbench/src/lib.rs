//! Benchmarking core for build-tool invocations.
//!
//! This crate models benchmark runs that compare build tools side by side:
//! Gradle (via CLI, no-daemon CLI or the Tooling API), Maven, Bazel and
//! Buck, across versions and target sets. It resolves how many warmup and
//! measured invocations each scenario gets, models per-invocation timings,
//! aggregates them into descriptive statistics over the measured subset,
//! and renders comparable CSV and JSON reports.
//!
//! Invoking the build tools themselves, parsing scenario files and
//! attaching profilers happen in the surrounding execution layer; this
//! crate consumes the timings that layer produces.
//!
//! # Example
//!
//! ```
//! # fn main() -> anyhow::Result<()> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use buildbench::scenario::no_op_mutator;
//! use buildbench::{
//!     BenchmarkResult, BuildInvocationResult, BuildScenarioResult, CsvGenerator, Invoker,
//!     Profiler, ReportGenerator, RunSettings, ScenarioDefinition, ScenarioKind,
//! };
//!
//! let settings = RunSettings {
//!     project_dir: PathBuf::from("/work/project"),
//!     profiler: Profiler::None,
//!     benchmark: true,
//!     dry_run: false,
//!     scenario_file: PathBuf::from("/work/project/performance.scenarios"),
//!     output_dir: PathBuf::from("/work/output"),
//!     invoker: Invoker::Maven,
//!     versions: Vec::new(),
//!     targets: vec!["package".to_string()],
//!     system_properties: Vec::new(),
//!     tool_home: PathBuf::from("/home/user/.m2"),
//!     warmup_count: None,
//!     iterations: None,
//! };
//!
//! let warmups = settings.resolve_warmup_count().max(0) as usize;
//! let builds = settings.resolve_build_count().max(0) as usize;
//! assert_eq!((warmups, builds), (6, 10));
//!
//! let scenario = Arc::new(ScenarioDefinition::new(
//!     "assemble",
//!     ScenarioKind::Maven {
//!         targets: settings.targets.clone(),
//!     },
//!     no_op_mutator(),
//!     warmups,
//!     builds,
//!     settings.output_dir.clone(),
//! ));
//!
//! // The execution layer runs the invocations and records their timings.
//! let mut result = BuildScenarioResult::new(scenario);
//! result.record(BuildInvocationResult::warm_up(1, Duration::from_millis(800)));
//! result.record(BuildInvocationResult::measured(1, Duration::from_millis(250)));
//!
//! let benchmark = BenchmarkResult::new(vec![result]);
//! let mut output = Vec::new();
//! CsvGenerator::new("benchmark.csv").write_report(&benchmark, &mut output)?;
//! assert!(String::from_utf8(output)?.starts_with("scenario,assemble\n"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod report;
pub mod results;
pub mod scenario;
pub mod settings;
pub mod stats;

// Re-export main types for convenience
pub use error::UnsupportedProfilerError;
pub use report::{CsvGenerator, JsonGenerator, ReportGenerator};
pub use results::{BenchmarkResult, BuildInvocationResult, BuildScenarioResult};
pub use scenario::{BuildMutator, MutatorFactory, NoOpMutator, ScenarioDefinition, ScenarioKind};
pub use settings::{Invoker, Profiler, RunSettings};
pub use stats::DurationStatistics;
