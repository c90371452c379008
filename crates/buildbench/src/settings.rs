//! Run configuration and iteration-count resolution.
//!
//! [`RunSettings`] captures everything a benchmarking run was asked to do:
//! which invoker strategy to use, which versions and targets to measure, and
//! the mode flags (benchmark, dry-run, profiling) that drive how many warmup
//! and measured invocations each scenario gets.
//!
//! Count resolution is a pure function of the settings; the precedence
//! chains are documented on [`RunSettings::resolve_warmup_count`] and
//! [`RunSettings::resolve_build_count`].

use std::fmt;
use std::path::PathBuf;

/// Strategy used to launch a build tool.
///
/// The first three variants are sub-strategies of the Gradle family; the
/// remaining variants each form a family of their own. The family predicates
/// (`is_gradle`, `is_maven`, `is_bazel`, `is_buck`) are mutually exclusive
/// and cover every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invoker {
    /// Gradle command-line client, daemon enabled.
    Cli,
    /// Gradle command-line client with the daemon disabled. Every invocation
    /// pays full process startup, so warming up buys almost nothing.
    NoDaemon,
    /// Gradle Tooling API client.
    ToolingApi,
    /// Bazel command-line client.
    Bazel,
    /// Buck command-line client.
    Buck,
    /// Maven command-line client.
    Maven,
}

impl Invoker {
    /// True for any of the Gradle sub-strategies.
    pub fn is_gradle(self) -> bool {
        matches!(self, Invoker::Cli | Invoker::NoDaemon | Invoker::ToolingApi)
    }

    pub fn is_maven(self) -> bool {
        self == Invoker::Maven
    }

    pub fn is_bazel(self) -> bool {
        self == Invoker::Bazel
    }

    pub fn is_buck(self) -> bool {
        self == Invoker::Buck
    }
}

/// Profiler selection for a run. [`Profiler::None`] disables profiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profiler {
    /// No profiler attached.
    #[default]
    None,
    /// async-profiler sampling.
    AsyncProfiler,
    /// Java Flight Recorder.
    Jfr,
}

impl fmt::Display for Profiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Profiler::None => "none",
            Profiler::AsyncProfiler => "async-profiler",
            Profiler::Jfr => "jfr",
        };
        f.write_str(label)
    }
}

/// Immutable configuration for one benchmarking run.
///
/// Constructed once, before any scenario is built; scenario warmup and build
/// counts are resolved from it at scenario-construction time.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Root directory of the project under measurement.
    pub project_dir: PathBuf,
    /// Profiler to attach, or [`Profiler::None`].
    pub profiler: Profiler,
    /// Benchmark mode trades runtime for statistical confidence.
    pub benchmark: bool,
    /// Dry-run mode short-circuits every count to 1 to validate wiring.
    pub dry_run: bool,
    /// Path the scenarios were loaded from.
    pub scenario_file: PathBuf,
    /// Directory that report artifacts are written into.
    pub output_dir: PathBuf,
    /// Strategy used to launch the build tool.
    pub invoker: Invoker,
    /// Requested tool versions, in configuration order.
    pub versions: Vec<String>,
    /// Requested targets, in configuration order.
    pub targets: Vec<String>,
    /// System properties passed to every invocation. Keys are unique;
    /// insertion order is preserved for the diagnostic dump.
    pub system_properties: Vec<(String, String)>,
    /// Build-tool user-home override.
    pub tool_home: PathBuf,
    /// Explicit warmup override. A non-positive value is passed through
    /// resolution untouched; the execution layer treats it as "skip the
    /// warmup phase".
    pub warmup_count: Option<i32>,
    /// Explicit measured-iteration override.
    pub iterations: Option<i32>,
}

impl RunSettings {
    /// True when a profiler is attached.
    pub fn is_profile(&self) -> bool {
        self.profiler != Profiler::None
    }

    pub fn is_gradle(&self) -> bool {
        self.invoker.is_gradle()
    }

    pub fn is_maven(&self) -> bool {
        self.invoker.is_maven()
    }

    pub fn is_bazel(&self) -> bool {
        self.invoker.is_bazel()
    }

    pub fn is_buck(&self) -> bool {
        self.invoker.is_buck()
    }

    /// Number of warmup invocations per scenario.
    ///
    /// First matching rule wins:
    ///
    /// 1. dry-run: 1
    /// 2. explicit override: that value, unclamped
    /// 3. no-daemon invoker: 1
    /// 4. benchmark mode: 6
    /// 5. otherwise: 2
    pub fn resolve_warmup_count(&self) -> i32 {
        if self.dry_run {
            return 1;
        }
        if let Some(count) = self.warmup_count {
            return count;
        }
        if self.invoker == Invoker::NoDaemon {
            return 1;
        }
        if self.benchmark {
            6
        } else {
            2
        }
    }

    /// Number of measured invocations per scenario.
    ///
    /// First matching rule wins:
    ///
    /// 1. dry-run: 1
    /// 2. explicit override: that value, unclamped
    /// 3. benchmark mode: 10
    /// 4. otherwise: 1
    pub fn resolve_build_count(&self) -> i32 {
        if self.dry_run {
            return 1;
        }
        if let Some(count) = self.iterations {
            return count;
        }
        if self.benchmark {
            10
        } else {
            1
        }
    }
}

/// Diagnostic dump of the resolved configuration, one `Label: value` line
/// per setting, system properties last in insertion order.
impl fmt::Display for RunSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project dir: {}", self.project_dir.display())?;
        writeln!(f, "Output dir: {}", self.output_dir.display())?;
        writeln!(f, "Profiler: {}", self.profiler)?;
        writeln!(f, "Benchmark: {}", self.benchmark)?;
        writeln!(f, "Versions: {}", self.versions.join(", "))?;
        writeln!(f, "Tool home: {}", self.tool_home.display())?;
        writeln!(f, "Targets: {}", self.targets.join(", "))?;
        if !self.system_properties.is_empty() {
            writeln!(f, "System properties:")?;
            for (key, value) in &self.system_properties {
                writeln!(f, "  {}={}", key, value)?;
            }
        }
        Ok(())
    }
}
