//! Polymorphic scenario model.
//!
//! A [`ScenarioDefinition`] describes one named, reproducible build-tool
//! invocation configuration: which family of build tool it drives, what it
//! asks that tool to do, and how many warmup and measured invocations it
//! gets. Family-specific data lives in the [`ScenarioKind`] payload; the
//! shared descriptive contract (display name, tool identity, task label)
//! is uniform across families so that one report generator can compare
//! heterogeneous scenarios side by side.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::UnsupportedProfilerError;

/// Perturbs the project between invocations, e.g. by touching a source file
/// to simulate incremental-build conditions.
///
/// Mutators are stateful, scoped resources: one fresh instance is obtained
/// from the scenario's factory immediately before each invocation, applied,
/// and discarded. No instance is reused across invocations.
pub trait BuildMutator {
    /// Apply the mutation. Effects must be fully settled before the
    /// invocation starts timing.
    fn apply(&mut self);
}

/// Mutator that leaves the project untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMutator;

impl BuildMutator for NoOpMutator {
    fn apply(&mut self) {}
}

/// Zero-argument factory producing one fresh mutator per invocation.
pub type MutatorFactory = Arc<dyn Fn() -> Box<dyn BuildMutator> + Send + Sync>;

/// Factory for scenarios that do not mutate the project.
pub fn no_op_mutator() -> MutatorFactory {
    Arc::new(|| Box::new(NoOpMutator))
}

/// Family-specific scenario payload.
///
/// Each build-tool family gets exactly one variant. Target, task and command
/// lists preserve configured order and are never deduplicated, so display
/// labels and report columns are reproducible across runs of the same
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioKind {
    /// Gradle, via any of the CLI, no-daemon or Tooling API strategies.
    Gradle {
        /// Gradle version this scenario runs against.
        version: String,
        /// Task names, in configuration order.
        tasks: Vec<String>,
        /// Extra command-line arguments passed to every invocation.
        gradle_args: Vec<String>,
    },
    /// Maven.
    Maven {
        /// Goal targets, in configuration order.
        targets: Vec<String>,
    },
    /// Bazel.
    Bazel {
        /// Shell-level commands, in configuration order.
        commands: Vec<String>,
    },
    /// Buck.
    Buck {
        /// Shell-level commands, in configuration order.
        commands: Vec<String>,
    },
}

/// One named build-tool invocation configuration to be benchmarked.
///
/// Warmup and build counts come from
/// [`RunSettings`](crate::settings::RunSettings) resolution at construction
/// time and are fixed for the scenario's lifetime.
pub struct ScenarioDefinition {
    name: String,
    kind: ScenarioKind,
    mutator_factory: MutatorFactory,
    warmup_count: usize,
    build_count: usize,
    output_dir: PathBuf,
}

impl ScenarioDefinition {
    pub fn new(
        name: impl Into<String>,
        kind: ScenarioKind,
        mutator_factory: MutatorFactory,
        warmup_count: usize,
        build_count: usize,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            mutator_factory,
            warmup_count,
            build_count,
            output_dir: output_dir.into(),
        }
    }

    /// User-chosen scenario identifier, unique within a run.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ScenarioKind {
        &self.kind
    }

    /// Number of discarded warmup invocations preceding measurement.
    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    /// Number of measured invocations.
    pub fn build_count(&self) -> usize {
        self.build_count
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Obtain a fresh mutator for the next invocation.
    pub fn new_mutator(&self) -> Box<dyn BuildMutator> {
        (self.mutator_factory)()
    }

    /// Human label combining the scenario name and tool-family label.
    pub fn display_name(&self) -> String {
        match &self.kind {
            ScenarioKind::Gradle { version, .. } => {
                format!("{} using Gradle {}", self.name, version)
            }
            ScenarioKind::Maven { .. } => format!("{} using maven", self.name),
            ScenarioKind::Bazel { .. } => format!("{} using bazel", self.name),
            ScenarioKind::Buck { .. } => format!("{} using buck", self.name),
        }
    }

    /// Label used to tag profiler output files.
    ///
    /// Only the Gradle family can be profiled; every other family returns
    /// [`UnsupportedProfilerError`] so callers are forced to branch rather
    /// than tag profiler output with an empty name.
    pub fn profile_name(&self) -> Result<String, UnsupportedProfilerError> {
        match &self.kind {
            ScenarioKind::Gradle { version, .. } => Ok(format!("{}-{}", self.name, version)),
            _ => Err(UnsupportedProfilerError {
                build_tool: self.build_tool(),
            }),
        }
    }

    /// Build-tool family label.
    pub fn build_tool(&self) -> &'static str {
        match self.kind {
            ScenarioKind::Gradle { .. } => "Gradle",
            ScenarioKind::Maven { .. } => "Maven",
            ScenarioKind::Bazel { .. } => "Bazel",
            ScenarioKind::Buck { .. } => "Buck",
        }
    }

    /// Resolved tool version, empty for families with no separate version
    /// concept in this invocation mode.
    pub fn build_tool_version(&self) -> &str {
        match &self.kind {
            ScenarioKind::Gradle { version, .. } => version,
            _ => "",
        }
    }

    /// Ordered targets, tasks or commands joined by single spaces.
    pub fn tasks_display_name(&self) -> String {
        match &self.kind {
            ScenarioKind::Gradle { tasks, .. } => tasks.join(" "),
            ScenarioKind::Maven { targets } => targets.join(" "),
            ScenarioKind::Bazel { commands } | ScenarioKind::Buck { commands } => {
                commands.join(" ")
            }
        }
    }

    /// Shell-level command list, for the families that expose one.
    ///
    /// This is the capability check report generators use to populate the
    /// commands column; families without a command list render blank cells.
    pub fn commands(&self) -> Option<&[String]> {
        match &self.kind {
            ScenarioKind::Bazel { commands } | ScenarioKind::Buck { commands } => Some(commands),
            _ => None,
        }
    }

    fn print_detail(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ScenarioKind::Gradle { tasks, gradle_args, .. } => {
                writeln!(f, "  Tasks: {}", tasks.join(" "))?;
                if !gradle_args.is_empty() {
                    writeln!(f, "  Gradle args: {}", gradle_args.join(" "))?;
                }
                Ok(())
            }
            ScenarioKind::Maven { targets } => writeln!(f, "  Targets: {}", targets.join(" ")),
            ScenarioKind::Bazel { commands } | ScenarioKind::Buck { commands } => {
                writeln!(f, "  Commands: {}", commands.join(" "))
            }
        }
    }
}

/// Scenario summary: the common header followed by family detail lines.
impl fmt::Display for ScenarioDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scenario: {}", self.display_name())?;
        writeln!(f, "  Warm-ups: {}", self.warmup_count)?;
        writeln!(f, "  Builds: {}", self.build_count)?;
        self.print_detail(f)
    }
}

impl fmt::Debug for ScenarioDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScenarioDefinition")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("warmup_count", &self.warmup_count)
            .field("build_count", &self.build_count)
            .field("output_dir", &self.output_dir)
            .finish_non_exhaustive()
    }
}
