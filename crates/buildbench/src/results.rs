//! Per-invocation timing records and their aggregation.
//!
//! The external execution loop appends one [`BuildInvocationResult`] per
//! completed invocation to its scenario's [`BuildScenarioResult`], warmups
//! first, in chronological order. Once every scenario has finished, the
//! ordered set of scenario results is assembled into a [`BenchmarkResult`]
//! and handed to report generators as an immutable snapshot.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use crate::scenario::ScenarioDefinition;
use crate::stats::DurationStatistics;

/// Timing record for one completed build invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInvocationResult {
    display_name: String,
    execution_time: Duration,
}

impl BuildInvocationResult {
    pub fn new(display_name: impl Into<String>, execution_time: Duration) -> Self {
        Self {
            display_name: display_name.into(),
            execution_time,
        }
    }

    /// Record for the `ordinal`-th warmup invocation, 1-based.
    pub fn warm_up(ordinal: usize, execution_time: Duration) -> Self {
        Self::new(format!("warm-up #{ordinal}"), execution_time)
    }

    /// Record for the `ordinal`-th measured invocation, 1-based.
    pub fn measured(ordinal: usize, execution_time: Duration) -> Self {
        Self::new(format!("measured build #{ordinal}"), execution_time)
    }

    /// Human-readable label distinguishing warmup from measured invocations.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Wall-clock duration of this single invocation.
    pub fn execution_time(&self) -> Duration {
        self.execution_time
    }
}

/// All invocation results for one scenario, plus lazily-computed statistics
/// over the measured subset.
#[derive(Debug)]
pub struct BuildScenarioResult {
    scenario: Arc<ScenarioDefinition>,
    results: Vec<BuildInvocationResult>,
    statistics: OnceLock<Option<DurationStatistics>>,
}

impl BuildScenarioResult {
    pub fn new(scenario: Arc<ScenarioDefinition>) -> Self {
        Self {
            scenario,
            results: Vec::new(),
            statistics: OnceLock::new(),
        }
    }

    pub fn scenario(&self) -> &ScenarioDefinition {
        &self.scenario
    }

    /// Append the result of a completed invocation.
    ///
    /// Results must arrive in execution order, warmups first.
    pub fn record(&mut self, result: BuildInvocationResult) {
        // A new result invalidates any previously computed statistics.
        self.statistics.take();
        self.results.push(result);
    }

    /// All recorded invocations, in execution order.
    pub fn results(&self) -> &[BuildInvocationResult] {
        &self.results
    }

    /// The measured suffix of the invocation sequence.
    ///
    /// The warmup prefix length is the scenario's resolved warmup count,
    /// fixed at scenario construction. A run that aborted during warmup
    /// simply yields an empty suffix.
    pub fn measured_results(&self) -> &[BuildInvocationResult] {
        let warmups = self.scenario.warmup_count().min(self.results.len());
        &self.results[warmups..]
    }

    /// Statistics over the measured durations, in milliseconds.
    ///
    /// Computed once on first access and cached. `None` when the measured
    /// subset is empty, which happens when every measured invocation failed
    /// before producing a timing.
    pub fn statistics(&self) -> Option<&DurationStatistics> {
        self.statistics
            .get_or_init(|| {
                let samples: Vec<f64> = self
                    .measured_results()
                    .iter()
                    .map(|result| result.execution_time().as_millis() as f64)
                    .collect();
                DurationStatistics::from_samples(&samples)
            })
            .as_ref()
    }
}

/// The ordered collection of per-scenario results for one benchmarking run.
///
/// Ordering is load-bearing: report columns and cross-scenario comparisons
/// follow this sequence, which is the configuration order of the
/// (scenario, version, target-set) combinations.
#[derive(Debug, Default)]
pub struct BenchmarkResult {
    scenarios: Vec<BuildScenarioResult>,
}

impl BenchmarkResult {
    pub fn new(scenarios: Vec<BuildScenarioResult>) -> Self {
        Self { scenarios }
    }

    pub fn scenarios(&self) -> &[BuildScenarioResult] {
        &self.scenarios
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{no_op_mutator, ScenarioKind};

    fn scenario_result(warmup_count: usize) -> BuildScenarioResult {
        let scenario = ScenarioDefinition::new(
            "compile",
            ScenarioKind::Maven {
                targets: vec!["package".to_string()],
            },
            no_op_mutator(),
            warmup_count,
            10,
            "/tmp/out",
        );
        BuildScenarioResult::new(Arc::new(scenario))
    }

    fn record_run(result: &mut BuildScenarioResult, warmups: &[u64], measured: &[u64]) {
        for (i, ms) in warmups.iter().enumerate() {
            result.record(BuildInvocationResult::warm_up(i + 1, Duration::from_millis(*ms)));
        }
        for (i, ms) in measured.iter().enumerate() {
            result.record(BuildInvocationResult::measured(
                i + 1,
                Duration::from_millis(*ms),
            ));
        }
    }

    #[test]
    fn test_invocation_labels() {
        let warm = BuildInvocationResult::warm_up(2, Duration::from_millis(100));
        let measured = BuildInvocationResult::measured(5, Duration::from_millis(100));
        assert_eq!(warm.display_name(), "warm-up #2");
        assert_eq!(measured.display_name(), "measured build #5");
    }

    #[test]
    fn test_statistics_exclude_warmups() {
        let mut result = scenario_result(2);
        record_run(&mut result, &[900, 800], &[100, 200, 300]);

        let stats = result.statistics().unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, 200.0);
        assert_eq!(stats.min, 100.0);
        assert_eq!(stats.max, 300.0);
        assert_eq!(stats.median, 200.0);
    }

    #[test]
    fn test_statistics_none_when_no_measured_results() {
        let mut result = scenario_result(2);
        record_run(&mut result, &[900, 800], &[]);
        assert!(result.statistics().is_none());

        // A run that aborted mid-warmup behaves the same.
        let empty = scenario_result(2);
        assert!(empty.statistics().is_none());
    }

    #[test]
    fn test_statistics_are_memoized() {
        let mut result = scenario_result(1);
        record_run(&mut result, &[500], &[100, 200]);

        let first = result.statistics().unwrap().clone();
        let second = result.statistics().unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_recording_invalidates_statistics() {
        let mut result = scenario_result(0);
        record_run(&mut result, &[], &[100]);
        assert_eq!(result.statistics().unwrap().count, 1);

        record_run(&mut result, &[], &[200]);
        let stats = result.statistics().unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, 150.0);
    }

    #[test]
    fn test_benchmark_result_preserves_order() {
        let benchmark = BenchmarkResult::new(vec![scenario_result(1), scenario_result(2)]);
        assert_eq!(benchmark.scenarios().len(), 2);
        assert_eq!(benchmark.scenarios()[0].scenario().warmup_count(), 1);
        assert_eq!(benchmark.scenarios()[1].scenario().warmup_count(), 2);
    }
}
