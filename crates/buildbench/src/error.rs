//! Error types for the benchmarking core.

use thiserror::Error;

/// Returned when a profiler output tag is requested for a build-tool family
/// that cannot be profiled.
///
/// Callers must branch on this explicitly. It is a distinct type rather than
/// an empty string so that a missing profiler tag can never silently end up
/// in a profiler file name.
///
/// # Examples
///
/// ```
/// use buildbench::error::UnsupportedProfilerError;
///
/// let err = UnsupportedProfilerError { build_tool: "Maven" };
/// assert_eq!(
///     err.to_string(),
///     "profiling is not supported for Maven scenarios"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("profiling is not supported for {build_tool} scenarios")]
pub struct UnsupportedProfilerError {
    /// Family label of the scenario the profiler tag was requested for.
    pub build_tool: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_family() {
        let err = UnsupportedProfilerError { build_tool: "Bazel" };
        assert_eq!(
            err.to_string(),
            "profiling is not supported for Bazel scenarios"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UnsupportedProfilerError>();
    }
}
