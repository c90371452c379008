//! Descriptive statistics over measured build durations.
//!
//! Statistics are computed over millisecond samples from the measured
//! subset of a scenario's invocations, warmups excluded. An empty measured
//! subset yields no statistics rather than an error, so report generators
//! can render blank cells for scenarios whose measured invocations all
//! failed.

pub mod percentiles;

pub use percentiles::percentile;

use serde::Serialize;

/// Descriptive statistics for one scenario's measured durations, in
/// milliseconds.
///
/// Standard deviation is the sample standard deviation (n - 1 denominator);
/// percentiles use the convention documented in [`percentiles`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStatistics {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation, 0.0 for a single sample.
    pub std_dev: f64,
    /// 25th percentile.
    pub p25: f64,
    /// 50th percentile.
    pub median: f64,
    /// 75th percentile.
    pub p75: f64,
    /// Number of measured samples the statistics were computed over.
    pub count: usize,
}

impl DurationStatistics {
    /// Compute statistics from millisecond samples.
    ///
    /// Returns `None` when `samples` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use buildbench::stats::DurationStatistics;
    ///
    /// let stats = DurationStatistics::from_samples(&[100.0, 200.0, 300.0]).unwrap();
    /// assert_eq!(stats.mean, 200.0);
    /// assert_eq!(stats.min, 100.0);
    /// assert_eq!(stats.max, 300.0);
    /// assert_eq!(stats.median, 200.0);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let count = sorted.len();
        let min = sorted[0];
        let max = sorted[count - 1];

        let sum: f64 = sorted.iter().sum();
        let mean = sum / count as f64;

        let variance = if count > 1 {
            let squared_diffs: f64 = sorted.iter().map(|&x| (x - mean).powi(2)).sum();
            squared_diffs / (count - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();

        let p25 = percentile(&sorted, 25.0)?;
        let median = percentile(&sorted, 50.0)?;
        let p75 = percentile(&sorted, 75.0)?;

        Some(DurationStatistics {
            mean,
            min,
            max,
            std_dev,
            p25,
            median,
            p75,
            count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_samples_empty() {
        assert!(DurationStatistics::from_samples(&[]).is_none());
    }

    #[test]
    fn test_from_samples_single_sample() {
        let stats = DurationStatistics::from_samples(&[1500.0]).unwrap();
        assert_eq!(stats.mean, 1500.0);
        assert_eq!(stats.min, 1500.0);
        assert_eq!(stats.max, 1500.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.p25, 1500.0);
        assert_eq!(stats.median, 1500.0);
        assert_eq!(stats.p75, 1500.0);
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn test_from_samples_reference_values() {
        let stats = DurationStatistics::from_samples(&[100.0, 200.0, 300.0]).unwrap();
        assert_eq!(stats.mean, 200.0);
        assert_eq!(stats.min, 100.0);
        assert_eq!(stats.max, 300.0);
        assert_eq!(stats.median, 200.0);
        assert_eq!(stats.p25, 150.0);
        assert_eq!(stats.p75, 250.0);
        assert_eq!(stats.std_dev, 100.0);
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn test_sample_standard_deviation() {
        // Variance = ((9 + 1 + 1 + 1 + 0 + 0 + 4 + 16) / 7) = 32 / 7
        let samples = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = DurationStatistics::from_samples(&samples).unwrap();
        assert_eq!(stats.mean, 5.0);
        let expected = (32.0_f64 / 7.0).sqrt();
        assert!((stats.std_dev - expected).abs() < 1e-10);
    }

    #[test]
    fn test_from_samples_unsorted_input() {
        let stats = DurationStatistics::from_samples(&[300.0, 100.0, 200.0]).unwrap();
        assert_eq!(stats.min, 100.0);
        assert_eq!(stats.max, 300.0);
        assert_eq!(stats.median, 200.0);
    }

    proptest! {
        #[test]
        fn test_percentiles_stay_within_bounds(
            samples in proptest::collection::vec(0.0_f64..1_000_000.0, 1..64),
            p in 0.0_f64..=100.0,
        ) {
            let value = percentile(&samples, p).unwrap();
            let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(value >= min && value <= max);
        }

        #[test]
        fn test_summary_quartiles_are_ordered(
            samples in proptest::collection::vec(0.0_f64..1_000_000.0, 1..64),
        ) {
            let stats = DurationStatistics::from_samples(&samples).unwrap();
            prop_assert!(stats.min <= stats.p25);
            prop_assert!(stats.p25 <= stats.median);
            prop_assert!(stats.median <= stats.p75);
            prop_assert!(stats.p75 <= stats.max);
            prop_assert!(stats.mean >= stats.min && stats.mean <= stats.max);
        }
    }
}
