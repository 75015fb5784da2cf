//! Descriptive statistics
//!
//! [`compute_statistics`] reduces a sample to a [`StatisticsRecord`]. It is a
//! pure function of its input: recomputing on the same values yields the same
//! record.
//!
//! Variance and standard deviation follow the population convention
//! (divide by N), which existing reports depend on.

pub mod histogram;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column order used by every statistics report
pub const STATISTIC_NAMES: [&str; 9] = [
    "count", "mean", "median", "mode", "min", "max", "range", "variance", "std_dev",
];

/// Descriptive statistics for one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsRecord {
    /// Number of non-missing values
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value, `None` when no value repeats
    pub mode: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    /// Population variance
    pub variance: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl StatisticsRecord {
    /// `(name, value)` pairs in report column order
    ///
    /// An unavailable mode is reported as `None`.
    pub fn entries(&self) -> [(&'static str, Option<f64>); 9] {
        [
            ("count", Some(self.count as f64)),
            ("mean", Some(self.mean)),
            ("median", Some(self.median)),
            ("mode", self.mode),
            ("min", Some(self.min)),
            ("max", Some(self.max)),
            ("range", Some(self.range)),
            ("variance", Some(self.variance)),
            ("std_dev", Some(self.std_dev)),
        ]
    }
}

/// Compute descriptive statistics
///
/// NaN entries count as missing and are skipped. Returns `None` when no
/// usable values remain; callers must check before using the record.
pub fn compute_statistics(values: &[f64]) -> Option<StatisticsRecord> {
    let mut clean: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if clean.is_empty() {
        return None;
    }
    clean.sort_by(f64::total_cmp);

    let count = clean.len();
    let n = count as f64;
    let min = clean[0];
    let max = clean[count - 1];
    // Rounding in the sum can push the mean just outside [min, max]
    let mean = (clean.iter().sum::<f64>() / n).clamp(min, max);
    let variance = clean.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    Some(StatisticsRecord {
        count,
        mean,
        median: median_of_sorted(&clean),
        mode: mode_of_sorted(&clean),
        min,
        max,
        range: max - min,
        variance,
        std_dev: variance.sqrt(),
    })
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Most frequent value, smallest on ties; `None` if nothing repeats
fn mode_of_sorted(sorted: &[f64]) -> Option<f64> {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for v in sorted {
        // -0.0 and 0.0 are the same value
        let key = if *v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() };
        *counts.entry(key).or_insert(0) += 1;
    }

    let best = counts.values().copied().max()?;
    if best < 2 {
        return None;
    }

    sorted
        .iter()
        .copied()
        .find(|v| {
            let key = if *v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() };
            counts.get(&key) == Some(&best)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_compute_statistics_basic() {
        let stats = compute_statistics(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();

        assert_eq!(stats.count, 8);
        assert!(approx(stats.mean, 5.0));
        assert!(approx(stats.median, 4.5));
        assert_eq!(stats.mode, Some(4.0));
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.range, 7.0);
        // Population variance of this classic set is exactly 4
        assert!(approx(stats.variance, 4.0));
        assert!(approx(stats.std_dev, 2.0));
    }

    #[test]
    fn test_mean_stays_within_min_max() {
        for values in [vec![0.1; 3], vec![0.7; 10], vec![1e-9, 1e-9, 1e-9, 1e-9, 1e-9]] {
            let stats = compute_statistics(&values).unwrap();
            assert!(
                stats.min <= stats.mean && stats.mean <= stats.max,
                "mean {} outside [{}, {}]",
                stats.mean,
                stats.min,
                stats.max
            );
            assert_eq!(stats.mean, values[0]);
            assert_eq!(stats.variance, 0.0);
        }
    }

    #[test]
    fn test_compute_statistics_empty() {
        assert!(compute_statistics(&[]).is_none());
        assert!(compute_statistics(&[f64::NAN, f64::NAN]).is_none());
    }

    #[test]
    fn test_compute_statistics_skips_missing() {
        let stats = compute_statistics(&[1.0, f64::NAN, 3.0]).unwrap();
        assert_eq!(stats.count, 2);
        assert!(approx(stats.mean, 2.0));
    }

    #[test]
    fn test_mode_unavailable_when_unique() {
        let stats = compute_statistics(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(stats.mode, None);

        let single = compute_statistics(&[42.0]).unwrap();
        assert_eq!(single.mode, None);
        assert_eq!(single.median, 42.0);
        assert_eq!(single.variance, 0.0);
    }

    #[test]
    fn test_mode_tie_picks_smallest() {
        let stats = compute_statistics(&[3.0, 1.0, 3.0, 1.0, 2.0]).unwrap();
        assert_eq!(stats.mode, Some(1.0));
    }

    #[test]
    fn test_statistics_invariants() {
        let values: Vec<f64> = (0..97).map(|i| ((i * 37) % 101) as f64 * 0.5 - 10.0).collect();
        let stats = compute_statistics(&values).unwrap();

        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        assert_eq!(stats.range, stats.max - stats.min);
        assert!(approx(stats.std_dev, stats.variance.sqrt()));
        assert_eq!(stats.count, values.len());
    }

    #[test]
    fn test_compute_statistics_idempotent() {
        let values = [5.5, 1.25, 9.0, 1.25];
        assert_eq!(compute_statistics(&values), compute_statistics(&values));
    }

    #[test]
    fn test_entries_order_matches_names() {
        let stats = compute_statistics(&[1.0, 2.0]).unwrap();
        let names: Vec<&str> = stats.entries().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, STATISTIC_NAMES);
    }
}
