//! Equal-width binned histogram
//!
//! Splits `[min, max]` of a sample into a fixed number of equal-width bins.
//! Every bin is half-open `[lo, hi)` except the last, which also includes
//! `max`, so every value lands in exactly one bin.
//!
//! Degenerate inputs never fail:
//! - a zero-width range `[v, v]` is widened to `[v - 0.5, v + 0.5]`
//! - an empty sample yields all-zero bins over `[0, 1]`

use serde::{Deserialize, Serialize};

/// Default bin count for histogram images
pub const DEFAULT_BINS: usize = 30;

/// Fixed-range histogram with equal-width bins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinnedHistogram {
    /// Counts per bin
    buckets: Vec<u64>,

    /// Lower edge of the first bin
    lower: f64,

    /// Upper edge of the last bin
    upper: f64,

    /// Total number of recorded values
    num_samples: u64,
}

impl BinnedHistogram {
    /// Create an empty histogram over `[lower, upper]`
    ///
    /// `bins` of zero is treated as one bin.
    pub fn with_range(bins: usize, lower: f64, upper: f64) -> Self {
        let (lower, upper) = widen(lower, upper);
        Self {
            buckets: vec![0; bins.max(1)],
            lower,
            upper,
            num_samples: 0,
        }
    }

    /// Bin `values` over their own `[min, max]`
    ///
    /// NaN values are skipped.
    pub fn from_values(values: &[f64], bins: usize) -> Self {
        let (lower, upper) = value_range(values).unwrap_or((0.0, 1.0));
        let mut hist = Self::with_range(bins, lower, upper);
        for &v in values {
            hist.record(v);
        }
        hist
    }

    /// Record one value
    ///
    /// Values outside the range or NaN are ignored.
    #[inline]
    pub fn record(&mut self, value: f64) {
        if let Some(idx) = self.bucket_index(value) {
            self.buckets[idx] += 1;
            self.num_samples += 1;
        }
    }

    fn bucket_index(&self, value: f64) -> Option<usize> {
        if value.is_nan() || value < self.lower || value > self.upper {
            return None;
        }
        let bins = self.buckets.len();
        let idx = ((value - self.lower) / self.bin_width()) as usize;
        // The right edge of the last bin is closed
        Some(idx.min(bins - 1))
    }

    /// Number of recorded values
    pub fn len(&self) -> u64 {
        self.num_samples
    }

    pub fn is_empty(&self) -> bool {
        self.num_samples == 0
    }

    /// Number of bins
    pub fn num_bins(&self) -> usize {
        self.buckets.len()
    }

    pub fn bin_width(&self) -> f64 {
        (self.upper - self.lower) / self.buckets.len() as f64
    }

    /// `(lower, upper)` edges of the whole histogram
    pub fn range(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// `(lower, upper)` edges of bin `index`
    pub fn bin_edges(&self, index: usize) -> (f64, f64) {
        let width = self.bin_width();
        let lo = self.lower + width * index as f64;
        let hi = if index + 1 == self.buckets.len() {
            self.upper
        } else {
            lo + width
        };
        (lo, hi)
    }

    /// Get bucket count at index (0 when out of range)
    pub fn bucket_count(&self, index: usize) -> u64 {
        self.buckets.get(index).copied().unwrap_or(0)
    }

    pub fn buckets(&self) -> &[u64] {
        &self.buckets
    }

    /// Largest bin count
    pub fn max_count(&self) -> u64 {
        self.buckets.iter().copied().max().unwrap_or(0)
    }
}

/// `(min, max)` of the non-NaN values
pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

fn widen(lower: f64, upper: f64) -> (f64, f64) {
    if upper > lower {
        (lower, upper)
    } else {
        (lower - 0.5, lower + 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binned_histogram_counts_sum() {
        let values: Vec<f64> = (0..1000).map(|i| (i as f64).sin() * 10.0).collect();
        let hist = BinnedHistogram::from_values(&values, DEFAULT_BINS);

        assert_eq!(hist.num_bins(), 30);
        assert_eq!(hist.len(), 1000);
        assert_eq!(hist.buckets().iter().sum::<u64>(), 1000);
    }

    #[test]
    fn test_binned_histogram_edges() {
        let hist = BinnedHistogram::from_values(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);

        assert_eq!(hist.range(), (0.0, 4.0));
        assert_eq!(hist.bin_width(), 1.0);
        // Max lands in the last bin, not past it
        assert_eq!(hist.buckets(), &[1, 1, 1, 2]);
        assert_eq!(hist.bin_edges(3), (3.0, 4.0));
    }

    #[test]
    fn test_binned_histogram_constant_values() {
        let hist = BinnedHistogram::from_values(&[7.0, 7.0, 7.0], 10);

        assert_eq!(hist.range(), (6.5, 7.5));
        assert_eq!(hist.len(), 3);
        assert_eq!(hist.max_count(), 3);
    }

    #[test]
    fn test_binned_histogram_empty() {
        let hist = BinnedHistogram::from_values(&[], 30);

        assert!(hist.is_empty());
        assert_eq!(hist.range(), (0.0, 1.0));
        assert_eq!(hist.max_count(), 0);
    }

    #[test]
    fn test_binned_histogram_ignores_out_of_range() {
        let mut hist = BinnedHistogram::with_range(5, 0.0, 5.0);
        hist.record(-1.0);
        hist.record(6.0);
        hist.record(f64::NAN);
        hist.record(2.5);

        assert_eq!(hist.len(), 1);
        assert_eq!(hist.bucket_count(2), 1);
        assert_eq!(hist.bucket_count(99), 0);
    }
}
