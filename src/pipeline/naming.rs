//! Run naming
//!
//! Default sample names combine the distribution tag, the count, a
//! microsecond timestamp and a monotonic run number:
//! `normal_1000_20250114_093012_418233_0`. The run number comes from a
//! counter shared by every clone of a [`RunNamer`], so names handed out by
//! one process never collide even within the same microsecond.

use crate::distribution::DistributionKind;
use crate::util::time::run_timestamp;
use chrono::Local;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Hands out unique default sample names
#[derive(Debug, Clone, Default)]
pub struct RunNamer {
    next_run: Arc<AtomicU64>,
}

impl RunNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next monotonic run number
    pub fn next_run(&self) -> u64 {
        self.next_run.fetch_add(1, Ordering::Relaxed)
    }

    /// Default name for a run of `count` values from `kind`
    pub fn default_name(&self, kind: DistributionKind, count: usize) -> String {
        format!(
            "{}_{}_{}_{}",
            kind.tag(),
            count,
            run_timestamp(&Local::now()),
            self.next_run()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_name_shape() {
        let namer = RunNamer::new();
        let name = namer.default_name(DistributionKind::Poisson, 500);
        let parts: Vec<&str> = name.split('_').collect();

        assert_eq!(parts[0], "poisson");
        assert_eq!(parts[1], "500");
        assert_eq!(parts[2].len(), 8);
        assert_eq!(parts[3].len(), 6);
        assert_eq!(parts[4].len(), 6);
        assert_eq!(parts[5], "0");
    }

    #[test]
    fn test_default_names_unique() {
        let namer = RunNamer::new();
        let names: HashSet<String> = (0..1000)
            .map(|_| namer.default_name(DistributionKind::Uniform, 10))
            .collect();
        assert_eq!(names.len(), 1000);
    }

    #[test]
    fn test_clones_share_counter() {
        let namer = RunNamer::new();
        let other = namer.clone();

        assert_eq!(namer.next_run(), 0);
        assert_eq!(other.next_run(), 1);
        assert_eq!(namer.next_run(), 2);
    }
}
