//! Timing and timestamp utilities

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Format used for run-name timestamps: date, time and microseconds
pub const RUN_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S_%6f";

/// Monotonic timestamp for stage timing
///
/// Thin wrapper around `std::time::Instant`.
#[derive(Debug, Clone, Copy)]
pub struct Timestamp {
    instant: Instant,
}

impl Timestamp {
    /// Create a new timestamp representing the current time
    #[inline]
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
        }
    }

    /// Get the elapsed time since this timestamp
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.instant.elapsed()
    }
}

/// Wall-clock timestamp component of a run name
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use randsim::util::time::run_timestamp;
///
/// let t = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
/// assert_eq!(run_timestamp(&t), "20240309_140507_000000");
/// ```
pub fn run_timestamp(at: &DateTime<Local>) -> String {
    at.format(RUN_TIMESTAMP_FORMAT).to_string()
}

/// Format a duration in human-readable form
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use randsim::util::time::format_duration;
///
/// assert_eq!(format_duration(Duration::from_nanos(500)), "500ns");
/// assert_eq!(format_duration(Duration::from_micros(2500)), "2.50ms");
/// assert_eq!(format_duration(Duration::from_secs(5)), "5.00s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();

    if nanos < 1_000 {
        format!("{}ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2}us", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2}ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", nanos as f64 / 1_000_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::thread;

    #[test]
    fn test_timestamp_elapsed() {
        let start = Timestamp::now();
        thread::sleep(Duration::from_millis(10));

        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_run_timestamp_microseconds() {
        let t = Local.with_ymd_and_hms(2025, 12, 31, 23, 59, 58).unwrap()
            + chrono::Duration::microseconds(123_456);
        assert_eq!(run_timestamp(&t), "20251231_235958_123456");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_nanos(500)), "500ns");
        assert_eq!(format_duration(Duration::from_nanos(1500)), "1.50us");
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.50ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
    }
}
