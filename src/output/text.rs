//! Human-readable text output

use crate::pipeline::RunArtifacts;
use crate::stats::StatisticsRecord;

/// Decimal places used when presenting statistics
pub const DISPLAY_PRECISION: usize = 4;

/// Format one statistic for display
///
/// Counts print as integers, unavailable values as "n/a", everything else
/// rounded to [`DISPLAY_PRECISION`] places.
pub fn format_statistic(name: &str, value: Option<f64>) -> String {
    match value {
        None => "n/a".to_string(),
        Some(v) if name == "count" => format!("{}", v as u64),
        Some(v) => format!("{:.*}", DISPLAY_PRECISION, v),
    }
}

/// Render the statistics block as lines of text
pub fn summary_lines(record: Option<&StatisticsRecord>) -> Vec<String> {
    match record {
        None => vec!["(empty sample: no statistics)".to_string()],
        Some(record) => record
            .entries()
            .iter()
            .map(|(name, value)| format!("{:12}: {}", name, format_statistic(name, *value)))
            .collect(),
    }
}

/// Print the statistics summary of a run to the console
pub fn print_summary(run: &RunArtifacts) {
    println!();
    println!("--- Summary: {} ---", run.sample_name);
    for line in summary_lines(run.stats.as_ref()) {
        println!("{}", line);
    }
    println!("----------------");
    println!();
}

/// Print the files a run created
pub fn print_artifacts(run: &RunArtifacts) {
    println!("Files created:");
    println!("  {}", run.raw_data_path.display());
    println!("  {}", run.stats_path.display());
    println!("  {}", run.histogram_path.display());
    if let Some(ref animation) = run.animation_path {
        println!("  {}", animation.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_statistics;

    #[test]
    fn test_format_statistic() {
        assert_eq!(format_statistic("count", Some(100.0)), "100");
        assert_eq!(format_statistic("mean", Some(0.123456)), "0.1235");
        assert_eq!(format_statistic("mode", None), "n/a");
    }

    #[test]
    fn test_summary_lines() {
        let record = compute_statistics(&[1.0, 2.0, 3.0]).unwrap();
        let lines = summary_lines(Some(&record));

        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("count"));
        assert!(lines[0].ends_with(": 3"));
        assert!(lines[3].ends_with(": n/a"));
    }

    #[test]
    fn test_summary_lines_empty() {
        assert_eq!(summary_lines(None).len(), 1);
    }
}
