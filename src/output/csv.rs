//! CSV output formatting
//!
//! Two single-table formats:
//! - Raw data: header `value`, one value per row
//! - Statistics report: header `count,mean,median,mode,min,max,range,variance,std_dev`
//!   and one data row
//!
//! Continuous values use Rust's shortest round-trip float formatting, so
//! reading a raw data file back reproduces the sample exactly. Discrete
//! samples are written as plain integers.

use crate::distribution::Sample;
use crate::error::SimError;
use crate::output::ensure_parent_dir;
use crate::stats::{StatisticsRecord, STATISTIC_NAMES};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header of the raw data file
pub const RAW_DATA_HEADER: &str = "value";

/// Write the sample as a single-column table
pub fn write_raw_data(sample: &Sample, path: &Path) -> Result<(), SimError> {
    ensure_parent_dir(path)?;
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(file, "{}", RAW_DATA_HEADER)?;
    for &value in sample.values() {
        writeln!(file, "{}", format_value(value, sample.is_discrete()))?;
    }
    file.flush()?;
    Ok(())
}

/// Read a raw data file back into values
///
/// Empty cells are read as missing (NaN).
pub fn read_raw_data(path: &Path) -> Result<Vec<f64>, SimError> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines();

    match lines.next().map(str::trim) {
        Some(RAW_DATA_HEADER) => {}
        Some(other) => {
            return Err(SimError::Csv {
                line: 1,
                reason: format!("expected header '{}', found '{}'", RAW_DATA_HEADER, other),
            })
        }
        None => {
            return Err(SimError::Csv {
                line: 1,
                reason: "missing header".to_string(),
            })
        }
    }

    lines
        .enumerate()
        .map(|(i, line)| {
            let cell = line.trim();
            if cell.is_empty() {
                return Ok(f64::NAN);
            }
            cell.parse::<f64>().map_err(|e| SimError::Csv {
                line: i + 2,
                reason: format!("'{}': {}", cell, e),
            })
        })
        .collect()
}

/// Write the statistics as a single-row table
///
/// An unavailable mode becomes an empty cell. `None` (empty sample) writes
/// the header only.
pub fn write_statistics_report(record: Option<&StatisticsRecord>, path: &Path) -> Result<(), SimError> {
    ensure_parent_dir(path)?;
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(file, "{}", STATISTIC_NAMES.join(","))?;
    if let Some(record) = record {
        let row: Vec<String> = record
            .entries()
            .iter()
            .map(|(name, value)| match (name, value) {
                (&"count", Some(v)) => format!("{}", *v as u64),
                (_, Some(v)) => format!("{}", v),
                (_, None) => String::new(),
            })
            .collect();
        writeln!(file, "{}", row.join(","))?;
    }
    file.flush()?;
    Ok(())
}

fn format_value(value: f64, discrete: bool) -> String {
    if discrete && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::{generate, DistributionSpec};
    use crate::stats::compute_statistics;
    use tempfile::TempDir;

    #[test]
    fn test_raw_data_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("normal_raw.csv");
        let sample = generate(&DistributionSpec::Normal { mean: 3.0, std_dev: 2.5 }, 200, Some(5)).unwrap();

        write_raw_data(&sample, &path).unwrap();
        let values = read_raw_data(&path).unwrap();

        assert_eq!(values.len(), sample.len());
        for (a, b) in values.iter().zip(sample.values()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_raw_data_discrete_integers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("poisson_raw.csv");
        let sample = Sample::new(vec![0.0, 3.0, 12.0], true);

        write_raw_data(&sample, &path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();

        assert_eq!(contents, "value\n0\n3\n12\n");
    }

    #[test]
    fn test_raw_data_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("raw.csv");

        write_raw_data(&Sample::new(vec![1.5, 2.5], false), &path).unwrap();
        write_raw_data(&Sample::new(vec![9.0], false), &path).unwrap();

        assert_eq!(read_raw_data(&path).unwrap(), vec![9.0]);
    }

    #[test]
    fn test_read_raw_data_bad_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "x\n1\n").unwrap();

        assert!(matches!(read_raw_data(&path), Err(SimError::Csv { line: 1, .. })));
    }

    #[test]
    fn test_read_raw_data_bad_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "value\n1.0\nabc\n").unwrap();

        assert!(matches!(read_raw_data(&path), Err(SimError::Csv { line: 3, .. })));
    }

    #[test]
    fn test_statistics_report_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports").join("stats.csv");
        let record = compute_statistics(&[1.0, 2.0, 2.0, 5.0]).unwrap();

        write_statistics_report(Some(&record), &path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();

        assert_eq!(lines.next(), Some("count,mean,median,mode,min,max,range,variance,std_dev"));
        let row: Vec<&str> = lines.next().unwrap().split(',').collect();
        assert_eq!(row.len(), 9);
        assert_eq!(row[0], "4");
        assert_eq!(row[1], "2.5");
        assert_eq!(row[3], "2");
        assert_eq!(row[6], "4");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_statistics_report_unavailable_mode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stats.csv");
        let record = compute_statistics(&[1.0, 2.0]).unwrap();

        write_statistics_report(Some(&record), &path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        let row: Vec<&str> = contents.lines().nth(1).unwrap().split(',').collect();

        assert_eq!(row[3], "");
    }

    #[test]
    fn test_statistics_report_empty_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stats.csv");

        write_statistics_report(None, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 1);
    }
}
