//! JSON run summary
//!
//! A machine-readable companion to the CSV reports: which distribution was
//! sampled, where each artifact was written, and the computed statistics.

use crate::distribution::DistributionSpec;
use crate::output::ensure_parent_dir;
use crate::pipeline::RunArtifacts;
use crate::stats::StatisticsRecord;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Output locations of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonArtifacts {
    pub raw_data: PathBuf,
    pub stats_report: PathBuf,
    pub histogram: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<PathBuf>,
}

/// Complete summary document for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub sample_name: String,
    pub distribution: DistributionSpec,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// RFC 3339 timestamp of when the summary was produced
    pub generated_at: String,
    pub artifacts: JsonArtifacts,
    /// `null` for an empty sample
    pub statistics: Option<StatisticsRecord>,
}

impl RunSummary {
    pub fn from_artifacts(run: &RunArtifacts) -> Self {
        Self {
            sample_name: run.sample_name.clone(),
            distribution: run.spec,
            count: run.count,
            seed: run.seed,
            generated_at: chrono::Local::now().to_rfc3339(),
            artifacts: JsonArtifacts {
                raw_data: run.raw_data_path.clone(),
                stats_report: run.stats_path.clone(),
                histogram: run.histogram_path.clone(),
                animation: run.animation_path.clone(),
            },
            statistics: run.stats.clone(),
        }
    }
}

/// Write summaries for one or more runs as a pretty-printed JSON array
pub fn write_run_summaries(runs: &[RunArtifacts], path: &Path) -> Result<()> {
    ensure_parent_dir(path)
        .with_context(|| format!("Failed to create directory for {}", path.display()))?;

    let summaries: Vec<RunSummary> = runs.iter().map(RunSummary::from_artifacts).collect();
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON output: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &summaries).context("Failed to serialize run summary")?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
