//! Sample-generation and report pipeline
//!
//! One run walks a fixed sequence of stages:
//!
//! ```text
//! Seed → Generate → ComputeStats → PersistRaw → PersistStats → RenderHistogram → Done
//! ```
//!
//! Every stage is unconditional. A failing stage aborts the run; artifacts
//! already written stay on disk.

pub mod naming;

use crate::config::OutputConfig;
use crate::distribution::{DistributionKind, DistributionSpec, Sampler};
use crate::output::{animation, csv, plot, text};
use crate::stats::{compute_statistics, StatisticsRecord};
use crate::util::time::{format_duration, Timestamp};
use crate::Result;
use anyhow::Context;
use naming::RunNamer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Pipeline stage, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Seed,
    Generate,
    ComputeStats,
    PersistRaw,
    PersistStats,
    RenderHistogram,
    RenderAnimation,
    Done,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunStage::Seed => "seed",
            RunStage::Generate => "generate",
            RunStage::ComputeStats => "compute-stats",
            RunStage::PersistRaw => "persist-raw",
            RunStage::PersistStats => "persist-stats",
            RunStage::RenderHistogram => "render-histogram",
            RunStage::RenderAnimation => "render-animation",
            RunStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Everything needed to execute one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    pub spec: DistributionSpec,
    pub count: usize,
    /// Overrides the generated name
    pub sample_name: Option<String>,
    /// Deterministic output when set
    pub seed: Option<u64>,
    /// Also write a growing-histogram GIF
    pub animate: bool,
}

impl RunRequest {
    pub fn new(spec: DistributionSpec, count: usize) -> Self {
        Self {
            spec,
            count,
            sample_name: None,
            seed: None,
            animate: false,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.sample_name = Some(name.into());
        self
    }

    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }
}

/// Outputs of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunArtifacts {
    pub sample_name: String,
    pub spec: DistributionSpec,
    pub count: usize,
    pub seed: Option<u64>,
    pub raw_data_path: PathBuf,
    pub stats_path: PathBuf,
    pub histogram_path: PathBuf,
    pub animation_path: Option<PathBuf>,
    /// `None` for an empty sample
    pub stats: Option<StatisticsRecord>,
}

/// Runs requests against one output layout
pub struct Pipeline {
    output: OutputConfig,
    namer: RunNamer,
    print_summary: bool,
}

impl Pipeline {
    /// Create a pipeline writing to `output`
    pub fn new(output: OutputConfig) -> Self {
        Self::with_namer(output, RunNamer::new())
    }

    /// Create a pipeline that shares run numbering with other pipelines
    pub fn with_namer(output: OutputConfig, namer: RunNamer) -> Self {
        Self {
            output,
            namer,
            print_summary: true,
        }
    }

    /// Do not print the console summary after each run
    pub fn quiet(mut self) -> Self {
        self.print_summary = false;
        self
    }

    /// Chart title for a run
    pub fn histogram_title(kind: DistributionKind, count: usize) -> String {
        format!("{} Distribution (n={})", kind.title(), count)
    }

    /// `(raw, stats, histogram)` paths for a sample name
    pub fn artifact_paths(&self, sample_name: &str) -> (PathBuf, PathBuf, PathBuf) {
        (
            self.output.data_dir.join(format!("{}_raw.csv", sample_name)),
            self.output.report_dir.join(format!("{}_stats.csv", sample_name)),
            self.output.plot_dir.join(format!("{}_hist.png", sample_name)),
        )
    }

    /// Execute one run
    pub fn run(&self, request: &RunRequest) -> Result<RunArtifacts> {
        let started = Timestamp::now();
        let kind = request.spec.kind();
        let sample_name = match request.sample_name {
            Some(ref name) => name.clone(),
            None => self.namer.default_name(kind, request.count),
        };
        let (raw_data_path, stats_path, histogram_path) = self.artifact_paths(&sample_name);

        debug!(stage = %RunStage::Seed, seed = ?request.seed, "Starting run {}", sample_name);
        let mut sampler = Sampler::new(request.seed);
        if let Some(seed) = request.seed {
            info!("Seed set to {} (for reproducibility)", seed);
        }

        debug!(stage = %RunStage::Generate, "Sampling {} values from {}", request.count, request.spec);
        let sample = sampler
            .generate(&request.spec, request.count)
            .with_context(|| format!("Failed to generate sample from {}", request.spec))?;

        debug!(stage = %RunStage::ComputeStats);
        let stats = compute_statistics(sample.values());

        debug!(stage = %RunStage::PersistRaw);
        csv::write_raw_data(&sample, &raw_data_path)
            .with_context(|| format!("Failed to write raw data: {}", raw_data_path.display()))?;
        info!("Saved raw data: {}", raw_data_path.display());

        debug!(stage = %RunStage::PersistStats);
        csv::write_statistics_report(stats.as_ref(), &stats_path)
            .with_context(|| format!("Failed to write report: {}", stats_path.display()))?;
        info!("Saved report: {}", stats_path.display());

        debug!(stage = %RunStage::RenderHistogram);
        let title = Self::histogram_title(kind, request.count);
        plot::render_histogram(&sample, &title, &histogram_path, self.output.bins)
            .with_context(|| format!("Failed to render histogram: {}", histogram_path.display()))?;
        info!("Saved histogram: {}", histogram_path.display());

        let animation_path = if request.animate {
            debug!(stage = %RunStage::RenderAnimation);
            let path = self.output.plot_dir.join(format!("{}_growing.gif", sample_name));
            animation::animate_growing_histogram(
                sample.values(),
                &path,
                animation::ANIMATION_BINS,
                self.output.animation_frames,
            )
            .with_context(|| format!("Failed to render animation: {}", path.display()))?;
            info!("Saved growing histogram: {}", path.display());
            Some(path)
        } else {
            None
        };

        let artifacts = RunArtifacts {
            sample_name,
            spec: request.spec,
            count: request.count,
            seed: request.seed,
            raw_data_path,
            stats_path,
            histogram_path,
            animation_path,
            stats,
        };

        debug!(stage = %RunStage::Done, elapsed = %format_duration(started.elapsed()));
        if self.print_summary {
            text::print_summary(&artifacts);
        }

        Ok(artifacts)
    }

    /// One run per distribution with default parameters
    ///
    /// Sample names are `{tag}_{count}`; every run uses the same seed.
    pub fn run_all(&self, count: usize, seed: Option<u64>) -> Result<Vec<RunArtifacts>> {
        DistributionKind::ALL
            .iter()
            .map(|&kind| {
                let request = RunRequest::new(all_mode_spec(kind), count)
                    .with_seed(seed)
                    .with_name(format!("{}_{}", kind.tag(), count));
                self.run(&request)
            })
            .collect()
    }
}

/// Parameters used by the "all distributions" run
pub fn all_mode_spec(kind: DistributionKind) -> DistributionSpec {
    match kind {
        DistributionKind::Binomial => DistributionSpec::Binomial {
            trials: 10,
            success_probability: 0.5,
        },
        DistributionKind::Poisson => DistributionSpec::Poisson { rate: 2.0 },
        other => DistributionSpec::default_for(other),
    }
}
