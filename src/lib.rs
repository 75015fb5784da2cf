//! randsim - Random sample generator and statistics reporter
//!
//! randsim draws fixed-size samples from a handful of named statistical
//! distributions, computes descriptive statistics, and persists each run as
//! CSV files plus histogram images.
//!
//! # Architecture
//!
//! - **Sampler**: explicit, per-run seeded generator over a closed set of distributions
//! - **Statistics**: population-convention descriptive statistics and equal-width binning
//! - **Report writer**: raw data / statistics CSV, PNG histograms, GIF animation, JSON summary
//! - **Pipeline**: Seed → Generate → ComputeStats → PersistRaw → PersistStats → RenderHistogram
//! - **Front ends**: interactive menu and a minimal HTTP form service

pub mod config;
pub mod distribution;
pub mod error;
pub mod interactive;
pub mod output;
pub mod pipeline;
pub mod service;
pub mod stats;
pub mod util;

// Re-export commonly used types
pub use config::Config;
pub use distribution::{DistributionKind, DistributionSpec, Sample, Sampler};
pub use error::SimError;
pub use pipeline::{Pipeline, RunArtifacts, RunRequest};
pub use stats::{compute_statistics, StatisticsRecord};

/// Result type used throughout randsim
pub type Result<T> = anyhow::Result<T>;
