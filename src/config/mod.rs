//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//! Precedence: built-in defaults < TOML file < command-line flags.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::stats::histogram::DEFAULT_BINS;
use crate::output::animation::DEFAULT_MAX_FRAMES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Where and how run artifacts are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for raw sample CSV files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory for statistics CSV files
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
    /// Directory for histogram images
    #[serde(default = "default_plot_dir")]
    pub plot_dir: PathBuf,
    /// Histogram bin count
    #[serde(default = "default_bins")]
    pub bins: usize,
    /// Upper bound on frames in a growing-histogram GIF
    #[serde(default = "default_animation_frames")]
    pub animation_frames: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_report_dir() -> PathBuf {
    PathBuf::from("reports")
}

fn default_plot_dir() -> PathBuf {
    Path::new("reports").join("plots")
}

fn default_bins() -> usize {
    DEFAULT_BINS
}

fn default_animation_frames() -> usize {
    DEFAULT_MAX_FRAMES
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            report_dir: default_report_dir(),
            plot_dir: default_plot_dir(),
            bins: default_bins(),
            animation_frames: default_animation_frames(),
        }
    }
}

impl OutputConfig {
    /// All three output directories rooted under `root`
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            data_dir: root.join("data"),
            report_dir: root.join("reports"),
            plot_dir: root.join("reports").join("plots"),
            ..Self::default()
        }
    }
}

/// Defaults used when a run does not specify them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Sample size
    #[serde(default = "default_count")]
    pub count: usize,
    /// Seed applied when none is given on the command line
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_count() -> usize {
    1000
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            seed: None,
        }
    }
}

/// Form service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Directory for rendered histogram images served under /static
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// Largest accepted sample size per distribution
    #[serde(default = "default_max_size")]
    pub max_size: usize,
}

fn default_listen() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_max_size() -> usize {
    1_000_000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            static_dir: default_static_dir(),
            max_size: default_max_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = Config::default();
        assert_eq!(config.output.data_dir, PathBuf::from("data"));
        assert_eq!(config.output.plot_dir, PathBuf::from("reports").join("plots"));
        assert_eq!(config.output.bins, 30);
        assert_eq!(config.defaults.count, 1000);
        assert_eq!(config.server.listen, "127.0.0.1:5000");
    }

    #[test]
    fn test_rooted_at() {
        let output = OutputConfig::rooted_at(Path::new("/tmp/run"));
        assert_eq!(output.report_dir, PathBuf::from("/tmp/run/reports"));
        assert_eq!(output.bins, 30);
    }
}
