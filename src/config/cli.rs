//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Execution mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExecutionMode {
    /// Numbered menu on the terminal (default)
    Interactive,
    /// Single run from command-line flags
    Run,
    /// HTTP form service
    Serve,
}

/// randsim - Random sample generator with statistics and histograms
#[derive(Parser, Debug)]
#[command(name = "randsim")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Execution mode: interactive, run, or serve
    #[arg(long, value_enum, default_value = "interactive")]
    pub mode: ExecutionMode,

    // === Run Options ===
    /// Distribution to sample: uniform, normal, binomial, poisson
    /// (run mode; use "all" for one run of each with default parameters)
    #[arg(short = 'd', long)]
    pub distribution: Option<String>,

    /// Number of values to generate
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Seed for reproducible samples
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Sample name used in output file names (default: auto-generated)
    #[arg(long)]
    pub name: Option<String>,

    /// Also write a growing-histogram GIF
    #[arg(long)]
    pub animate: bool,

    /// Write a JSON run summary to this path
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    // === Distribution Parameters ===
    /// Uniform lower bound
    #[arg(long, allow_negative_numbers = true)]
    pub low: Option<f64>,

    /// Uniform upper bound
    #[arg(long, allow_negative_numbers = true)]
    pub high: Option<f64>,

    /// Normal mean
    #[arg(long, allow_negative_numbers = true)]
    pub mean: Option<f64>,

    /// Normal standard deviation
    #[arg(long)]
    pub std_dev: Option<f64>,

    /// Binomial number of trials
    #[arg(long)]
    pub trials: Option<u64>,

    /// Binomial success probability (0-1)
    #[arg(long)]
    pub probability: Option<f64>,

    /// Poisson rate (mean)
    #[arg(long)]
    pub rate: Option<f64>,

    // === Output Options ===
    /// Directory for raw data CSV files
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory for statistics CSV files
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Directory for histogram images
    #[arg(long)]
    pub plot_dir: Option<PathBuf>,

    /// Histogram bin count
    #[arg(long)]
    pub bins: Option<usize>,

    // === Service Options ===
    /// Listen address for serve mode (e.g., 127.0.0.1:5000)
    #[arg(long)]
    pub listen: Option<String>,

    /// Directory for images rendered by the form service
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    // === Configuration File ===
    /// TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    ///
    /// Distribution parameter ranges are checked later, once the
    /// specification has been assembled.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.mode == ExecutionMode::Run && self.distribution.is_none() {
            anyhow::bail!("--distribution is required in run mode");
        }

        if let Some(bins) = self.bins {
            if bins == 0 {
                anyhow::bail!("bins must be at least 1");
            }
        }

        if let Some(ref name) = self.name {
            if name.trim().is_empty() {
                anyhow::bail!("name must not be blank");
            }
            if name.contains(['/', '\\']) {
                anyhow::bail!("name must not contain path separators");
            }
        }

        if self.name.is_some() && self.is_all() {
            anyhow::bail!("--name cannot be combined with --distribution all");
        }

        Ok(())
    }

    /// True when `--distribution all` was requested
    pub fn is_all(&self) -> bool {
        self.distribution
            .as_deref()
            .is_some_and(|d| d.trim().eq_ignore_ascii_case("all"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("randsim").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_mode_interactive() {
        let cli = parse(&[]);
        assert_eq!(cli.mode, ExecutionMode::Interactive);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_run_requires_distribution() {
        let cli = parse(&["--mode", "run"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_negative_parameters() {
        let cli = parse(&["--mode", "run", "-d", "uniform", "--low", "-5", "--high", "-1"]);
        assert_eq!(cli.low, Some(-5.0));
        assert_eq!(cli.high, Some(-1.0));
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_bins() {
        let cli = parse(&["--bins", "0"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_path_in_name() {
        let cli = parse(&["--mode", "run", "-d", "normal", "--name", "../escape"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_all_distribution() {
        let cli = parse(&["--mode", "run", "-d", "ALL"]);
        assert!(cli.is_all());
    }
}
