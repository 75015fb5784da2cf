//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use anyhow::{Context, Result};
use std::fs;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Load the configuration for this invocation
///
/// Reads the `--config` file when given, otherwise starts from defaults, then
/// applies command-line overrides.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => Config::default(),
    };
    Ok(merge_cli_with_config(cli, config))
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Config {
    // Override output settings
    if let Some(ref dir) = cli.data_dir {
        config.output.data_dir = dir.clone();
    }
    if let Some(ref dir) = cli.report_dir {
        config.output.report_dir = dir.clone();
    }
    if let Some(ref dir) = cli.plot_dir {
        config.output.plot_dir = dir.clone();
    }
    if let Some(bins) = cli.bins {
        config.output.bins = bins;
    }

    // Override service settings
    if let Some(ref listen) = cli.listen {
        config.server.listen = listen.clone();
    }
    if let Some(ref dir) = cli.static_dir {
        config.server.static_dir = dir.clone();
    }

    config
}
