//! Configuration validation

use super::*;
use anyhow::Result;
use std::net::SocketAddr;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_output(&config.output)?;
    validate_defaults(&config.defaults)?;
    validate_server(&config.server)?;
    Ok(())
}

/// Validate output configuration
pub fn validate_output(output: &OutputConfig) -> Result<()> {
    if output.bins == 0 {
        anyhow::bail!("output.bins must be at least 1");
    }
    if output.animation_frames == 0 {
        anyhow::bail!("output.animation_frames must be at least 1");
    }
    for (name, dir) in [
        ("data_dir", &output.data_dir),
        ("report_dir", &output.report_dir),
        ("plot_dir", &output.plot_dir),
    ] {
        if dir.as_os_str().is_empty() {
            anyhow::bail!("output.{} must not be empty", name);
        }
    }
    Ok(())
}

/// Validate run defaults
pub fn validate_defaults(defaults: &DefaultsConfig) -> Result<()> {
    if defaults.count == 0 {
        anyhow::bail!("defaults.count must be at least 1");
    }
    Ok(())
}

/// Validate service configuration
pub fn validate_server(server: &ServerConfig) -> Result<()> {
    if server.listen.parse::<SocketAddr>().is_err() {
        anyhow::bail!(
            "server.listen must be an address like 127.0.0.1:5000, got '{}'",
            server.listen
        );
    }
    if server.max_size == 0 {
        anyhow::bail!("server.max_size must be at least 1");
    }
    Ok(())
}
