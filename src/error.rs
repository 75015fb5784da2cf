//! Library error types
//!
//! Application code (CLI, menu, service) works with `anyhow::Result` and adds
//! context; the typed errors below are what the library layers raise.

use thiserror::Error;

/// Errors raised by sampling, reporting and rendering
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unsupported distribution: {0}")]
    UnsupportedDistribution(String),

    #[error("Invalid parameter for {distribution}: {reason}")]
    InvalidParameter {
        distribution: &'static str,
        reason: String,
    },

    #[error("Failed to render chart: {0}")]
    Plot(String),

    #[error("Malformed CSV at line {line}: {reason}")]
    Csv { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub(crate) fn invalid(distribution: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            distribution,
            reason: reason.into(),
        }
    }
}
