//! Report writers
//!
//! Every writer creates missing parent directories and silently overwrites an
//! existing target.
//!
//! - [`csv`]: raw sample and statistics tables
//! - [`plot`]: PNG histogram
//! - [`animation`]: growing-histogram GIF
//! - [`json`]: machine-readable run summary
//! - [`text`]: console summary

pub mod animation;
pub mod csv;
pub mod json;
pub mod plot;
pub mod text;

use std::fs;
use std::io;
use std::path::Path;

/// Create the parent directory of `path` if it is missing
pub(crate) fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
