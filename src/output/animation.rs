//! Growing histogram animation
//!
//! Writes an animated GIF in which the histogram fills up as more of the
//! sample is included. The x-range and frequency axis stay fixed across
//! frames so bars only ever grow.

use crate::error::SimError;
use crate::output::ensure_parent_dir;
use crate::output::plot::{draw_histogram, IMAGE_SIZE};
use crate::stats::histogram::{value_range, BinnedHistogram};
use plotters::prelude::*;
use std::path::Path;

/// Bin count used for animation frames
pub const ANIMATION_BINS: usize = 20;

/// Default upper bound on frames per animation
pub const DEFAULT_MAX_FRAMES: usize = 60;

/// Delay between frames in milliseconds
const FRAME_DELAY_MS: u32 = 50;

/// Number of values shown in each frame
///
/// Frames are spread evenly so the last one always shows the whole sample.
/// At most `max_frames` frames; at least one, even for an empty sample.
pub fn frame_steps(len: usize, max_frames: usize) -> Vec<usize> {
    if len == 0 {
        return vec![0];
    }
    let frames = max_frames.clamp(1, len);
    (1..=frames).map(|k| (k * len).div_ceil(frames)).collect()
}

/// Render a growing histogram of `values` to a GIF at `path`
pub fn animate_growing_histogram(
    values: &[f64],
    path: &Path,
    bins: usize,
    max_frames: usize,
) -> Result<(), SimError> {
    ensure_parent_dir(path)?;

    let (lower, upper) = value_range(values).unwrap_or((0.0, 1.0));
    let final_hist = {
        let mut hist = BinnedHistogram::with_range(bins, lower, upper);
        values.iter().for_each(|&v| hist.record(v));
        hist
    };
    let y_limit = final_hist.max_count();

    let root = BitMapBackend::gif(path, IMAGE_SIZE, FRAME_DELAY_MS)
        .map_err(|e| SimError::Plot(e.to_string()))?
        .into_drawing_area();

    let mut hist = BinnedHistogram::with_range(bins, lower, upper);
    let mut shown = 0;
    for step in frame_steps(values.len(), max_frames) {
        for &v in &values[shown..step] {
            hist.record(v);
        }
        shown = step;

        let title = format!("Growing Histogram (Step: {}/{})", step, values.len());
        draw_histogram(&root, &hist, &title, y_limit)?;
        root.present().map_err(|e| SimError::Plot(e.to_string()))?;
    }

    tracing::debug!(path = %path.display(), frames = shown, "Wrote growing histogram");
    Ok(())
}
