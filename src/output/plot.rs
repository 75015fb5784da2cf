//! Histogram rendering
//!
//! Renders a [`BinnedHistogram`] as a bar chart with the [`plotters`] bitmap
//! backend. Images are PNG files with a fixed 960x600 resolution, a title
//! caption, and "Value" / "Frequency" axis labels.

use crate::distribution::Sample;
use crate::error::SimError;
use crate::output::ensure_parent_dir;
use crate::stats::histogram::BinnedHistogram;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Image size in pixels
pub const IMAGE_SIZE: (u32, u32) = (960, 600);

const BAR_COLOR: RGBColor = RGBColor(52, 101, 164);

fn plot_err<E: std::fmt::Display>(e: E) -> SimError {
    SimError::Plot(e.to_string())
}

/// Bin `sample` into `bins` equal-width bins and save the chart as PNG
///
/// An empty sample produces a valid chart with no bars.
pub fn render_histogram(sample: &Sample, title: &str, path: &Path, bins: usize) -> Result<(), SimError> {
    ensure_parent_dir(path)?;
    let hist = BinnedHistogram::from_values(sample.values(), bins);

    let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
    draw_histogram(&root, &hist, title, hist.max_count())?;
    root.present().map_err(plot_err)?;

    Ok(())
}

/// Draw one histogram frame onto `area`
///
/// `y_limit` fixes the top of the frequency axis so a sequence of frames can
/// share one scale.
pub(crate) fn draw_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    hist: &BinnedHistogram,
    title: &str,
    y_limit: u64,
) -> Result<(), SimError> {
    area.fill(&WHITE).map_err(plot_err)?;

    let (x_min, x_max) = hist.range();
    let y_max = (y_limit.max(1) as f64) * 1.05;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Value")
        .y_desc("Frequency")
        .y_label_formatter(&|y| format!("{:.0}", y))
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series((0..hist.num_bins()).map(|i| {
            let (lo, hi) = hist.bin_edges(i);
            Rectangle::new([(lo, 0.0), (hi, hist.bucket_count(i) as f64)], BAR_COLOR.filled())
        }))
        .map_err(plot_err)?;

    // Bar outlines
    chart
        .draw_series(
            (0..hist.num_bins())
                .filter(|&i| hist.bucket_count(i) > 0)
                .map(|i| {
                    let (lo, hi) = hist.bin_edges(i);
                    Rectangle::new([(lo, 0.0), (hi, hist.bucket_count(i) as f64)], WHITE.stroke_width(1))
                }),
        )
        .map_err(plot_err)?;

    Ok(())
}
