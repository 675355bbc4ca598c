//! Latency chart rendering for performance experiments
//!
//! Draws the two latency series (average upload, average download) of one
//! experiment subset against its independent variable, with point markers,
//! a legend and a grid.
//!
//! # Available functions
//!
//! - [`scalability_series`] / [`throughput_series`] — build plot-ready point
//!   series from a [`ResultsTable`] (empty subset → `None`)
//! - [`plot_scalability`] / [`plot_throughput`]     — standalone image output
//! - [`draw_latency_chart`]                         — render onto any drawing
//!   area (used by the PDF report for chart pages)
//!
//! # Usage
//!
//! ```rust,ignore
//! use dfs_report::output::visualization::{plot_scalability, plot_throughput};
//!
//! let table = load_results("results.csv")?;
//! plot_scalability(&table, "graph_scalability.png", None)?;
//! plot_throughput(&table, "graph_throughput.png", None)?;
//! ```

use std::error::Error;

use plotters::coord::ranged1d::{AsRangedCoord, Ranged, ValueFormatter};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{info, warn};

use crate::results::{Experiment, ResultRow, ResultsTable};
use super::config::{PlotConfig, NO_TITLE};

// =================================================================================================
// Series Extraction
// =================================================================================================

/// Plot-ready point series for one experiment subset.
///
/// Both vectors hold `(x, latency_ms)` pairs in file order and always have
/// the same length (one entry per matching row).
#[derive(Debug, Clone)]
pub struct LatencySeries {
    /// Average upload latency per row.
    pub upload: Vec<(f64, f64)>,

    /// Average download latency per row.
    pub download: Vec<(f64, f64)>,
}

impl LatencySeries {
    fn from_rows(rows: &[&ResultRow], x_of: impl Fn(&ResultRow) -> f64) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }

        let upload = rows
            .iter()
            .map(|row| (x_of(row), row.avg_upload_latency))
            .collect();
        let download = rows
            .iter()
            .map(|row| (x_of(row), row.avg_download_latency))
            .collect();

        Some(Self { upload, download })
    }

    /// Minimum and maximum x value across both series.
    pub fn x_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &(x, _) in self.upload.iter().chain(self.download.iter()) {
            min = min.min(x);
            max = max.max(x);
        }
        (min, max)
    }

    /// Largest latency value across both series.
    pub fn max_latency(&self) -> f64 {
        self.upload
            .iter()
            .chain(self.download.iter())
            .map(|&(_, y)| y)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Build the scalability series: latency vs client count.
///
/// Filters rows where `Experiment == "Scalability"`; the `Value` column is
/// used as-is (a client count). Returns `None` when no rows match.
pub fn scalability_series(table: &ResultsTable) -> Option<LatencySeries> {
    LatencySeries::from_rows(&table.filter(Experiment::Scalability), |row| row.value)
}

/// Build the throughput series: latency vs file size in megabytes.
///
/// Filters rows where `Experiment == "Throughput"`; the `Value` column is a
/// byte count and is converted to megabytes for the x axis. The conversion
/// lives only in the returned series — the table keeps raw bytes.
/// Returns `None` when no rows match.
pub fn throughput_series(table: &ResultsTable) -> Option<LatencySeries> {
    LatencySeries::from_rows(&table.filter(Experiment::Throughput), |row| {
        row.value_megabytes()
    })
}

// =================================================================================================
// Public API — Standalone Images
// =================================================================================================

/// Plot the scalability chart to a standalone image file.
///
/// # Arguments
///
/// * `table`       — Full results table (filtering happens here)
/// * `output_path` — Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — Optional plot configuration; `None` uses
///                   [`PlotConfig::scalability`] defaults
///
/// # Returns
///
/// `Ok(true)` when the chart was written, `Ok(false)` when the subset was
/// empty and the output was skipped (a notice is logged, no file is created).
///
/// # Errors
///
/// Returns `Err` if the backend cannot write to `output_path`.
pub fn plot_scalability(
    table: &ResultsTable,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<bool, Box<dyn Error>> {
    let Some(series) = scalability_series(table) else {
        warn!("no {} data found, skipping {output_path}", Experiment::Scalability);
        return Ok(false);
    };

    let default_config = PlotConfig::scalability(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    render_to_file(&series, output_path, config)?;
    info!("generated {output_path}");
    Ok(true)
}

/// Plot the throughput chart to a standalone image file.
///
/// Same shape as [`plot_scalability`] with two differences: the x axis is
/// the file size converted to megabytes, and it is drawn on a logarithmic
/// scale (sizes usually span several orders of magnitude).
pub fn plot_throughput(
    table: &ResultsTable,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<bool, Box<dyn Error>> {
    let Some(series) = throughput_series(table) else {
        warn!("no {} data found, skipping {output_path}", Experiment::Throughput);
        return Ok(false);
    };

    let default_config = PlotConfig::throughput(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    render_to_file(&series, output_path, config)?;
    info!("generated {output_path}");
    Ok(true)
}

fn render_to_file(
    series: &LatencySeries,
    output_path: &str,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let root =
                SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
            draw_latency_chart(&root, series, config)
        }
        _ => {
            let root =
                BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
            draw_latency_chart(&root, series, config)
        }
    }
}

// =================================================================================================
// Drawing
// =================================================================================================

/// Draw a latency chart onto an existing drawing area.
///
/// Dispatches on `config.log_x` between a linear and a logarithmic x axis;
/// everything else (series, markers, legend, grid) is shared. The PDF report
/// calls this with an in-memory bitmap area to produce chart pages.
pub fn draw_latency_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    series: &LatencySeries,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (x_min, x_max) = series.x_range();

    if config.log_x {
        // Log axes need strictly positive bounds; pad on both sides.
        let x_lo = (x_min * 0.8).max(1e-6);
        let x_hi = (x_max * 1.25).max(x_lo * 1.001);
        draw_with_x_axis(root, (x_lo..x_hi).log_scale(), series, config)
    } else {
        let x_hi = (x_max * 1.05).max(1.0);
        draw_with_x_axis(root, 0.0..x_hi, series, config)
    }
}

/// Shared chart body, generic over the x-axis coordinate type.
fn draw_with_x_axis<DB, XS>(
    root: &DrawingArea<DB, Shift>,
    x_spec: XS,
    series: &LatencySeries,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    XS: AsRangedCoord<Value = f64>,
    XS::CoordDescType: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    root.fill(&config.background)?;

    let y_max = series.max_latency().max(1e-9);

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_spec, 0.0..(y_max * 1.1))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.prec$}", x, prec = config.x_precision))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;
    }

    // Upload: line + circular markers
    let upload_color = config.upload_color;
    chart
        .draw_series(LineSeries::new(
            series.upload.iter().copied(),
            ShapeStyle::from(&upload_color).stroke_width(config.line_width),
        ))?
        .label("Upload Latency")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], upload_color));

    chart.draw_series(series.upload.iter().map(|&(x, y)| {
        Circle::new((x, y), config.marker_size as i32, upload_color.filled())
    }))?;

    // Download: line + square markers
    let download_color = config.download_color;
    chart
        .draw_series(LineSeries::new(
            series.download.iter().copied(),
            ShapeStyle::from(&download_color).stroke_width(config.line_width),
        ))?
        .label("Download Latency")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], download_color));

    let half = config.marker_size as i32;
    chart.draw_series(series.download.iter().map(|&(x, y)| {
        EmptyElement::at((x, y))
            + Rectangle::new([(-half, -half), (half, half)], download_color.filled())
    }))?;

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
