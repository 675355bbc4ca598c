//! Plot configuration shared by the latency chart renderers
//!
//! Both the scalability and throughput charts draw the same picture (two
//! latency series against an independent variable); this module holds the
//! knobs that differ between them: titles, axis labels, x-axis scale and
//! label precision.

use plotters::prelude::*;

/// Configuration for customizing latency charts
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Chart title
/// - `xlabel`, `ylabel`: Axis labels
/// - `upload_color`, `download_color`: Series colors
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `marker_size`: Point marker radius/half-width in pixels
/// - `show_grid`: Whether to show grid lines
/// - `log_x`: Logarithmic x axis (used by the throughput chart)
/// - `x_precision`: Decimal places for x-axis tick labels
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Chart title (default: "Latency")
    pub title: String,

    /// X-axis label (default: set by chart type)
    pub xlabel: String,

    /// Y-axis label (default: "Average Latency (ms)")
    pub ylabel: String,

    /// Upload latency series color (default: RED)
    pub upload_color: RGBColor,

    /// Download latency series color (default: BLUE)
    pub download_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Marker size in pixels (default: 4)
    pub marker_size: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Use a logarithmic x axis (default: false)
    pub log_x: bool,

    /// Decimal places on x-axis tick labels (default: 0)
    pub x_precision: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Latency".to_string(),
            xlabel: String::new(), // set by chart type
            ylabel: "Average Latency (ms)".to_string(),
            upload_color: RED,
            download_color: BLUE,
            background: WHITE,
            line_width: 2,
            marker_size: 4,
            show_grid: true,
            log_x: false,
            x_precision: 0,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (the chart-type default will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Config for the scalability chart (latency vs client count)
    ///
    /// Linear x axis, client-count labels. The default title matches the
    /// report wording.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::scalability(NO_TITLE);
    /// let custom = PlotConfig::scalability("Scalability, run 3");
    /// ```
    pub fn scalability(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Number of Concurrent Clients".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Scalability: Latency vs Number of Clients".to_string());
        config
    }

    /// Config for the throughput chart (latency vs file size)
    ///
    /// Logarithmic x axis in megabytes; file sizes span orders of magnitude,
    /// so tick labels keep two decimals.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::throughput(NO_TITLE);
    /// ```
    pub fn throughput(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "File Size (MB)".to_string();
        config.log_x = true;
        config.x_precision = 2;
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Throughput: Latency vs File Size".to_string());
        config
    }
}

// =================================================================================================
// Tests
// =================================================================================================
