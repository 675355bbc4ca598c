//! Report page content
//!
//! One function per page kind, in the order they appear in the report:
//! title page, scalability chart, throughput chart, data table. The chart
//! pages reuse the same renderers as the standalone images and follow the
//! same skip rule: an empty experiment subset logs a notice and appends no
//! page.

use tracing::warn;

use crate::output::visualization::{
    draw_latency_chart, scalability_series, throughput_series, PlotConfig, NO_TITLE,
};
use crate::results::{Experiment, ResultsTable};

use super::document::{ReportDocument, ReportError};

/// Title page text, one entry per line.
pub const REPORT_TITLE_LINES: [&str; 2] = ["Distributed File Storage", "Performance Report"];

/// Heading of the data table page.
pub const TABLE_TITLE: &str = "Performance Data Summary";

/// Data table columns, in render order. Mirrors the results file schema.
pub const TABLE_COLUMNS: [&str; 6] = [
    "Experiment",
    "Variable",
    "Value",
    "AvgUploadLatency",
    "AvgDownloadLatency",
    "SuccessRate",
];

/// Append the fixed title page.
pub fn append_title_page(doc: &mut ReportDocument) -> Result<(), ReportError> {
    doc.add_title_page(&REPORT_TITLE_LINES)
}

/// Append the scalability chart page.
///
/// Returns `Ok(false)` (and appends nothing) when the table has no
/// Scalability rows.
pub fn append_scalability_page(
    doc: &mut ReportDocument,
    table: &ResultsTable,
) -> Result<bool, ReportError> {
    let Some(series) = scalability_series(table) else {
        warn!("no {} data found, skipping report page", Experiment::Scalability);
        return Ok(false);
    };

    let config = PlotConfig::scalability(NO_TITLE);
    doc.add_chart_page(config.width, config.height, |root| {
        draw_latency_chart(root, &series, &config)
    })?;
    Ok(true)
}

/// Append the throughput chart page.
///
/// Returns `Ok(false)` (and appends nothing) when the table has no
/// Throughput rows.
pub fn append_throughput_page(
    doc: &mut ReportDocument,
    table: &ResultsTable,
) -> Result<bool, ReportError> {
    let Some(series) = throughput_series(table) else {
        warn!("no {} data found, skipping report page", Experiment::Throughput);
        return Ok(false);
    };

    let config = PlotConfig::throughput(NO_TITLE);
    doc.add_chart_page(config.width, config.height, |root| {
        draw_latency_chart(root, &series, &config)
    })?;
    Ok(true)
}

/// Append the data table page(s): every row of the table, all six columns,
/// no filtering.
pub fn append_data_table_page(
    doc: &mut ReportDocument,
    table: &ResultsTable,
) -> Result<(), ReportError> {
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| {
            vec![
                row.experiment.clone(),
                row.variable.clone(),
                format_value(row.value),
                format!("{:.2}", row.avg_upload_latency),
                format!("{:.2}", row.avg_download_latency),
                format!("{:.2}", row.success_rate),
            ]
        })
        .collect();

    doc.add_table_page(TABLE_TITLE, &TABLE_COLUMNS, &rows)
}

/// Integers (client counts, byte sizes) print without decimals; everything
/// else keeps two.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ResultRow;

    fn row(experiment: &str, value: f64) -> ResultRow {
        ResultRow {
            experiment: experiment.to_string(),
            variable: "x".to_string(),
            value,
            avg_upload_latency: 12.5,
            avg_download_latency: 9.8,
            success_rate: 100.0,
        }
    }

    fn full_table() -> ResultsTable {
        ResultsTable::from_rows(vec![
            row("Scalability", 10.0),
            row("Scalability", 50.0),
            row("Throughput", 1_048_576.0),
            row("Throughput", 16_777_216.0),
        ])
    }

    #[test]
    fn test_table_columns_order() {
        assert_eq!(
            TABLE_COLUMNS,
            [
                "Experiment",
                "Variable",
                "Value",
                "AvgUploadLatency",
                "AvgDownloadLatency",
                "SuccessRate",
            ]
        );
    }

    #[test]
    fn test_full_report_has_four_pages() {
        let table = full_table();
        let mut doc = ReportDocument::new("test").unwrap();

        append_title_page(&mut doc).unwrap();
        assert!(append_scalability_page(&mut doc, &table).unwrap());
        assert!(append_throughput_page(&mut doc, &table).unwrap());
        append_data_table_page(&mut doc, &table).unwrap();

        assert_eq!(doc.page_count(), 4);
    }

    #[test]
    fn test_empty_scalability_subset_appends_no_page() {
        let table = ResultsTable::from_rows(vec![row("Throughput", 1_048_576.0)]);
        let mut doc = ReportDocument::new("test").unwrap();
        let appended = append_scalability_page(&mut doc, &table).unwrap();
        assert!(!appended);
        assert_eq!(doc.page_count(), 0);
    }

    #[test]
    fn test_empty_throughput_subset_appends_no_page() {
        let table = ResultsTable::from_rows(vec![row("Scalability", 10.0)]);
        let mut doc = ReportDocument::new("test").unwrap();
        let appended = append_throughput_page(&mut doc, &table).unwrap();
        assert!(!appended);
        assert_eq!(doc.page_count(), 0);
    }

    #[test]
    fn test_data_table_page_renders_unfiltered() {
        // The data table includes every row regardless of category
        let table = full_table();
        let mut doc = ReportDocument::new("test").unwrap();
        append_data_table_page(&mut doc, &table).unwrap();
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_format_value_integer_and_fractional() {
        assert_eq!(format_value(1_048_576.0), "1048576");
        assert_eq!(format_value(10.0), "10");
        assert_eq!(format_value(0.5), "0.50");
    }
}
