//! Common utilities for integration tests

use std::fs;
use std::path::Path;

use dfs_report::results::{ResultRow, ResultsTable};

/// CSV header matching the results file schema.
pub const CSV_HEADER: &str =
    "Experiment,Variable,Value,AvgUploadLatency,AvgDownloadLatency,SuccessRate";

/// Build one result row with fixed latencies.
pub fn row(experiment: &str, variable: &str, value: f64) -> ResultRow {
    ResultRow {
        experiment: experiment.to_string(),
        variable: variable.to_string(),
        value,
        avg_upload_latency: 12.5,
        avg_download_latency: 9.8,
        success_rate: 100.0,
    }
}

/// A well-formed table with rows in both experiment categories.
pub fn sample_table() -> ResultsTable {
    ResultsTable::from_rows(vec![
        row("Scalability", "Clients", 1.0),
        row("Scalability", "Clients", 10.0),
        row("Scalability", "Clients", 50.0),
        row("Throughput", "SizeBytes", 1_048_576.0),
        row("Throughput", "SizeBytes", 16_777_216.0),
        row("Throughput", "SizeBytes", 134_217_728.0),
    ])
}

/// Write a results CSV covering both experiment categories.
pub fn write_full_results_csv(path: &Path) {
    let body = format!(
        "{CSV_HEADER}\n\
         Scalability,Clients,1,5.2,4.1,100.0\n\
         Scalability,Clients,10,12.5,9.8,100.0\n\
         Scalability,Clients,50,20.1,15.3,99.5\n\
         Throughput,SizeBytes,1048576,40.2,33.1,100.0\n\
         Throughput,SizeBytes,16777216,180.7,150.2,99.0\n"
    );
    fs::write(path, body).unwrap();
}

/// Write a results CSV containing only one experiment category.
pub fn write_single_category_csv(path: &Path, experiment: &str, value: f64) {
    let body = format!("{CSV_HEADER}\n{experiment},x,{value},12.5,9.8,100.0\n");
    fs::write(path, body).unwrap();
}
