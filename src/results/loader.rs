//! CSV loader for the results table
//!
//! Reads `results.csv` (or any path handed in by the caller) into a
//! [`ResultsTable`] using the `csv` crate with serde deserialization.
//!
//! # Error contract
//!
//! The only condition this module distinguishes is the *missing file*: it is
//! checked up front and reported as [`LoadError::Missing`] so the caller can
//! terminate with a nonzero status. Everything else (unreadable file, parse
//! failure, missing column) surfaces as a generic I/O or CSV error and is
//! handled at the top level without structured diagnostics.
//!
//! # Example
//!
//! ```rust,ignore
//! use dfs_report::results::load_results;
//!
//! let table = load_results("results.csv")?;
//! println!("loaded {} rows", table.len());
//! ```

use std::path::Path;

use thiserror::Error;

use super::table::{ResultRow, ResultsTable};

/// Errors raised while loading the results file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The results file does not exist. Fatal: the pipeline exits nonzero.
    #[error("results file not found: {0}")]
    Missing(String),

    /// The file exists but could not be read.
    #[error("failed to read results file: {0}")]
    Io(#[from] std::io::Error),

    /// A row or the header could not be parsed against the expected schema.
    #[error("failed to parse results file: {0}")]
    Csv(#[from] csv::Error),
}

/// Load the full results table from a CSV file.
///
/// The file must carry a header row with the PascalCase column names matched
/// by [`ResultRow`]. Header and field whitespace is trimmed. Row order is
/// preserved.
///
/// # Errors
///
/// - [`LoadError::Missing`] if `path` does not exist
/// - [`LoadError::Csv`] if the header or any row fails to deserialize
pub fn load_results(path: impl AsRef<Path>) -> Result<ResultsTable, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::Missing(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows: Vec<ResultRow> = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }

    Ok(ResultsTable::from_rows(rows))
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str =
        "Experiment,Variable,Value,AvgUploadLatency,AvgDownloadLatency,SuccessRate";

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_reported_with_path() {
        let err = load_results("no_such_results.csv").unwrap_err();
        match err {
            LoadError::Missing(path) => assert!(path.contains("no_such_results.csv")),
            other => panic!("expected Missing, got {other:?}"),
        }
    }

    #[test]
    fn test_load_well_formed_table() {
        let file = write_csv(&format!(
            "{HEADER}\n\
             Scalability,Clients,10,12.5,9.8,100.0\n\
             Throughput,SizeBytes,1048576,40.2,33.1,99.5\n"
        ));
        let table = load_results(file.path()).unwrap();
        assert_eq!(table.len(), 2);

        let first = &table.rows()[0];
        assert_eq!(first.experiment, "Scalability");
        assert_eq!(first.variable, "Clients");
        assert_eq!(first.value, 10.0);
        assert_eq!(first.avg_upload_latency, 12.5);
        assert_eq!(first.avg_download_latency, 9.8);
        assert_eq!(first.success_rate, 100.0);
    }

    #[test]
    fn test_load_trims_whitespace() {
        let file = write_csv(&format!(
            "{HEADER}\n Scalability , Clients , 10 , 12.5 , 9.8 , 100.0 \n"
        ));
        let table = load_results(file.path()).unwrap();
        assert_eq!(table.rows()[0].experiment, "Scalability");
        assert_eq!(table.rows()[0].value, 10.0);
    }

    #[test]
    fn test_load_header_only_gives_empty_table() {
        let file = write_csv(&format!("{HEADER}\n"));
        let table = load_results(file.path()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_malformed_numeric_field_is_csv_error() {
        let file = write_csv(&format!(
            "{HEADER}\nScalability,Clients,not-a-number,12.5,9.8,100.0\n"
        ));
        let err = load_results(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_missing_column_is_csv_error() {
        let file = write_csv(
            "Experiment,Variable,Value\n\
             Scalability,Clients,10\n",
        );
        let err = load_results(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }
}
