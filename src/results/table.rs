//! Results table: rows of precomputed performance measurements
//!
//! One entity lives here, the **results table**: an ordered sequence of
//! measurement rows produced by the storage system's performance-evaluation
//! runs. Rows are grouped by their `Experiment` label; within one experiment
//! the `Value` column shares a single meaning (client count for Scalability,
//! file size in bytes for Throughput).
//!
//! The table is loaded once and never mutated. The only derived quantity is
//! the megabyte conversion of `Value`, computed on demand for throughput
//! plots and never written back.

use serde::Deserialize;

/// Bytes per megabyte, used for the throughput x-axis conversion.
pub const BYTES_PER_MEGABYTE: f64 = 1_048_576.0;

/// Experiment category a row belongs to.
///
/// The variants carry the exact labels used in the `Experiment` column of
/// `results.csv`; matching is done on those strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experiment {
    /// Latency vs number of concurrent clients.
    Scalability,
    /// Latency vs transferred file size.
    Throughput,
}

impl Experiment {
    /// The label as it appears in the results file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Experiment::Scalability => "Scalability",
            Experiment::Throughput => "Throughput",
        }
    }
}

impl std::fmt::Display for Experiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One measurement row from the results file.
///
/// Field names map to the PascalCase CSV headers via serde renaming, so the
/// struct doubles as the file schema:
///
/// ```csv
/// Experiment,Variable,Value,AvgUploadLatency,AvgDownloadLatency,SuccessRate
/// Scalability,Clients,10,12.5,9.8,100.0
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultRow {
    /// Category label grouping rows by the test that produced them.
    pub experiment: String,

    /// Name of the independent variable (e.g. "Clients", "SizeBytes").
    pub variable: String,

    /// Numeric value of the independent variable.
    pub value: f64,

    /// Average upload latency in milliseconds.
    pub avg_upload_latency: f64,

    /// Average download latency in milliseconds.
    pub avg_download_latency: f64,

    /// Fraction or percentage of successful operations.
    pub success_rate: f64,
}

impl ResultRow {
    /// `Value` interpreted as a byte count, converted to megabytes.
    ///
    /// Used by the throughput chart only; the table itself keeps raw bytes.
    pub fn value_megabytes(&self) -> f64 {
        self.value / BYTES_PER_MEGABYTE
    }

    /// Whether this row belongs to the given experiment category.
    pub fn is_experiment(&self, experiment: Experiment) -> bool {
        self.experiment == experiment.as_str()
    }
}

/// Ordered, immutable collection of result rows.
///
/// Read once at startup and shared by all renderers. Row order is preserved
/// from the source file; no uniqueness or sorting is enforced.
#[derive(Debug, Clone, Default)]
pub struct ResultsTable {
    rows: Vec<ResultRow>,
}

impl ResultsTable {
    /// Build a table from already-parsed rows (used by the loader and tests).
    pub fn from_rows(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    /// All rows in file order.
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows belonging to one experiment category, in file order.
    ///
    /// Returns borrowed rows; the table is never copied or mutated by a
    /// renderer. An empty result is not an error — renderers skip it.
    pub fn filter(&self, experiment: Experiment) -> Vec<&ResultRow> {
        self.rows
            .iter()
            .filter(|row| row.is_experiment(experiment))
            .collect()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
