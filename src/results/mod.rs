//! Results loading and in-memory representation
//!
//! This module owns the first stage of the pipeline: reading the tabular
//! results file into an immutable [`ResultsTable`] and selecting subsets by
//! experiment category.
//!
//! # Organization
//!
//! - **table**: row/table types and category filtering
//! - **loader**: CSV parsing and the missing-file contract
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dfs_report::results::{load_results, Experiment};
//!
//! let table = load_results("results.csv")?;
//! let scalability = table.filter(Experiment::Scalability);
//! ```

pub mod loader;
pub mod table;

pub use loader::{load_results, LoadError};
pub use table::{Experiment, ResultRow, ResultsTable, BYTES_PER_MEGABYTE};
