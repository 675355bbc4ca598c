//! dfs-report: Performance report generator for a distributed file storage system
//!
//! Renders precomputed performance-test results (latency and success-rate
//! measurements stored as rows in `results.csv`) into static charts and a
//! multi-page PDF report. This crate measures nothing itself: it reads a
//! table, filters it by experiment category, plots, and saves.
//!
//! # Pipeline
//!
//! Three stages, one pass, no state across runs:
//!
//! 1. **Loader** — reads the results file into an in-memory table
//! 2. **Filters** — selects row subsets by the `Experiment` category
//! 3. **Renderers** — one chart or table page per subset
//!
//! # Outputs
//!
//! - `graph_scalability.png` — latency vs number of concurrent clients
//! - `graph_throughput.png`  — latency vs file size (log-scale MB axis)
//! - `performance_report.pdf` — title page, both charts, full data table
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dfs_report::prelude::*;
//!
//! let table = load_results("results.csv")?;
//! plot_scalability(&table, "graph_scalability.png", None)?;
//!
//! let mut doc = ReportDocument::new("Performance Report")?;
//! append_title_page(&mut doc)?;
//! append_scalability_page(&mut doc, &table)?;
//! append_throughput_page(&mut doc, &table)?;
//! append_data_table_page(&mut doc, &table)?;
//! doc.save("performance_report.pdf")?;
//! ```
//!
//! # Modules
//!
//! - [`results`]: Results file loading and the in-memory table
//! - [`output`]: Chart rendering and PDF report assembly
//! - [`app`]: Top-level orchestration and exit-status contract

pub mod app;
pub mod output;
pub mod results;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use dfs_report::prelude::*;
    //! ```
    pub use crate::output::report::{
        append_data_table_page, append_scalability_page, append_throughput_page,
        append_title_page, ReportDocument, ReportError,
    };
    pub use crate::output::visualization::{
        plot_scalability, plot_throughput, PlotConfig, NO_TITLE,
    };
    pub use crate::results::{load_results, Experiment, LoadError, ResultRow, ResultsTable};
}
