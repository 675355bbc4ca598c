//! Multi-page PDF report
//!
//! # Organization
//!
//! - **document**: `ReportDocument`, the paginated PDF wrapper
//! - **pages**: the report's page content (title, charts, data table)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dfs_report::output::report::{
//!     append_data_table_page, append_scalability_page, append_throughput_page,
//!     append_title_page, ReportDocument,
//! };
//!
//! let mut doc = ReportDocument::new("Performance Report")?;
//! append_title_page(&mut doc)?;
//! append_scalability_page(&mut doc, &table)?;
//! append_throughput_page(&mut doc, &table)?;
//! append_data_table_page(&mut doc, &table)?;
//! doc.save("performance_report.pdf")?;
//! ```

pub mod document;
pub mod pages;

pub use document::{ReportDocument, ReportError};
pub use pages::{
    append_data_table_page, append_scalability_page, append_throughput_page, append_title_page,
    REPORT_TITLE_LINES, TABLE_COLUMNS, TABLE_TITLE,
};
