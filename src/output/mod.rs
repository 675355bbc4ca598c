//! Output module for performance results
//!
//! This module produces the report artifacts in two forms:
//! - **Visualization**: standalone PNG/SVG charts using plotters
//! - **Report**: a multi-page PDF combining title page, charts and data table
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Latency charts
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── latency.rs
//! └── report/             ← Paginated PDF document
//!     ├── mod.rs
//!     ├── document.rs
//!     └── pages.rs
//! ```
//!
//! Both sub-modules render from the same [`crate::results::ResultsTable`];
//! the report's chart pages reuse the visualization renderers so standalone
//! images and PDF pages can never drift apart.

pub mod report;
pub mod visualization;

// Re-export commonly used items for convenience
pub use report::{ReportDocument, ReportError};
pub use visualization::{plot_scalability, plot_throughput, PlotConfig};
