//! Chart rendering for performance results
//!
//! This module draws the latency charts using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **latency**: Latency-vs-variable charts for both experiment categories
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dfs_report::output::visualization::{plot_scalability, PlotConfig};
//!
//! let table = load_results("results.csv")?;
//!
//! // Standalone image with default config
//! plot_scalability(&table, "graph_scalability.png", None)?;
//!
//! // Or with a custom title
//! let config = PlotConfig::scalability("Scalability, nightly run");
//! plot_scalability(&table, "nightly.png", Some(&config))?;
//! ```
//!
//! # Which function renders what
//!
//! | Chart | x axis | Function |
//! |-------|--------|----------|
//! | Scalability (latency vs clients) | linear, client count | `plot_scalability` |
//! | Throughput (latency vs file size) | log, megabytes | `plot_throughput` |
//! | Either, onto an existing area (PDF pages) | per config | `draw_latency_chart` |

pub mod config;
pub mod latency;

pub use config::{PlotConfig, NO_TITLE};

pub use latency::{
    draw_latency_chart, plot_scalability, plot_throughput, scalability_series,
    throughput_series, LatencySeries,
};
