//! Top-level pipeline orchestration
//!
//! Fixed sequence, single pass: load the results table, write the two
//! standalone chart images, then assemble and save the PDF report (title
//! page, scalability chart, throughput chart, data table).
//!
//! # Exit status contract
//!
//! A missing input file is the only fatal condition: it is reported and the
//! process exits with status 1. Every other failure during loading or
//! rendering is logged and the process still exits 0, so a partially usable
//! report run never breaks surrounding scripts.

use std::error::Error;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::output::report::{
    append_data_table_page, append_scalability_page, append_throughput_page, append_title_page,
    ReportDocument,
};
use crate::output::visualization::{plot_scalability, plot_throughput};
use crate::results::{load_results, LoadError, ResultsTable};

/// Fixed input file name, expected in the working directory.
pub const INPUT_FILE: &str = "results.csv";

/// Fixed output file names.
pub const SCALABILITY_IMAGE: &str = "graph_scalability.png";
pub const THROUGHPUT_IMAGE: &str = "graph_throughput.png";
pub const REPORT_FILE: &str = "performance_report.pdf";

/// Input and output locations for one pipeline run.
///
/// The binary always uses [`ReportPaths::default`] (the fixed names in the
/// working directory); tests point a run at a temp directory via
/// [`ReportPaths::in_dir`].
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// Source results table (CSV).
    pub input: PathBuf,

    /// Standalone scalability chart image.
    pub scalability_image: PathBuf,

    /// Standalone throughput chart image.
    pub throughput_image: PathBuf,

    /// Multi-page PDF report.
    pub report: PathBuf,
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self {
            input: PathBuf::from(INPUT_FILE),
            scalability_image: PathBuf::from(SCALABILITY_IMAGE),
            throughput_image: PathBuf::from(THROUGHPUT_IMAGE),
            report: PathBuf::from(REPORT_FILE),
        }
    }
}

impl ReportPaths {
    /// The fixed file names, rooted in `dir` instead of the working directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            input: dir.join(INPUT_FILE),
            scalability_image: dir.join(SCALABILITY_IMAGE),
            throughput_image: dir.join(THROUGHPUT_IMAGE),
            report: dir.join(REPORT_FILE),
        }
    }
}

/// Run the full pipeline with the fixed working-directory paths.
///
/// Returns the process exit code: 1 when `results.csv` is missing,
/// 0 otherwise.
pub fn run() -> i32 {
    run_with_paths(&ReportPaths::default())
}

/// Run the full pipeline against explicit paths.
pub fn run_with_paths(paths: &ReportPaths) -> i32 {
    let table = match load_results(&paths.input) {
        Ok(table) => table,
        Err(err @ LoadError::Missing(_)) => {
            error!("{err}");
            return 1;
        }
        Err(err) => {
            error!("an error occurred: {err}");
            return 0;
        }
    };

    info!("loaded {} result rows from {}", table.len(), paths.input.display());

    if let Err(err) = render_all(&table, paths) {
        error!("an error occurred: {err}");
    }

    0
}

/// Render the standalone images, then the PDF report.
///
/// The PDF is assembled fully in memory and written in one pass at the end,
/// so an error here leaves no partial report on disk.
fn render_all(table: &ResultsTable, paths: &ReportPaths) -> Result<(), Box<dyn Error>> {
    plot_scalability(table, path_str(&paths.scalability_image)?, None)?;
    plot_throughput(table, path_str(&paths.throughput_image)?, None)?;

    let mut doc = ReportDocument::new("Distributed File Storage Performance Report")?;
    append_title_page(&mut doc)?;
    append_scalability_page(&mut doc, table)?;
    append_throughput_page(&mut doc, table)?;
    append_data_table_page(&mut doc, table)?;
    doc.save(&paths.report)?;

    info!("generated {}", paths.report.display());
    Ok(())
}

fn path_str(path: &Path) -> Result<&str, Box<dyn Error>> {
    path.to_str()
        .ok_or_else(|| format!("non-UTF-8 output path: {}", path.display()).into())
}

// =================================================================================================
// Tests
// =================================================================================================
