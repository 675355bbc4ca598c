//! End-to-end pipeline tests
//!
//! Exercise the full load → plot → report sequence against temp
//! directories, checking the output-file and exit-status contract.

mod common;

use std::fs;

use dfs_report::app::{run_with_paths, ReportPaths};
use dfs_report::output::report::{
    append_data_table_page, append_scalability_page, append_throughput_page, append_title_page,
    ReportDocument,
};

use common::{sample_table, write_full_results_csv, write_single_category_csv};

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
const PDF_MAGIC: &[u8] = b"%PDF";

#[test]
fn full_run_produces_three_output_files() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ReportPaths::in_dir(dir.path());
    write_full_results_csv(&paths.input);

    let code = run_with_paths(&paths);
    assert_eq!(code, 0);

    let scalability = fs::read(&paths.scalability_image).unwrap();
    let throughput = fs::read(&paths.throughput_image).unwrap();
    let report = fs::read(&paths.report).unwrap();

    assert!(scalability.starts_with(PNG_MAGIC));
    assert!(throughput.starts_with(PNG_MAGIC));
    assert!(report.starts_with(PDF_MAGIC));
}

#[test]
fn missing_results_file_exits_one_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ReportPaths::in_dir(dir.path());

    let code = run_with_paths(&paths);
    assert_eq!(code, 1);

    assert!(!paths.scalability_image.exists());
    assert!(!paths.throughput_image.exists());
    assert!(!paths.report.exists());
}

#[test]
fn scalability_only_input_skips_throughput_image() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ReportPaths::in_dir(dir.path());
    write_single_category_csv(&paths.input, "Scalability", 10.0);

    let code = run_with_paths(&paths);
    assert_eq!(code, 0);

    assert!(paths.scalability_image.exists());
    assert!(!paths.throughput_image.exists());
    // The report is still written: title page, one chart, data table
    assert!(paths.report.exists());
}

#[test]
fn throughput_only_input_skips_scalability_image() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ReportPaths::in_dir(dir.path());
    write_single_category_csv(&paths.input, "Throughput", 1_048_576.0);

    let code = run_with_paths(&paths);
    assert_eq!(code, 0);

    assert!(!paths.scalability_image.exists());
    assert!(paths.throughput_image.exists());
    assert!(paths.report.exists());
}

#[test]
fn malformed_results_file_is_logged_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ReportPaths::in_dir(dir.path());
    fs::write(&paths.input, "Experiment,Value\nScalability,oops\n").unwrap();

    let code = run_with_paths(&paths);
    assert_eq!(code, 0);

    assert!(!paths.report.exists());
}

#[test]
fn report_document_matches_page_sequence() {
    // Same sequence the pipeline runs: title, scalability, throughput, table
    let table = sample_table();
    let mut doc = ReportDocument::new("test").unwrap();

    append_title_page(&mut doc).unwrap();
    assert!(append_scalability_page(&mut doc, &table).unwrap());
    assert!(append_throughput_page(&mut doc, &table).unwrap());
    append_data_table_page(&mut doc, &table).unwrap();

    assert_eq!(doc.page_count(), 4);
}

#[test]
fn rerun_overwrites_previous_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ReportPaths::in_dir(dir.path());
    write_full_results_csv(&paths.input);

    assert_eq!(run_with_paths(&paths), 0);
    let first = fs::metadata(&paths.report).unwrap().len();

    assert_eq!(run_with_paths(&paths), 0);
    let second = fs::metadata(&paths.report).unwrap().len();

    // Same input, same pipeline: the report is rewritten, not appended to
    assert!(second > 0);
    assert!(first > 0);
}
