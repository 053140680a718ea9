//! Error path integration tests.
//!
//! These tests verify that per-file problems are absorbed and that only an empty
//! result is reported as a failure.

use tempfile::TempDir;
use umireport_lib::aggregate::SampleAggregator;
use umireport_lib::discovery::{DiscoveryOptions, LogFile, discover_logs};
use umireport_lib::sample_filter::NoFilter;
use umireport_lib::sample_name::ExtensionCleaner;
use umireport_lib::UmiReportError;

use crate::helpers::ExtractLogBuilder;

#[test]
fn test_no_recognised_logs() {
    let dir = TempDir::new().unwrap();
    ExtractLogBuilder::new()
        .input_name("S1.bam")
        .input_reads(10)
        .output_reads(5)
        .without_marker()
        .write_to(dir.path(), "dedup.log");

    let cleaner = ExtensionCleaner::default();
    let logs = discover_logs(&[dir.path()], &DiscoveryOptions::default(), &cleaner).unwrap();
    let mut aggregator = SampleAggregator::new(cleaner);
    aggregator.add_all(&logs);

    match aggregator.finish(&NoFilter) {
        Err(UmiReportError::NoSamplesFound { files_seen, .. }) => assert_eq!(files_seen, 1),
        other => panic!("expected NoSamplesFound, got {other:?}"),
    }
}

#[test]
fn test_empty_directory() {
    let dir = TempDir::new().unwrap();
    let cleaner = ExtensionCleaner::default();
    let logs = discover_logs(&[dir.path()], &DiscoveryOptions::default(), &cleaner).unwrap();
    assert!(logs.is_empty());

    let err = SampleAggregator::new(cleaner).finish(&NoFilter).unwrap_err();
    assert!(err.is_no_samples());
}

#[test]
fn test_marker_must_match_exactly() {
    let mut aggregator = SampleAggregator::new(ExtensionCleaner::default());
    let text = "# OUTPUT GENERATED BY EXTRACT\nINFO Input Reads: 10\nINFO Reads output: 5\n";
    aggregator.add(&LogFile::new("S1.log", "S1", text.to_string()));
    assert!(aggregator.finish(&NoFilter).is_err());
}

#[test]
fn test_malformed_counters_are_absent() {
    let mut aggregator = SampleAggregator::new(ExtensionCleaner::default());
    let text = "# output generated by extract\n\
                INFO Input Reads: many\n\
                INFO Reads output: 5\n\
                INFO Filtered cell barcode: 2\n";
    aggregator.add(&LogFile::new("S1.log", "S1", text.to_string()));
    let summary = aggregator.finish(&NoFilter).unwrap();
    let record = summary.samples.get("S1").unwrap();
    assert_eq!(record.len(), 2);
    assert_eq!(record.get(umireport_lib::MetricKey::InputReads), None);
}

#[test]
fn test_missing_input_path() {
    let result = discover_logs(
        &["/nonexistent/dir"],
        &DiscoveryOptions::default(),
        &ExtensionCleaner::default(),
    );
    let msg = result.unwrap_err().to_string();
    assert!(msg.contains("does not exist"));
}
