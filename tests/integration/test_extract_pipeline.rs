//! End-to-end tests of discovery, parsing and aggregation.

use tempfile::TempDir;
use umireport_lib::aggregate::{FileOutcome, SampleAggregator};
use umireport_lib::discovery::{DiscoveryOptions, discover_logs};
use umireport_lib::sample_filter::{IgnoreSamples, NoFilter};
use umireport_lib::sample_name::ExtensionCleaner;
use umireport_lib::MetricKey;

use crate::helpers::ExtractLogBuilder;

#[test]
fn test_mixed_directory() {
    let dir = TempDir::new().unwrap();
    ExtractLogBuilder::new()
        .input_name("sampleA.bam")
        .input_reads(1000)
        .output_reads(900)
        .write_to(dir.path(), "logs/sampleA.extract.log");
    ExtractLogBuilder::new()
        .input_name("/data/fastq/sampleB_R1.fastq.gz")
        .input_reads(200)
        .output_reads(150)
        .filtered_reads(50)
        .write_to(dir.path(), "logs/sampleB.extract.log");
    ExtractLogBuilder::new()
        .input_name("sampleC.bam")
        .input_reads(10)
        .output_reads(5)
        .without_marker()
        .write_to(dir.path(), "logs/sampleC.dedup.log");
    std::fs::write(dir.path().join("README.md"), "# not a log").unwrap();

    let cleaner = ExtensionCleaner::default();
    let logs = discover_logs(&[dir.path()], &DiscoveryOptions::default(), &cleaner).unwrap();
    assert_eq!(logs.len(), 4);

    let mut aggregator = SampleAggregator::new(cleaner);
    let outcomes: Vec<_> = logs.iter().map(|l| aggregator.add(l)).collect();
    assert_eq!(
        outcomes,
        vec![
            FileOutcome::Foreign,
            FileOutcome::Added("sampleA".to_string()),
            FileOutcome::Added("sampleB_R1".to_string()),
            FileOutcome::Foreign,
        ]
    );

    let summary = aggregator.finish(&NoFilter).unwrap();
    assert_eq!(summary.samples.len(), 2);

    let a = summary.samples.get("sampleA").unwrap();
    assert_eq!(a.len(), 3);
    assert_eq!(a.get(MetricKey::InputReads), Some(1000.0));
    assert_eq!(a.get(MetricKey::OutputReads), Some(900.0));
    assert_eq!(a.get(MetricKey::PercentExtractedReads), Some(90.0));

    let b = summary.samples.get("sampleB_R1").unwrap();
    assert_eq!(b.len(), 4);
    assert_eq!(b.get(MetricKey::FilteredReads), Some(50.0));
    assert_eq!(b.get(MetricKey::PercentExtractedReads), Some(75.0));

    assert!(summary.sources[0].source.ends_with("sampleA.extract.log"));
    assert!(summary.sources[1].source.ends_with("sampleB.extract.log"));
}

#[test]
fn test_duplicates_follow_discovery_order() {
    let dir = TempDir::new().unwrap();
    ExtractLogBuilder::new()
        .input_name("S1.bam")
        .input_reads(100)
        .output_reads(10)
        .write_to(dir.path(), "a/run1.log");
    ExtractLogBuilder::new()
        .input_name("S1.fastq.gz")
        .input_reads(100)
        .output_reads(20)
        .write_to(dir.path(), "b/run2.log");

    let cleaner = ExtensionCleaner::default();
    let logs = discover_logs(&[dir.path()], &DiscoveryOptions::default(), &cleaner).unwrap();
    let mut aggregator = SampleAggregator::new(cleaner);
    aggregator.add_all(&logs);
    let summary = aggregator.finish(&NoFilter).unwrap();

    assert_eq!(summary.samples.len(), 1);
    assert_eq!(summary.duplicates, vec!["S1".to_string()]);
    assert_eq!(
        summary.samples.get("S1").unwrap().get(MetricKey::PercentExtractedReads),
        Some(20.0)
    );
    assert!(summary.sources[0].source.ends_with("run2.log"));
}

#[test]
fn test_name_falls_back_to_log_file_name() {
    let dir = TempDir::new().unwrap();
    ExtractLogBuilder::new()
        .input_reads(100)
        .output_reads(50)
        .write_to(dir.path(), "S7_umi_extract.log");

    let cleaner = ExtensionCleaner::default();
    let logs = discover_logs(&[dir.path()], &DiscoveryOptions::default(), &cleaner).unwrap();
    let mut aggregator = SampleAggregator::new(cleaner);
    aggregator.add_all(&logs);
    let summary = aggregator.finish(&NoFilter).unwrap();
    assert_eq!(summary.samples.sample_names().collect::<Vec<_>>(), vec!["S7"]);
}

#[test]
fn test_sparse_logs_are_dropped() {
    let dir = TempDir::new().unwrap();
    ExtractLogBuilder::new().input_name("S1.bam").input_reads(100).write_to(dir.path(), "s1.log");
    ExtractLogBuilder::new()
        .input_name("S2.bam")
        .output_reads(5)
        .filtered_reads(1)
        .write_to(dir.path(), "s2.log");

    let cleaner = ExtensionCleaner::default();
    let logs = discover_logs(&[dir.path()], &DiscoveryOptions::default(), &cleaner).unwrap();
    let mut aggregator = SampleAggregator::new(cleaner);
    aggregator.add_all(&logs);
    assert_eq!(aggregator.counts().sparse, 1);

    let summary = aggregator.finish(&NoFilter).unwrap();
    let s2 = summary.samples.get("S2").unwrap();
    assert_eq!(s2.len(), 2);
    assert!(!s2.contains(MetricKey::PercentExtractedReads));
}

#[test]
fn test_ignore_list() {
    let dir = TempDir::new().unwrap();
    for name in ["S1", "S2", "Undetermined"] {
        ExtractLogBuilder::new()
            .input_name(&format!("{name}.bam"))
            .input_reads(10)
            .output_reads(9)
            .write_to(dir.path(), &format!("{name}.log"));
    }

    let cleaner = ExtensionCleaner::default();
    let logs = discover_logs(&[dir.path()], &DiscoveryOptions::default(), &cleaner).unwrap();
    let mut aggregator = SampleAggregator::new(cleaner);
    aggregator.add_all(&logs);
    let filter = IgnoreSamples::new(&["Undetermined", "S2*"]).unwrap();
    let summary = aggregator.finish(&filter).unwrap();

    assert_eq!(summary.samples.sample_names().collect::<Vec<_>>(), vec!["S1"]);
    assert_eq!(summary.sources.len(), 1);
    assert_eq!(summary.counts.ignored, 2);
}
