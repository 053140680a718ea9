//! Tests of the files written for a finished run.

use tempfile::TempDir;
use umireport_lib::aggregate::{ExtractSummary, SampleAggregator};
use umireport_lib::discovery::LogFile;
use umireport_lib::metrics::{read_data_file, write_data_file, write_sources};
use umireport_lib::report::ModuleReport;
use umireport_lib::sample_filter::NoFilter;
use umireport_lib::sample_name::ExtensionCleaner;
use umireport_lib::MetricKey;

use crate::helpers::ExtractLogBuilder;

fn summary() -> ExtractSummary {
    let logs = [
        ExtractLogBuilder::new()
            .input_name("S1.bam")
            .input_reads(1000)
            .output_reads(900)
            .filtered_reads(100),
        ExtractLogBuilder::new().input_name("S2.bam").input_reads(0).output_reads(0),
        ExtractLogBuilder::new().input_name("S3.bam").input_reads(3).output_reads(2),
    ];
    let mut aggregator = SampleAggregator::new(ExtensionCleaner::default());
    for (i, builder) in logs.iter().enumerate() {
        aggregator.add(&LogFile::new(format!("{i}.log"), i.to_string(), builder.build()));
    }
    aggregator.finish(&NoFilter).unwrap()
}

#[test]
fn test_data_file_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("multiqc_umitools.txt");
    let summary = summary();

    write_data_file(&path, &summary.samples).unwrap();
    let read = read_data_file(&path).unwrap();

    assert_eq!(read, summary.samples);
    assert_eq!(read.get("S3").unwrap().get(MetricKey::PercentExtractedReads), Some(66.67));
    assert!(!read.get("S2").unwrap().contains(MetricKey::PercentExtractedReads));
}

#[test]
fn test_sources_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sources.txt");
    write_sources(&path, &summary().sources).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines[0], "module\tsection\tsample_name\tsource");
    assert_eq!(lines[1], "UMI-tools extract\tall_sections\tS1\t0.log");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_report_contribution() {
    let report = ModuleReport::build(&summary());

    let stats = &report.general_stats;
    assert_eq!(stats.data.len(), 2);
    assert_eq!(stats.data["S1"][&MetricKey::PercentExtractedReads], 90.0);
    assert!(!stats.data.contains_key("S2"));

    let plot = &report.sections[0].plot;
    assert_eq!(plot.config.title, "UMI-tools: Extraction Counts");
    assert_eq!(plot.data["S1"][&MetricKey::OutputReads], 900.0);
    assert_eq!(plot.data["S1"][&MetricKey::FilteredReads], 100.0);
    assert_eq!(plot.data["S2"][&MetricKey::OutputReads], 0.0);
    assert!(!plot.data["S3"].contains_key(&MetricKey::FilteredReads));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    report.write_json(&path).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["module"]["anchor"], "umitools_extract");
    assert_eq!(json["general_stats"]["headers"]["percent_extracted_reads"]["suffix"], "%");
    assert_eq!(json["sections"][0]["plot"]["categories"][1]["key"], "filtered_reads");
}
