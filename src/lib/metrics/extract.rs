//! Rows of the extract data files.

use serde::{Deserialize, Serialize};

use super::Metric;
use crate::extract_log::{MetricKey, MetricsRecord};

/// One sample's extract metrics as a data file row.
///
/// Metrics that were not found in the sample's log are written as empty cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UmiExtractMetrics {
    /// Cleaned sample name
    pub sample: String,

    /// Reads read from the input
    pub input_reads: Option<f64>,

    /// Reads written to the output
    pub output_reads: Option<f64>,

    /// Reads removed because their cell barcode was filtered
    pub filtered_reads: Option<f64>,

    /// Percentage of input reads written to the output
    pub percent_extracted_reads: Option<f64>,
}

impl UmiExtractMetrics {
    /// Builds a row from a sample's record.
    #[must_use]
    pub fn from_record(sample: &str, record: &MetricsRecord) -> Self {
        Self {
            sample: sample.to_string(),
            input_reads: record.get(MetricKey::InputReads),
            output_reads: record.get(MetricKey::OutputReads),
            filtered_reads: record.get(MetricKey::FilteredReads),
            percent_extracted_reads: record.get(MetricKey::PercentExtractedReads),
        }
    }

    /// Converts the row back into a record, dropping empty cells.
    #[must_use]
    pub fn to_record(&self) -> MetricsRecord {
        [
            (MetricKey::InputReads, self.input_reads),
            (MetricKey::OutputReads, self.output_reads),
            (MetricKey::FilteredReads, self.filtered_reads),
            (MetricKey::PercentExtractedReads, self.percent_extracted_reads),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

impl Metric for UmiExtractMetrics {
    fn metric_name() -> &'static str {
        "UMI-tools extract"
    }
}

/// Provenance of a reported sample.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    /// Reporting module that parsed the file
    pub module: String,
    /// Report section the data feeds
    pub section: String,
    /// Cleaned sample name
    pub sample_name: String,
    /// Path of the parsed log
    pub source: String,
}

impl Metric for DataSource {
    fn metric_name() -> &'static str {
        "data source"
    }
}
