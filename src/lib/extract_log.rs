//! Recognition and parsing of UMI-tools `extract` logs.
//!
//! A log is recognised by the header line that `umi_tools extract` writes at the top of
//! every log. Counters are pulled out of the `INFO` lines the tool emits at the end of a
//! run, and the sample name is taken from the input file handle the tool echoes into
//! its option dump.
//!
//! Every counter is optional: a log from an interrupted run, or from a version of the
//! tool that does not print a given counter, simply yields a smaller [`MetricsRecord`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Header line written by `umi_tools extract` at the top of its log.
pub const EXTRACT_LOG_MARKER: &str = "# output generated by extract";

/// Matches the echoed input handle, e.g.
/// `stdin : <_io.TextIOWrapper name='sample.bam' mode='r' encoding='UTF-8'>`.
static SAMPLE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"stdin\s+:\s+<_io\.TextIOWrapper name='([^']+)'").unwrap()
});

/// Counter patterns, one per extracted key.
static FIELD_PATTERNS: LazyLock<Vec<(MetricKey, Regex)>> = LazyLock::new(|| {
    vec![
        (MetricKey::InputReads, Regex::new(r"INFO Input Reads: (\d+)").unwrap()),
        (MetricKey::OutputReads, Regex::new(r"INFO Reads output: (\d+)").unwrap()),
        (MetricKey::FilteredReads, Regex::new(r"INFO Filtered cell barcode: (\d+)").unwrap()),
    ]
});

/// The fixed set of metrics reported for an extract log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    /// Reads read from the input
    InputReads,
    /// Reads written to the output
    OutputReads,
    /// Reads removed because their cell barcode was filtered
    FilteredReads,
    /// `output_reads / input_reads * 100`, rounded to two decimals
    PercentExtractedReads,
}

impl MetricKey {
    /// All keys, in column order.
    pub const ALL: [MetricKey; 4] = [
        MetricKey::InputReads,
        MetricKey::OutputReads,
        MetricKey::FilteredReads,
        MetricKey::PercentExtractedReads,
    ];

    /// The key as it appears in data files and report JSON.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InputReads => "input_reads",
            Self::OutputReads => "output_reads",
            Self::FilteredReads => "filtered_reads",
            Self::PercentExtractedReads => "percent_extracted_reads",
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metrics parsed from a single log. Absent keys were not found in the log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsRecord(BTreeMap<MetricKey, f64>);

impl MetricsRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: MetricKey) -> Option<f64> {
        self.0.get(&key).copied()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: MetricKey, value: f64) {
        self.0.insert(key, value);
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains(&self, key: MetricKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Number of keys present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no keys are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over present keys and values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (MetricKey, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

impl FromIterator<(MetricKey, f64)> for MetricsRecord {
    fn from_iter<I: IntoIterator<Item = (MetricKey, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Returns true if `text` is a UMI-tools extract log.
///
/// The check is an exact, case-sensitive substring match on [`EXTRACT_LOG_MARKER`].
#[must_use]
pub fn is_recognized(text: &str) -> bool {
    text.contains(EXTRACT_LOG_MARKER)
}

/// Resolves the sample name for a log.
///
/// Prefers the input file name echoed in the log's option dump; falls back to
/// `fallback` (usually derived from the log's own file name) when there is none.
/// The embedded name is returned verbatim, without cleaning.
///
/// # Examples
///
/// ```
/// use umireport_lib::extract_log::resolve_sample_name;
///
/// let log = "# stdin : <_io.TextIOWrapper name='S1.bam' mode='r' encoding='UTF-8'>";
/// assert_eq!(resolve_sample_name(log, "fallback"), "S1.bam");
/// assert_eq!(resolve_sample_name("no handle here", "fallback"), "fallback");
/// ```
#[must_use]
pub fn resolve_sample_name(text: &str, fallback: &str) -> String {
    SAMPLE_NAME_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| fallback.to_string(), |m| m.as_str().to_string())
}

/// Extracts the raw counters from a log.
///
/// Each counter is searched for independently and only its first occurrence is used.
/// Counters that are not found are left out of the record.
#[must_use]
pub fn extract_fields(text: &str) -> MetricsRecord {
    FIELD_PATTERNS
        .iter()
        .filter_map(|(key, re)| {
            let caps = re.captures(text)?;
            let value = caps.get(1)?.as_str().parse::<f64>().ok()?;
            Some((*key, value))
        })
        .collect()
}

/// Rounds to two decimal places, ties to even on the exact binary value.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Adds the derived metrics to `record`.
///
/// `percent_extracted_reads` requires both `output_reads` and a non-zero `input_reads`;
/// otherwise it is left absent.
pub fn augment(record: &mut MetricsRecord) {
    if let (Some(output), Some(input)) =
        (record.get(MetricKey::OutputReads), record.get(MetricKey::InputReads))
    {
        if input != 0.0 {
            record.insert(MetricKey::PercentExtractedReads, round2(output / input * 100.0));
        }
    }
}

/// The result of parsing one recognised log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedLog {
    /// Sample name before cleaning
    pub sample_name: String,
    /// Counters plus derived metrics
    pub metrics: MetricsRecord,
}

/// Runs classification, name resolution, extraction and derivation on one log.
///
/// Returns `None` if the text is not an extract log.
#[must_use]
pub fn parse_log(text: &str, fallback_name: &str) -> Option<ParsedLog> {
    if !is_recognized(text) {
        return None;
    }
    let sample_name = resolve_sample_name(text, fallback_name);
    let mut metrics = extract_fields(text);
    augment(&mut metrics);
    Some(ParsedLog { sample_name, metrics })
}
