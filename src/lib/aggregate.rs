//! Aggregation of parsed extract logs into a per-sample collection.
//!
//! [`SampleAggregator`] is the accumulator for one reporting run. Logs are fed to it one
//! at a time with [`SampleAggregator::add`], in discovery order, and the run is closed
//! with [`SampleAggregator::finish`], which applies the ignore list and fails with
//! [`UmiReportError::NoSamplesFound`] if nothing is left.
//!
//! Sample names are unique within a run. When two logs resolve to the same cleaned
//! name the later one replaces the earlier one, and the collision is recorded so that
//! callers can report it.

use std::collections::BTreeMap;

use log::{debug, info};

use crate::discovery::LogFile;
use crate::errors::{Result, UmiReportError};
use crate::extract_log::{MetricsRecord, parse_log};
use crate::metrics::DataSource;
use crate::report::MODULE_NAME;
use crate::sample_filter::SampleFilter;
use crate::sample_name::SampleNameCleaner;

/// Records with fewer entries than this carry no usable data.
pub const MIN_RECORD_ENTRIES: usize = 2;

/// Section name used for provenance entries of this module.
pub const DATA_SOURCE_SECTION: &str = "all_sections";

/// Per-sample metrics keyed by cleaned sample name, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleCollection {
    samples: BTreeMap<String, MetricsRecord>,
}

impl SampleCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` under `sample`, returning the record it replaced, if any.
    pub fn insert(&mut self, sample: String, record: MetricsRecord) -> Option<MetricsRecord> {
        self.samples.insert(sample, record)
    }

    /// Returns the record for `sample`.
    #[must_use]
    pub fn get(&self, sample: &str) -> Option<&MetricsRecord> {
        self.samples.get(sample)
    }

    /// Returns true if `sample` is present.
    #[must_use]
    pub fn contains(&self, sample: &str) -> bool {
        self.samples.contains_key(sample)
    }

    /// Keeps only the samples for which `keep` returns true.
    pub fn retain<F: FnMut(&str) -> bool>(&mut self, mut keep: F) {
        self.samples.retain(|name, _| keep(name));
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterates over samples and their records in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricsRecord)> {
        self.samples.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Iterates over sample names in order.
    pub fn sample_names(&self) -> impl Iterator<Item = &str> {
        self.samples.keys().map(String::as_str)
    }
}

impl FromIterator<(String, MetricsRecord)> for SampleCollection {
    fn from_iter<I: IntoIterator<Item = (String, MetricsRecord)>>(iter: I) -> Self {
        Self { samples: iter.into_iter().collect() }
    }
}

/// What happened to a single log handed to the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Not an extract log
    Foreign,
    /// Recognised, but fewer than [`MIN_RECORD_ENTRIES`] metrics were found
    Sparse,
    /// Added as a new sample
    Added(String),
    /// Replaced an existing sample of the same name
    Duplicate(String),
}

/// Counts of file outcomes over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationCounts {
    /// Logs handed to the aggregator
    pub files_seen: usize,
    /// Logs that were not extract logs
    pub foreign: usize,
    /// Extract logs without usable data
    pub sparse: usize,
    /// Logs stored under a new sample name
    pub added: usize,
    /// Logs that overwrote an existing sample
    pub duplicates: usize,
    /// Samples removed by the ignore list
    pub ignored: usize,
}

/// The finished result of a run.
#[derive(Debug, Clone)]
pub struct ExtractSummary {
    /// Reported samples
    pub samples: SampleCollection,
    /// Source log of each reported sample, in sample order
    pub sources: Vec<DataSource>,
    /// Sample names that were overwritten, once per collision, in the order seen
    pub duplicates: Vec<String>,
    /// Outcome counts
    pub counts: AggregationCounts,
}

/// Accumulates extract logs into a [`SampleCollection`].
pub struct SampleAggregator<C: SampleNameCleaner> {
    cleaner: C,
    samples: SampleCollection,
    sources: BTreeMap<String, DataSource>,
    duplicates: Vec<String>,
    counts: AggregationCounts,
}

impl<C: SampleNameCleaner> SampleAggregator<C> {
    /// Creates an empty aggregator that cleans names with `cleaner`.
    pub fn new(cleaner: C) -> Self {
        Self {
            cleaner,
            samples: SampleCollection::new(),
            sources: BTreeMap::new(),
            duplicates: Vec::new(),
            counts: AggregationCounts::default(),
        }
    }

    /// Parses one log and folds it into the collection.
    pub fn add(&mut self, file: &LogFile) -> FileOutcome {
        self.counts.files_seen += 1;

        let Some(parsed) = parse_log(&file.content, &file.sample_name_hint) else {
            debug!("Skipping as not an extract log: {}", file.file_name);
            self.counts.foreign += 1;
            return FileOutcome::Foreign;
        };

        if parsed.metrics.len() < MIN_RECORD_ENTRIES {
            debug!(
                "Skipping extract log with {} metric(s) found: {}",
                parsed.metrics.len(),
                file.file_name
            );
            self.counts.sparse += 1;
            return FileOutcome::Sparse;
        }

        let sample = self.cleaner.clean(&parsed.sample_name, file);
        let replaced = self.samples.insert(sample.clone(), parsed.metrics).is_some();
        self.sources.insert(
            sample.clone(),
            DataSource {
                module: MODULE_NAME.to_string(),
                section: DATA_SOURCE_SECTION.to_string(),
                sample_name: sample.clone(),
                source: file.path.display().to_string(),
            },
        );

        if replaced {
            debug!("Duplicate sample name found! Overwriting: {sample}");
            self.duplicates.push(sample.clone());
            self.counts.duplicates += 1;
            FileOutcome::Duplicate(sample)
        } else {
            self.counts.added += 1;
            FileOutcome::Added(sample)
        }
    }

    /// Adds every log in `files`, in order.
    pub fn add_all<'a, I: IntoIterator<Item = &'a LogFile>>(&mut self, files: I) {
        for file in files {
            self.add(file);
        }
    }

    /// The collection as accumulated so far, before any ignore list is applied.
    #[must_use]
    pub fn samples(&self) -> &SampleCollection {
        &self.samples
    }

    /// Sample names overwritten so far.
    #[must_use]
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    /// Outcome counts so far.
    #[must_use]
    pub fn counts(&self) -> AggregationCounts {
        self.counts
    }

    /// Applies `filter` and closes the run.
    ///
    /// # Errors
    ///
    /// Returns [`UmiReportError::NoSamplesFound`] if no samples remain.
    pub fn finish(self, filter: &dyn SampleFilter) -> Result<ExtractSummary> {
        let Self { samples, mut sources, duplicates, mut counts, .. } = self;

        let before = samples.len();
        let samples = filter.filter(samples);
        counts.ignored = before.saturating_sub(samples.len());

        if samples.is_empty() {
            return Err(UmiReportError::NoSamplesFound {
                module: MODULE_NAME.to_string(),
                files_seen: counts.files_seen,
            });
        }

        sources.retain(|name, _| samples.contains(name));
        info!("Found {} reports", samples.len());

        Ok(ExtractSummary { samples, sources: sources.into_values().collect(), duplicates, counts })
    }
}
