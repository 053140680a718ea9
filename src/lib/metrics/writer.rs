//! Utilities for reading and writing TSV data files.
//!
//! The data file holds one row per reported sample; the sources file records which log
//! each sample came from. Both are plain tab-separated tables with a header line.

use anyhow::{Context, Result};
use fgoxide::io::DelimFile;
use std::path::Path;

use super::{DataSource, Metric, UmiExtractMetrics};
use crate::aggregate::SampleCollection;

/// Write rows to a TSV file.
///
/// # Arguments
/// * `path` - Path to the output TSV file
/// * `rows` - The rows to write
///
/// # Errors
/// Returns an error naming the row type and path if the file cannot be written
///
/// # Example
/// ```no_run
/// use umireport_lib::metrics::DataSource;
/// use umireport_lib::metrics::writer::write_metrics;
///
/// let rows = vec![DataSource::default()];
/// write_metrics("sources.txt", &rows).unwrap();
/// ```
pub fn write_metrics<P: AsRef<Path>, T: Metric>(path: P, rows: &[T]) -> Result<()> {
    let path_ref = path.as_ref();
    DelimFile::default().write_tsv(&path_ref, rows).with_context(|| {
        format!("Failed to write {} data file: {}", T::metric_name(), path_ref.display())
    })
}

/// Write a sample collection as a TSV data file, one row per sample in name order.
///
/// # Errors
/// Returns an error if the file cannot be created or written to
pub fn write_data_file<P: AsRef<Path>>(path: P, samples: &SampleCollection) -> Result<()> {
    let rows: Vec<UmiExtractMetrics> = samples
        .iter()
        .map(|(name, record)| UmiExtractMetrics::from_record(name, record))
        .collect();
    write_metrics(path, &rows)
}

/// Read a TSV data file written by [`write_data_file`].
///
/// # Errors
/// Returns an error if the file cannot be read or a row cannot be parsed
pub fn read_data_file<P: AsRef<Path>>(path: P) -> Result<SampleCollection> {
    let path_ref = path.as_ref();
    let rows: Vec<UmiExtractMetrics> = DelimFile::default()
        .read_tsv(&path_ref)
        .with_context(|| format!("Failed to read data file: {}", path_ref.display()))?;
    Ok(rows.into_iter().map(|row| (row.sample.clone(), row.to_record())).collect())
}

/// Write the provenance of each reported sample.
///
/// # Errors
/// Returns an error if the file cannot be created or written to
pub fn write_sources<P: AsRef<Path>>(path: P, sources: &[DataSource]) -> Result<()> {
    write_metrics(path, sources)
}
