//! Logging utilities for formatted output.
//!
//! This module provides consistent, user-friendly formatting for counts, percentages
//! and durations, plus summary logging for a finished extract run.

use std::time::{Duration, Instant};

use crate::aggregate::ExtractSummary;
use crate::extract_log::MetricKey;

/// Formats a count with thousands separators (e.g., "1,234,567").
///
/// # Examples
///
/// ```
/// use umireport_lib::logging::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a percentage value (already scaled to 0-100) with specified decimal places.
///
/// # Examples
///
/// ```
/// use umireport_lib::logging::format_percent;
///
/// assert_eq!(format_percent(95.431, 2), "95.43%");
/// assert_eq!(format_percent(100.0, 0), "100%");
/// ```
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// Formats a duration in human-readable form (e.g., "45s", "2m 15s", "1h 30m").
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        if remaining_secs == 0 { format!("{mins}m") } else { format!("{mins}m {remaining_secs}s") }
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        if mins == 0 { format!("{hours}h") } else { format!("{hours}h {mins}m") }
    }
}

/// Logs a summary of a finished extract run.
///
/// Outputs how many candidate files were examined and what happened to them, then
/// one line per reported sample.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn log_extract_summary(summary: &ExtractSummary) {
    let counts = &summary.counts;
    log::info!("UMI-tools extract Summary:");
    log::info!("  Files examined: {}", format_count(counts.files_seen as u64));
    log::info!("  Not extract logs: {}", format_count(counts.foreign as u64));
    log::info!("  Extract logs without data: {}", format_count(counts.sparse as u64));
    log::info!("  Samples reported: {}", format_count(summary.samples.len() as u64));

    if counts.duplicates > 0 {
        log::info!(
            "  Duplicate sample names overwritten: {} ({})",
            counts.duplicates,
            summary.duplicates.join(", ")
        );
    }
    if counts.ignored > 0 {
        log::info!("  Samples ignored: {}", counts.ignored);
    }

    let count_of = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format_count(v as u64));
    for (name, record) in summary.samples.iter() {
        let input = count_of(record.get(MetricKey::InputReads));
        let output = count_of(record.get(MetricKey::OutputReads));
        let pct = record
            .get(MetricKey::PercentExtractedReads)
            .map_or("-".to_string(), |v| format_percent(v, 2));
        log::info!("    {name}: {input} in, {output} out ({pct})");
    }
}

/// Operation timing and summary helper.
///
/// # Examples
///
/// ```no_run
/// use umireport_lib::logging::OperationTimer;
///
/// let timer = OperationTimer::new("Parsing logs");
///
/// // ... do work ...
///
/// timer.log_completion(42);
/// ```
pub struct OperationTimer {
    operation: String,
    start_time: Instant,
}

impl OperationTimer {
    /// Creates a new operation timer and logs the start.
    #[must_use]
    pub fn new(operation: &str) -> Self {
        log::info!("{operation} ...");
        Self { operation: operation.to_string(), start_time: Instant::now() }
    }

    /// Logs the completion with an item count.
    pub fn log_completion(&self, count: u64) {
        log::info!(
            "{} completed: {} files in {}",
            self.operation,
            format_count(count),
            format_duration(self.start_time.elapsed())
        );
    }
}
