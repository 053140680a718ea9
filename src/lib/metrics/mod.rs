//! Metric row types and data file writing.
//!
//! - [`extract`] - Per-sample extract metrics and data source rows
//! - [`writer`] - TSV data file I/O utilities
//!
//! # Traits
//!
//! - [`Metric`] - Core trait for rows written to TSV data files

pub mod extract;
pub mod writer;

use serde::{Deserialize, Serialize};

/// A row type that can be written to and read from TSV data files.
pub trait Metric: Serialize + for<'de> Deserialize<'de> + Clone + Default {
    /// Human-readable name for this metric type.
    ///
    /// Used in error messages and logging when writing data files.
    fn metric_name() -> &'static str;
}

pub use extract::{DataSource, UmiExtractMetrics};
pub use writer::{read_data_file, write_data_file, write_metrics, write_sources};
