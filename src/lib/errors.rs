//! Custom error types for umireport operations.

use thiserror::Error;

/// Result type alias for umireport operations
pub type Result<T> = std::result::Result<T, UmiReportError>;

/// Error type for umireport operations
#[derive(Error, Debug)]
pub enum UmiReportError {
    /// No usable samples remained after parsing and applying the ignore list.
    ///
    /// This is the "nothing to report" signal: callers are expected to drop the
    /// module's report section rather than fail the whole run.
    #[error("No {module} logs found ({files_seen} candidate files examined)")]
    NoSamplesFound {
        /// Name of the reporting module that found nothing
        module: String,
        /// Number of candidate files that were examined
        files_seen: usize,
    },

    /// Invalid parameter value provided
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The parameter name
        parameter: String,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// Input path problem
    #[error("Invalid {file_type} '{path}': {reason}")]
    InvalidFileFormat {
        /// Type of file (e.g., "Input log", "Output directory")
        file_type: String,
        /// Path to the file
        path: String,
        /// Explanation of the problem
        reason: String,
    },
}

impl UmiReportError {
    /// Returns true if this error only means that no samples were found.
    #[must_use]
    pub fn is_no_samples(&self) -> bool {
        matches!(self, Self::NoSamplesFound { .. })
    }
}
