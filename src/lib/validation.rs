//! Input validation utilities
//!
//! This module provides common validation functions for command-line parameters and
//! file paths with consistent error messages, using the structured error types from
//! [`crate::errors`].

use crate::errors::{Result, UmiReportError};
use std::path::Path;

/// Validate that a file or directory exists
///
/// # Arguments
/// * `path` - Path to validate
/// * `description` - Human-readable description of the path (e.g., "Input log")
///
/// # Errors
/// Returns an error if the path does not exist
///
/// # Example
/// ```
/// use umireport_lib::validation::validate_file_exists;
///
/// let result = validate_file_exists("/nonexistent/extract.log", "Input log");
/// assert!(result.is_err());
/// ```
pub fn validate_file_exists<P: AsRef<Path>>(path: P, description: &str) -> Result<()> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        return Err(UmiReportError::InvalidFileFormat {
            file_type: description.to_string(),
            path: path_ref.display().to_string(),
            reason: "File does not exist".to_string(),
        });
    }
    Ok(())
}

/// Validate that every input path exists
///
/// # Errors
/// Returns an error for the first path that doesn't exist, or if `paths` is empty
pub fn validate_inputs<P: AsRef<Path>>(paths: &[P], description: &str) -> Result<()> {
    if paths.is_empty() {
        return Err(UmiReportError::InvalidParameter {
            parameter: "input".to_string(),
            reason: "At least one input path is required".to_string(),
        });
    }
    for path in paths {
        validate_file_exists(path, description)?;
    }
    Ok(())
}

/// Validate that an output directory either exists as a directory or can be created
///
/// # Errors
/// Returns an error if the path exists but is not a directory
pub fn validate_output_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path_ref = path.as_ref();
    if path_ref.exists() && !path_ref.is_dir() {
        return Err(UmiReportError::InvalidFileFormat {
            file_type: "Output directory".to_string(),
            path: path_ref.display().to_string(),
            reason: "Path exists and is not a directory".to_string(),
        });
    }
    Ok(())
}

/// Validate that a value is at least a minimum
///
/// # Errors
/// Returns an error if `value < min`
///
/// # Example
/// ```
/// use umireport_lib::validation::validate_min;
///
/// assert!(validate_min(1024, 1, "max-file-size").is_ok());
/// assert!(validate_min(0, 1, "max-file-size").is_err());
/// ```
pub fn validate_min(value: u64, min: u64, name: &str) -> Result<()> {
    if value < min {
        return Err(UmiReportError::InvalidParameter {
            parameter: name.to_string(),
            reason: format!("must be >= {min}, got {value}"),
        });
    }
    Ok(())
}

/// Validate that a name can be used as a single output file name
///
/// # Errors
/// Returns an error if the name is empty or contains a path separator
pub fn validate_file_name(name: &str, parameter: &str) -> Result<()> {
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(UmiReportError::InvalidParameter {
            parameter: parameter.to_string(),
            reason: format!("'{name}' must be a non-empty file name without directories"),
        });
    }
    Ok(())
}
