//! Discovery of candidate log files.
//!
//! Inputs may be files or directories. Directories are walked recursively in file name
//! order so that runs over the same tree always see files in the same order; explicit
//! file inputs keep the order they were given in. Every readable text file is a
//! candidate: deciding whether it is actually an extract log is left to the parser.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use walkdir::WalkDir;

use crate::sample_name::ExtensionCleaner;
use crate::validation::validate_file_exists;

/// Largest file read by default, in bytes.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50_000_000;

/// A candidate log with its content already loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    /// Where the content was read from
    pub path: PathBuf,
    /// Final path component of `path`
    pub file_name: String,
    /// Sample name derived from the file name, used when the log names no input
    pub sample_name_hint: String,
    /// Full text of the file
    pub content: String,
}

impl LogFile {
    /// Creates a log from already-loaded content.
    pub fn new<P: Into<PathBuf>, S: Into<String>>(
        path: P,
        sample_name_hint: S,
        content: String,
    ) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Self { path, file_name, sample_name_hint: sample_name_hint.into(), content }
    }
}

/// Options controlling which files are read.
#[derive(Debug, Clone, Copy)]
pub struct DiscoveryOptions {
    /// Files larger than this are skipped
    pub max_file_size: u64,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self { max_file_size: DEFAULT_MAX_FILE_SIZE }
    }
}

/// Collects candidate logs from files and directories.
///
/// # Errors
///
/// Returns an error if an input does not exist or a directory cannot be walked.
/// Individual files that are too large, unreadable or not UTF-8 are skipped.
pub fn discover_logs<P: AsRef<Path>>(
    inputs: &[P],
    options: &DiscoveryOptions,
    cleaner: &ExtensionCleaner,
) -> Result<Vec<LogFile>> {
    let mut logs = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        validate_file_exists(input, "Input log")?;

        if input.is_dir() {
            let walker = WalkDir::new(input).follow_links(false).sort_by_file_name();
            for entry in walker {
                let entry = entry
                    .with_context(|| format!("Failed to walk directory: {}", input.display()))?;
                if entry.file_type().is_file() {
                    logs.extend(load_log(entry.path(), options, cleaner));
                }
            }
        } else {
            logs.extend(load_log(input, options, cleaner));
        }
    }
    debug!("Discovered {} candidate files", logs.len());
    Ok(logs)
}

/// Reads one candidate, returning `None` if it should be skipped.
fn load_log(
    path: &Path,
    options: &DiscoveryOptions,
    cleaner: &ExtensionCleaner,
) -> Option<LogFile> {
    let size = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            warn!("Skipping unreadable file {}: {e}", path.display());
            return None;
        }
    };
    if size > options.max_file_size {
        debug!(
            "Skipping {} as it is larger than {} bytes ({size} bytes)",
            path.display(),
            options.max_file_size
        );
        return None;
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Skipping unreadable file {}: {e}", path.display());
            return None;
        }
    };
    let Ok(content) = String::from_utf8(bytes) else {
        debug!("Skipping non-text file {}", path.display());
        return None;
    };

    let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    Some(LogFile::new(path, cleaner.clean_name(&file_name), content))
}
