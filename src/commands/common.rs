//! Common CLI options shared across commands.
//!
//! This module provides shared argument structures that can be composed into
//! command structs using `#[command(flatten)]`.

use clap::Args;

use umireport_lib::discovery::{DEFAULT_MAX_FILE_SIZE, DiscoveryOptions};
use umireport_lib::sample_name::ExtensionCleaner;
use umireport_lib::validation::validate_min;

/// Options controlling how sample names are cleaned.
#[derive(Debug, Clone, Default, Args)]
pub struct CleaningOptions {
    /// Additional extension or name fragment to strip from sample names (repeatable)
    #[arg(long = "clean-ext")]
    pub clean_exts: Vec<String>,

    /// Do not strip the built-in list of extensions, only those given with --clean-ext
    #[arg(long = "no-default-clean-exts", default_value = "false")]
    pub no_default_clean_exts: bool,
}

impl CleaningOptions {
    /// Builds the sample name cleaner described by these options.
    pub fn cleaner(&self) -> ExtensionCleaner {
        let base = if self.no_default_clean_exts {
            ExtensionCleaner::new(Vec::new())
        } else {
            ExtensionCleaner::default()
        };
        base.with_extensions(self.clean_exts.iter().cloned())
    }
}

/// Options controlling which candidate files are read.
#[derive(Debug, Clone, Args)]
pub struct DiscoveryArgs {
    /// Skip files larger than this many bytes
    #[arg(long = "max-file-size", default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_file_size: u64,
}

impl Default for DiscoveryArgs {
    fn default() -> Self {
        Self { max_file_size: DEFAULT_MAX_FILE_SIZE }
    }
}

impl DiscoveryArgs {
    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns an error if the maximum file size is zero.
    pub fn validate(&self) -> anyhow::Result<()> {
        validate_min(self.max_file_size, 1, "max-file-size")?;
        Ok(())
    }

    /// Converts to library discovery options.
    pub fn options(&self) -> DiscoveryOptions {
        DiscoveryOptions { max_file_size: self.max_file_size }
    }
}
