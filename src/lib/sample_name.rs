//! Sample name cleaning.
//!
//! Raw sample names come either from a log's file name or from the input file the
//! tool reports reading, so they usually carry directory components and a stack of
//! file extensions (`S1.Aligned.sortedByCoord.out.bam`). Cleaning reduces them to the
//! bare sample identifier that all modules in a report agree on.

use crate::discovery::LogFile;

/// Turns a raw sample name into the name used as the collection key.
pub trait SampleNameCleaner {
    /// Cleans `raw`, which was found in (or derived from) `file`.
    fn clean(&self, raw: &str, file: &LogFile) -> String;
}

/// Extensions and name fragments removed by default.
///
/// The name is truncated at the first occurrence of each entry, so the order matters
/// only in that earlier entries see longer names.
pub const DEFAULT_CLEAN_EXTS: &[&str] = &[
    ".gz",
    ".fastq",
    ".fq",
    ".bam",
    ".sam",
    ".sra",
    ".vcf",
    ".dat",
    "_tophat",
    ".log",
    ".stderr",
    ".out",
    ".spp",
    ".fa",
    ".fasta",
    ".png",
    ".jpg",
    ".jpeg",
    ".html",
    "Log.final",
    "ReadsPerGene",
    ".flagstat",
    "_star_aligned",
    "_fastqc",
    ".counts",
    "_counts",
    ".txt",
    ".tsv",
    ".csv",
    ".aligned",
    "Aligned",
    ".merge",
    ".deduplicated",
    ".dedup",
    ".clean",
    ".sorted",
    ".report",
    "| stdin",
    "_umi_extract",
    ".extract",
];

/// Characters trimmed from both ends after extension removal.
const TRIM_CHARS: &[char] = &['.', '_', '-', ' '];

/// Strips directories and known extensions from sample names.
#[derive(Debug, Clone)]
pub struct ExtensionCleaner {
    extensions: Vec<String>,
}

impl ExtensionCleaner {
    /// Creates a cleaner that removes exactly `extensions`.
    #[must_use]
    pub fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    /// Adds more extensions after the existing ones.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(extensions.into_iter().map(Into::into));
        self
    }

    /// Cleans a name without reference to its source file.
    #[must_use]
    pub fn clean_name(&self, raw: &str) -> String {
        let base = base_name(raw);
        let mut name = base;
        for ext in self.extensions.iter().filter(|e| !e.is_empty()) {
            if let Some(idx) = name.find(ext.as_str()) {
                name = &name[..idx];
            }
        }
        let trimmed = name.trim_matches(TRIM_CHARS);
        if trimmed.is_empty() { base.to_string() } else { trimmed.to_string() }
    }
}

impl Default for ExtensionCleaner {
    fn default() -> Self {
        Self::new(DEFAULT_CLEAN_EXTS.iter().map(|s| (*s).to_string()).collect())
    }
}

impl SampleNameCleaner for ExtensionCleaner {
    fn clean(&self, raw: &str, _file: &LogFile) -> String {
        self.clean_name(raw)
    }
}

/// Returns the last path component, accepting both separators.
fn base_name(raw: &str) -> &str {
    raw.rsplit(['/', '\\']).next().unwrap_or(raw)
}
