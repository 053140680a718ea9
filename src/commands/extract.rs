//! Build the UMI-tools extract report module from a set of logs.
//!
//! This module implements the `extract` command, which walks the given inputs for
//! UMI-tools `extract` logs, aggregates their metrics per sample, and writes:
//!
//! - `<data-file-name>.txt`: one row of metrics per sample
//! - `umitools_extract_sources.txt`: the log each sample was taken from
//! - `umitools_extract_report.json`: general statistics and bar chart data for a
//!   report renderer
//!
//! Finding no usable logs is not an error: a warning is logged and nothing is written,
//! so the module simply does not appear in the report.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};

use umireport_lib::aggregate::{ExtractSummary, SampleAggregator};
use umireport_lib::discovery::discover_logs;
use umireport_lib::logging::{OperationTimer, log_extract_summary};
use umireport_lib::metrics::{write_data_file, write_sources};
use umireport_lib::report::ModuleReport;
use umireport_lib::sample_filter::IgnoreSamples;
use umireport_lib::validation::{validate_file_name, validate_inputs, validate_output_dir};

use super::command::Command;
use super::common::{CleaningOptions, DiscoveryArgs};

/// Default base name of the per-sample data file.
pub const DEFAULT_DATA_FILE_NAME: &str = "multiqc_umitools";

/// File name of the data source table.
pub const SOURCES_FILE_NAME: &str = "umitools_extract_sources.txt";

/// File name of the report contribution.
pub const REPORT_FILE_NAME: &str = "umitools_extract_report.json";

/// Aggregates UMI-tools extract logs into per-sample QC metrics
#[derive(Parser, Debug)]
#[command(
    name = "extract",
    author,
    version,
    about = "\x1b[38;5;30m[REPORT]\x1b[0m \x1b[36mSummarise UMI-tools extract logs per sample\x1b[0m",
    long_about = r#"
Summarises the logs written by `umi_tools extract` into per-sample QC metrics.

## Inputs

One or more files or directories. Directories are searched recursively and every file
is a candidate; only files containing the line `# output generated by extract` are
parsed, everything else is skipped.

The sample name is taken from the input file recorded in the log
(`stdin : <_io.TextIOWrapper name='...'>`), falling back to the log's own file name,
and is then cleaned of directories and common extensions. When two logs yield the
same sample name the one found later wins.

## Outputs

Written to the output directory:

1. **<data-file-name>.txt**: input, output and filtered read counts and the percentage
   of reads extracted for each sample
2. **umitools_extract_sources.txt**: the log each sample was read from
3. **umitools_extract_report.json**: general statistics column and bar chart data

If no samples are found (or all are ignored) nothing is written.
"#
)]
pub struct Extract {
    /// Log files or directories to search
    #[arg(short = 'i', long = "input", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output directory
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Glob pattern of sample names to leave out of the report (repeatable)
    #[arg(long = "ignore-samples")]
    pub ignore_samples: Vec<String>,

    /// Base name of the per-sample data file
    #[arg(long = "data-file-name", default_value = DEFAULT_DATA_FILE_NAME)]
    pub data_file_name: String,

    #[command(flatten)]
    pub cleaning: CleaningOptions,

    #[command(flatten)]
    pub discovery: DiscoveryArgs,
}

impl Extract {
    fn validate(&self) -> Result<()> {
        validate_inputs(&self.inputs, "Input log")?;
        validate_output_dir(&self.output)?;
        validate_file_name(&self.data_file_name, "data-file-name")?;
        self.discovery.validate()?;
        Ok(())
    }

    /// Parses and aggregates the inputs, returning `None` if no samples were found.
    pub fn collect(&self) -> Result<Option<ExtractSummary>> {
        let filter = IgnoreSamples::new(&self.ignore_samples)?;
        let cleaner = self.cleaning.cleaner();

        let timer = OperationTimer::new("Parsing UMI-tools extract logs");
        let logs = discover_logs(&self.inputs, &self.discovery.options(), &cleaner)?;

        let mut aggregator = SampleAggregator::new(cleaner);
        aggregator.add_all(&logs);
        timer.log_completion(logs.len() as u64);

        match aggregator.finish(&filter) {
            Ok(summary) => Ok(Some(summary)),
            Err(e) if e.is_no_samples() => {
                warn!("{e}");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Writes the data file, sources file and report contribution for `summary`.
    pub fn write_outputs(&self, summary: &ExtractSummary) -> Result<()> {
        fs::create_dir_all(&self.output).with_context(|| {
            format!("Failed to create output directory: {}", self.output.display())
        })?;

        let data_path = self.output.join(format!("{}.txt", self.data_file_name));
        write_data_file(&data_path, &summary.samples)?;
        info!("Wrote data file: {}", data_path.display());

        let sources_path = self.output.join(SOURCES_FILE_NAME);
        write_sources(&sources_path, &summary.sources)?;
        info!("Wrote data sources: {}", sources_path.display());

        let report_path = self.output.join(REPORT_FILE_NAME);
        ModuleReport::build(summary).write_json(&report_path)?;
        info!("Wrote report contribution: {}", report_path.display());
        Ok(())
    }
}

impl Command for Extract {
    fn execute(&self, command_line: &str) -> Result<()> {
        self.validate()?;
        debug!("Command line: {command_line}");

        let Some(summary) = self.collect()? else {
            return Ok(());
        };
        log_extract_summary(&summary);
        self.write_outputs(&summary)
    }
}
