//! Parse a single UMI-tools extract log.
//!
//! Prints the cleaned sample name and the metrics found as JSON, which makes it easy to
//! see why a given log does or does not show up in a report.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use serde::Serialize;

use umireport_lib::aggregate::MIN_RECORD_ENTRIES;
use umireport_lib::extract_log::{MetricsRecord, parse_log};
use umireport_lib::validation::validate_file_exists;

use super::command::Command;
use super::common::CleaningOptions;

/// Prints the parse result of one UMI-tools extract log
#[derive(Parser, Debug)]
#[command(
    name = "parse",
    author,
    version,
    about = "\x1b[38;5;30m[REPORT]\x1b[0m \x1b[36mShow how a single extract log is parsed\x1b[0m"
)]
pub struct Parse {
    /// Log file to parse
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    #[command(flatten)]
    pub cleaning: CleaningOptions,
}

/// JSON printed for a recognised log.
#[derive(Debug, Serialize)]
pub struct ParseOutput {
    /// Sample name as found in the log, before cleaning
    pub raw_sample_name: String,
    /// Sample name used in reports
    pub sample_name: String,
    /// Whether the log has enough metrics to be reported
    pub usable: bool,
    pub metrics: MetricsRecord,
}

impl Parse {
    /// Parses the input, returning `None` if it is not an extract log.
    pub fn parse(&self) -> Result<Option<ParseOutput>> {
        validate_file_exists(&self.input, "Input log")?;
        let text = fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read log: {}", self.input.display()))?;

        let cleaner = self.cleaning.cleaner();
        let file_name =
            self.input.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let Some(parsed) = parse_log(&text, &cleaner.clean_name(&file_name)) else {
            return Ok(None);
        };

        Ok(Some(ParseOutput {
            sample_name: cleaner.clean_name(&parsed.sample_name),
            raw_sample_name: parsed.sample_name,
            usable: parsed.metrics.len() >= MIN_RECORD_ENTRIES,
            metrics: parsed.metrics,
        }))
    }
}

impl Command for Parse {
    fn execute(&self, command_line: &str) -> Result<()> {
        debug!("Command line: {command_line}");
        match self.parse()? {
            Some(output) => {
                let json = serde_json::to_string_pretty(&output)?;
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{json}")?;
            }
            None => info!("Not a UMI-tools extract log: {}", self.input.display()),
        }
        Ok(())
    }
}
