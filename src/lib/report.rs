//! The module's contribution to a QC report.
//!
//! A report renderer receives three things from this module: its identity
//! ([`ModuleInfo`]), one column for the general statistics table, and a section holding
//! a stacked bar chart of reads kept versus reads removed. They are bundled in
//! [`ModuleReport`] and serialised as JSON; rendering is the renderer's business.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::aggregate::{ExtractSummary, SampleCollection};
use crate::extract_log::MetricKey;

/// Display name of this module.
pub const MODULE_NAME: &str = "UMI-tools extract";

/// Anchor of this module within a report.
pub const MODULE_ANCHOR: &str = "umitools_extract";

/// Identity of the reporting module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub name: String,
    pub anchor: String,
    pub href: String,
    pub info: String,
    pub doi: String,
}

impl Default for ModuleInfo {
    fn default() -> Self {
        Self {
            name: MODULE_NAME.to_string(),
            anchor: MODULE_ANCHOR.to_string(),
            href: "https://github.com/CGATOxford/UMI-tools".to_string(),
            info: "contains tools for dealing with Unique Molecular Identifiers (UMIs)/(RMTs) \
                   and scRNA-Seq barcodes."
                .to_string(),
            doi: "10.1101/gr.209601.116".to_string(),
        }
    }
}

/// Display metadata for one general statistics column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralStatsHeader {
    pub title: String,
    pub description: String,
    pub min: f64,
    pub max: f64,
    pub suffix: String,
    pub scale: String,
}

/// Columns and per-sample values for the general statistics table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralStats {
    /// Column metadata keyed by metric
    pub headers: BTreeMap<MetricKey, GeneralStatsHeader>,
    /// Values keyed by sample, then metric
    pub data: BTreeMap<String, BTreeMap<MetricKey, f64>>,
}

impl GeneralStats {
    /// Builds the `% Extracted Reads` column. Samples without a percentage are left out.
    #[must_use]
    pub fn build(samples: &SampleCollection) -> Self {
        let header = GeneralStatsHeader {
            title: "% Extracted Reads".to_string(),
            description: "% processed reads extracted with cell barcode".to_string(),
            min: 0.0,
            max: 100.0,
            suffix: "%".to_string(),
            scale: "RdYlGn".to_string(),
        };
        let headers = BTreeMap::from([(MetricKey::PercentExtractedReads, header)]);
        let data = select(samples, &[MetricKey::PercentExtractedReads]);
        Self { headers, data }
    }
}

/// One stacked category of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarCategory {
    pub key: MetricKey,
    pub name: String,
    pub color: String,
}

/// Chart-level configuration of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGraphConfig {
    pub id: String,
    pub title: String,
    pub ylab: String,
    pub cpswitch_counts_label: String,
}

/// A bar chart with its data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGraph {
    /// Categories in stacking order
    pub categories: Vec<BarCategory>,
    pub config: BarGraphConfig,
    /// Values keyed by sample, then category
    pub data: BTreeMap<String, BTreeMap<MetricKey, f64>>,
}

impl BarGraph {
    /// Builds the extraction counts chart: reads remaining vs. reads removed.
    #[must_use]
    pub fn extraction_counts(samples: &SampleCollection) -> Self {
        let categories = vec![
            BarCategory {
                key: MetricKey::OutputReads,
                name: "Reads remaining".to_string(),
                color: "#7fc97f".to_string(),
            },
            BarCategory {
                key: MetricKey::FilteredReads,
                name: "Reads removed".to_string(),
                color: "#fdc086".to_string(),
            },
        ];
        let config = BarGraphConfig {
            id: "umitools_extract_barplot".to_string(),
            title: "UMI-tools: Extraction Counts".to_string(),
            ylab: "# Reads".to_string(),
            cpswitch_counts_label: "Number of Reads".to_string(),
        };
        let keys: Vec<_> = categories.iter().map(|c| c.key).collect();
        let data = select(samples, &keys);
        Self { categories, config, data }
    }
}

/// A titled report section with a plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub name: String,
    pub anchor: String,
    pub description: String,
    pub plot: BarGraph,
}

/// Everything this module hands to a report renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleReport {
    pub module: ModuleInfo,
    pub general_stats: GeneralStats,
    pub sections: Vec<ReportSection>,
}

impl ModuleReport {
    /// Builds the report contribution for a finished run.
    #[must_use]
    pub fn build(summary: &ExtractSummary) -> Self {
        let section = ReportSection {
            name: "Extracted Reads".to_string(),
            anchor: "umitools-extract-plot".to_string(),
            description: "This plot shows the number of extracted reads.".to_string(),
            plot: BarGraph::extraction_counts(&summary.samples),
        };
        Self {
            module: ModuleInfo::default(),
            general_stats: GeneralStats::build(&summary.samples),
            sections: vec![section],
        }
    }

    /// Writes the report contribution as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written to
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path_ref = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize report")?;
        std::fs::write(path_ref, json)
            .with_context(|| format!("Failed to write report: {}", path_ref.display()))
    }
}

/// Picks `keys` out of every sample, dropping samples that have none of them.
fn select(
    samples: &SampleCollection,
    keys: &[MetricKey],
) -> BTreeMap<String, BTreeMap<MetricKey, f64>> {
    samples
        .iter()
        .filter_map(|(name, record)| {
            let values: BTreeMap<_, _> =
                keys.iter().filter_map(|k| record.get(*k).map(|v| (*k, v))).collect();
            (!values.is_empty()).then(|| (name.to_string(), values))
        })
        .collect()
}
