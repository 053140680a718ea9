//! Removal of user-excluded samples from a collection.

use glob::Pattern;
use log::debug;

use crate::aggregate::SampleCollection;
use crate::errors::{Result, UmiReportError};

/// Removes samples the user asked to exclude.
pub trait SampleFilter {
    /// Returns the subset of `collection` that should be reported.
    fn filter(&self, collection: SampleCollection) -> SampleCollection;
}

/// Keeps every sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl SampleFilter for NoFilter {
    fn filter(&self, collection: SampleCollection) -> SampleCollection {
        collection
    }
}

/// Drops samples whose names match any of a list of glob patterns.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSamples {
    patterns: Vec<Pattern>,
}

impl IgnoreSamples {
    /// Compiles the given glob patterns.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first pattern that is not a valid glob.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Pattern::new(p.as_ref()).map_err(|e| UmiReportError::InvalidParameter {
                    parameter: "ignore-samples".to_string(),
                    reason: format!("'{}' is not a valid glob: {e}", p.as_ref()),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Returns true if `sample` matches any ignore pattern.
    #[must_use]
    pub fn is_ignored(&self, sample: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(sample))
    }
}

impl SampleFilter for IgnoreSamples {
    fn filter(&self, mut collection: SampleCollection) -> SampleCollection {
        if self.patterns.is_empty() {
            return collection;
        }
        collection.retain(|name| {
            let ignored = self.is_ignored(name);
            if ignored {
                debug!("Ignoring sample '{name}'");
            }
            !ignored
        });
        collection
    }
}
