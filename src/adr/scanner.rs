use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AdrTocError, Result};

use super::extract::extract_record;
use super::record::{AdrRecord, SortOrder};

/// File extension of ADR documents
pub const ADR_EXTENSION: &str = ".md";

/// Result of scanning an ADR directory
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Records sorted by decision number
    pub records: Vec<AdrRecord>,
    /// Markdown files skipped because no title line was found
    pub skipped: Vec<PathBuf>,
}

pub struct AdrScanner {
    order: SortOrder,
}

impl AdrScanner {
    pub fn new(order: SortOrder) -> Self {
        Self { order }
    }

    /// Scans `dir` (non-recursive) and returns every titled ADR.
    pub fn scan(&self, dir: &Path) -> Result<ScanOutcome> {
        tracing::debug!("Starting to process ADR files in directory: {}", dir.display());

        let mut outcome = ScanOutcome::default();

        for (path, filename) in Self::candidates(dir)? {
            tracing::debug!("Processing file: {}", path.display());

            let content = fs::read_to_string(&path).map_err(|e| AdrTocError::io(&path, e))?;

            match extract_record(&filename, &content) {
                Some(record) => {
                    tracing::debug!("Added ADR: {}", record.title);
                    outcome.records.push(record);
                }
                None => {
                    tracing::warn!("Failed to extract title from file: {}", path.display());
                    outcome.skipped.push(path);
                }
            }
        }

        self.order.sort(&mut outcome.records);
        Ok(outcome)
    }

    /// Markdown entries in `dir` as `(path, display name)`, in name order.
    ///
    /// The path is the entry's own, so names that are not valid UTF-8 are
    /// still read from disk; only the display name is lossy.
    fn candidates(dir: &Path) -> Result<Vec<(PathBuf, String)>> {
        let entries = fs::read_dir(dir).map_err(|e| AdrTocError::io(dir, e))?;

        let mut candidates = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| AdrTocError::io(dir, e))?;
            let name = entry.file_name().to_string_lossy().to_string();
            if name.ends_with(ADR_EXTENSION) {
                candidates.push((entry.path(), name));
            }
        }

        candidates.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(candidates)
    }
}

impl Default for AdrScanner {
    fn default() -> Self {
        Self::new(SortOrder::default())
    }
}
