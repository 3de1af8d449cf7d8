//! Summary generation and placeholder substitution
//!
//! `build_summary` scans and renders, `substitute` splices the result into a
//! document. The disk adapter below and the page hook in [`crate::plugin`] are
//! thin wrappers around the two.

use std::fs;
use std::path::Path;

use crate::adr::{render_summary, AdrScanner};
use crate::config::AdrTocConfig;
use crate::error::{AdrTocError, Result};

/// What happened to a target document on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstituteOutcome {
    /// The placeholder was found and the file rewritten
    Replaced,
    /// The file exists but holds no placeholder; it was left untouched
    PlaceholderAbsent,
    /// The file does not exist
    TargetMissing,
}

/// Scans `adr_dir` and renders the summary fragment.
pub fn build_summary(adr_dir: &Path, config: &AdrTocConfig) -> Result<String> {
    let outcome = AdrScanner::new(config.sort).scan(adr_dir)?;
    Ok(render_summary(&outcome.records, &config.adr_path))
}

/// Replaces every occurrence of `placeholder` in `text` with `fragment`.
///
/// Text without the placeholder comes back unchanged, so running this again
/// after a replacement is a no-op.
pub fn substitute(text: &str, placeholder: &str, fragment: &str) -> String {
    if placeholder.is_empty() {
        return text.to_string();
    }
    text.replace(placeholder, fragment)
}

/// Substitutes the placeholder in the file at `path` and writes it back.
pub fn substitute_file(path: &Path, placeholder: &str, fragment: &str) -> Result<SubstituteOutcome> {
    if !path.exists() {
        tracing::warn!("Existing file {} not found", path.display());
        return Ok(SubstituteOutcome::TargetMissing);
    }

    let content = fs::read_to_string(path).map_err(|e| AdrTocError::io(path, e))?;
    if placeholder.is_empty() || !content.contains(placeholder) {
        tracing::debug!("No {} in {}", placeholder, path.display());
        return Ok(SubstituteOutcome::PlaceholderAbsent);
    }

    let updated = substitute(&content, placeholder, fragment);
    fs::write(path, updated).map_err(|e| AdrTocError::io(path, e))?;
    tracing::info!("Replaced {} in {}", placeholder, path.display());

    Ok(SubstituteOutcome::Replaced)
}
