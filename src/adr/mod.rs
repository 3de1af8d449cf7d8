//! Architecture Decision Record scanning and rendering
//!
//! Reads ADR markdown files from a directory, extracts their metadata and
//! renders the summary table injected into the docs site.

pub mod extract;
pub mod record;
pub mod render;
pub mod scanner;

pub use extract::{decision_number, extract_record};
pub use record::{AdrRecord, SortOrder, UNKNOWN};
pub use render::{record_link, render_row, render_summary, SUMMARY_HEADING};
pub use scanner::{AdrScanner, ScanOutcome, ADR_EXTENSION};
