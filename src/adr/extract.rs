//! Per-document metadata extraction
//!
//! Pulls status, date, title and deciders out of ADR markdown with
//! line-anchored patterns. Extraction is pure: it never touches the filesystem.

use once_cell::sync::Lazy;
use regex::Regex;

use super::record::{AdrRecord, UNKNOWN};

static STATUS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)^status:\s*"(.+)""#).expect("valid status regex"));
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)^date:\s*"(.+)""#).expect("valid date regex"));
static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#\s+(.+)").expect("valid title regex"));
static DECIDERS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^deciders:\s*\[(.+)\]").expect("valid deciders regex"));

/// Extracts a record from ADR content, or `None` when there is no title line.
pub fn extract_record(filename: &str, content: &str) -> Option<AdrRecord> {
    let title = capture(&TITLE_RE, content)?;

    let status = capture(&STATUS_RE, content).unwrap_or_else(|| UNKNOWN.to_string());
    let date = capture(&DATE_RE, content).unwrap_or_else(|| UNKNOWN.to_string());
    let deciders = capture(&DECIDERS_RE, content)
        .map(|list| clean_deciders(&list))
        .unwrap_or_else(|| UNKNOWN.to_string());

    Some(AdrRecord {
        number: decision_number(filename).to_string(),
        title,
        status,
        date,
        deciders,
        filename: filename.to_string(),
    })
}

/// Filename prefix before the first `-`.
pub fn decision_number(filename: &str) -> &str {
    filename.split('-').next().unwrap_or(filename)
}

fn clean_deciders(list: &str) -> String {
    list.replace('"', "").trim().to_string()
}

fn capture(re: &Regex, content: &str) -> Option<String> {
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
