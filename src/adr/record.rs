//! ADR record and ordering types.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Value used for any optional field missing from an ADR.
pub const UNKNOWN: &str = "Unknown";

/// Metadata extracted from a single ADR document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdrRecord {
    /// Decision number (filename prefix before the first `-`)
    pub number: String,
    /// Text of the first top-level heading
    pub title: String,
    /// Status line value, or `Unknown`
    pub status: String,
    /// Date line value, or `Unknown`
    pub date: String,
    /// Comma separated deciders with quotes stripped, or `Unknown`
    pub deciders: String,
    /// Source file name
    pub filename: String,
}

/// How decision numbers are ordered in the summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Plain string comparison: `10` sorts before `2`.
    #[default]
    Lexical,
    /// Numeric prefixes compare as integers and come before non-numeric ones.
    Numeric,
}

impl SortOrder {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lexical" => Some(SortOrder::Lexical),
            "numeric" => Some(SortOrder::Numeric),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Lexical => "lexical",
            SortOrder::Numeric => "numeric",
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            SortOrder::Lexical => a.cmp(b),
            SortOrder::Numeric => match (a.parse::<u64>(), b.parse::<u64>()) {
                (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
                (Ok(_), Err(_)) => Ordering::Less,
                (Err(_), Ok(_)) => Ordering::Greater,
                (Err(_), Err(_)) => a.cmp(b),
            },
        }
    }

    /// Stable sort of records by decision number.
    pub fn sort(&self, records: &mut [AdrRecord]) {
        records.sort_by(|a, b| self.compare(&a.number, &b.number));
    }
}
