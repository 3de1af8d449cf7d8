//! Summary table rendering

use super::record::AdrRecord;

/// Heading that opens the generated summary
pub const SUMMARY_HEADING: &str = "# ADR Summary";

const TABLE_HEADER: &str = "| Number | Decision | Status | Last Review Date | Deciders |";
const TABLE_SEPARATOR: &str = "| --- | --- | --- | --- | --- |";

/// Renders the summary fragment for `records`, linking each row under `adr_path`.
///
/// Cell values are inserted verbatim; markdown in titles or deciders is not escaped.
pub fn render_summary(records: &[AdrRecord], adr_path: &str) -> String {
    let mut out = String::new();
    out.push_str(SUMMARY_HEADING);
    out.push_str("\n\n");
    out.push_str(TABLE_HEADER);
    out.push('\n');
    out.push_str(TABLE_SEPARATOR);
    out.push('\n');

    for record in records {
        out.push_str(&render_row(record, adr_path));
        out.push('\n');
        tracing::debug!("Added record to summary: {}", record.title);
    }

    out
}

/// A single table row, without the trailing newline.
pub fn render_row(record: &AdrRecord, adr_path: &str) -> String {
    let link = record_link(adr_path, &record.filename);
    format!(
        "| [{}]({}) | [{}]({}) | {} | {} | {} |",
        record.number, link, record.title, link, record.status, record.date, record.deciders
    )
}

/// Relative link to an ADR file under `adr_path`.
pub fn record_link(adr_path: &str, filename: &str) -> String {
    let prefix = adr_path.trim_end_matches('/');
    if prefix.is_empty() {
        filename.to_string()
    } else {
        format!("{}/{}", prefix, filename)
    }
}
