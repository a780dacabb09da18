//! Row ↔ record mapping for the Applications sheet.
//!
//! Pure, stateless transforms. The header list here is the single source of
//! truth for column order — the sheet client writes cells in exactly this
//! order and readers look cells up by these names.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::job::{JobApplication, Status};

/// Column headers, in the order cells are written. `Id` is appended last so
/// sheets created before the column existed keep their layout.
pub const HEADERS: [&str; 16] = [
    "Employer",
    "Position",
    "Location",
    "Status",
    "Applied Date",
    "Relevance",
    "Job Description",
    "Resume",
    "Keywords",
    "Notes",
    "URL",
    "Updated Resume",
    "Updated Resume Analysis",
    "Latex Resume",
    "Keyword Analysis",
    "Id",
];

/// Rows are 1-based and the header occupies row 1, so the record at local
/// index `i` lives at sheet row `i + ROW_OFFSET`.
pub const ROW_OFFSET: usize = 2;

/// One data row as returned by the store: column name → cell value.
pub type SheetRow = HashMap<String, String>;

/// Pairs a raw value row with its header row. Missing trailing cells map to
/// empty strings by omission — `cell` treats absent keys as empty.
pub fn zip_row(headers: &[String], values: &[String]) -> SheetRow {
    headers
        .iter()
        .zip(values.iter())
        .map(|(h, v)| (h.clone(), v.clone()))
        .collect()
}

fn cell<'a>(row: &'a SheetRow, name: &str) -> &'a str {
    row.get(name).map(String::as_str).unwrap_or("")
}

/// Maps one sheet row to a record. Missing columns become empty strings,
/// an unparseable relevance becomes `None`, an unknown status falls back to
/// its default — shape problems are absorbed, never raised.
pub fn row_to_record(row: &SheetRow) -> JobApplication {
    JobApplication {
        id: Uuid::parse_str(cell(row, "Id")).ok(),
        employer: cell(row, "Employer").to_string(),
        position: cell(row, "Position").to_string(),
        location: cell(row, "Location").to_string(),
        status: Status::parse(cell(row, "Status")),
        applied_date: cell(row, "Applied Date").to_string(),
        relevance: parse_relevance(cell(row, "Relevance")),
        job_description: cell(row, "Job Description").to_string(),
        resume: cell(row, "Resume").to_string(),
        keywords: split_keywords(cell(row, "Keywords")),
        notes: cell(row, "Notes").to_string(),
        url: cell(row, "URL").to_string(),
        updated_resume: cell(row, "Updated Resume").to_string(),
        updated_resume_analysis: cell(row, "Updated Resume Analysis").to_string(),
        latex_resume: cell(row, "Latex Resume").to_string(),
        keyword_analysis: cell(row, "Keyword Analysis").to_string(),
    }
}

/// Serializes a record to one full row of cells, in `HEADERS` order.
pub fn record_to_row(record: &JobApplication) -> Vec<String> {
    vec![
        record.employer.clone(),
        record.position.clone(),
        record.location.clone(),
        record.status.to_string(),
        record.applied_date.clone(),
        record
            .relevance
            .map(|r| r.to_string())
            .unwrap_or_default(),
        record.job_description.clone(),
        record.resume.clone(),
        record.keywords.join(", "),
        record.notes.clone(),
        record.url.clone(),
        record.updated_resume.clone(),
        record.updated_resume_analysis.clone(),
        record.latex_resume.clone(),
        record.keyword_analysis.clone(),
        record.id.map(|id| id.to_string()).unwrap_or_default(),
    ]
}

fn parse_relevance(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Splits the stored keyword cell on commas, trimming each element and
/// dropping empties. A keyword that itself contains a comma does not
/// survive the round trip — known limitation of the delimited encoding.
fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}
