use wardline_model::{CURRENT_COLUMNS, ImportMode, LEGACY_COLUMNS};

use crate::error::ImportError;

/// Normalize a header cell: trim, collapse internal whitespace runs
/// (including non-breaking spaces) to single spaces, drop a stray BOM.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Match a header row against the two roster templates.
///
/// The current template requires an exact ordered match, case included; the
/// legacy template is matched case-insensitively. The asymmetry is
/// deliberate: old hospital exports arrived with inconsistent casing, while
/// the current template is produced by the app itself and should round-trip
/// byte-exact.
pub fn validate_header(header: &[String]) -> Result<ImportMode, ImportError> {
    let cells: Vec<String> = header
        .iter()
        .map(|raw| normalize_header(raw))
        .collect();

    if cells.len() == CURRENT_COLUMNS.len()
        && cells
            .iter()
            .zip(CURRENT_COLUMNS.iter())
            .all(|(got, want)| got == want)
    {
        return Ok(ImportMode::Current);
    }

    if cells.len() == LEGACY_COLUMNS.len()
        && cells
            .iter()
            .zip(LEGACY_COLUMNS.iter())
            .all(|(got, want)| got.eq_ignore_ascii_case(want))
    {
        return Ok(ImportMode::Legacy);
    }

    Err(ImportError::HeaderMismatch { found: cells })
}
