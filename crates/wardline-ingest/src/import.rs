use serde::Serialize;
use tracing::debug;

use wardline_model::{CURRENT_COLUMNS, ImportMode, ImportRow, LEGACY_COLUMNS};

use crate::delimiter::detect_delimiter;
use crate::error::ImportError;
use crate::header::validate_header;
use crate::scanner::parse;

/// Where each legacy column lands in the current template. Everything is a
/// straight carry-over except "Cause Of Admission", which the app renamed to
/// "Diagnosis".
const LEGACY_TO_CURRENT: [(usize, usize); 9] = [
    (0, 0), // Patient Code
    (1, 1), // Patient Name
    (2, 2), // Patient Age
    (3, 3), // Room
    (4, 6), // Admitting Provider
    (5, 4), // Cause Of Admission -> Diagnosis
    (6, 7), // Diet
    (7, 8), // Isolation
    (8, 9), // Comments
];

/// Outcome of a successful import run.
#[derive(Debug, Clone, Serialize)]
pub struct Import {
    /// Template the header matched. `None` only for a file with no rows at
    /// all (nothing to match against).
    pub mode: Option<ImportMode>,
    /// Validated rows in source order, one per non-blank data row.
    pub rows: Vec<ImportRow>,
}

impl Import {
    /// True when no data rows survived blank filtering. Not an error; the
    /// caller decides whether to warn.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Pad or truncate a raw row to the given template width. Total by design:
/// ragged input is a normalization concern, not a failure.
pub fn normalize_row(row: &[String], width: usize) -> Vec<String> {
    let mut out = vec![String::new(); width];
    for (slot, value) in out.iter_mut().zip(row.iter()) {
        slot.clone_from(value);
    }
    out
}

/// Rearrange a legacy-width row into current-template order. Columns the
/// legacy template never had (Section, Symptoms, Symptoms Notes, Labs
/// Abnormal) come back empty for the caller to fill.
pub fn remap_legacy_row(row: &[String]) -> Vec<String> {
    let mut out = vec![String::new(); CURRENT_COLUMNS.len()];
    for (legacy_idx, current_idx) in LEGACY_TO_CURRENT {
        if let Some(value) = row.get(legacy_idx) {
            out[current_idx].clone_from(value);
        }
    }
    out
}

/// Run the whole pipeline over raw file text: detect the delimiter, parse,
/// match the header against the two templates, then normalize (and remap,
/// for legacy files) every non-blank data row.
///
/// Pure and stateless; the detected mode travels in the result rather than
/// in module state. Zero data rows is a valid outcome, not an error.
pub fn import_rows(text: &str) -> Result<Import, ImportError> {
    let delimiter = detect_delimiter(text);
    let table = parse(text, delimiter);

    let Some((header, data)) = table.split_first() else {
        return Ok(Import {
            mode: None,
            rows: Vec::new(),
        });
    };

    let mode = validate_header(header)?;

    let rows: Vec<ImportRow> = data
        .iter()
        .filter(|row| !is_blank(row))
        .map(|row| match mode {
            ImportMode::Current => {
                ImportRow::from_values(normalize_row(row, CURRENT_COLUMNS.len()))
            }
            ImportMode::Legacy => {
                let normalized = normalize_row(row, LEGACY_COLUMNS.len());
                ImportRow::from_values(remap_legacy_row(&normalized))
            }
        })
        .collect();

    debug!(
        mode = %mode,
        delimiter = ?delimiter,
        rows = rows.len(),
        "validated roster import"
    );

    Ok(Import {
        mode: Some(mode),
        rows,
    })
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}
