use thiserror::Error;

use wardline_model::{CURRENT_COLUMNS, LEGACY_COLUMNS};

/// Structural import failures. These reject the whole file; anything softer
/// (blank rows, zero data rows) is reported through the import result
/// instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImportError {
    /// The header row matched neither roster template. Carries the
    /// normalized header cells so the report can show the file
    /// column-by-column against both templates.
    #[error("{}", render_header_mismatch(.found))]
    HeaderMismatch { found: Vec<String> },
}

fn render_header_mismatch(found: &[String]) -> String {
    let width = found.len().max(CURRENT_COLUMNS.len()).max(LEGACY_COLUMNS.len());
    let mut report = String::from("header row matches neither roster template\n");
    for idx in 0..width {
        let got = found.get(idx).map(String::as_str).unwrap_or("(none)");
        let current = CURRENT_COLUMNS.get(idx).copied().unwrap_or("(none)");
        let legacy = LEGACY_COLUMNS.get(idx).copied().unwrap_or("(none)");
        report.push_str(&format!(
            "  column {}: found \"{got}\" | current template \"{current}\" | legacy template \"{legacy}\"\n",
            idx + 1
        ));
    }
    report.push_str(&format!(
        "expected {} columns (current template) or {} columns (legacy template), found {}",
        CURRENT_COLUMNS.len(),
        LEGACY_COLUMNS.len(),
        found.len()
    ));
    report
}
