use std::fmt;

use serde::{Deserialize, Serialize};

/// Column order of the current roster template. Import and export both use
/// this exact sequence; position is meaningful.
pub const CURRENT_COLUMNS: [&str; 13] = [
    "Patient Code",
    "Patient Name",
    "Patient Age",
    "Room",
    "Diagnosis",
    "Section",
    "Admitting Provider",
    "Diet",
    "Isolation",
    "Comments",
    "Symptoms (comma-separated)",
    "Symptoms Notes (JSON map)",
    "Labs Abnormal (comma-separated)",
];

/// Column order of the retired hospital export template. Narrower than the
/// current template and uses "Cause Of Admission" where the app says
/// "Diagnosis".
pub const LEGACY_COLUMNS: [&str; 9] = [
    "Patient Code",
    "Patient Name",
    "Patient Age",
    "Room",
    "Admitting Provider",
    "Cause Of Admission",
    "Diet",
    "Isolation",
    "Comments",
];

/// Index of "Cause Of Admission" within [`LEGACY_COLUMNS`].
pub const LEGACY_CAUSE_OF_ADMISSION: usize = 5;

/// Index of "Diagnosis" within [`CURRENT_COLUMNS`].
pub const CURRENT_DIAGNOSIS: usize = 4;

/// Index of "Section" within [`CURRENT_COLUMNS`].
pub const CURRENT_SECTION: usize = 5;

/// Which roster template a header row matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// The 13-column template with symptom and lab summary fields.
    Current,
    /// The retired 9-column hospital export.
    Legacy,
}

impl ImportMode {
    pub fn column_count(self) -> usize {
        match self {
            ImportMode::Current => CURRENT_COLUMNS.len(),
            ImportMode::Legacy => LEGACY_COLUMNS.len(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImportMode::Current => "current",
            ImportMode::Legacy => "legacy",
        }
    }
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
