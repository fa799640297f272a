use serde::Serialize;

use crate::numeric::CellValue;
use crate::ranges::reference_range;

/// Where a value sits relative to its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabStatus {
    Low,
    Normal,
    High,
}

impl LabStatus {
    pub fn is_abnormal(self) -> bool {
        !matches!(self, LabStatus::Normal)
    }

    /// Directional glyph used on chips. Normal has no direction.
    pub fn arrow(self) -> &'static str {
        match self {
            LabStatus::High => "\u{2191}",
            LabStatus::Low => "\u{2193}",
            LabStatus::Normal => "",
        }
    }
}

/// Result of comparing one cell against its named range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabClassification {
    pub status: LabStatus,
    pub parsed: Option<f64>,
}

/// Classify a cell against the named reference range.
///
/// Total on purpose: an unknown name, an empty cell, or text with no number
/// in it all classify as normal. The classifier is a display hint and must
/// never block data entry, so "can't tell" means "don't alarm". A value
/// sitting exactly on a bound is normal (strict comparisons).
pub fn classify(name: &str, value: &CellValue) -> LabClassification {
    let Some(range) = reference_range(name) else {
        return LabClassification {
            status: LabStatus::Normal,
            parsed: None,
        };
    };
    let Some(parsed) = value.parse_numeric() else {
        return LabClassification {
            status: LabStatus::Normal,
            parsed: None,
        };
    };
    let status = if parsed < range.low {
        LabStatus::Low
    } else if parsed > range.high {
        LabStatus::High
    } else {
        LabStatus::Normal
    };
    LabClassification {
        status,
        parsed: Some(parsed),
    }
}
