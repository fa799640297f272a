//! Adult reference ranges for the labs the rounding grid tracks.
//!
//! Declaration order is display order: chips and summaries walk this table
//! top to bottom, so reordering entries reorders every downstream view.
//! Ranges are for display classification only, not diagnosis.

/// A named inclusive reference range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceRange {
    pub name: &'static str,
    pub low: f64,
    pub high: f64,
}

/// The fixed lab catalog. "CRP Trend" and "Other" are free text and have no
/// range on purpose.
pub const REFERENCE_RANGES: [ReferenceRange; 15] = [
    ReferenceRange { name: "WBC", low: 4.0, high: 11.0 },
    ReferenceRange { name: "HGB", low: 12.0, high: 16.0 },
    ReferenceRange { name: "PLT", low: 150.0, high: 450.0 },
    ReferenceRange { name: "ANC", low: 1.5, high: 8.0 },
    ReferenceRange { name: "CRP", low: 0.0, high: 5.0 },
    ReferenceRange { name: "Albumin", low: 3.5, high: 5.0 },
    ReferenceRange { name: "Sodium (Na)", low: 135.0, high: 145.0 },
    ReferenceRange { name: "Potassium (K)", low: 3.5, high: 5.1 },
    ReferenceRange { name: "Chloride (Cl)", low: 98.0, high: 107.0 },
    ReferenceRange { name: "Calcium (Ca)", low: 8.5, high: 10.5 },
    ReferenceRange { name: "Phosphorus (Ph)", low: 2.5, high: 4.5 },
    ReferenceRange { name: "Alkaline Phosphatase (ALP)", low: 44.0, high: 147.0 },
    ReferenceRange { name: "Creatinine (Scr)", low: 0.6, high: 1.3 },
    ReferenceRange { name: "BUN", low: 7.0, high: 20.0 },
    ReferenceRange { name: "Total Bile", low: 0.1, high: 1.2 },
];

/// Look up a catalog entry by its exact display name.
pub fn reference_range(name: &str) -> Option<&'static ReferenceRange> {
    REFERENCE_RANGES.iter().find(|range| range.name == name)
}
