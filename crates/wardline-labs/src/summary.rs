use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::{LabStatus, classify};
use crate::numeric::CellValue;
use crate::ranges::REFERENCE_RANGES;

/// A patient's lab readings keyed by catalog name, plus free-text extras
/// like "Other" and "CRP Trend".
pub type LabRecord = BTreeMap<String, CellValue>;

/// Display abbreviations for chip labels. Shortening is cosmetic only;
/// classification always uses the full catalog name.
const DISPLAY_ABBREVIATIONS: [(&str, &str); 7] = [
    ("Sodium (Na)", "Na"),
    ("Potassium (K)", "K"),
    ("Chloride (Cl)", "Cl"),
    ("Calcium (Ca)", "Ca"),
    ("Phosphorus (Ph)", "Ph"),
    ("Alkaline Phosphatase (ALP)", "ALP"),
    ("Creatinine (Scr)", "Scr"),
];

/// Chip label for a catalog name.
pub fn abbreviate(name: &str) -> &str {
    DISPLAY_ABBREVIATIONS
        .iter()
        .find(|(long, _)| *long == name)
        .map_or(name, |(_, short)| *short)
}

/// One out-of-range finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbnormalEntry {
    /// Full catalog name.
    pub name: &'static str,
    /// The cell text as entered.
    pub value: String,
    pub status: LabStatus,
}

impl AbnormalEntry {
    /// Compact chip text, e.g. `WBC: 15.2 ↑` or `Na: 129 ↓`.
    pub fn chip(&self) -> String {
        let value = if self.value.is_empty() {
            "(?)"
        } else {
            self.value.as_str()
        };
        format!("{}: {} {}", abbreviate(self.name), value, self.status.arrow())
    }
}

/// Every abnormal finding for a record, in catalog order, plus the
/// free-text Other note when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AbnormalitySummary {
    pub entries: Vec<AbnormalEntry>,
    pub other: Option<String>,
}

impl AbnormalitySummary {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.other.is_none()
    }

    /// All chip texts in display order, Other last.
    pub fn chips(&self) -> Vec<String> {
        let mut chips: Vec<String> = self.entries.iter().map(AbnormalEntry::chip).collect();
        if let Some(other) = &self.other {
            chips.push(format!("Other: {other}"));
        }
        chips
    }
}

/// Walk the catalog in declaration order and collect everything that
/// classifies low or high. The Other note rides along independently of any
/// numeric result.
pub fn summarize_abnormalities(record: &LabRecord) -> AbnormalitySummary {
    let mut summary = AbnormalitySummary::default();
    for range in &REFERENCE_RANGES {
        let Some(value) = record.get(range.name) else {
            continue;
        };
        let classification = classify(range.name, value);
        if classification.status.is_abnormal() {
            summary.entries.push(AbnormalEntry {
                name: range.name,
                value: value.as_text(),
                status: classification.status,
            });
        }
    }
    if let Some(other) = record.get("Other") {
        let text = other.as_text();
        if !text.is_empty() {
            summary.other = Some(text);
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entries: &[(&str, &str)]) -> LabRecord {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), CellValue::from(*value)))
            .collect()
    }

    #[test]
    fn collects_abnormal_entries_in_catalog_order() {
        // BTreeMap iteration would put HGB before WBC; catalog order must win.
        let summary = summarize_abnormalities(&record(&[
            ("HGB", "9"),
            ("WBC", "15.2"),
            ("Other", "hemolyzed"),
        ]));

        let names: Vec<&str> = summary.entries.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["WBC", "HGB"]);
        assert_eq!(summary.entries[0].status, LabStatus::High);
        assert_eq!(summary.entries[1].status, LabStatus::Low);
        assert_eq!(summary.other.as_deref(), Some("hemolyzed"));

        let chips = summary.chips();
        assert_eq!(
            chips,
            vec!["WBC: 15.2 \u{2191}", "HGB: 9 \u{2193}", "Other: hemolyzed"]
        );
    }

    #[test]
    fn normal_records_summarize_to_nothing() {
        let summary = summarize_abnormalities(&record(&[("WBC", "7"), ("HGB", "13")]));
        assert!(summary.is_empty());
        assert!(summary.chips().is_empty());
    }

    #[test]
    fn other_appears_without_any_abnormal_numbers() {
        let summary = summarize_abnormalities(&record(&[("WBC", "7"), ("Other", "icteric")]));
        assert_eq!(summary.chips(), vec!["Other: icteric"]);
    }

    #[test]
    fn chips_abbreviate_long_names_only_for_display() {
        let summary = summarize_abnormalities(&record(&[
            ("Alkaline Phosphatase (ALP)", "300"),
            ("Sodium (Na)", "129"),
        ]));
        assert_eq!(summary.entries[0].name, "Sodium (Na)");
        assert_eq!(
            summary.chips(),
            vec!["Na: 129 \u{2193}", "ALP: 300 \u{2191}"]
        );
    }

    #[test]
    fn free_text_values_do_not_flag() {
        let summary = summarize_abnormalities(&record(&[("WBC", "pending"), ("CRP", "")]));
        assert!(summary.is_empty());
    }
}
