use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::schema::{CURRENT_COLUMNS, CURRENT_SECTION};

/// One validated roster row, keyed by the current template's columns.
///
/// Values are stored positionally in [`CURRENT_COLUMNS`] order so the row
/// serializes and iterates in template order rather than alphabetically.
/// Constructed by the import pipeline and consumed once by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    values: Vec<String>,
}

impl ImportRow {
    /// Build a row from positional values. Short rows are padded with empty
    /// strings and long rows truncated, so the row always has one value per
    /// current-template column.
    pub fn from_values(mut values: Vec<String>) -> Self {
        values.resize(CURRENT_COLUMNS.len(), String::new());
        Self { values }
    }

    /// Value of a current-template column, or `None` for an unknown name.
    pub fn get(&self, column: &str) -> Option<&str> {
        let idx = CURRENT_COLUMNS.iter().position(|name| *name == column)?;
        Some(self.values[idx].as_str())
    }

    /// Iterate (column, value) pairs in template order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        CURRENT_COLUMNS
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Positional view of the values, in [`CURRENT_COLUMNS`] order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Overwrite the Section column. Bulk imports target a list the file
    /// itself does not know about, so the caller fills it in afterwards.
    pub fn set_section(&mut self, section: &str) {
        self.values[CURRENT_SECTION] = section.to_string();
    }
}

impl Serialize for ImportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// A patient as the rounding app tracks it: the roster columns plus the
/// app-side fields (narrative, flags, timestamps) a CSV import never carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(rename = "Patient Code")]
    pub code: String,
    #[serde(rename = "Patient Name")]
    pub name: String,
    #[serde(rename = "Patient Age")]
    pub age: String,
    #[serde(rename = "Room")]
    pub room: String,
    #[serde(rename = "Diagnosis")]
    pub diagnosis: String,
    #[serde(rename = "Section")]
    pub section: String,
    #[serde(rename = "Admitting Provider")]
    pub admitting_provider: String,
    #[serde(rename = "Diet")]
    pub diet: String,
    #[serde(rename = "Isolation")]
    pub isolation: String,
    #[serde(rename = "Comments")]
    pub comments: String,
    /// Symptom names recorded for the patient.
    #[serde(rename = "Symptoms", default)]
    pub symptoms: Vec<String>,
    /// Free-text note per symptom name.
    #[serde(rename = "Symptoms Notes", default)]
    pub symptoms_notes: BTreeMap<String, String>,
    /// Lab names currently flagged abnormal.
    #[serde(rename = "Labs Abnormal", default)]
    pub labs_abnormal: Vec<String>,
    #[serde(rename = "Done", default)]
    pub done: bool,
    #[serde(rename = "Updated At", default)]
    pub updated_at: String,
    #[serde(rename = "HPI Diagnosis", default)]
    pub hpi_diagnosis: String,
    #[serde(rename = "HPI Previous", default)]
    pub hpi_previous: String,
    #[serde(rename = "HPI Current", default)]
    pub hpi_current: String,
    #[serde(rename = "HPI Initial", default)]
    pub hpi_initial: String,
    #[serde(rename = "Patient Assessment", default)]
    pub patient_assessment: String,
    #[serde(rename = "Medication List", default)]
    pub medication_list: String,
    #[serde(rename = "Latest Notes", default)]
    pub latest_notes: String,
}

impl PatientRecord {
    /// Build a patient from a validated import row, filling the Section
    /// column with the caller's active list when the row left it blank.
    ///
    /// The free-text summary columns are decoded here: symptoms and abnormal
    /// labs split on commas, symptom notes parsed as a JSON object. Malformed
    /// note JSON degrades to no notes rather than rejecting the row.
    pub fn from_import_row(row: &ImportRow, section: &str) -> Self {
        let get = |column: &str| row.get(column).unwrap_or_default().to_string();
        let row_section = get("Section");
        Self {
            code: get("Patient Code"),
            name: get("Patient Name"),
            age: get("Patient Age"),
            room: get("Room"),
            diagnosis: get("Diagnosis"),
            section: if row_section.is_empty() {
                section.to_string()
            } else {
                row_section
            },
            admitting_provider: get("Admitting Provider"),
            diet: get("Diet"),
            isolation: get("Isolation"),
            comments: get("Comments"),
            symptoms: split_list(&get("Symptoms (comma-separated)")),
            symptoms_notes: parse_notes(&get("Symptoms Notes (JSON map)")),
            labs_abnormal: split_list(&get("Labs Abnormal (comma-separated)")),
            ..Self::default()
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn parse_notes(raw: &str) -> BTreeMap<String, String> {
    if raw.trim().is_empty() {
        return BTreeMap::new();
    }
    serde_json::from_str(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ImportRow {
        ImportRow::from_values(vec![
            "P001".to_string(),
            "Doe, Jane".to_string(),
            "54".to_string(),
            "12B".to_string(),
            "Pneumonia".to_string(),
            String::new(),
            "Dr. Smith".to_string(),
            "Regular".to_string(),
            "None".to_string(),
            "admitted overnight".to_string(),
            "Pain, Nausea".to_string(),
            r#"{"Pain":"worse at night"}"#.to_string(),
            "WBC, CRP".to_string(),
        ])
    }

    #[test]
    fn row_pads_and_truncates_to_template_width() {
        let short = ImportRow::from_values(vec!["P001".to_string()]);
        assert_eq!(short.values().len(), CURRENT_COLUMNS.len());
        assert_eq!(short.get("Patient Name"), Some(""));

        let long = ImportRow::from_values(vec![String::new(); 20]);
        assert_eq!(long.values().len(), CURRENT_COLUMNS.len());
    }

    #[test]
    fn row_serializes_in_template_order() {
        let json = serde_json::to_string(&sample_row()).unwrap();
        let code_at = json.find("Patient Code").unwrap();
        let labs_at = json.find("Labs Abnormal").unwrap();
        assert!(code_at < labs_at);
    }

    #[test]
    fn patient_from_row_fills_section_and_decodes_summaries() {
        let patient = PatientRecord::from_import_row(&sample_row(), "Oncology A");
        assert_eq!(patient.section, "Oncology A");
        assert_eq!(patient.symptoms, vec!["Pain", "Nausea"]);
        assert_eq!(
            patient.symptoms_notes.get("Pain").map(String::as_str),
            Some("worse at night")
        );
        assert_eq!(patient.labs_abnormal, vec!["WBC", "CRP"]);
    }

    #[test]
    fn patient_keeps_row_section_when_present() {
        let mut row = sample_row();
        row.set_section("Oncology B");
        let patient = PatientRecord::from_import_row(&row, "Oncology A");
        assert_eq!(patient.section, "Oncology B");
    }

    #[test]
    fn malformed_notes_degrade_to_empty() {
        let mut values = sample_row().values().to_vec();
        values[11] = "not json".to_string();
        let patient = PatientRecord::from_import_row(&ImportRow::from_values(values), "A");
        assert!(patient.symptoms_notes.is_empty());
    }
}
