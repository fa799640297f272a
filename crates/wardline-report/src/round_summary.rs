use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use wardline_labs::{CellValue, LabRecord, LabStatus, summarize_abnormalities};
use wardline_model::{
    CTCAE_ITEMS, CTCAE_MAX_SCORE, ESAS_ITEMS, ESAS_MAX_SCORE, PatientRecord, as_bool,
    normalize_score,
};

use crate::timestamp::{PLACEHOLDER, format_timestamp};

/// Symptom scores as stored in the sheet: item name -> score cell, with
/// "<item> Note" companions and flags like "Enabled".
pub type ScoreRecord = BTreeMap<String, CellValue>;

/// Everything the summary needs for one patient.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundBundle {
    pub patient: PatientRecord,
    #[serde(default)]
    pub esas: Option<ScoreRecord>,
    #[serde(default)]
    pub ctcae: Option<ScoreRecord>,
    #[serde(default)]
    pub labs: Option<LabRecord>,
}

/// Build the plain-text round summary for a patient bundle.
///
/// Local and deterministic: the remote summarizer proxy the browser app can
/// call is out of scope here, so this is the whole story. Sections with
/// nothing to say are omitted entirely.
pub fn build_round_summary(bundle: &RoundBundle) -> String {
    let patient = &bundle.patient;
    let mut lines: Vec<String> = Vec::new();

    let name = first_non_empty(&[patient.name.as_str(), patient.code.as_str()], "Unknown");
    let age = if patient.age.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        format!("{} yrs", patient.age)
    };
    lines.push(format!(
        "Patient: {name} \u{2014} Age: {age}, Room: {}",
        or_placeholder(&patient.room)
    ));
    lines.push(format!(
        "Admitting Provider: {}",
        or_placeholder(&patient.admitting_provider)
    ));
    lines.push(format!("Diagnosis: {}", or_placeholder(&patient.diagnosis)));
    lines.push(format!(
        "Diet: {} | Isolation: {}",
        or_placeholder(&patient.diet),
        or_placeholder(&patient.isolation)
    ));
    if !patient.comments.is_empty() {
        lines.push(format!("Comments: {}", patient.comments));
    }

    push_hpi(&mut lines, patient);

    if !patient.patient_assessment.is_empty() {
        lines.push(format!("Assessment: {}", patient.patient_assessment));
    }
    if !patient.medication_list.is_empty() {
        lines.push(format!("Medications: {}", patient.medication_list));
    }
    if !patient.latest_notes.is_empty() {
        lines.push(format!("Latest Notes: {}", patient.latest_notes));
    }

    if let Some(esas) = &bundle.esas {
        let scored = score_lines(esas, &ESAS_ITEMS, ESAS_MAX_SCORE);
        if !scored.is_empty() {
            lines.push("ESAS (0\u{2013}10):".to_string());
            lines.extend(scored.into_iter().map(|line| format!("\u{2022} {line}")));
        }
    }

    if let Some(ctcae) = &bundle.ctcae {
        let enabled = ctcae
            .get("Enabled")
            .map(|cell| as_bool(&cell.as_text()))
            .unwrap_or(false);
        if enabled {
            let mut scored = score_lines(ctcae, &CTCAE_ITEMS, CTCAE_MAX_SCORE);
            if let Some(other) = non_empty_text(ctcae.get("Other")) {
                scored.push(format!("Other: {other}"));
            }
            if !scored.is_empty() {
                lines.push("CTCAE (0\u{2013}4):".to_string());
                lines.extend(scored.into_iter().map(|line| format!("\u{2022} {line}")));
            }
        } else {
            lines.push("CTCAE: disabled".to_string());
        }
    }

    if let Some(labs) = &bundle.labs {
        push_labs(&mut lines, labs);
    }

    lines.push(format!(
        "Last Updated: {}",
        format_timestamp(&patient.updated_at)
    ));

    lines.join("\n")
}

fn push_hpi(lines: &mut Vec<String>, patient: &PatientRecord) {
    let mut section: Vec<String> = Vec::new();
    if !patient.hpi_diagnosis.is_empty() {
        section.push(format!("HPI Diagnosis: {}", patient.hpi_diagnosis));
    }
    if !patient.hpi_initial.is_empty() {
        section.push(format!("Initial: {}", patient.hpi_initial));
    }
    if !patient.hpi_previous.is_empty() {
        section.push(format!("Previous: {}", patient.hpi_previous));
    }
    if !patient.hpi_current.is_empty() {
        section.push(format!("Current: {}", patient.hpi_current));
    }
    if !section.is_empty() {
        lines.push("HPI:".to_string());
        lines.append(&mut section);
    }
}

fn push_labs(lines: &mut Vec<String>, labs: &LabRecord) {
    let summary = summarize_abnormalities(labs);
    if summary.is_empty() {
        return;
    }
    lines.push("Labs:".to_string());
    let high: Vec<String> = summary
        .entries
        .iter()
        .filter(|entry| entry.status == LabStatus::High)
        .map(|entry| format!("\u{2022} {}", entry.chip()))
        .collect();
    if !high.is_empty() {
        lines.push("High:".to_string());
        lines.extend(high);
    }
    let low: Vec<String> = summary
        .entries
        .iter()
        .filter(|entry| entry.status == LabStatus::Low)
        .map(|entry| format!("\u{2022} {}", entry.chip()))
        .collect();
    if !low.is_empty() {
        lines.push("Low:".to_string());
        lines.extend(low);
    }
    if let Some(other) = &summary.other {
        lines.push(format!("Other: {other}"));
    }
}

/// "<Item>: <score> (<note>)" for every item with a non-empty score cell.
/// Scores clamp into range when numeric; free text shows as entered.
fn score_lines(record: &ScoreRecord, items: &[&str], max: u8) -> Vec<String> {
    let mut lines = Vec::new();
    for item in items {
        let Some(raw) = non_empty_text(record.get(*item)) else {
            continue;
        };
        let shown = match normalize_score(&raw, max) {
            Some(score) => score.to_string(),
            None => raw,
        };
        let note = non_empty_text(record.get(&format!("{item} Note")));
        match note {
            Some(note) => lines.push(format!("{item}: {shown} ({note})")),
            None => lines.push(format!("{item}: {shown}")),
        }
    }
    lines
}

fn non_empty_text(cell: Option<&CellValue>) -> Option<String> {
    let text = cell?.as_text();
    if text.is_empty() { None } else { Some(text) }
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() { PLACEHOLDER } else { value }
}

fn first_non_empty<'a>(candidates: &[&'a str], fallback: &'a str) -> &'a str {
    candidates
        .iter()
        .copied()
        .find(|value| !value.is_empty())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_bundle_renders_placeholders() {
        let bundle = RoundBundle {
            patient: PatientRecord {
                code: "P001".to_string(),
                ..PatientRecord::default()
            },
            ..RoundBundle::default()
        };
        let summary = build_round_summary(&bundle);
        assert!(summary.starts_with("Patient: P001 \u{2014} Age: \u{2014}, Room: \u{2014}"));
        assert!(summary.ends_with("Last Updated: \u{2014}"));
        assert!(!summary.contains("ESAS"));
        assert!(!summary.contains("Labs:"));
    }

    #[test]
    fn disabled_ctcae_is_called_out() {
        let mut ctcae = ScoreRecord::new();
        ctcae.insert("Enabled".to_string(), CellValue::from("FALSE"));
        ctcae.insert("Fatigue".to_string(), CellValue::from("3"));
        let bundle = RoundBundle {
            ctcae: Some(ctcae),
            ..RoundBundle::default()
        };
        let summary = build_round_summary(&bundle);
        assert!(summary.contains("CTCAE: disabled"));
        assert!(!summary.contains("Fatigue"));
    }

    #[test]
    fn scores_keep_notes_and_clamp() {
        let mut esas = ScoreRecord::new();
        esas.insert("Pain".to_string(), CellValue::from("12"));
        esas.insert("Pain Note".to_string(), CellValue::from("worse at night"));
        esas.insert("Nausea".to_string(), CellValue::from("1"));
        let bundle = RoundBundle {
            esas: Some(esas),
            ..RoundBundle::default()
        };
        let summary = build_round_summary(&bundle);
        assert!(summary.contains("\u{2022} Pain: 10 (worse at night)"));
        assert!(summary.contains("\u{2022} Nausea: 1"));
    }
}
