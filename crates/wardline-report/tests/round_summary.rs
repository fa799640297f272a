//! Rendering tests for the round summary over a realistic bundle.

use wardline_report::{RoundBundle, build_round_summary};

fn bundle_json() -> &'static str {
    r#"{
        "patient": {
            "Patient Code": "P001",
            "Patient Name": "Doe, Jane",
            "Patient Age": "54",
            "Room": "12B",
            "Diagnosis": "Pneumonia",
            "Section": "Ward A",
            "Admitting Provider": "Dr. Smith",
            "Diet": "Regular",
            "Isolation": "None",
            "Comments": "stable overnight",
            "HPI Diagnosis": "CAP",
            "HPI Initial": "admitted with fever",
            "Updated At": "2026-08-06T09:30:00Z"
        },
        "esas": {
            "Pain": "3",
            "Pain Note": "worse at night",
            "Nausea": 1
        },
        "ctcae": {
            "Enabled": "FALSE"
        },
        "labs": {
            "WBC": "15.2",
            "HGB": "9",
            "Other": "hemolyzed"
        }
    }"#
}

#[test]
fn full_bundle_renders_every_section() {
    let bundle: RoundBundle = serde_json::from_str(bundle_json()).unwrap();
    let summary = build_round_summary(&bundle);
    insta::assert_snapshot!(summary, @r"
    Patient: Doe, Jane — Age: 54 yrs, Room: 12B
    Admitting Provider: Dr. Smith
    Diagnosis: Pneumonia
    Diet: Regular | Isolation: None
    Comments: stable overnight
    HPI:
    HPI Diagnosis: CAP
    Initial: admitted with fever
    ESAS (0–10):
    • Pain: 3 (worse at night)
    • Nausea: 1
    CTCAE: disabled
    Labs:
    High:
    • WBC: 15.2 ↑
    Low:
    • HGB: 9 ↓
    Other: hemolyzed
    Last Updated: 2026-08-06 09:30
    ");
}

#[test]
fn summaries_are_deterministic() {
    let bundle: RoundBundle = serde_json::from_str(bundle_json()).unwrap();
    assert_eq!(build_round_summary(&bundle), build_round_summary(&bundle));
}
