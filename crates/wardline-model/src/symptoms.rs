//! Symptom scoring catalogs: ESAS (0-10 per item) and CTCAE (0-4 per item).
//!
//! Scores are stored as free text in the backing sheet, so everything here
//! normalizes rather than validates: out-of-range numbers clamp, junk reads
//! as unscored.

/// Edmonton Symptom Assessment System items, grid order.
pub const ESAS_ITEMS: [&str; 9] = [
    "Pain",
    "Tiredness",
    "Drowsiness",
    "Nausea",
    "Lack of Appetite",
    "Shortness of Breath",
    "Depression",
    "Anxiety",
    "Wellbeing",
];

/// Highest ESAS score.
pub const ESAS_MAX_SCORE: u8 = 10;

/// CTCAE adverse-event items, grid order.
pub const CTCAE_ITEMS: [&str; 12] = [
    "Fatigue",
    "Sleep",
    "Nausea",
    "Vomiting",
    "Constipation",
    "Diarrhea",
    "Dyspnea",
    "Odynophagia",
    "Dysphagia",
    "Confusion/Delirium",
    "Peripheral Neuropathy",
    "Mucositis",
];

/// Highest CTCAE grade.
pub const CTCAE_MAX_SCORE: u8 = 4;

/// Read a stored score cell. Empty means unscored; anything numeric rounds
/// and clamps into `0..=max`; anything else is treated as unscored.
pub fn normalize_score(raw: &str, max: u8) -> Option<u8> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let n: f64 = trimmed.parse().ok()?;
    if n.is_nan() {
        return None;
    }
    let clamped = n.round().clamp(0.0, f64::from(max));
    Some(clamped as u8)
}

/// Sheet-style boolean coercion for flags like the CTCAE Enabled toggle.
/// Accepts "true"/"1"/"yes" in any case; everything else is false.
pub fn as_bool(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}
