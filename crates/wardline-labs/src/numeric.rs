use serde::{Deserialize, Serialize};

/// A lab cell as it arrives from the sheet or a JSON payload: either an
/// actual number or free text to extract one from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// The cell as display text.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Number(n) => format!("{n}"),
            CellValue::Text(s) => s.trim().to_string(),
        }
    }

    /// The numeric reading of the cell, if any.
    pub fn parse_numeric(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => n.is_finite().then_some(*n),
            CellValue::Text(s) => parse_numeric(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// Extract the first number from free text: an optional leading minus,
/// digits, optional decimal fraction.
///
/// Entries like "12.3 (H)" or "350 repeat pending" still yield a usable
/// value. Comparators are not understood, so "< 4" reads as 4; a range like
/// "4-8" reads as 4. First number wins, by design.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let bytes = trimmed.as_bytes();
    let mut start = 0;
    while start < bytes.len() {
        let digits_at = if bytes[start] == b'-' { start + 1 } else { start };
        if digits_at < bytes.len() && bytes[digits_at].is_ascii_digit() {
            let mut end = digits_at;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
            // Only take the dot when a digit follows it, so "12." reads as 12.
            if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
                end += 1;
                while end < bytes.len() && bytes[end].is_ascii_digit() {
                    end += 1;
                }
            }
            return trimmed[start..end].parse().ok();
        }
        start += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(parse_numeric("12.3"), Some(12.3));
        assert_eq!(parse_numeric("7"), Some(7.0));
        assert_eq!(parse_numeric("-0.5"), Some(-0.5));
    }

    #[test]
    fn annotated_values_yield_the_number() {
        assert_eq!(parse_numeric("12.3 (H)"), Some(12.3));
        assert_eq!(parse_numeric("pending: 8"), Some(8.0));
        assert_eq!(parse_numeric("12. repeat"), Some(12.0));
    }

    #[test]
    fn comparators_and_ranges_read_the_first_number() {
        assert_eq!(parse_numeric("< 4"), Some(4.0));
        assert_eq!(parse_numeric("4-8"), Some(4.0));
    }

    #[test]
    fn minus_binds_only_when_adjacent_to_digits() {
        assert_eq!(parse_numeric("a-b3"), Some(3.0));
        assert_eq!(parse_numeric("-3"), Some(-3.0));
        assert_eq!(parse_numeric("a -3"), Some(-3.0));
    }

    #[test]
    fn numberless_text_is_none() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("   "), None);
        assert_eq!(parse_numeric("hemolyzed"), None);
        assert_eq!(parse_numeric("-"), None);
    }

    #[test]
    fn numeric_cells_pass_through_when_finite() {
        assert_eq!(CellValue::Number(7.0).parse_numeric(), Some(7.0));
        assert_eq!(CellValue::Number(f64::NAN).parse_numeric(), None);
        assert_eq!(CellValue::Number(f64::INFINITY).parse_numeric(), None);
    }

    #[test]
    fn cells_deserialize_from_json_numbers_and_strings() {
        let n: CellValue = serde_json::from_str("15.2").unwrap();
        assert_eq!(n.parse_numeric(), Some(15.2));
        let s: CellValue = serde_json::from_str("\"15.2 (H)\"").unwrap();
        assert_eq!(s.parse_numeric(), Some(15.2));
    }
}
