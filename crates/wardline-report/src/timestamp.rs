use chrono::DateTime;

/// Placeholder for missing values, matching the app's UI.
pub const PLACEHOLDER: &str = "\u{2014}";

/// Render an RFC 3339 timestamp as `YYYY-MM-DD HH:MM`, in the timestamp's
/// own offset. Empty input renders the placeholder; anything unparseable is
/// echoed verbatim rather than dropped.
pub fn format_timestamp(iso: &str) -> String {
    let trimmed = iso.trim();
    if trimmed.is_empty() {
        return PLACEHOLDER.to_string();
    }
    match DateTime::parse_from_rfc3339(trimmed) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_to_minutes() {
        assert_eq!(format_timestamp("2026-08-06T09:30:12Z"), "2026-08-06 09:30");
        assert_eq!(
            format_timestamp("2026-08-06T09:30:12+03:00"),
            "2026-08-06 09:30"
        );
    }

    #[test]
    fn empty_renders_the_placeholder() {
        assert_eq!(format_timestamp(""), PLACEHOLDER);
        assert_eq!(format_timestamp("   "), PLACEHOLDER);
    }

    #[test]
    fn unparseable_input_is_echoed() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
