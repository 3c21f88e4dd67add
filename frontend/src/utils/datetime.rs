use chrono::NaiveDateTime;

const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse a `datetime-local` input value. The backend stores draw times
/// without a timezone, so no conversion happens here.
pub fn parse_datetime_local(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(s, DATETIME_LOCAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Admin list format, e.g. "Jan 08, 2026 19:00".
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%b %d, %Y %H:%M").to_string()
}

/// Trimmed form value, `None` when blank.
pub fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split a comma- or whitespace-separated tag field.
pub fn parse_tags(value: &str) -> Vec<String> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_datetime_local() {
        let dt = parse_datetime_local("2026-01-08T19:30").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2026, 1, 8).unwrap());
        assert_eq!(dt.hour(), 19);
        assert_eq!(dt.minute(), 30);

        assert!(parse_datetime_local("2026-01-08T19:30:15").is_some());
        assert!(parse_datetime_local("").is_none());
        assert!(parse_datetime_local("tomorrow").is_none());
    }

    #[test]
    fn test_format_datetime() {
        let dt = parse_datetime_local("2026-01-08T19:00").unwrap();
        assert_eq!(format_datetime(&dt), "Jan 08, 2026 19:00");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  Pick 5  ".to_string()).as_deref(), Some("Pick 5"));
        assert_eq!(non_empty("   ".to_string()), None);
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("#rand, #lotto  #results"), vec!["#rand", "#lotto", "#results"]);
        assert!(parse_tags(" , ").is_empty());
    }
}
