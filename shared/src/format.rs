//! Display strings for result cards.

use chrono::{Datelike, NaiveDateTime};

const MONTHS: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

/// Ordinal suffix for a day of the month. 11, 12 and 13 always take "TH".
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&day) {
        return "TH";
    }
    match day % 10 {
        1 => "ST",
        2 => "ND",
        3 => "RD",
        _ => "TH",
    }
}

/// Format a draw date as `8TH JANUARY, 2026`.
pub fn format_draw_date<D: Datelike>(date: &D) -> String {
    let day = date.day();
    format!(
        "{}{} {}, {}",
        day,
        ordinal_suffix(day),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Three-character event number derived from a result identifier.
///
/// Uses the last three digits when the identifier holds at least three.
/// Otherwise the last three characters of the raw identifier are used, so
/// non-digit characters can end up in the output.
pub fn format_event_number(id: &str) -> String {
    let digits: Vec<char> = id.chars().filter(char::is_ascii_digit).collect();
    let tail: String = if digits.len() >= 3 {
        digits[digits.len() - 3..].iter().collect()
    } else {
        let chars: Vec<char> = id.chars().collect();
        chars[chars.len().saturating_sub(3)..].iter().collect()
    };
    format!("{:0>3}", tail)
}

/// Card heading for a game, e.g. `RAND STAR LOTTO DRAW RESULTS`.
pub fn build_heading(game_name: &str) -> String {
    let cleaned = remove_ignore_ascii_case(game_name, "rand");
    let cleaned = cleaned.trim();
    let base = if cleaned.is_empty() { game_name } else { cleaned };

    let upper = base.to_uppercase();
    let title = if upper.contains("DRAW") {
        upper
    } else {
        format!("{} DRAW", upper)
    };
    format!("RAND {} RESULTS", title)
}

/// Verification timestamp as `08 Jan 2026 20:15`.
pub fn format_verified_at(at: &NaiveDateTime) -> String {
    at.format("%d %b %Y %H:%M").to_string()
}

/// Remove every occurrence of an ASCII `needle`, ignoring case.
fn remove_ignore_ascii_case(haystack: &str, needle: &str) -> String {
    let bytes = haystack.as_bytes();
    let needle = needle.as_bytes();
    let mut out = String::with_capacity(haystack.len());
    let mut start = 0;
    let mut i = 0;

    while i + needle.len() <= bytes.len() {
        if bytes[i..i + needle.len()].eq_ignore_ascii_case(needle) {
            // Matched bytes are ASCII, so both ends sit on char boundaries.
            out.push_str(&haystack[start..i]);
            i += needle.len();
            start = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&haystack[start..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
    }

    #[test]
    fn test_ordinal_suffix_all_days() {
        for day in 1..=31 {
            let expected = if (11..=13).contains(&day) {
                "TH"
            } else {
                match day % 10 {
                    1 => "ST",
                    2 => "ND",
                    3 => "RD",
                    _ => "TH",
                }
            };
            assert_eq!(ordinal_suffix(day), expected, "day {}", day);
        }
    }

    #[test]
    fn test_format_draw_date() {
        assert_eq!(format_draw_date(&date(21)), "21ST JANUARY, 2026");
        assert_eq!(format_draw_date(&date(11)), "11TH JANUARY, 2026");
        assert_eq!(format_draw_date(&date(3)), "3RD JANUARY, 2026");
        assert_eq!(format_draw_date(&date(22)), "22ND JANUARY, 2026");
        assert_eq!(format_draw_date(&date(12)), "12TH JANUARY, 2026");
    }

    #[test]
    fn test_format_draw_date_month_names() {
        let d = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert_eq!(format_draw_date(&d), "1ST SEPTEMBER, 2025");

        let dt = NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap();
        assert_eq!(format_draw_date(&dt), "31ST DECEMBER, 2025");
    }

    #[test]
    fn test_event_number_from_digits() {
        assert_eq!(format_event_number("RND-000045"), "045");
        assert_eq!(format_event_number("12345"), "345");
        assert_eq!(format_event_number("4-5-6"), "456");
    }

    #[test]
    fn test_event_number_fallback_keeps_raw_characters() {
        assert_eq!(format_event_number("abc"), "abc");
        assert_eq!(format_event_number("ab"), "0ab");
        assert_eq!(format_event_number("12"), "012");
        assert_eq!(format_event_number("7"), "007");
        assert_eq!(format_event_number("A1B2"), "1B2");
        assert_eq!(format_event_number(""), "000");
    }

    #[test]
    fn test_build_heading() {
        assert_eq!(build_heading("Rand Bingo4"), "RAND BINGO4 DRAW RESULTS");
        assert_eq!(build_heading("Star Lotto Draw"), "RAND STAR LOTTO DRAW RESULTS");
        assert_eq!(build_heading("SIKA KESE"), "RAND SIKA KESE DRAW RESULTS");
    }

    #[test]
    fn test_build_heading_only_rand() {
        assert_eq!(build_heading("RAND"), "RAND RAND DRAW RESULTS");
        assert_eq!(build_heading("  rand  "), "RAND   RAND   DRAW RESULTS");
    }

    #[test]
    fn test_build_heading_removes_every_occurrence() {
        assert_eq!(build_heading("RandRAND Golden"), "RAND GOLDEN DRAW RESULTS");
    }

    #[test]
    fn test_build_heading_non_ascii() {
        assert_eq!(build_heading("Samedi Soirée"), "RAND SAMEDI SOIRÉE DRAW RESULTS");
    }

    #[test]
    fn test_format_verified_at() {
        let at = NaiveDate::from_ymd_opt(2026, 1, 8)
            .unwrap()
            .and_hms_opt(20, 15, 0)
            .unwrap();
        assert_eq!(format_verified_at(&at), "08 Jan 2026 20:15");
    }
}
