//! Date heuristics for pinoymovieshub.ph
//!
//! Dates on the site are free text such as `"Jan. 05, 2021"` or just `"2021"`.
//! This is not a general date parser: it reproduces one fixed fallback ladder.

use chrono::Datelike;

use super::take_last_chars;

/// Year used when no current year is available.
const SENTINEL_YEAR: &str = "0001";

/// Month prefixes in calendar order.
const MONTHS: [(&str, &str); 12] = [
    ("jan", "01"),
    ("feb", "02"),
    ("mar", "03"),
    ("apr", "04"),
    ("may", "05"),
    ("jun", "06"),
    ("jul", "07"),
    ("aug", "08"),
    ("sep", "09"),
    ("oct", "10"),
    ("nov", "11"),
    ("dec", "12"),
];

/// Parse loose date text into `YYYY-MM-DD`, defaulting a missing year to the
/// current calendar year.
///
/// # Examples
/// ```
/// use pinoyhub_core::parser::parse_date_from_string;
///
/// assert_eq!(parse_date_from_string(Some("Jan. 05, 2021")).as_deref(), Some("2021-01-05"));
/// assert_eq!(parse_date_from_string(Some("2019")).as_deref(), Some("2019-01-01"));
/// assert_eq!(parse_date_from_string(Some("")), None);
/// assert_eq!(parse_date_from_string(None), None);
/// ```
pub fn parse_date_from_string(text: Option<&str>) -> Option<String> {
    let current_year = chrono::Local::now().year();
    parse_date_with_fallback_year(text, Some(current_year))
}

/// Parse loose date text into `YYYY-MM-DD` with an explicit fallback year.
///
/// # Arguments
/// * `text` - Date text, may be absent or blank
/// * `fallback_year` - Year used when the text carries none; `None` yields `0001`
///
/// # Returns
/// * `None` if `text` is absent or blank
/// * `Some(date)` otherwise, with day and month defaulting to `01`
pub fn parse_date_with_fallback_year(
    text: Option<&str>,
    fallback_year: Option<i32>,
) -> Option<String> {
    let text = text?;
    if text.trim().is_empty() {
        return None;
    }

    let mut day = "";
    let mut month = "";
    let year;

    let segments: Vec<&str> = text.split('.').collect();
    if segments.len() > 1 {
        // "05, 2021": trailing four characters are the year, the rest the day
        let day_year = segments[segments.len() - 1].trim();
        year = take_last_chars(day_year, 4);
        day = day_year[..day_year.len() - year.len()]
            .trim()
            .trim_end_matches(',')
            .trim();
        month = month_number(segments[0]);
    } else {
        year = take_last_chars(segments[0].trim(), 4);
    }

    if day.is_empty() {
        day = "01";
    }
    if month.is_empty() {
        month = "01";
    }
    let year = if year.trim().is_empty() {
        fallback_year
            .map(|y| format!("{:04}", y))
            .unwrap_or_else(|| SENTINEL_YEAR.to_string())
    } else {
        year.to_string()
    };

    Some(format!("{}-{}-{}", year, month, day))
}

/// Two-digit month for a month name or abbreviation, empty if unrecognized.
fn month_number(text: &str) -> &'static str {
    let lower = text.trim().to_lowercase();
    MONTHS
        .iter()
        .find(|(prefix, _)| lower.starts_with(prefix))
        .map(|(_, number)| *number)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_date() {
        assert_eq!(
            parse_date_with_fallback_year(Some("Jan. 05, 2021"), Some(2030)).as_deref(),
            Some("2021-01-05")
        );
        assert_eq!(
            parse_date_with_fallback_year(Some("Dec. 31, 1999"), Some(2030)).as_deref(),
            Some("1999-12-31")
        );
        assert_eq!(
            parse_date_with_fallback_year(Some("  Sep. 9, 2022 "), Some(2030)).as_deref(),
            Some("2022-09-9")
        );
    }

    #[test]
    fn test_bare_year() {
        assert_eq!(
            parse_date_with_fallback_year(Some("2019"), Some(2030)).as_deref(),
            Some("2019-01-01")
        );
        assert_eq!(
            parse_date_with_fallback_year(Some(" 2019 "), Some(2030)).as_deref(),
            Some("2019-01-01")
        );
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(parse_date_with_fallback_year(None, Some(2030)), None);
        assert_eq!(parse_date_with_fallback_year(Some(""), Some(2030)), None);
        assert_eq!(parse_date_with_fallback_year(Some("   "), Some(2030)), None);
    }

    #[test]
    fn test_unknown_month_defaults() {
        assert_eq!(
            parse_date_with_fallback_year(Some("Foo. 12, 2020"), Some(2030)).as_deref(),
            Some("2020-01-12")
        );
    }

    #[test]
    fn test_missing_day_defaults() {
        assert_eq!(
            parse_date_with_fallback_year(Some("Mar. 2018"), Some(2030)).as_deref(),
            Some("2018-03-01")
        );
    }

    #[test]
    fn test_missing_year_uses_fallback() {
        assert_eq!(
            parse_date_with_fallback_year(Some("Jun."), Some(2030)).as_deref(),
            Some("2030-06-01")
        );
    }

    #[test]
    fn test_missing_year_without_fallback_uses_sentinel() {
        assert_eq!(
            parse_date_with_fallback_year(Some("Jun."), None).as_deref(),
            Some("0001-06-01")
        );
    }

    #[test]
    fn test_month_number() {
        assert_eq!(month_number("Jan"), "01");
        assert_eq!(month_number("SEPT"), "09");
        assert_eq!(month_number("december"), "12");
        assert_eq!(month_number("Ene"), "");
    }

    #[test]
    fn test_current_year_fallback() {
        let year = chrono::Local::now().year();
        assert_eq!(
            parse_date_from_string(Some("Jul.")),
            Some(format!("{:04}-07-01", year))
        );
    }

    proptest! {
        #[test]
        fn prop_never_panics(text in "\\PC{0,40}") {
            let _ = parse_date_with_fallback_year(Some(&text), Some(2024));
        }

        #[test]
        fn prop_whitespace_is_none(text in "[ \\t\\n]{0,10}") {
            prop_assert_eq!(parse_date_with_fallback_year(Some(&text), Some(2024)), None);
        }

        #[test]
        fn prop_bare_year_is_january_first(year in 1900i32..2100) {
            let text = year.to_string();
            prop_assert_eq!(
                parse_date_with_fallback_year(Some(&text), None),
                Some(format!("{}-01-01", year))
            );
        }
    }
}
