use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

/// Date patterns, most specific first. Evaluated against the whole text;
/// the first capturing match wins. German receipts favor labeled
/// `Datum`/`Date` lines, with bare tokens and the TSE fiscal-unit timestamp
/// as fallbacks.
const DATE_PATTERNS: &[&str] = &[
    r"(?i)Datum\s+(\d{1,2}\.\d{1,2}\.\d{2})\b",
    r"(?i)(?:Datum|Date)\s*:?\s*(\d{1,2}\.\d{1,2}\.\d{4})",
    r"(?i)(?:Datum|Date)\s*:?\s*(\d{1,2}\.\d{1,2}\.\d{2})\b",
    r"\b(\d{1,2}\.\d{1,2}\.\d{4})\b",
    r"\b(\d{1,2}\.\d{1,2}\.\d{2})\b",
    r"\b(\d{4}-\d{2}-\d{2})\b",
    r"(?i)TSE-Start\s*:?\s*(\d{4}-\d{2}-\d{2})",
];

/// Interpretations tried when normalizing a matched date token.
const DATE_FORMATS: &[&str] = &["%d.%m.%Y", "%d.%m.%y", "%Y-%m-%d"];

/// Time patterns, most specific first. The matched token is returned as-is.
const TIME_PATTERNS: &[&str] = &[
    r"(?i)(?:Uhrzeit|Zeit)\s*:?\s*(\d{1,2}:\d{2}(?::\d{2})?)",
    r"(?i)AS-Zeit\s+\d{1,2}\.\d{1,2}\.\s*(\d{1,2}:\d{2}(?::\d{2})?)",
    r"(?i)\b(\d{1,2}:\d{2}(?::\d{2})?)\s*Uhr\b",
];

fn date_patterns() -> &'static [Regex] {
    static P: OnceLock<Vec<Regex>> = OnceLock::new();
    P.get_or_init(|| compile(DATE_PATTERNS))
}

fn time_patterns() -> &'static [Regex] {
    static P: OnceLock<Vec<Regex>> = OnceLock::new();
    P.get_or_init(|| compile(TIME_PATTERNS))
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("invalid regex"))
        .collect()
}

fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|re| {
        re.captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    })
}

/// Locate the purchase date and normalize it to ISO `YYYY-MM-DD`.
/// A matched token that fits none of the known formats is returned raw —
/// better a verbatim date than none at all. `None` only when no pattern
/// matches anywhere.
pub fn parse_date(text: &str) -> Option<String> {
    let token = first_capture(date_patterns(), text)?;
    Some(normalize_date_token(&token))
}

fn normalize_date_token(token: &str) -> String {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| parse_token(token, fmt))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| token.to_string())
}

fn parse_token(token: &str, fmt: &str) -> Option<NaiveDate> {
    use chrono::Datelike;
    let date = NaiveDate::parse_from_str(token, fmt).ok()?;
    // chrono's %Y also accepts two-digit years; those belong to %d.%m.%y.
    if fmt == "%d.%m.%Y" && date.year() < 100 {
        return None;
    }
    Some(date)
}

/// Locate the purchase time (`HH:MM` or `HH:MM:SS`), unmodified.
pub fn parse_time(text: &str) -> Option<String> {
    first_capture(time_patterns(), text)
}
