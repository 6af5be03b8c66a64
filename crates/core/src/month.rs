use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month used to bucket receipts for trend reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

/// Date text interpretations tried in order. The stored `purchase_date` is
/// normally ISO, but may hold a raw German token when normalization failed.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%d.%m.%y"];

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(MonthKey { year, month })
    }

    /// Derive the month from stored date text, ISO or German.
    /// Returns `None` for empty or unrecognizable text.
    pub fn from_date_text(text: &str) -> Option<Self> {
        let text = text.trim();
        let date = DATE_FORMATS.iter().find_map(|fmt| {
            let date = NaiveDate::parse_from_str(text, fmt).ok()?;
            // chrono's %Y also accepts two-digit years; those belong to %d.%m.%y.
            (*fmt != "%d.%m.%Y" || date.year() >= 100).then_some(date)
        })?;
        MonthKey::new(date.year(), date.month())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
