use crate::feed::DATE_KEY_FORMAT;
use chrono::NaiveDate;
use std::fmt::Write;

/// Headline text when no document could be loaded.
pub const NO_DIGEST: &str = "No digest available";

/// Format a date with a user-supplied chrono pattern.
///
/// An invalid pattern (e.g. `%Q`) falls back to `YYYY-MM-DD` instead of panicking.
fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format(DATE_KEY_FORMAT).to_string();
    }
    out
}

/// Leading `YYYY-MM-DD` of a date-like string (`2025-09-17`, `2025-09-17T08:00:00Z`).
fn leading_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(head, DATE_KEY_FORMAT).ok()
}

/// Publish date for a card meta line; unparseable values are shown as-is.
pub fn format_publish_date(raw: &str, pattern: &str) -> String {
    match leading_date(raw) {
        Some(date) => format_date(date, pattern),
        None => raw.trim().to_string(),
    }
}

/// Text of the `today` display: formatted document date and total item count.
pub fn format_headline(date: &str, total: usize, pattern: &str) -> String {
    let date_text = if date.trim().is_empty() {
        NO_DIGEST.to_string()
    } else {
        match leading_date(date) {
            Some(parsed) => format_date(parsed, pattern),
            None => date.trim().to_string(),
        }
    };
    let noun = if total == 1 { "item" } else { "items" };
    format!("{} · {} {}", date_text, total, noun)
}
