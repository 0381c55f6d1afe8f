use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Format of a date key (`2025-09-18`).
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Resolve the date key to load.
///
/// An explicit, non-empty key is returned verbatim, even when malformed; the
/// loader simply fails to find a document for it. Otherwise the key is today's
/// civil date in `tz`.
pub fn resolve_date_key(explicit: Option<&str>, now: DateTime<Utc>, tz: FixedOffset) -> String {
    match explicit {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => today_key(now, tz),
    }
}

/// Today's date key in the given timezone.
pub fn today_key(now: DateTime<Utc>, tz: FixedOffset) -> String {
    now.with_timezone(&tz).format(DATE_KEY_FORMAT).to_string()
}

/// The date key one calendar day before `key`.
///
/// Returns `None` when `key` is not a valid `YYYY-MM-DD` date.
pub fn previous_date_key(key: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()?;
    date.pred_opt()
        .map(|prev| prev.format(DATE_KEY_FORMAT).to_string())
}
