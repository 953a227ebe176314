// SPDX-License-Identifier: MIT

//! Shared helpers for date/time formatting.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Current instant as an RFC3339 string.
pub fn now_rfc3339() -> String {
    format_utc_rfc3339(Utc::now())
}

/// Today's date in canonical `YYYY-MM-DD` form (UTC).
pub fn today_iso_date() -> String {
    Utc::now().date_naive().to_string()
}

/// Parse a canonical `YYYY-MM-DD` date, rejecting anything else.
///
/// Canonical form means lexicographic comparison of date strings matches
/// chronological ordering, which the goal history range query relies on.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    // chrono accepts non-padded fields ("2024-2-9"); require the exact
    // canonical rendering so string ordering stays chronological.
    (date.to_string() == raw).then_some(date)
}
