// SPDX-License-Identifier: MIT

//! Shared helpers for timestamps and record IDs.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Human-readable date used by news records, e.g. "Jan 5, 2026".
pub fn format_display_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Millisecond-timestamp string used as a record ID by the route
/// handlers. The store treats IDs as opaque.
pub fn new_record_id() -> String {
    Utc::now().timestamp_millis().to_string()
}
