// SPDX-License-Identifier: MIT

//! News and notice model for storage and API.

use serde::{Deserialize, Serialize};

/// Stored news record. `kind` distinguishes regular news from notices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Caller-assigned record ID (millisecond timestamp string)
    pub id: String,
    pub headline: String,
    pub description: String,
    #[serde(default = "default_publisher")]
    pub publisher: String,
    #[serde(default)]
    pub image_url: String,
    /// "news" or "notice"
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    /// Publication time (RFC 3339), used for newest-first sorting
    #[serde(default)]
    pub date: String,
    /// Human-readable date, e.g. "Jan 5, 2026"
    #[serde(default)]
    pub date_formatted: String,
}

fn default_publisher() -> String {
    "Admin".to_string()
}

fn default_kind() -> String {
    "news".to_string()
}
