//! Names of the persisted documents.

use serde_json::{json, Value};
use std::fmt;

/// A named document managed by the store.
///
/// Each document is the unit of read/write: `club` is a single object,
/// everything else is an ordered list of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    Members,
    News,
    Admins,
    Club,
    Slider,
}

impl Document {
    pub const ALL: [Document; 5] = [
        Document::Members,
        Document::News,
        Document::Admins,
        Document::Club,
        Document::Slider,
    ];

    /// Key in the remote KV store; also the local file stem.
    pub fn key(self) -> &'static str {
        match self {
            Document::Members => "members",
            Document::News => "news",
            Document::Admins => "admins",
            Document::Club => "club",
            Document::Slider => "slider",
        }
    }

    /// Local file name (`<key>.json`).
    pub fn file_name(self) -> String {
        format!("{}.json", self.key())
    }

    /// Value returned when the document is absent from both backends.
    pub fn default_value(self) -> Value {
        match self {
            Document::Club => json!({}),
            _ => json!([]),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
