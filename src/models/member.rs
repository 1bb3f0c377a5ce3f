// SPDX-License-Identifier: MIT

//! Squad member model for storage and API.

use serde::{Deserialize, Deserializer, Serialize};

/// Stored member record.
///
/// Older documents carry a single `position` string instead of the
/// `positions` list; deserialization folds both shapes into the list form
/// so the rest of the code only ever sees `positions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Caller-assigned record ID (millisecond timestamp string)
    pub id: String,
    pub name: String,
    /// Player, Coach, Staff, ...
    #[serde(default)]
    pub member_type: String,
    /// Positions played, at least one for players
    #[serde(default, deserialize_with = "positions_compat", alias = "position")]
    pub positions: Vec<String>,
    /// Jersey number as entered; empty when unassigned
    #[serde(default)]
    pub jersey_no: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub preferred_foot: String,
    #[serde(default)]
    pub image_url: String,
    /// "Active" or "Inactive"
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub notes: String,
}

fn default_status() -> String {
    "Active".to_string()
}

/// Placeholder avatar used when a member has no photo.
pub const DEFAULT_MEMBER_IMAGE: &str =
    "https://ui-avatars.com/api/?name=Player&background=4F46E5&color=FFFFFF&size=150";

/// Accept both the current list shape and the legacy single string.
fn positions_compat<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PositionsField {
        Many(Vec<String>),
        One(String),
    }

    Ok(match PositionsField::deserialize(deserializer)? {
        PositionsField::Many(positions) => positions,
        PositionsField::One(position) => vec![position],
    })
}
