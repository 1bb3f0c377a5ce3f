// SPDX-License-Identifier: MIT

//! Club settings model.

use serde::{Deserialize, Serialize};

/// Club settings, stored as a single object (not a list).
///
/// `stadium_capacity` and `nightlight` were added after the first
/// deployments, so seeded documents do not carry them; they stay out of
/// the serialized form until an update fills them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubSettings {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub ground_location: String,
    #[serde(default)]
    pub ground_size: String,
    #[serde(default = "default_field_type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stadium_capacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nightlight: Option<String>,
    #[serde(default)]
    pub ground_image_url: String,
}

fn default_name() -> String {
    "AMSAL FC".to_string()
}

fn default_field_type() -> String {
    "Natural Grass".to_string()
}
