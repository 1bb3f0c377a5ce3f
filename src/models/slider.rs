// SPDX-License-Identifier: MIT

//! Home-page slider model.

use serde::{Deserialize, Serialize};

/// One slide in the home-page image carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    #[serde(default)]
    pub image_url: String,
    /// Inactive slides stay stored but are not served to visitors
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
