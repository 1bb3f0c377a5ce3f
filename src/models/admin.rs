// SPDX-License-Identifier: MIT

//! Admin account model for storage and API.

use serde::{Deserialize, Serialize};

/// Stored admin account.
///
/// Passwords are stored as-is and compared on login; API responses use
/// [`AdminPublic`] so the password never leaves the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    /// Caller-assigned record ID (millisecond timestamp string)
    pub id: String,
    pub username: String,
    pub password: String,
    /// "super" (seeded, undeletable) or "admin"
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub image_url: String,
}

fn default_role() -> String {
    "admin".to_string()
}

impl Admin {
    pub fn is_super(&self) -> bool {
        self.role == "super"
    }
}

/// Admin account without the password, for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPublic {
    pub id: String,
    pub username: String,
    pub role: String,
    pub image_url: String,
}

impl From<&Admin> for AdminPublic {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id.clone(),
            username: admin.username.clone(),
            role: admin.role.clone(),
            image_url: admin.image_url.clone(),
        }
    }
}
