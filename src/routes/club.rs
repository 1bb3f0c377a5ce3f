// SPDX-License-Identifier: MIT

//! Club settings routes.

use crate::error::{AppError, Result};
use crate::models::ClubSettings;
use crate::store::Document;
use crate::AppState;
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/club", get(get_club).put(update_club))
        .route("/api/ground", get(get_club))
}

/// Get club settings as stored (`{}` until seeded).
async fn get_club(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(state.store.read(Document::Club).await)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateClubRequest {
    name: Option<String>,
    address: Option<String>,
    ground_location: Option<String>,
    ground_size: Option<String>,
    field_type: Option<String>,
    ground_image_url: Option<String>,
    stadium_capacity: Option<String>,
    nightlight: Option<String>,
}

/// Replace the club settings document.
///
/// Full replacement per document: fields absent from the payload get
/// their defaults, not their previously stored values.
async fn update_club(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateClubRequest>,
) -> Result<Json<ClubSettings>> {
    let club = ClubSettings {
        name: payload
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("AMSAL FC")
            .to_string(),
        address: payload
            .address
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        ground_location: payload
            .ground_location
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        ground_size: payload
            .ground_size
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        field_type: payload
            .field_type
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| "Natural Grass".to_string()),
        stadium_capacity: Some(payload.stadium_capacity.unwrap_or_default()),
        nightlight: Some(
            payload
                .nightlight
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "No".to_string()),
        ),
        ground_image_url: payload.ground_image_url.unwrap_or_default(),
    };

    let value = serde_json::to_value(&club)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize club: {}", e)))?;
    state.store.write(Document::Club, &value).await?;

    state.events.publish("club-updated", value);

    Ok(Json(club))
}
