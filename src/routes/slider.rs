// SPDX-License-Identifier: MIT

//! Home-page slider routes.

use crate::error::{AppError, Result};
use crate::models::Slide;
use crate::routes::decode_document;
use crate::store::Document;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/slider", get(list_slides).post(save_slides))
}

/// Get the slides visitors should see: everything not marked inactive.
async fn list_slides(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Slide>>> {
    let value = state.store.read(Document::Slider).await;
    let slides: Vec<Slide> = decode_document(Document::Slider, value)?;
    Ok(Json(slides.into_iter().filter(|s| s.active).collect()))
}

#[derive(Serialize)]
struct SaveSliderResponse {
    success: bool,
    slides: Vec<Slide>,
}

/// Replace the whole slider document (save-all, including inactive slides).
async fn save_slides(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<Json<SaveSliderResponse>> {
    if !payload.is_array() {
        return Err(AppError::BadRequest("Slides must be an array".to_string()));
    }
    let slides: Vec<Slide> = decode_document(Document::Slider, payload)
        .map_err(|_| AppError::BadRequest("Slides must be an array of slides".to_string()))?;

    let value = serde_json::to_value(&slides)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize slides: {}", e)))?;
    state.store.write(Document::Slider, &value).await?;

    state.events.publish("slider-updated", value);

    Ok(Json(SaveSliderResponse {
        success: true,
        slides,
    }))
}
