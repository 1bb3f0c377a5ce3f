// SPDX-License-Identifier: MIT

//! HTTP route handlers.

pub mod admins;
pub mod club;
pub mod events;
pub mod members;
pub mod news;
pub mod slider;

use crate::error::{AppError, Result};
use crate::store::Document;
use crate::AppState;
use axum::extract::State;
use axum::http::{header, Method};
use axum::{routing::get, Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Which backend serves primary traffic: "remote" or "local"
    pub storage: String,
}

/// Health check response
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        storage: state.store.storage_mode().to_string(),
    })
}

/// Decode a document read from the store into its record type.
/// Shape enforcement is a caller concern; the store never validates.
pub(crate) fn decode_document<T: DeserializeOwned>(doc: Document, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        AppError::Internal(anyhow::anyhow!(
            "document '{}' has unexpected shape: {}",
            doc,
            e
        ))
    })
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS layer - allow requests from the frontend URL and localhost (for dev)
    let frontend_url = state.config.frontend_url.clone();
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::AllowOrigin::predicate(
            move |origin: &axum::http::HeaderValue, _request_parts: &axum::http::request::Parts| {
                let origin_str = origin.to_str().unwrap_or("");
                origin_str == frontend_url
                    || origin_str.starts_with("http://localhost")
                    || origin_str.starts_with("http://127.0.0.1")
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(health_check))
        .merge(club::routes())
        .merge(members::routes())
        .merge(news::routes())
        .merge(slider::routes())
        .merge(admins::routes())
        .merge(events::routes())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
