// SPDX-License-Identifier: MIT

//! News and notice CRUD routes.

use crate::error::{AppError, Result};
use crate::models::NewsItem;
use crate::routes::decode_document;
use crate::store::Document;
use crate::time_utils::{format_display_date, format_utc_rfc3339, new_record_id};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/news", get(list_news).post(create_news))
        .route("/api/news/{id}", put(update_news).delete(delete_news))
}

async fn read_news(state: &AppState) -> Result<Vec<NewsItem>> {
    let value = state.store.read(Document::News).await;
    decode_document(Document::News, value)
}

async fn write_news(state: &AppState, news: &[NewsItem]) -> Result<()> {
    let value = serde_json::to_value(news)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize news: {}", e)))?;
    state.store.write(Document::News, &value).await?;
    Ok(())
}

/// Get all news, newest first. Records without a parseable date sort last.
async fn list_news(State(state): State<Arc<AppState>>) -> Result<Json<Vec<NewsItem>>> {
    let mut news = read_news(&state).await?;
    news.sort_by_key(|item| {
        std::cmp::Reverse(
            DateTime::parse_from_rfc3339(&item.date)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        )
    });
    Ok(Json(news))
}

// ─── Create ──────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateNewsRequest {
    headline: Option<String>,
    description: Option<String>,
    publisher: Option<String>,
    image_url: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Post a news item or notice.
async fn create_news(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateNewsRequest>,
) -> Result<(StatusCode, Json<NewsItem>)> {
    let headline = payload
        .headline
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or_else(|| AppError::BadRequest("Headline and Description required".to_string()))?;
    let description = payload
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::BadRequest("Headline and Description required".to_string()))?;

    let mut news = read_news(&state).await?;
    let now = Utc::now();

    let item = NewsItem {
        id: new_record_id(),
        headline: headline.to_string(),
        description: description.to_string(),
        publisher: payload
            .publisher
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "Admin".to_string()),
        image_url: payload.image_url.unwrap_or_default(),
        kind: payload
            .kind
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| "news".to_string()),
        date: format_utc_rfc3339(now),
        date_formatted: format_display_date(now),
    };

    news.push(item.clone());
    write_news(&state, &news).await?;

    state
        .events
        .publish("new-news", serde_json::to_value(&item).unwrap_or_default());

    Ok((StatusCode::CREATED, Json(item)))
}

// ─── Update ──────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateNewsRequest {
    headline: Option<String>,
    description: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    image_url: Option<String>,
}

/// Edit a news item. The publication date is never touched.
async fn update_news(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateNewsRequest>,
) -> Result<Json<NewsItem>> {
    let mut news = read_news(&state).await?;
    let index = news
        .iter()
        .position(|n| n.id == id)
        .ok_or_else(|| AppError::NotFound("News item not found".to_string()))?;

    let item = &mut news[index];
    if let Some(headline) = payload
        .headline
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
    {
        item.headline = headline.to_string();
    }
    if let Some(description) = payload
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
    {
        item.description = description.to_string();
    }
    if let Some(kind) = payload.kind.filter(|k| !k.is_empty()) {
        item.kind = kind;
    }
    if let Some(image_url) = payload.image_url {
        item.image_url = image_url;
    }
    let updated = item.clone();

    write_news(&state, &news).await?;

    state.events.publish(
        "update-news",
        serde_json::to_value(&updated).unwrap_or_default(),
    );

    Ok(Json(updated))
}

// ─── Delete ──────────────────────────────────────────────────

#[derive(Serialize)]
struct DeleteNewsResponse {
    success: bool,
}

/// Delete a news item.
async fn delete_news(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteNewsResponse>> {
    let mut news = read_news(&state).await?;
    let before = news.len();
    news.retain(|n| n.id != id);

    if news.len() == before {
        return Err(AppError::NotFound("News item not found".to_string()));
    }

    write_news(&state, &news).await?;

    state.events.publish("news-deleted", json!({ "id": id }));

    Ok(Json(DeleteNewsResponse { success: true }))
}
