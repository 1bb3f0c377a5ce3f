// SPDX-License-Identifier: MIT

//! Admin account routes and the session-less login check.
//!
//! Login is a pure read-and-compare over the `admins` document; no
//! session or token is issued. Responses never include passwords.

use crate::error::{AppError, Result};
use crate::models::{Admin, AdminPublic};
use crate::routes::decode_document;
use crate::store::Document;
use crate::time_utils::new_record_id;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 4;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/admins", get(list_admins).post(create_admin))
        .route("/api/admins/{id}", put(update_admin).delete(delete_admin))
}

async fn read_admins(state: &AppState) -> Result<Vec<Admin>> {
    let value = state.store.read(Document::Admins).await;
    decode_document(Document::Admins, value)
}

async fn write_admins(state: &AppState, admins: &[Admin]) -> Result<()> {
    let value = serde_json::to_value(admins)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize admins: {}", e)))?;
    state.store.write(Document::Admins, &value).await?;
    Ok(())
}

fn username_taken(admins: &[Admin], username: &str, exclude_id: Option<&str>) -> bool {
    admins.iter().any(|a| {
        a.username.eq_ignore_ascii_case(username) && exclude_id != Some(a.id.as_str())
    })
}

// ─── Login ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct LoginRequest {
    username: Option<String>,
    password: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    success: bool,
    role: String,
    username: String,
    image_url: String,
}

/// Check admin credentials. Username matches case-insensitively,
/// password exactly.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let username = payload
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| {
            AppError::BadRequest("Username and password are required".to_string())
        })?;
    let password = payload.password.as_deref().filter(|p| !p.is_empty()).ok_or_else(|| {
        AppError::BadRequest("Username and password are required".to_string())
    })?;

    let admins = read_admins(&state).await?;
    let admin = admins
        .iter()
        .find(|a| a.username.eq_ignore_ascii_case(username) && a.password == password)
        .ok_or(AppError::InvalidCredentials)?;

    Ok(Json(LoginResponse {
        success: true,
        role: admin.role.clone(),
        username: admin.username.clone(),
        image_url: admin.image_url.clone(),
    }))
}

// ─── Listing ─────────────────────────────────────────────────

/// Get all admins, passwords stripped, super admins first.
async fn list_admins(State(state): State<Arc<AppState>>) -> Result<Json<Vec<AdminPublic>>> {
    let mut admins = read_admins(&state).await?;
    admins.sort_by(|a, b| {
        b.is_super()
            .cmp(&a.is_super())
            .then_with(|| a.username.cmp(&b.username))
    });
    Ok(Json(admins.iter().map(AdminPublic::from).collect()))
}

// ─── Create ──────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAdminRequest {
    username: Option<String>,
    password: Option<String>,
    image_url: Option<String>,
}

/// Add an admin account. New accounts always get the "admin" role.
async fn create_admin(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateAdminRequest>,
) -> Result<(StatusCode, Json<AdminPublic>)> {
    let username = payload
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| {
            AppError::BadRequest("Username and password are required".to_string())
        })?;
    let password = payload.password.as_deref().filter(|p| !p.is_empty()).ok_or_else(|| {
        AppError::BadRequest("Username and password are required".to_string())
    })?;

    if username.len() < MIN_USERNAME_LEN {
        return Err(AppError::BadRequest(
            "Username must be at least 3 characters".to_string(),
        ));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(
            "Password must be at least 4 characters".to_string(),
        ));
    }

    let mut admins = read_admins(&state).await?;
    if username_taken(&admins, username, None) {
        return Err(AppError::BadRequest("Username already taken".to_string()));
    }

    let admin = Admin {
        id: new_record_id(),
        username: username.to_string(),
        password: password.to_string(),
        role: "admin".to_string(),
        image_url: payload.image_url.unwrap_or_default(),
    };

    let public = AdminPublic::from(&admin);
    admins.push(admin);
    write_admins(&state, &admins).await?;

    Ok((StatusCode::CREATED, Json(public)))
}

// ─── Update ──────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateAdminRequest {
    username: Option<String>,
    password: Option<String>,
    image_url: Option<String>,
}

/// Update an admin account. Absent fields keep their stored values.
async fn update_admin(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAdminRequest>,
) -> Result<Json<AdminPublic>> {
    let mut admins = read_admins(&state).await?;
    let index = admins
        .iter()
        .position(|a| a.id == id)
        .ok_or_else(|| AppError::NotFound("Admin not found".to_string()))?;

    if let Some(username) = payload.username.as_deref().map(str::trim).filter(|u| !u.is_empty())
    {
        if username != admins[index].username && username_taken(&admins, username, Some(id.as_str()))
        {
            return Err(AppError::BadRequest("Username already taken".to_string()));
        }
    }

    if let Some(password) = &payload.password {
        if !password.is_empty() && password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(
                "Password must be at least 4 characters".to_string(),
            ));
        }
    }

    let admin = &mut admins[index];
    if let Some(username) = payload.username.as_deref().map(str::trim).filter(|u| !u.is_empty())
    {
        admin.username = username.to_string();
    }
    if let Some(password) = payload.password.filter(|p| !p.is_empty()) {
        admin.password = password;
    }
    if let Some(image_url) = payload.image_url {
        admin.image_url = image_url;
    }
    let public = AdminPublic::from(&*admin);

    write_admins(&state, &admins).await?;

    Ok(Json(public))
}

// ─── Delete ──────────────────────────────────────────────────

#[derive(Serialize)]
struct DeleteAdminResponse {
    success: bool,
}

/// Delete an admin account. Super admins are never deletable.
async fn delete_admin(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAdminResponse>> {
    let mut admins = read_admins(&state).await?;
    let admin = admins
        .iter()
        .find(|a| a.id == id)
        .ok_or_else(|| AppError::NotFound("Admin not found".to_string()))?;

    if admin.is_super() {
        return Err(AppError::Forbidden(
            "Super Admin accounts cannot be deleted!".to_string(),
        ));
    }

    admins.retain(|a| a.id != id);
    write_admins(&state, &admins).await?;

    state.events.publish("admin-deleted", json!({ "id": id }));

    Ok(Json(DeleteAdminResponse { success: true }))
}
