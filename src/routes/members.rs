// SPDX-License-Identifier: MIT

//! Squad member CRUD routes.
//!
//! All handlers are read-modify-write over the whole `members` document.
//! The duplicate jersey-number check re-reads immediately before writing
//! and is racy under concurrent writers (last write wins), which matches
//! the low-frequency, human-driven access pattern.

use crate::error::{AppError, Result};
use crate::models::member::DEFAULT_MEMBER_IMAGE;
use crate::models::Member;
use crate::routes::decode_document;
use crate::store::Document;
use crate::time_utils::new_record_id;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::cmp::Ordering;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/members", get(list_members).post(create_member))
        .route(
            "/api/members/{id}",
            put(update_member).delete(delete_member),
        )
        .route("/api/squad", get(squad_alias))
}

async fn read_members(state: &AppState) -> Result<Vec<Member>> {
    let value = state.store.read(Document::Members).await;
    decode_document(Document::Members, value)
}

async fn write_members(state: &AppState, members: &[Member]) -> Result<()> {
    let value = serde_json::to_value(members)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize members: {}", e)))?;
    state.store.write(Document::Members, &value).await?;
    Ok(())
}

// ─── Listing ─────────────────────────────────────────────────

/// Members with a jersey number come first, ordered numerically, then
/// everyone else by name. Sorting happens here; the store keeps
/// insertion order.
fn jersey_order(a: &Member, b: &Member) -> Ordering {
    let a_no = a.jersey_no.parse::<i64>().ok();
    let b_no = b.jersey_no.parse::<i64>().ok();
    match (a_no, b_no) {
        (Some(a_no), Some(b_no)) => a_no.cmp(&b_no),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    }
}

/// Get all members, jersey order.
async fn list_members(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Member>>> {
    let mut members = read_members(&state).await?;
    members.sort_by(jersey_order);
    Ok(Json(members))
}

/// Squad alias: members as stored, unsorted.
async fn squad_alias(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Member>>> {
    Ok(Json(read_members(&state).await?))
}

// ─── Create ──────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateMemberRequest {
    name: Option<String>,
    member_type: Option<String>,
    positions: Option<Vec<String>>,
    jersey_no: Option<String>,
    age: Option<String>,
    address: Option<String>,
    height: Option<String>,
    preferred_foot: Option<String>,
    image_url: Option<String>,
    status: Option<String>,
    notes: Option<String>,
}

/// Add a new member.
async fn create_member(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<Member>)> {
    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::BadRequest("Name and member type are required".to_string()))?;
    let member_type = payload
        .member_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("Name and member type are required".to_string()))?;
    let positions = payload
        .positions
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("At least one position is required".to_string()))?;

    let mut members = read_members(&state).await?;

    let jersey_no = payload.jersey_no.unwrap_or_default();
    if !jersey_no.is_empty() {
        if let Some(holder) = members.iter().find(|m| m.jersey_no == jersey_no) {
            return Err(AppError::BadRequest(format!(
                "Jersey number {} is already taken by {}",
                jersey_no, holder.name
            )));
        }
    }

    let member = Member {
        id: new_record_id(),
        name: name.to_string(),
        member_type: member_type.to_string(),
        positions: positions.to_vec(),
        jersey_no,
        age: payload.age.unwrap_or_default(),
        address: payload.address.unwrap_or_default(),
        height: payload.height.unwrap_or_default(),
        preferred_foot: payload.preferred_foot.unwrap_or_default(),
        image_url: payload
            .image_url
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_MEMBER_IMAGE.to_string()),
        status: payload
            .status
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "Active".to_string()),
        notes: payload.notes.unwrap_or_default(),
    };

    members.push(member.clone());
    write_members(&state, &members).await?;

    state.events.publish(
        "member-added",
        serde_json::to_value(&member).unwrap_or_default(),
    );

    Ok((StatusCode::CREATED, Json(member)))
}

// ─── Update ──────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateMemberRequest {
    name: Option<String>,
    member_type: Option<String>,
    positions: Option<Vec<String>>,
    jersey_no: Option<String>,
    age: Option<String>,
    address: Option<String>,
    height: Option<String>,
    preferred_foot: Option<String>,
    image_url: Option<String>,
    status: Option<String>,
    notes: Option<String>,
}

/// Update a member. Absent fields keep their stored values.
async fn update_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateMemberRequest>,
) -> Result<Json<Member>> {
    let mut members = read_members(&state).await?;
    let index = members
        .iter()
        .position(|m| m.id == id)
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

    if let Some(jersey_no) = &payload.jersey_no {
        if *jersey_no != members[index].jersey_no {
            let taken = members
                .iter()
                .find(|m| m.jersey_no == *jersey_no && m.id != id && !jersey_no.is_empty());
            if let Some(holder) = taken {
                return Err(AppError::BadRequest(format!(
                    "Jersey number {} is already taken by {}",
                    jersey_no, holder.name
                )));
            }
        }
    }

    let member = &mut members[index];
    if let Some(name) = payload.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        member.name = name.to_string();
    }
    if let Some(member_type) = payload.member_type {
        member.member_type = member_type;
    }
    if let Some(positions) = payload.positions.filter(|p| !p.is_empty()) {
        member.positions = positions;
    }
    if let Some(jersey_no) = payload.jersey_no {
        member.jersey_no = jersey_no;
    }
    if let Some(age) = payload.age {
        member.age = age;
    }
    if let Some(address) = payload.address {
        member.address = address;
    }
    if let Some(height) = payload.height {
        member.height = height;
    }
    if let Some(preferred_foot) = payload.preferred_foot {
        member.preferred_foot = preferred_foot;
    }
    if let Some(image_url) = payload.image_url {
        member.image_url = image_url;
    }
    if let Some(status) = payload.status {
        member.status = status;
    }
    if let Some(notes) = payload.notes {
        member.notes = notes;
    }
    let updated = member.clone();

    write_members(&state, &members).await?;

    state.events.publish(
        "member-updated",
        serde_json::to_value(&updated).unwrap_or_default(),
    );

    Ok(Json(updated))
}

// ─── Delete ──────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeletedMember {
    id: String,
    name: String,
    image_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteMemberResponse {
    success: bool,
    deleted_member: DeletedMember,
}

/// Delete a member.
async fn delete_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteMemberResponse>> {
    let mut members = read_members(&state).await?;
    let removed = members
        .iter()
        .find(|m| m.id == id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

    members.retain(|m| m.id != id);
    write_members(&state, &members).await?;

    state.events.publish("member-deleted", json!({ "id": id }));

    Ok(Json(DeleteMemberResponse {
        success: true,
        deleted_member: DeletedMember {
            id: removed.id,
            name: removed.name,
            image_url: removed.image_url,
        },
    }))
}
