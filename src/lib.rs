// SPDX-License-Identifier: MIT

//! AMSAL FC club-management backend.
//!
//! This crate provides the JSON API for the club site: members, news,
//! slider images, club settings and admin accounts, persisted through a
//! document store that prefers a remote KV service and falls back to
//! local JSON files.

pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod routes;
pub mod store;
pub mod time_utils;

use config::Config;
use events::EventBus;
use store::DocumentStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: DocumentStore,
    pub events: EventBus,
}
