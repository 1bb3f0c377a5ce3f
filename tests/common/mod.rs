// SPDX-License-Identifier: MIT

use amsal_club::config::Config;
use amsal_club::events::EventBus;
use amsal_club::routes::create_router;
use amsal_club::store::{DocumentStore, LocalStore, RemoteKv};
use amsal_club::AppState;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Create a local-only test store rooted in a fresh temp directory.
#[allow(dead_code)]
pub async fn test_store() -> (DocumentStore, TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let local = LocalStore::new(dir.path()).await.expect("local store");
    (DocumentStore::from_parts(None, local), dir)
}

/// Create a seeded test app over a local-only store.
/// Returns the router, the shared state and the temp data directory.
#[allow(dead_code)]
pub async fn create_test_app() -> (axum::Router, Arc<AppState>, TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = Config::test_default(dir.path().to_str().expect("utf-8 temp path"));

    let store = DocumentStore::connect(&config).await.expect("store");
    store.seed_defaults(&config).await;

    let state = Arc::new(AppState {
        config,
        store,
        events: EventBus::new(),
    });

    (create_router(state.clone()), state, dir)
}

/// Build a JSON request for `Router::oneshot`.
#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodyless request for `Router::oneshot`.
#[allow(dead_code)]
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<axum::body::Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ─── Stub remote KV server ───────────────────────────────────
//
// Speaks just enough of the Upstash-style REST protocol for the store:
// /ping, /get/{key}, /set/{key}, values held in memory as the encoded
// strings a real server would store.

#[derive(Clone, Default)]
pub struct StubKv {
    pub data: Arc<Mutex<HashMap<String, String>>>,
}

impl StubKv {
    /// Raw stored string for a key, as the remote would persist it.
    #[allow(dead_code)]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.data.lock().unwrap().get(key).cloned()
    }

    /// Pre-populate a key with an encoded JSON value.
    #[allow(dead_code)]
    pub fn insert(&self, key: &str, value: &Value) {
        self.data
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

async fn stub_get(State(stub): State<StubKv>, Path(key): Path<String>) -> Json<Value> {
    let result = stub.data.lock().unwrap().get(&key).cloned();
    Json(json!({ "result": result }))
}

async fn stub_set(
    State(stub): State<StubKv>,
    Path(key): Path<String>,
    body: String,
) -> Json<Value> {
    stub.data.lock().unwrap().insert(key, body);
    Json(json!({ "result": "OK" }))
}

/// Spawn the stub server on an ephemeral port; returns its base URL and
/// a handle onto the stored data.
#[allow(dead_code)]
pub async fn spawn_stub_kv() -> (String, StubKv) {
    let stub = StubKv::default();
    let app = Router::new()
        .route("/ping", get(|| async { Json(json!({ "result": "PONG" })) }))
        .route("/get/{key}", get(stub_get))
        .route("/set/{key}", post(stub_set))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub KV");
    let addr = listener.local_addr().expect("stub KV addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub KV serve");
    });

    (format!("http://{}", addr), stub)
}

/// A remote client pointing at a port nothing listens on, to simulate
/// transport failures while the store still believes the remote is
/// available.
#[allow(dead_code)]
pub fn unreachable_remote() -> RemoteKv {
    RemoteKv::new("http://127.0.0.1:9", "test-token")
}
