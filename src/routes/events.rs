// SPDX-License-Identifier: MIT

//! WebSocket endpoint pushing change events to connected clients.

use crate::events::ChangeEvent;
use crate::AppState;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
    routing::any,
    Router,
};
use std::sync::Arc;
use tokio::sync::broadcast;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/events", any(events_upgrade))
}

async fn events_upgrade(State(state): State<Arc<AppState>>, ws: WebSocketUpgrade) -> Response {
    let rx = state.events.subscribe();
    ws.on_upgrade(move |socket| forward_events(socket, rx))
}

/// Forward broadcast events to one client as JSON text frames.
///
/// Runs until the client disconnects. A client that falls behind the
/// broadcast buffer skips the missed events rather than stalling the
/// publishers.
async fn forward_events(mut socket: WebSocket, mut rx: broadcast::Receiver<ChangeEvent>) {
    loop {
        tokio::select! {
            event = rx.recv() => match event {
                Ok(event) => {
                    let frame = match serde_json::to_string(&event) {
                        Ok(frame) => frame,
                        Err(err) => {
                            tracing::warn!(error = %err, "Could not encode change event");
                            continue;
                        }
                    };
                    if socket.send(Message::Text(frame.into())).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(dropped)) => {
                    tracing::warn!(dropped, "Events client lagged, skipping missed events");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            msg = socket.recv() => match msg {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                // Anything else from the client is ignored.
                Some(Ok(_)) => {}
            },
        }
    }
}
