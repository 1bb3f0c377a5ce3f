// SPDX-License-Identifier: MIT

//! Remote KV backend speaking the Upstash-style REST protocol.
//!
//! Values are stored as JSON-encoded strings under the document key:
//! - `GET {base}/get/{key}` -> `{"result": "<json string>"}` or `{"result": null}`
//! - `POST {base}/set/{key}` with the encoded value as body -> `{"result": "OK"}`
//! - `GET {base}/ping` -> `{"result": "PONG"}`
//!
//! All requests carry the bearer token from configuration.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::{BackendError, Document, DocumentBackend};

/// REST client for the remote KV service.
#[derive(Clone)]
pub struct RemoteKv {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

/// Response envelope used by every KV endpoint.
#[derive(Debug, Deserialize)]
struct KvResponse {
    result: Option<String>,
}

impl RemoteKv {
    /// Create a client for the given endpoint and bearer token.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: token.into(),
        }
    }

    /// Connectivity probe, used once at store construction.
    pub async fn ping(&self) -> Result<(), BackendError> {
        let url = format!("{}/ping", self.base_url);
        let envelope = self.request_json(self.http.get(&url)).await?;

        match envelope.result.as_deref() {
            Some("PONG") => Ok(()),
            other => Err(BackendError::Unreachable(format!(
                "unexpected ping reply: {:?}",
                other
            ))),
        }
    }

    /// Send a request and decode the KV response envelope.
    async fn request_json(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<KvResponse, BackendError> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Unreachable(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::Unreachable(format!("invalid KV reply: {}", e)))
    }
}

#[async_trait]
impl DocumentBackend for RemoteKv {
    async fn fetch(&self, doc: Document) -> Result<Option<Value>, BackendError> {
        let url = format!("{}/get/{}", self.base_url, doc.key());
        let envelope = self.request_json(self.http.get(&url)).await?;

        match envelope.result {
            None => Ok(None),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(Some(value)),
                Err(source) => Err(BackendError::Malformed {
                    document: doc.key(),
                    source,
                }),
            },
        }
    }

    async fn store(&self, doc: Document, value: &Value) -> Result<(), BackendError> {
        let url = format!("{}/set/{}", self.base_url, doc.key());
        let body = serde_json::to_string(value).map_err(|source| BackendError::Malformed {
            document: doc.key(),
            source,
        })?;

        self.request_json(self.http.post(&url).body(body)).await?;
        Ok(())
    }
}
