// SPDX-License-Identifier: MIT

//! Persistent document store.
//!
//! One read/write contract over two backends: a remote KV service when
//! configured and reachable, local JSON files otherwise. Reads are total
//! (any failure resolves to the document's default value); writes fail
//! only when both backends reject the value.

pub mod document;
pub mod local;
pub mod remote;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::Config;

pub use document::Document;
pub use local::LocalStore;
pub use remote::RemoteKv;

/// Failure inside a single backend. Never surfaced on reads; on writes it
/// only escapes wrapped in [`PersistenceError`] once both backends failed.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("invalid JSON for document '{document}': {source}")]
    Malformed {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Both backends failed to persist a write. The only store error callers
/// must handle: it means the requested mutation did not take effect
/// anywhere.
#[derive(Debug, thiserror::Error)]
#[error("failed to persist document '{document}': {source}")]
pub struct PersistenceError {
    pub document: &'static str,
    #[source]
    pub source: BackendError,
}

/// Capability shared by the primary and fallback backends.
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Fetch a document. `None` means the key/file is truly absent.
    async fn fetch(&self, doc: Document) -> Result<Option<Value>, BackendError>;

    /// Persist a document, replacing any previous value.
    async fn store(&self, doc: Document, value: &Value) -> Result<(), BackendError>;
}

/// Document store facade: try the primary backend, fall back to local
/// files per the rules in each operation.
///
/// Remote availability is decided once at construction (connectivity
/// probe) and never re-probed.
pub struct DocumentStore {
    remote: Option<RemoteKv>,
    local: LocalStore,
}

impl DocumentStore {
    /// Initialize the store from configuration.
    ///
    /// A failed connectivity probe demotes the store to local-only rather
    /// than failing startup. The local data directory is always created,
    /// since it is also the fallback target when a later remote call fails.
    pub async fn connect(config: &Config) -> Result<Self, BackendError> {
        let local = LocalStore::new(&config.data_dir).await?;

        let remote = match (&config.kv_rest_api_url, &config.kv_rest_api_token) {
            (Some(url), Some(token)) => {
                let kv = RemoteKv::new(url.clone(), token.clone());
                match kv.ping().await {
                    Ok(()) => {
                        tracing::info!("Remote KV connection initialized and tested");
                        Some(kv)
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "Remote KV ping failed, using file storage");
                        None
                    }
                }
            }
            _ => {
                tracing::info!("Remote KV not configured, using file storage");
                None
            }
        };

        Ok(Self { remote, local })
    }

    /// Assemble a store from explicit backends, skipping the probe.
    /// Used by tests to force remote-available against a stub server.
    pub fn from_parts(remote: Option<RemoteKv>, local: LocalStore) -> Self {
        Self { remote, local }
    }

    pub fn remote_available(&self) -> bool {
        self.remote.is_some()
    }

    /// Which backend serves primary traffic, for diagnostics.
    pub fn storage_mode(&self) -> &'static str {
        if self.remote.is_some() {
            "remote"
        } else {
            "local"
        }
    }

    /// Read a document. Never fails: any backend failure resolves to the
    /// type-appropriate default (`{}` for `club`, `[]` otherwise).
    pub async fn read(&self, doc: Document) -> Value {
        if let Some(remote) = &self.remote {
            match remote.fetch(doc).await {
                Ok(Some(value)) => {
                    tracing::debug!(document = %doc, "Read from remote KV");
                    return value;
                }
                Ok(None) => {
                    // Key truly absent remotely: default, without
                    // consulting the local file.
                    tracing::debug!(document = %doc, "Absent in remote KV, returning default");
                    return doc.default_value();
                }
                Err(err) => {
                    tracing::warn!(
                        document = %doc,
                        error = %err,
                        "Remote read failed, falling back to local file"
                    );
                }
            }
        }

        match self.local.fetch(doc).await {
            Ok(Some(value)) => value,
            Ok(None) => doc.default_value(),
            Err(err @ BackendError::Malformed { .. }) => {
                // The file exists but is not valid JSON. Possible data
                // corruption needing operator attention.
                tracing::warn!(document = %doc, error = %err, "Malformed local document, returning default");
                doc.default_value()
            }
            Err(err) => {
                tracing::error!(document = %doc, error = %err, "Local read failed, returning default");
                doc.default_value()
            }
        }
    }

    /// Write a document, replacing it entirely.
    ///
    /// With the remote backend available the write goes there alone; the
    /// local file is only a best-effort fallback when the remote call
    /// fails, so the two backends can diverge (accepted limitation).
    pub async fn write(&self, doc: Document, value: &Value) -> Result<(), PersistenceError> {
        if let Some(remote) = &self.remote {
            match remote.store(doc, value).await {
                Ok(()) => {
                    tracing::debug!(document = %doc, "Wrote to remote KV");
                    return Ok(());
                }
                Err(err) => {
                    tracing::error!(
                        document = %doc,
                        error = %err,
                        "Remote write failed, falling back to local file"
                    );
                }
            }
        }

        self.local
            .store(doc, value)
            .await
            .map_err(|source| PersistenceError {
                document: doc.key(),
                source,
            })
    }

    /// Seed default documents once at process start.
    ///
    /// Only documents absent from the active backend are written;
    /// "present but empty" is left alone. A failure seeding one document
    /// is logged and does not abort the others.
    pub async fn seed_defaults(&self, config: &Config) {
        let seeds = [
            (Document::Admins, initial_admins(config)),
            (Document::Slider, initial_slider()),
            (Document::Club, initial_club()),
        ];

        for (doc, value) in seeds {
            match self.is_present(doc).await {
                Ok(true) => continue,
                Ok(false) => {
                    if let Err(err) = self.write(doc, &value).await {
                        tracing::warn!(document = %doc, error = %err, "Could not seed document");
                    } else {
                        tracing::info!(document = %doc, "Created initial document");
                    }
                }
                Err(err) => {
                    tracing::warn!(document = %doc, error = %err, "Could not check document before seeding");
                }
            }
        }
    }

    /// Presence check used by seeding: a non-null remote key, or an
    /// existing local file (whatever its contents), counts as present.
    async fn is_present(&self, doc: Document) -> Result<bool, BackendError> {
        match &self.remote {
            Some(remote) => Ok(remote.fetch(doc).await?.is_some()),
            None => Ok(self.local.exists(doc).await),
        }
    }
}

/// Initial super-admin account, credentials from configuration.
fn initial_admins(config: &Config) -> Value {
    json!([{
        "id": "1",
        "username": config.super_admin_username,
        "password": config.super_admin_password,
        "role": "super",
        "imageUrl": ""
    }])
}

/// Two default slides shown before any admin uploads their own.
fn initial_slider() -> Value {
    json!([
        {
            "id": "1",
            "imageUrl": "https://images.unsplash.com/photo-1574629810360-7efbbe195018?q=80&w=1200",
            "active": true
        },
        {
            "id": "2",
            "imageUrl": "https://images.unsplash.com/photo-1543351611-58f69d7c1781?q=80&w=1200",
            "active": true
        }
    ])
}

/// Default club settings.
fn initial_club() -> Value {
    json!({
        "name": "AMSAL FC",
        "address": "",
        "groundLocation": "",
        "groundSize": "",
        "fieldType": "Natural Grass",
        "groundImageUrl": ""
    })
}
