// SPDX-License-Identifier: MIT

//! Local file backend: one pretty-printed JSON file per document.
//!
//! Writes go to a temporary sibling (`<name>.json.tmp`) first and are then
//! renamed over the real file, so a concurrent reader only ever sees the
//! old or the new version, never a partial write.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use super::{BackendError, Document, DocumentBackend};

/// File-per-document JSON store rooted at a data directory.
#[derive(Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Create a local store rooted at `dir`, creating the directory
    /// (recursively) if it does not exist.
    pub async fn new(dir: impl AsRef<Path>) -> Result<Self, BackendError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Path of the real document file.
    pub fn path_for(&self, doc: Document) -> PathBuf {
        self.dir.join(doc.file_name())
    }

    fn tmp_path_for(&self, doc: Document) -> PathBuf {
        self.dir.join(format!("{}.tmp", doc.file_name()))
    }

    /// Whether the document file exists, regardless of its contents.
    /// Seeding distinguishes "present but empty" from "absent" with this.
    pub async fn exists(&self, doc: Document) -> bool {
        fs::try_exists(self.path_for(doc)).await.unwrap_or(false)
    }
}

#[async_trait]
impl DocumentBackend for LocalStore {
    async fn fetch(&self, doc: Document) -> Result<Option<Value>, BackendError> {
        let path = self.path_for(doc);
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        // An empty or whitespace-only file counts as absent.
        if raw.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(source) => Err(BackendError::Malformed {
                document: doc.key(),
                source,
            }),
        }
    }

    async fn store(&self, doc: Document, value: &Value) -> Result<(), BackendError> {
        // The directory may have been removed since init.
        fs::create_dir_all(&self.dir).await?;

        let json = serde_json::to_string_pretty(value).map_err(|source| {
            BackendError::Malformed {
                document: doc.key(),
                source,
            }
        })?;

        let tmp_path = self.tmp_path_for(doc);
        fs::write(&tmp_path, &json).await?;
        fs::rename(&tmp_path, self.path_for(doc)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let local = LocalStore::new(dir.path()).await.unwrap();
        assert_eq!(local.fetch(Document::Members).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_fetch_whitespace_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let local = LocalStore::new(dir.path()).await.unwrap();
        std::fs::write(local.path_for(Document::News), "  \n\t").unwrap();
        assert_eq!(local.fetch(Document::News).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_fetch_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let local = LocalStore::new(dir.path()).await.unwrap();
        std::fs::write(local.path_for(Document::Club), "{not json").unwrap();
        let err = local.fetch(Document::Club).await.unwrap_err();
        assert!(matches!(err, BackendError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_store_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let local = LocalStore::new(dir.path()).await.unwrap();
        let value = json!([{"id": "1"}]);
        local.store(Document::Slider, &value).await.unwrap();

        assert!(!local.tmp_path_for(Document::Slider).exists());
        assert_eq!(
            local.fetch(Document::Slider).await.unwrap(),
            Some(value)
        );
    }

    #[tokio::test]
    async fn test_store_recreates_removed_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("data");
        let local = LocalStore::new(&sub).await.unwrap();
        std::fs::remove_dir_all(&sub).unwrap();

        local.store(Document::Members, &json!([])).await.unwrap();
        assert!(local.exists(Document::Members).await);
    }
}
