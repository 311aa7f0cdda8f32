//! JSON-file API key store
//!
//! Durable backend persisting the whole key collection as a single JSON
//! document. Every read loads the full file; every mutation re-reads,
//! modifies, and atomically replaces it, so readers never observe a torn
//! document. Write volume is expected to be low (issuance and revocation
//! only), which makes the wholesale-overwrite strategy acceptable.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::api_key::{ApiKey, ApiKeyRepository};
use crate::domain::DomainError;

/// On-disk document: a single keyed collection of records
#[derive(Debug, Default, Serialize, Deserialize)]
struct KeyFile {
    keys: HashMap<String, ApiKey>,
}

/// File-backed implementation of `ApiKeyRepository`.
///
/// Mutations serialize behind an async mutex (single-writer discipline);
/// reads go straight to the file and never block on a writer. The document
/// is replaced via a temp-file-and-rename cycle so concurrent readers see
/// either the old or the new contents, never a partial write.
#[derive(Debug)]
pub struct JsonFileApiKeyRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileApiKeyRepository {
    /// Create a repository backed by the file at `path`.
    ///
    /// The file is created lazily on the first write; a missing file reads
    /// as an empty collection.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<KeyFile, DomainError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(KeyFile::default()),
            Err(e) => {
                return Err(DomainError::storage(format!(
                    "failed to read key store {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            DomainError::storage(format!(
                "key store {} is corrupt: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn write_document(&self, document: &KeyFile) -> Result<(), DomainError> {
        let bytes = serde_json::to_vec_pretty(document).map_err(|e| {
            DomainError::storage(format!("failed to encode key store: {}", e))
        })?;

        // Write to a sibling temp file and rename over the original so a
        // concurrent reader never sees a half-written document.
        let tmp_path = self.path.with_extension("tmp");

        tokio::fs::write(&tmp_path, &bytes).await.map_err(|e| {
            DomainError::storage(format!(
                "failed to write key store {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        tokio::fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            DomainError::storage(format!(
                "failed to replace key store {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl ApiKeyRepository for JsonFileApiKeyRepository {
    async fn put(&self, record: ApiKey) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.read_document().await?;
        document.keys.insert(record.key().to_string(), record);

        self.write_document(&document).await?;

        debug!(total = document.keys.len(), "Key store updated");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<ApiKey>, DomainError> {
        let document = self.read_document().await?;
        Ok(document.keys.get(key).cloned())
    }

    async fn set_inactive(&self, key: &str) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.read_document().await?;

        let changed = match document.keys.get_mut(key) {
            Some(record) if record.is_active() => {
                record.revoke();
                true
            }
            // Already inactive or unknown key: nothing to persist
            _ => false,
        };

        if changed {
            self.write_document(&document).await?;
        }

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ApiKey>, DomainError> {
        let document = self.read_document().await?;
        Ok(document.keys.into_values().collect())
    }
}
