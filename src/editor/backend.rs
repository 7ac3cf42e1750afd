//! Persistence collaborators.
//!
//! The editor only depends on the narrow [`ConfigBackend`] and
//! [`StoreInfoSource`] contracts. Two backends ship with the crate: one JSON
//! file per store on disk, and an in-memory map for tests and demos.

use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::model::StoreInfo;

/// Failure reported by a persistence backend.
#[derive(thiserror::Error, Debug)]
pub enum BackendError {
    /// Store identifiers must be plain names.
    #[error("invalid store id '{0}'")]
    InvalidStoreId(String),

    /// Reading or writing the backing file failed.
    #[error("I/O error on '{path}': {details}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Error details.
        details: String,
    },

    /// The stored payload is not a JSON object.
    #[error("malformed payload at '{location}': {details}")]
    Malformed {
        /// Where the payload came from.
        location: String,
        /// Parse error details.
        details: String,
    },

    /// The backend refused the request.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Loads and saves the per-store configuration payload.
#[async_trait]
pub trait ConfigBackend: Send + Sync {
    /// The stored payload, or `None` when the store has never saved one.
    async fn load(&self, store_id: &str) -> Result<Option<Value>, BackendError>;

    /// Replaces the stored payload.
    async fn save(&self, store_id: &str, payload: &Value) -> Result<(), BackendError>;
}

/// Supplies read-only facts about a store.
pub trait StoreInfoSource: Send + Sync {
    /// Store logo and storefront address.
    fn store_info(&self, store_id: &str) -> StoreInfo;
}

impl StoreInfoSource for StoreInfo {
    fn store_info(&self, _store_id: &str) -> StoreInfo {
        self.clone()
    }
}

/// One `<store_id>.json` file per store in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    dir: PathBuf,
}

impl JsonFileBackend {
    /// Backend rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the payload files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding a store's payload.
    ///
    /// # Errors
    /// Returns `BackendError::InvalidStoreId` for empty ids and ids that
    /// would escape the directory.
    pub fn path_for(&self, store_id: &str) -> Result<PathBuf, BackendError> {
        let valid = !store_id.is_empty()
            && store_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !store_id.starts_with('.');

        if !valid {
            return Err(BackendError::InvalidStoreId(store_id.to_string()));
        }

        Ok(self.dir.join(format!("{store_id}.json")))
    }
}

#[async_trait]
impl ConfigBackend for JsonFileBackend {
    #[instrument(skip(self))]
    async fn load(&self, store_id: &str) -> Result<Option<Value>, BackendError> {
        let path = self.path_for(store_id)?;

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored configuration");
                return Ok(None);
            }
            Err(e) => {
                return Err(BackendError::Io {
                    path,
                    details: e.to_string(),
                });
            }
        };

        let payload: Value =
            serde_json::from_str(&content).map_err(|e| BackendError::Malformed {
                location: path.display().to_string(),
                details: e.to_string(),
            })?;

        if !payload.is_object() {
            return Err(BackendError::Malformed {
                location: path.display().to_string(),
                details: "expected a JSON object".to_string(),
            });
        }

        Ok(Some(payload))
    }

    #[instrument(skip(self, payload))]
    async fn save(&self, store_id: &str, payload: &Value) -> Result<(), BackendError> {
        let path = self.path_for(store_id)?;
        let io_err = |path: &Path, e: std::io::Error| BackendError::Io {
            path: path.to_path_buf(),
            details: e.to_string(),
        };

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| io_err(&self.dir, e))?;

        let content = serde_json::to_string_pretty(payload).map_err(|e| BackendError::Malformed {
            location: path.display().to_string(),
            details: e.to_string(),
        })?;

        let staging = path.with_extension("json.tmp");
        tokio::fs::write(&staging, content)
            .await
            .map_err(|e| io_err(&staging, e))?;
        tokio::fs::rename(&staging, &path)
            .await
            .map_err(|e| io_err(&path, e))?;

        debug!(path = %path.display(), "configuration written");
        Ok(())
    }
}

/// In-process backend with switchable failures.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    payloads: Mutex<HashMap<String, Value>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryBackend {
    /// Empty backend: every store is on its first visit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with one stored payload.
    pub fn with_payload(store_id: &str, payload: Value) -> Self {
        let backend = Self::new();
        if let Ok(mut payloads) = backend.payloads.lock() {
            payloads.insert(store_id.to_string(), payload);
        }
        backend
    }

    /// Makes every following load fail (or succeed again).
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Makes every following save fail (or succeed again).
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Payload currently stored for a store.
    pub fn stored(&self, store_id: &str) -> Option<Value> {
        self.payloads.lock().ok()?.get(store_id).cloned()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigBackend for MemoryBackend {
    async fn load(&self, store_id: &str) -> Result<Option<Value>, BackendError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("load rejected".to_string()));
        }

        let payloads = self
            .payloads
            .lock()
            .map_err(|_| BackendError::Unavailable("payload map poisoned".to_string()))?;
        Ok(payloads.get(store_id).cloned())
    }

    async fn save(&self, store_id: &str, payload: &Value) -> Result<(), BackendError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("save rejected".to_string()));
        }

        let mut payloads = self
            .payloads
            .lock()
            .map_err(|_| BackendError::Unavailable("payload map poisoned".to_string()))?;
        payloads.insert(store_id.to_string(), payload.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
