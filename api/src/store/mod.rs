pub mod file;
pub mod sqlite;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

pub use file::FileStore;
pub use sqlite::SqliteStore;

/// The three persisted collections. Each key maps to one file in the file
/// backend and one table in the sqlite backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKey {
    History,
    SavedRequests,
    EnvVars,
}

impl StoreKey {
    pub const ALL: [StoreKey; 3] = [StoreKey::History, StoreKey::SavedRequests, StoreKey::EnvVars];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::History => "history",
            StoreKey::SavedRequests => "savedRequests",
            StoreKey::EnvVars => "envVars",
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            StoreKey::History => "history",
            StoreKey::SavedRequests => "saved_requests",
            StoreKey::EnvVars => "env_vars",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreState {
    Uninitialized,
    Loading,
    Ready,
}

/// Passive durability layer behind the orchestrator. Both backends are
/// best-effort: a failed load falls back to the caller's default and a failed
/// save leaves the in-memory state authoritative for the session.
#[async_trait]
pub trait Store: Send {
    /// Fetches the value stored under the key, `None` when absent.
    async fn load(&mut self, key: StoreKey) -> Result<Option<Value>>;

    /// Overwrites the value stored under the key.
    async fn save(&mut self, key: StoreKey, value: &Value) -> Result<()>;

    /// Releases the underlying handle. Further calls fail.
    async fn close(&mut self) -> Result<()>;
}

/// Owns a boxed backend plus the load lifecycle. Consumers must not persist
/// before `mark_ready`, so the initial defaults never clobber on-disk data
/// that has not been loaded yet. Nothing here propagates errors to the UI.
pub struct StoreHandle {
    backend: Box<dyn Store>,
    state: StoreState,
}

impl StoreHandle {
    pub fn new(backend: Box<dyn Store>) -> Self {
        StoreHandle {
            backend,
            state: StoreState::Uninitialized,
        }
    }

    /// Opens the preferred sqlite backend, falling back to the file backend
    /// when the database cannot be opened. Storage never blocks startup.
    pub async fn open_default() -> Self {
        match SqliteStore::new().await {
            Ok(store) => StoreHandle::new(Box::new(store)),
            Err(err) => {
                log::error!("sqlite store unavailable, falling back to file store: {err}");
                StoreHandle::new(Box::new(FileStore::new()))
            }
        }
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == StoreState::Ready
    }

    /// Loads the list stored under the key, degrading to the empty default on
    /// any failure (missing record, parse error, storage unavailable).
    pub async fn load_list<T: DeserializeOwned>(&mut self, key: StoreKey) -> Vec<T> {
        if self.state == StoreState::Uninitialized {
            self.state = StoreState::Loading;
        }
        match self.backend.load(key).await {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(list) => list,
                Err(err) => {
                    log::error!("could not parse stored '{}': {err}", key.as_str());
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                log::error!("could not load '{}': {err}", key.as_str());
                Vec::new()
            }
        }
    }

    /// All initial loads are done; writes are allowed from here on.
    pub fn mark_ready(&mut self) {
        self.state = StoreState::Ready;
    }

    /// Persists the list under the key. Writes issued before the handle is
    /// ready are dropped; failures are logged and swallowed.
    pub async fn save_list<T: Serialize>(&mut self, key: StoreKey, items: &[T]) {
        if !self.is_ready() {
            log::warn!("skipping save of '{}' before store is ready", key.as_str());
            return;
        }
        let value = match serde_json::to_value(items) {
            Ok(value) => value,
            Err(err) => {
                log::error!("could not serialize '{}': {err}", key.as_str());
                return;
            }
        };
        if let Err(err) = self.backend.save(key, &value).await {
            log::error!("could not save '{}': {err}", key.as_str());
        }
    }

    /// Releases the backend handle when the owning component is discarded.
    pub async fn close(&mut self) {
        if let Err(err) = self.backend.close().await {
            log::error!("error closing store: {err}");
        }
    }
}
