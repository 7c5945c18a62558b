use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{PlaygroundError, Result};

use super::{Store, StoreKey};

pub(crate) const APP_DIR: &str = "api-playground";

/// Synchronous key/value backend: one JSON file per store key under the
/// platform config directory. Every operation is best-effort.
pub struct FileStore {
    dir: Option<PathBuf>,
    closed: bool,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore {
    pub fn new() -> Self {
        let dir = dirs::config_dir().map(|p| p.join(APP_DIR));
        if dir.is_none() {
            log::error!("no config directory available, file store is session-only");
        }
        FileStore { dir, closed: false }
    }

    /// Backend rooted at an explicit directory, used by tests.
    pub fn with_dir(dir: PathBuf) -> Self {
        FileStore {
            dir: Some(dir),
            closed: false,
        }
    }

    fn path_for(&self, key: StoreKey) -> Result<PathBuf> {
        if self.closed {
            return Err(PlaygroundError::Storage(String::from("store is closed")));
        }
        match &self.dir {
            Some(dir) => Ok(dir.join(format!("{}.json", key.as_str()))),
            None => Err(PlaygroundError::Storage(String::from(
                "no config directory available",
            ))),
        }
    }
}

#[async_trait]
impl Store for FileStore {
    async fn load(&mut self, key: StoreKey) -> Result<Option<Value>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&raw)?;
        Ok(Some(value))
    }

    async fn save(&mut self, key: StoreKey, value: &Value) -> Result<()> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string(value)?)?;
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}
