use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, Row, SqliteConnection};

use crate::error::{PlaygroundError, Result};

use super::{Store, StoreKey};

const DB_FILE: &str = "api-playground.sqlite";
const DB_VERSION: i32 = 1;

/// Asynchronous transactional backend: a fixed sqlite database with one table
/// per store key, each holding a single row keyed `"data"` with the
/// serialized list.
pub struct SqliteStore {
    connection: Option<SqliteConnection>,
}

impl SqliteStore {
    pub async fn new() -> Result<Self> {
        let dir = dirs::config_dir()
            .map(|p| p.join(super::file::APP_DIR))
            .ok_or_else(|| {
                PlaygroundError::Storage(String::from("no config directory available"))
            })?;
        std::fs::create_dir_all(&dir)?;
        Self::with_path(dir.join(DB_FILE)).await
    }

    /// Opens (and migrates) the database at an explicit path, used by tests.
    pub async fn with_path(path: PathBuf) -> Result<Self> {
        log::info!("acquiring sqlite connection at {}", path.display());
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        let mut connection = SqliteConnection::connect_with(&options).await?;
        Self::migrate(&mut connection).await?;
        Ok(SqliteStore {
            connection: Some(connection),
        })
    }

    /// Additive-only migration: create the three tables if absent, then stamp
    /// the schema version. Nothing is ever dropped or renamed.
    async fn migrate(connection: &mut SqliteConnection) -> Result<()> {
        for key in StoreKey::ALL {
            let create = format!(
                "CREATE TABLE IF NOT EXISTS {} (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
                key.table()
            );
            sqlx::query(&create).execute(&mut *connection).await?;
        }
        sqlx::query(&format!("PRAGMA user_version = {DB_VERSION}"))
            .execute(&mut *connection)
            .await?;
        Ok(())
    }

    fn connection(&mut self) -> Result<&mut SqliteConnection> {
        self.connection
            .as_mut()
            .ok_or_else(|| PlaygroundError::Storage(String::from("connection is closed")))
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn load(&mut self, key: StoreKey) -> Result<Option<Value>> {
        let query = format!("SELECT value FROM {} WHERE key = 'data'", key.table());
        let row = sqlx::query(&query)
            .fetch_optional(self.connection()?)
            .await?;
        match row {
            Some(row) => {
                let raw: String = row.get("value");
                Ok(Some(serde_json::from_str(&raw)?))
            }
            None => Ok(None),
        }
    }

    async fn save(&mut self, key: StoreKey, value: &Value) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        let query = format!(
            "INSERT OR REPLACE INTO {} (key, value) VALUES ('data', $1)",
            key.table()
        );
        let connection = self.connection()?;
        let mut transaction = connection.begin().await?;
        sqlx::query(&query)
            .bind(raw)
            .execute(&mut *transaction)
            .await?;
        transaction.commit().await?;
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(connection) = self.connection.take() {
            connection.close().await?;
        }
        Ok(())
    }
}
