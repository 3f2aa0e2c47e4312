use crate::domain::error::TransproError;
use crate::domain::traits::KeyValueStore;
use async_trait::async_trait;
use std::path::Path;
use tokio_rusqlite::Connection;

async fn init_database(db_path: &Path) -> Result<Connection, TransproError> {
    let db = Connection::open(db_path.to_path_buf()).await?;

    db.call(|conn| {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        Ok::<_, rusqlite::Error>(())
    })
    .await?;

    Ok(db)
}

/// SQLite-backed key-value store
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (creating if needed) the store file and its table
    pub async fn open(db_path: &Path) -> Result<Self, TransproError> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let conn = init_database(db_path).await?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, TransproError> {
        use rusqlite::OptionalExtension;
        use tokio_rusqlite::params;

        let key = key.to_string();
        let value = self
            .conn
            .call(move |conn| {
                conn.query_row(
                    "SELECT value FROM kv WHERE key = ?",
                    params![key],
                    |row| row.get::<_, String>(0),
                )
                .optional()
            })
            .await?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), TransproError> {
        use tokio_rusqlite::params;

        let key = key.to_string();
        let value = value.to_string();
        let now = chrono::Utc::now().timestamp();

        self.conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO kv (key, value, updated_at) VALUES (?, ?, ?)
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                    params![key, value, now],
                )
            })
            .await?;

        Ok(())
    }
}
