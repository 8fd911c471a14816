// src/db/kv.rs
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::db::connection::Database;
use crate::errors::ServerError;
use crate::session::store::KvStore;

/// One visitor's slice of the `kv_entries` table.
pub struct SqliteKvStore {
    db: Database,
    namespace: String,
}

impl SqliteKvStore {
    pub fn new(db: Database, namespace: impl Into<String>) -> Self {
        Self {
            db,
            namespace: namespace.into(),
        }
    }
}

impl KvStore for SqliteKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "select value from kv_entries where namespace = ? and key = ?",
                params![self.namespace, key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| ServerError::DbError(format!("kv get failed: {e}")))
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        let now = Utc::now().timestamp();
        self.db.with_conn(|conn| {
            conn.execute(
                r#"
                insert into kv_entries (namespace, key, value, updated_at)
                values (?1, ?2, ?3, ?4)
                on conflict(namespace, key) do update set
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
                params![self.namespace, key, value, now],
            )
            .map_err(|e| ServerError::DbError(format!("kv set failed: {e}")))?;
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<(), ServerError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "delete from kv_entries where namespace = ? and key = ?",
                params![self.namespace, key],
            )
            .map_err(|e| ServerError::DbError(format!("kv remove failed: {e}")))?;
            Ok(())
        })
    }
}
