//! SQLite-backed todo store.

use std::{path::Path, str::FromStr};

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use entities::{Priority, TodoItem};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    FromRow, Pool, Sqlite,
};
use uuid::Uuid;

use crate::{TodoStore, TodoStoreError, TodoStoreResult};

/// Schema for the todo items table.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS todo_items (
    id TEXT PRIMARY KEY NOT NULL,
    title TEXT,
    updated_at TEXT NOT NULL,
    priority INTEGER NOT NULL DEFAULT 0
);
"#;

/// Database row for TodoItem
#[derive(Debug, FromRow)]
struct TodoItemRow {
    id: String,
    title: Option<String>,
    updated_at: String,
    priority: i64,
}

impl TryFrom<TodoItemRow> for TodoItem {
    type Error = TodoStoreError;

    fn try_from(row: TodoItemRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id).map_err(|_| TodoStoreError::InvalidId(row.id))?;
        let updated_at = DateTime::parse_from_rfc3339(&row.updated_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| TodoStoreError::InvalidTimestamp(row.updated_at))?;
        let priority =
            Priority::from_raw(row.priority).ok_or(TodoStoreError::InvalidPriority(row.priority))?;

        Ok(TodoItem {
            id,
            title: row.title,
            updated_at,
            priority,
        })
    }
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Todo store persisted in a SQLite database file.
///
/// The pool holds a single connection, so writes are serialized.
#[derive(Debug, Clone)]
pub struct SqliteTodoStore {
    pool: Pool<Sqlite>,
}

impl SqliteTodoStore {
    /// Opens (or creates) the database at `db_path`.
    pub async fn open(db_path: &Path) -> TodoStoreResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    TodoStoreError::Other(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        tracing::info!(path = %db_path.display(), "Opened todo database");

        let store = Self { pool };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Opens a private in-memory database. Contents are lost on drop.
    pub async fn in_memory() -> TodoStoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        // The single connection owns the database; keep it alive.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Closes the underlying pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn run_migrations(&self) -> TodoStoreResult<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl TodoStore for SqliteTodoStore {
    async fn list_all(&self) -> TodoStoreResult<Vec<TodoItem>> {
        let rows: Vec<TodoItemRow> = sqlx::query_as(
            "SELECT id, title, updated_at, priority
             FROM todo_items
             ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TodoItem::try_from).collect()
    }

    async fn insert(
        &self,
        title: Option<String>,
        priority: Option<Priority>,
    ) -> TodoStoreResult<TodoItem> {
        let item = TodoItem::new(title, priority);

        sqlx::query(
            "INSERT INTO todo_items (id, title, updated_at, priority)
             VALUES (?, ?, ?, ?)",
        )
        .bind(item.id.to_string())
        .bind(&item.title)
        .bind(timestamp(&item.updated_at))
        .bind(item.priority.as_raw())
        .execute(&self.pool)
        .await?;

        tracing::debug!(id = %item.id, priority = %item.priority, "Inserted todo item");
        Ok(item)
    }

    async fn get(&self, id: Uuid) -> TodoStoreResult<Option<TodoItem>> {
        let row: Option<TodoItemRow> = sqlx::query_as(
            "SELECT id, title, updated_at, priority
             FROM todo_items
             WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TodoItem::try_from).transpose()
    }

    async fn update(
        &self,
        id: Uuid,
        title: Option<String>,
        priority: Option<Priority>,
    ) -> TodoStoreResult<Option<TodoItem>> {
        let item = TodoItem {
            id,
            title,
            updated_at: Utc::now(),
            priority: priority.unwrap_or_default(),
        };

        let result = sqlx::query(
            "UPDATE todo_items SET title = ?, updated_at = ?, priority = ?
             WHERE id = ?",
        )
        .bind(&item.title)
        .bind(timestamp(&item.updated_at))
        .bind(item.priority.as_raw())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(id = %id, "No todo item to update");
            return Ok(None);
        }

        tracing::debug!(id = %id, priority = %item.priority, "Updated todo item");
        Ok(Some(item))
    }

    async fn delete(&self, id: Uuid) -> TodoStoreResult<bool> {
        let result = sqlx::query("DELETE FROM todo_items WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        tracing::debug!(id = %id, deleted, "Deleted todo item");
        Ok(deleted)
    }
}
