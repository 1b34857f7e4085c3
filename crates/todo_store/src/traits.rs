//! Todo store trait definitions.

use async_trait::async_trait;
use entities::{Priority, TodoItem};
use uuid::Uuid;

use crate::TodoStoreResult;

/// Trait for todo item storage operations.
///
/// Every item is keyed by its `id`. Lookup misses on `update` and `delete`
/// are reported as `None` / `false` so callers can tell them apart from
/// storage failures.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Lists every stored item in insertion order.
    async fn list_all(&self) -> TodoStoreResult<Vec<TodoItem>>;

    /// Creates a new todo item and returns the stored record.
    ///
    /// A missing priority is stored as [`Priority::Low`].
    async fn insert(
        &self,
        title: Option<String>,
        priority: Option<Priority>,
    ) -> TodoStoreResult<TodoItem>;

    /// Gets a todo item by ID.
    async fn get(&self, id: Uuid) -> TodoStoreResult<Option<TodoItem>>;

    /// Overwrites title and priority of the item with `id` and refreshes its
    /// timestamp. Returns `None` if no such item exists.
    async fn update(
        &self,
        id: Uuid,
        title: Option<String>,
        priority: Option<Priority>,
    ) -> TodoStoreResult<Option<TodoItem>>;

    /// Deletes the item with `id`. Returns `false` if no such item exists.
    async fn delete(&self, id: Uuid) -> TodoStoreResult<bool>;
}
