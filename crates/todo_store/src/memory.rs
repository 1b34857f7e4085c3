//! In-memory todo store implementation for testing.

use async_trait::async_trait;
use entities::{Priority, TodoItem};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{TodoStore, TodoStoreResult};

/// In-memory todo store for testing purposes.
///
/// Items are kept in a `Vec` so that listing preserves insertion order.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    items: RwLock<Vec<TodoItem>>,
}

impl MemoryTodoStore {
    /// Creates a new in-memory todo store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list_all(&self) -> TodoStoreResult<Vec<TodoItem>> {
        let items = self.items.read().await;
        Ok(items.clone())
    }

    async fn insert(
        &self,
        title: Option<String>,
        priority: Option<Priority>,
    ) -> TodoStoreResult<TodoItem> {
        let item = TodoItem::new(title, priority);
        let mut items = self.items.write().await;
        items.push(item.clone());
        Ok(item)
    }

    async fn get(&self, id: Uuid) -> TodoStoreResult<Option<TodoItem>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn update(
        &self,
        id: Uuid,
        title: Option<String>,
        priority: Option<Priority>,
    ) -> TodoStoreResult<Option<TodoItem>> {
        let mut items = self.items.write().await;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        item.apply_edit(title, priority);
        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: Uuid) -> TodoStoreResult<bool> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() != before)
    }
}
