//! List presenter driving the visible list of items.

use std::sync::Arc;

use async_trait::async_trait;
use entities::{PriorityColor, TodoItem};
use serde::Serialize;
use todo_store::{TodoStore, TodoStoreResult};
use uuid::Uuid;

use crate::editor::{DetailEditor, EditorDelegate};

/// One displayed line of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    pub id: Uuid,
    pub title: String,
    pub date: String,
    pub color: PriorityColor,
}

impl From<&TodoItem> for ListRow {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id,
            title: item.title_or_empty().to_string(),
            date: item.display_date_local(),
            color: item.priority.color(),
        }
    }
}

/// Keeps the displayed list in sync with the store and opens editors.
pub struct ListPresenter<S: ?Sized> {
    store: Arc<S>,
    items: Vec<TodoItem>,
}

impl<S: TodoStore + ?Sized> ListPresenter<S> {
    /// Creates a presenter with an empty list. Call [`refresh`](Self::refresh)
    /// to load it.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            items: Vec::new(),
        }
    }

    /// Reloads the whole list from the store.
    ///
    /// A storage failure is logged and leaves the list empty.
    pub async fn refresh(&mut self) {
        self.items = match self.store.list_all().await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load todo items");
                Vec::new()
            }
        };
        tracing::debug!(count = self.items.len(), "Refreshed todo list");
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn rows(&self) -> Vec<ListRow> {
        self.items.iter().map(ListRow::from).collect()
    }

    /// Finds a displayed item by id.
    pub fn find(&self, id: Uuid) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Opens the editor for an existing item.
    pub fn on_item_chosen(&self, item: &TodoItem) -> DetailEditor<S> {
        DetailEditor::edit(self.store.clone(), item.clone())
    }

    /// Opens the editor for the item with `id`, read from the store rather
    /// than the displayed list. Returns `None` if no such item exists.
    pub async fn open_editor(&self, id: Uuid) -> TodoStoreResult<Option<DetailEditor<S>>> {
        let item = self.store.get(id).await?;
        Ok(item.map(|item| self.on_item_chosen(&item)))
    }

    /// Opens the editor for a new item.
    pub fn on_add_requested(&self) -> DetailEditor<S> {
        DetailEditor::create(self.store.clone())
    }

    /// Called when an editor closes.
    pub async fn on_editor_finished(&mut self) {
        self.refresh().await;
    }
}

#[async_trait]
impl<S: TodoStore + ?Sized> EditorDelegate for ListPresenter<S> {
    async fn editor_did_finish(&mut self) {
        self.on_editor_finished().await;
    }
}
