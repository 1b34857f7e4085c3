//! Detail editor for creating, updating and deleting a single item.

use std::sync::Arc;

use async_trait::async_trait;
use entities::{Priority, TodoItem};
use thiserror::Error;
use todo_store::{TodoStore, TodoStoreError};
use uuid::Uuid;

/// Receives the one-shot notification sent when an editor closes after a
/// save or delete.
#[async_trait]
pub trait EditorDelegate: Send {
    /// Called exactly once per save or delete, whatever its outcome.
    async fn editor_did_finish(&mut self);
}

/// Errors returned by editor actions.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The store failed. The delegate has still been notified.
    #[error("Store error: {0}")]
    Store(#[from] TodoStoreError),

    /// Delete was requested for an item that has not been created yet.
    #[error("Delete is not available while creating an item")]
    DeleteUnavailable,
}

/// Result type for editor actions.
pub type EditorResult<T> = Result<T, EditorError>;

/// What a save or delete did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// A new item was inserted.
    Created(TodoItem),
    /// The bound item was overwritten.
    Updated(TodoItem),
    /// The bound item was removed.
    Deleted(Uuid),
    /// The bound item no longer exists; nothing was written.
    NotFound(Uuid),
}

/// Whether the editor is bound to an existing item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(TodoItem),
}

/// Create/update/delete flow for one item.
///
/// `save` and `delete` consume the editor: once either has run, the editor is
/// closed.
pub struct DetailEditor<S: ?Sized> {
    store: Arc<S>,
    mode: EditorMode,
    title: Option<String>,
    priority: Option<Priority>,
}

impl<S: TodoStore + ?Sized> DetailEditor<S> {
    /// Opens an empty editor that will insert a new item.
    pub fn create(store: Arc<S>) -> Self {
        Self {
            store,
            mode: EditorMode::Create,
            title: None,
            priority: None,
        }
    }

    /// Opens an editor prefilled from `item` that will update or delete it.
    pub fn edit(store: Arc<S>, item: TodoItem) -> Self {
        Self {
            store,
            title: item.title.clone(),
            priority: Some(item.priority),
            mode: EditorMode::Edit(item),
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Replaces the title. Empty titles are allowed.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Selects a priority level, deselecting any other.
    pub fn select_priority(&mut self, priority: Priority) {
        self.priority = Some(priority);
    }

    /// Currently selected level, if any.
    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Level that a save would store.
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }

    /// Whether the control for `priority` is highlighted.
    pub fn is_highlighted(&self, priority: Priority) -> bool {
        self.priority == Some(priority)
    }

    /// Delete is only offered for existing items.
    pub fn can_delete(&self) -> bool {
        matches!(self.mode, EditorMode::Edit(_))
    }

    /// Label of the save control.
    pub fn save_label(&self) -> &'static str {
        match self.mode {
            EditorMode::Create => "save",
            EditorMode::Edit(_) => "update",
        }
    }

    /// Inserts or updates the item, then notifies `delegate` and closes.
    pub async fn save<D>(self, delegate: &mut D) -> EditorResult<EditOutcome>
    where
        D: EditorDelegate + ?Sized,
    {
        let result = match &self.mode {
            EditorMode::Create => self
                .store
                .insert(self.title.clone(), self.priority)
                .await
                .map(EditOutcome::Created),
            EditorMode::Edit(item) => self
                .store
                .update(item.id, self.title.clone(), self.priority)
                .await
                .map(|updated| match updated {
                    Some(updated) => EditOutcome::Updated(updated),
                    None => EditOutcome::NotFound(item.id),
                }),
        };

        Self::report(&result, "save");
        delegate.editor_did_finish().await;
        result.map_err(EditorError::from)
    }

    /// Deletes the bound item, then notifies `delegate` and closes.
    ///
    /// In create mode nothing happens and the delegate is not notified.
    pub async fn delete<D>(self, delegate: &mut D) -> EditorResult<EditOutcome>
    where
        D: EditorDelegate + ?Sized,
    {
        let EditorMode::Edit(item) = &self.mode else {
            return Err(EditorError::DeleteUnavailable);
        };

        let id = item.id;
        let result = self.store.delete(id).await.map(|deleted| {
            if deleted {
                EditOutcome::Deleted(id)
            } else {
                EditOutcome::NotFound(id)
            }
        });

        Self::report(&result, "delete");
        delegate.editor_did_finish().await;
        result.map_err(EditorError::from)
    }

    fn report(result: &Result<EditOutcome, TodoStoreError>, action: &str) {
        match result {
            Ok(EditOutcome::NotFound(id)) => {
                tracing::warn!(id = %id, action, "Todo item no longer exists");
            }
            Ok(outcome) => tracing::debug!(?outcome, action, "Editor finished"),
            Err(e) => tracing::error!(error = %e, action, "Failed to write todo item"),
        }
    }
}
