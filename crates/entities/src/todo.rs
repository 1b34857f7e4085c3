//! TodoItem entity definitions.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Priority;

/// Format used when a timestamp is shown in the list.
pub const DISPLAY_DATE_FORMAT: &str = "%m-%d %I:%M:%S";

/// A single task on the to-do list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier. Never changes after creation.
    pub id: Uuid,
    /// User supplied title. May be empty or absent.
    pub title: Option<String>,
    /// When this record was created or last updated.
    pub updated_at: DateTime<Utc>,
    /// Priority level.
    #[serde(default)]
    pub priority: Priority,
}

impl TodoItem {
    /// Creates a new todo item with a fresh id, stamped with the current time.
    ///
    /// A missing priority falls back to [`Priority::Low`].
    pub fn new(title: Option<String>, priority: Option<Priority>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            updated_at: Utc::now(),
            priority: priority.unwrap_or_default(),
        }
    }

    /// Overwrites the editable fields and refreshes the timestamp.
    pub fn apply_edit(&mut self, title: Option<String>, priority: Option<Priority>) {
        self.title = title;
        self.priority = priority.unwrap_or_default();
        self.updated_at = Utc::now();
    }

    /// Returns the title, or an empty string if none was given.
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Renders the timestamp as shown in the list, e.g. `11-16 01:05:09`.
    pub fn display_date(&self) -> String {
        self.updated_at.format(DISPLAY_DATE_FORMAT).to_string()
    }

    /// Same as [`display_date`](Self::display_date), in the local time zone.
    pub fn display_date_local(&self) -> String {
        self.updated_at
            .with_timezone(&Local)
            .format(DISPLAY_DATE_FORMAT)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_new_defaults_to_low() {
        let item = TodoItem::new(Some("Buy milk".to_string()), None);
        assert_eq!(item.priority, Priority::Low);
        assert_eq!(item.title_or_empty(), "Buy milk");
    }

    #[test]
    fn test_new_assigns_distinct_ids() {
        let a = TodoItem::new(None, None);
        let b = TodoItem::new(None, None);
        assert_ne!(a.id, b.id);
        assert_eq!(a.title_or_empty(), "");
    }

    #[test]
    fn test_apply_edit_keeps_id() {
        let mut item = TodoItem::new(Some("Draft".to_string()), Some(Priority::High));
        let id = item.id;
        let before = item.updated_at;

        item.apply_edit(Some("Final".to_string()), Some(Priority::Normal));

        assert_eq!(item.id, id);
        assert_eq!(item.title.as_deref(), Some("Final"));
        assert_eq!(item.priority, Priority::Normal);
        assert!(item.updated_at >= before);

        item.apply_edit(None, None);
        assert_eq!(item.priority, Priority::Low);
        assert!(item.title.is_none());
    }

    #[test]
    fn test_display_date() {
        let mut item = TodoItem::new(None, None);
        item.updated_at = Utc.with_ymd_and_hms(2021, 11, 16, 13, 5, 9).unwrap();
        assert_eq!(item.display_date(), "11-16 01:05:09");
    }

    #[test]
    fn test_display_date_local() {
        let mut item = TodoItem::new(None, None);
        item.updated_at = Utc.with_ymd_and_hms(2021, 11, 16, 13, 5, 9).unwrap();

        let expected = item
            .updated_at
            .with_timezone(&Local)
            .format("%m-%d %I:%M:%S")
            .to_string();
        assert_eq!(item.display_date_local(), expected);
    }

    #[test]
    fn test_missing_priority_deserializes_as_low() {
        let json = format!(
            r#"{{"id":"{}","title":"x","updated_at":"2021-11-16T13:05:09Z"}}"#,
            Uuid::new_v4()
        );
        let item: TodoItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item.priority, Priority::Low);
    }
}
