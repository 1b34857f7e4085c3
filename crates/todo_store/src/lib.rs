//! To-do item storage.
//!
//! This crate provides the [`TodoStore`] abstraction over the persisted list of
//! [`TodoItem`](entities::TodoItem) records, with an in-memory implementation
//! for tests and a SQLite implementation that survives process restarts.

mod error;
mod memory;
mod sqlite;
mod traits;

pub use error::*;
pub use memory::*;
pub use sqlite::*;
pub use traits::*;
