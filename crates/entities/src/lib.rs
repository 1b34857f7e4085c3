//! Core entity definitions for the to-do list.
//!
//! This crate defines the data types shared by the item store and the
//! presentation layer: the [`TodoItem`] record and its [`Priority`] level.

mod priority;
mod todo;

pub use priority::*;
pub use todo::*;
