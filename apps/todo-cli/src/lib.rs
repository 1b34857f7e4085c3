//! To-do list front end.
//!
//! Holds the list presenter and the detail editor that drive the item store,
//! plus configuration and logging setup for the `todo` binary.

pub mod config;
pub mod editor;
pub mod presenter;

pub use editor::{DetailEditor, EditOutcome, EditorDelegate, EditorError, EditorMode, EditorResult};
pub use presenter::{ListPresenter, ListRow};

/// Initializes tracing with the given log level.
///
/// `RUST_LOG` takes precedence when set. Output goes to stderr so that list
/// output on stdout stays clean.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
