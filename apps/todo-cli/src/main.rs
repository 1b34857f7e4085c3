//! To-do list command line front end.

use std::{path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use entities::Priority;
use todo_cli::{EditOutcome, ListPresenter, config::Config, init_tracing};
use todo_store::SqliteTodoStore;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "todo", about = "A minimal to-do list", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path of the database file (overrides config and environment)
    #[arg(long, global = true, value_name = "PATH")]
    database: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every item
    List {
        /// Print items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new item
    Add {
        #[arg(short, long)]
        title: Option<String>,

        /// low, normal or high (defaults to low)
        #[arg(short, long)]
        priority: Option<Priority>,
    },

    /// Update an existing item
    Edit {
        id: Uuid,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        priority: Option<Priority>,
    },

    /// Delete an existing item
    Delete { id: Uuid },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(path) = cli.database {
        config.database_path = path;
    }

    init_tracing(&config.log_level);

    let store = Arc::new(SqliteTodoStore::open(&config.database_path).await?);
    let mut presenter = ListPresenter::new(store.clone());
    presenter.refresh().await;

    let result = run(cli.command, &mut presenter).await;
    store.close().await;
    result
}

async fn run(
    command: Commands,
    presenter: &mut ListPresenter<SqliteTodoStore>,
) -> anyhow::Result<()> {
    match command {
        Commands::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(presenter.items())?);
            } else if presenter.items().is_empty() {
                println!("No items.");
            } else {
                for row in presenter.rows() {
                    println!(
                        "{}  {:<6}  {}  {}",
                        row.date,
                        row.color.as_str(),
                        row.id,
                        row.title
                    );
                }
            }
        }
        Commands::Add { title, priority } => {
            let mut editor = presenter.on_add_requested();
            if let Some(title) = title {
                editor.set_title(title);
            }
            if let Some(priority) = priority {
                editor.select_priority(priority);
            }
            print_outcome(&editor.save(presenter).await?);
        }
        Commands::Edit {
            id,
            title,
            priority,
        } => {
            let Some(mut editor) = presenter.open_editor(id).await? else {
                println!("No item with id {id}.");
                return Ok(());
            };
            if let Some(title) = title {
                editor.set_title(title);
            }
            if let Some(priority) = priority {
                editor.select_priority(priority);
            }
            print_outcome(&editor.save(presenter).await?);
        }
        Commands::Delete { id } => {
            let Some(editor) = presenter.open_editor(id).await? else {
                println!("No item with id {id}.");
                return Ok(());
            };
            print_outcome(&editor.delete(presenter).await?);
        }
    }

    Ok(())
}

fn print_outcome(outcome: &EditOutcome) {
    match outcome {
        EditOutcome::Created(item) => println!("Created {} ({})", item.id, item.priority),
        EditOutcome::Updated(item) => println!("Updated {} ({})", item.id, item.priority),
        EditOutcome::Deleted(id) => println!("Deleted {id}"),
        EditOutcome::NotFound(id) => println!("No item with id {id}."),
    }
}
