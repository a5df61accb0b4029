//! CLI administration tool for todo-api.
//!
//! Talks to the configured store directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check store connection
//! cargo run --bin admin -- db check
//!
//! # List todos
//! cargo run --bin admin -- todos list
//! cargo run --bin admin -- todos list --complete
//!
//! # Remove every todo
//! cargo run --bin admin -- todos purge
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `STORE_BACKEND`, `DATABASE_URL` / `REDIS_URL`, ...
//! The purge command ignores `DELETE_ALL`.

use todo_api::application::services::TodoService;
use todo_api::config;
use todo_api::domain::entities::TodoFilter;
use todo_api::infrastructure::connect_repository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing todo-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage stored todos
    Todos {
        #[command(subcommand)]
        action: TodoAction,
    },

    /// Store operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Todo management subcommands.
#[derive(Subcommand)]
enum TodoAction {
    /// List todos
    List {
        /// Only completed todos
        #[arg(long, conflicts_with = "incomplete")]
        complete: bool,

        /// Only todos that are not completed
        #[arg(long)]
        incomplete: bool,
    },

    /// Delete every todo
    Purge {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Store diagnostic subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let repository = connect_repository(&config)
        .await
        .context("Failed to connect to store")?;
    let service = TodoService::new(repository, config.policy());

    match cli.command {
        Commands::Todos { action } => handle_todo_action(action, &service).await?,
        Commands::Db { action } => handle_db_action(action, &service, &config).await?,
    }

    Ok(())
}

/// Dispatches todo management commands.
async fn handle_todo_action(action: TodoAction, service: &TodoService) -> Result<()> {
    match action {
        TodoAction::List {
            complete,
            incomplete,
        } => {
            let filter = if complete {
                TodoFilter::Complete
            } else if incomplete {
                TodoFilter::Incomplete
            } else {
                TodoFilter::All
            };
            list_todos(service, filter).await?;
        }
        TodoAction::Purge { yes } => purge_todos(service, yes).await?,
    }

    Ok(())
}

/// Lists todos in a table.
///
/// # Output Format
///
/// ```text
/// 📋 Todos
///
///   ID                                    Title                          Status
///   ─────────────────────────────────────────────────────────────────────────────
///   0b6e7c1e-3f0a-4a4e-9d4b-5d2f0c7e9a11  Buy milk                       DONE
///   5a2c9e0f-8d1b-4c3a-b7e6-1f9d2a4c8b33  Walk the dog                   OPEN
/// ```
async fn list_todos(service: &TodoService, filter: TodoFilter) -> Result<()> {
    println!("{}", "📋 Todos".bright_blue().bold());
    println!();

    let todos = service
        .list(filter)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list todos: {}", e))?;

    if todos.is_empty() {
        println!("{}", "  No todos found".yellow());
        return Ok(());
    }

    println!(
        "  {:<37} {:<30} {:<6}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(77).bright_black());

    for todo in &todos {
        let status = if todo.is_complete {
            "DONE".green()
        } else {
            "OPEN".yellow()
        };

        println!(
            "  {:<37} {:<30} {}",
            todo.id.to_string().bright_black(),
            todo.title.cyan(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        todos.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes every todo after confirmation (default: No).
async fn purge_todos(service: &TodoService, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Purge Todos".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete every todo?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let removed = service
        .purge()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to purge todos: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ Removed".green().bold(),
        removed.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles store diagnostic commands.
async fn handle_db_action(
    action: DbAction,
    service: &TodoService,
    config: &config::Config,
) -> Result<()> {
    match action {
        DbAction::Check => {
            println!(
                "{} {}",
                "🔍 Checking store connection:".bright_blue(),
                config.store_backend.to_string().bright_white()
            );

            service
                .health_check()
                .await
                .map_err(|e| anyhow::anyhow!("Store check failed: {}", e))?;

            println!("{}", "✅ Store connection OK".green().bold());
        }
    }

    Ok(())
}
