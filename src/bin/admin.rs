//! CLI administration tool for shorten-url.
//!
//! Shortens, resolves and lists links directly against the database,
//! without requiring the HTTP server to be running.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Look up where a code points
//! cargo run --bin admin -- resolve 100680ad
//!
//! # List all links, newest first
//! cargo run --bin admin -- list
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (default `sqlite://shorten_url.db`),
//! `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT`.

use shorten_url::AppError;
use shorten_url::application::services::{LinkService, Shortened};
use shorten_url::config;
use shorten_url::infrastructure::persistence::{self, SqliteLinkRepository};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing shorten-url.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,
    },

    /// Show the original URL behind a short code
    Resolve {
        /// 8-character short code
        code: String,
    },

    /// List all shortened URLs, newest first
    List,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

type CliLinkService = LinkService<SqliteLinkRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = persistence::connect(&config).await?;
    persistence::migrate(&pool).await?;

    let service = LinkService::new(Arc::new(SqliteLinkRepository::new(pool.clone())));

    let outcome = match cli.command {
        Commands::Shorten { url } => shorten(&service, url).await,
        Commands::Resolve { code } => resolve(&service, &code).await,
        Commands::List => list(&service).await,
        Commands::Db { action } => handle_db_action(action, &pool).await,
    };

    pool.close().await;
    outcome
}

/// Shortens a URL, prompting for it when not given on the command line.
async fn shorten(service: &CliLinkService, url: Option<String>) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let shortened = service.shorten(Some(&url)).await.map_err(cli_error)?;

    if shortened.is_created() {
        println!("{}", "✅ Short link created".green().bold());
    } else {
        println!("{}", "ℹ️  URL was already shortened".yellow());
    }

    let link = shortened.link();
    println!();
    println!("  Code:     {}", link.short_code.bright_yellow().bold());
    println!("  URL:      {}", link.original_url.cyan());
    println!(
        "  Created:  {}",
        link.created_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .bright_black()
    );
    println!();

    if let Shortened::Created(_) = shortened {
        println!(
            "  Try it: {} http://localhost:8000/{}",
            "curl -i".bright_cyan(),
            link.short_code
        );
        println!();
    }

    Ok(())
}

/// Prints the original URL a code points to.
async fn resolve(service: &CliLinkService, code: &str) -> Result<()> {
    let link = service.resolve(code).await.map_err(cli_error)?;

    println!(
        "  {} → {}",
        link.short_code.bright_yellow().bold(),
        link.original_url.cyan()
    );

    Ok(())
}

/// Lists all links, newest first.
///
/// # Output Format
///
/// ```text
/// 📋 Short Links
///
///   ID  Code      Created              URL
///   ────────────────────────────────────────────────────────────────
///   2   100680ad  2024-01-16 14:20     https://example.com
///   1   5a6df720  2024-01-15 10:30     https://rust-lang.org
/// ```
async fn list(service: &CliLinkService) -> Result<()> {
    println!("{}", "📋 Short Links".bright_blue().bold());
    println!();

    let links = service.list_all().await.map_err(cli_error)?;

    if links.is_empty() {
        println!("{}", "  No shortened URLs yet".yellow());
        println!();
        println!(
            "  Create one with: {} admin shorten <URL>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<9} {:<20} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<5} {:<9} {:<20} {}",
            link.id.to_string().bright_black(),
            link.short_code.bright_yellow(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url.cyan()
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  SQLite: {}", version.bright_white());
        }
    }

    Ok(())
}

/// Converts a service error into a CLI error carrying its message.
fn cli_error(e: AppError) -> anyhow::Error {
    anyhow::anyhow!("{}", e)
}
