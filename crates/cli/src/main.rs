use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use founderos_storage::StorageBackend;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "founderos")]
#[command(about = "Behavioral pattern detection and profile drift for founders", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value = "37780")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Log activity and re-analyze the user
    Log {
        user_id: String,
        project_id: String,
        content: String,
        /// update, learning or blocker
        #[arg(short = 't', long = "type", default_value = "update")]
        log_type: String,
    },
    /// Run the analysis pipeline for a user
    Analyze { user_id: String },
    /// Show a user's builder profile and insight
    Profile { user_id: String },
    /// Show a user's latest drift record
    Drift {
        user_id: String,
        /// Include this many recent profile snapshots
        #[arg(long)]
        history: Option<usize>,
    },
    /// Record an AI-chat session and show the chatter summary
    Chatter {
        user_id: String,
        #[arg(long = "ai")]
        ai_minutes: Option<f64>,
        #[arg(long = "exec")]
        execution_minutes: Option<f64>,
        #[arg(short, long)]
        project: Option<String>,
        #[arg(short, long)]
        model: Option<String>,
        /// Session date (YYYY-MM-DD), also the end of the summary window
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Copy the local SQLite database into PostgreSQL (`DATABASE_URL`)
    #[cfg(all(feature = "sqlite", feature = "postgres"))]
    Migrate,
}

pub(crate) fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("FOUNDEROS_DB_PATH") {
        return PathBuf::from(path);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("founderos")
        .join("founderos.db")
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// PostgreSQL when built with it and `DATABASE_URL` is set, else local SQLite.
pub(crate) async fn open_storage() -> Result<Arc<StorageBackend>> {
    if let Some(pg) = open_postgres().await? {
        return Ok(Arc::new(pg));
    }
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    tracing::debug!(path = %db_path.display(), "opening SQLite database");
    Ok(Arc::new(StorageBackend::new_sqlite(&db_path)?))
}

#[cfg(feature = "postgres")]
async fn open_postgres() -> Result<Option<StorageBackend>> {
    match std::env::var("DATABASE_URL") {
        Ok(url) => Ok(Some(StorageBackend::new_postgres(&url).await?)),
        Err(_) => Ok(None),
    }
}

#[cfg(not(feature = "postgres"))]
#[allow(clippy::unused_async, reason = "mirrors the postgres variant")]
async fn open_postgres() -> Result<Option<StorageBackend>> {
    Ok(None)
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::Log { user_id, project_id, content, log_type } => {
            let args = commands::inspect::LogArgs { user_id, project_id, content, log_type };
            commands::inspect::log(open_storage().await?, args).await
        },
        Commands::Analyze { user_id } => {
            commands::inspect::analyze(open_storage().await?, &user_id).await
        },
        Commands::Profile { user_id } => {
            commands::inspect::profile(open_storage().await?, &user_id).await
        },
        Commands::Drift { user_id, history } => {
            commands::inspect::drift(open_storage().await?, &user_id, history).await
        },
        Commands::Chatter { user_id, ai_minutes, execution_minutes, project, model, date } => {
            let args = commands::chatter::ChatterArgs {
                user_id,
                project_id: project,
                ai_minutes,
                execution_minutes,
                model,
                date,
            };
            commands::chatter::run(open_storage().await?, args).await
        },
        #[cfg(all(feature = "sqlite", feature = "postgres"))]
        Commands::Migrate => commands::migrate::run().await,
    }
}
