//! Database migration management commands.

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

use haven_core::config::AppConfig;
use haven_core::error::AppError;
use haven_database::DatabasePool;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// Show which migrations have been applied
    Status,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, env: &str) -> Result<(), AppError> {
    let config = AppConfig::load(env)?;
    let db = DatabasePool::connect(&config.database).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            haven_database::migration::run_migrations(db.pool()).await?;
            output::print_success("All migrations applied successfully.");
        }
        MigrateCommand::Status => {
            let rows: Vec<(i64, String, DateTime<Utc>)> = match sqlx::query_as(
                "SELECT version, description, installed_on \
                 FROM _sqlx_migrations ORDER BY version",
            )
            .fetch_all(db.pool())
            .await
            {
                Ok(rows) => rows,
                // 42P01 undefined_table: nothing has been applied yet.
                Err(sqlx::Error::Database(ref e)) if e.code().as_deref() == Some("42P01") => {
                    Vec::new()
                }
                Err(e) => {
                    return Err(AppError::internal(format!(
                        "Failed to read migration status: {}",
                        e
                    )));
                }
            };

            if rows.is_empty() {
                println!("No migrations applied yet.");
            } else {
                println!("Applied migrations:");
                for (version, description, installed_on) in &rows {
                    println!(
                        "  {}  {}  ({})",
                        version,
                        description,
                        installed_on.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }
    }

    Ok(())
}
