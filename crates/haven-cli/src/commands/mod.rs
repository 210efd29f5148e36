//! CLI command definitions and dispatch.

pub mod admin;
pub mod migrate;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

use haven_core::error::AppError;

use crate::output::OutputFormat;

/// Haven — Real Estate Marketplace Platform
#[derive(Debug, Parser)]
#[command(name = "haven", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (layers config/<env>.toml over config/default.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Haven server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Admin account management
    Admin(admin::AdminArgs),
    /// Populate the database with demo accounts and listings
    Seed(seed::SeedArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.env).await,
            Commands::Migrate(args) => migrate::execute(args, &self.env).await,
            Commands::Admin(args) => admin::execute(args, &self.env, self.format).await,
            Commands::Seed(args) => seed::execute(args, &self.env).await,
        }
    }
}
