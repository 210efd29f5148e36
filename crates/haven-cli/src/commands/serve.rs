//! Start the Haven server.

use clap::Args;

use haven_core::config::AppConfig;
use haven_core::error::AppError;
use haven_database::DatabasePool;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Run pending database migrations on startup
    #[arg(long, default_value = "true")]
    pub auto_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, env: &str) -> Result<(), AppError> {
    let mut config = AppConfig::load(env)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    config.database.auto_migrate = args.auto_migrate;

    println!("Starting Haven server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);

    let db = DatabasePool::connect(&config.database).await?;

    haven_api::run_server(config, db).await
}
