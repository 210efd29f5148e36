//! Admin account management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use haven_auth::PasswordHasher;
use haven_core::config::AppConfig;
use haven_core::error::AppError;
use haven_core::types::pagination::PageRequest;
use haven_database::DatabasePool;
use haven_database::repositories::UserRepository;
use haven_database::store::UserStore;
use haven_entity::user::{CreateUser, UserRole};

use crate::output;
use crate::output::OutputFormat;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a new admin account
    Create {
        /// Full name
        #[arg(short, long)]
        name: Option<String>,
        /// Email address (used for login)
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// List admin accounts
    List,
}

#[derive(Debug, Serialize, Tabled)]
struct AdminRow {
    /// User ID
    id: String,
    /// Full name
    name: String,
    /// Email
    email: String,
    /// Created at
    created_at: String,
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = AppConfig::load(env)?;
    let db = DatabasePool::connect(&config.database).await?;
    let users = UserRepository::new(db.pool().clone());

    match &args.command {
        AdminCommand::Create {
            name,
            email,
            password,
        } => {
            let name = match name {
                Some(n) => n.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Admin name")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
            };

            let email = match email {
                Some(e) => e.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Admin email")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
            };
            if !email.contains('@') {
                return Err(AppError::validation("Invalid email address"));
            }

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Admin password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
            };
            if password.len() < config.auth.password_min_length {
                return Err(AppError::validation(format!(
                    "Password must be at least {} characters",
                    config.auth.password_min_length
                )));
            }

            let password_hash = PasswordHasher::new().hash_password(&password)?;

            let user = users
                .create(&CreateUser {
                    name: name.clone(),
                    email,
                    phone: None,
                    password_hash,
                    role: UserRole::Admin,
                    investor_token: None,
                })
                .await?;

            output::print_success(&format!("Admin account '{}' created", name));
            output::print_kv("ID", &user.id.to_string());
            output::print_kv("Email", &user.email);
        }
        AdminCommand::List => {
            let page = users.find_all(&PageRequest::new(1, 100)).await?;

            let rows: Vec<AdminRow> = page
                .items
                .iter()
                .filter(|u| u.role == UserRole::Admin)
                .map(|u| AdminRow {
                    id: u.id.to_string(),
                    name: u.name.clone(),
                    email: u.email.clone(),
                    created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    Ok(())
}
