//! Populate the database with demo accounts and listings.

use clap::Args;
use uuid::Uuid;

use haven_auth::PasswordHasher;
use haven_core::config::AppConfig;
use haven_core::error::{AppError, ErrorKind};
use haven_database::DatabasePool;
use haven_database::repositories::{PropertyRepository, UserRepository};
use haven_database::store::{PropertyStore, UserStore};
use haven_entity::property::{CreateProperty, PropertyKind};
use haven_entity::user::{CreateUser, UserRole};

use crate::output;

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Password assigned to every demo account
    #[arg(long, default_value = "haven-demo")]
    pub password: String,
}

/// Execute the seed command
pub async fn execute(args: &SeedArgs, env: &str) -> Result<(), AppError> {
    let config = AppConfig::load(env)?;
    let db = DatabasePool::connect(&config.database).await?;
    let users = UserRepository::new(db.pool().clone());
    let properties = PropertyRepository::new(db.pool().clone());

    let password_hash = PasswordHasher::new().hash_password(&args.password)?;

    // The admin goes in first; an email conflict here means the seed
    // has already run against this database.
    let admin = match users
        .create(&demo_user(
            "Haven Admin",
            "admin@haven.local",
            UserRole::Admin,
            &password_hash,
        ))
        .await
    {
        Ok(user) => user,
        Err(e) if e.kind == ErrorKind::Conflict => {
            output::print_warning("Demo data already present, nothing to do.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let landlord = users
        .create(&demo_user(
            "Lena Okafor",
            "lena@haven.local",
            UserRole::Landlord,
            &password_hash,
        ))
        .await?;
    users
        .create(&demo_user(
            "Tomas Rivera",
            "tomas@haven.local",
            UserRole::Tenant,
            &password_hash,
        ))
        .await?;
    users
        .create(&demo_user(
            "Amir Solomon",
            "amir@haven.local",
            UserRole::Agent,
            &password_hash,
        ))
        .await?;

    let mut investor = demo_user(
        "Iris Vann",
        "iris@haven.local",
        UserRole::Investor,
        &password_hash,
    );
    investor.investor_token = Some(format!(
        "INV-{}-SEED01",
        chrono::Utc::now().timestamp_millis()
    ));
    users.create(&investor).await?;

    for draft in [
        demo_listing(
            landlord.id,
            "Sunlit two-bed apartment",
            PropertyKind::Apartment,
            185_000_00,
            "14 Cedar Row",
            false,
        ),
        demo_listing(
            landlord.id,
            "Family house with garden",
            PropertyKind::House,
            420_000_00,
            "9 Birchfield Lane",
            true,
        ),
    ] {
        let property = properties.create(&draft).await?;
        properties.approve(property.id, admin.id).await?;
    }

    // One listing stays pending so the admin review queue has content.
    properties
        .create(&demo_listing(
            landlord.id,
            "Downtown office suite",
            PropertyKind::Office,
            610_000_00,
            "Unit 4, Harbor Exchange",
            false,
        ))
        .await?;

    output::print_success("Demo data loaded");
    output::print_kv("Accounts", "5");
    output::print_kv("Listings", "3 (2 approved, 1 pending)");
    output::print_kv("Password", &args.password);
    println!();
    println!("Demo accounts:");
    output::print_kv("Admin", "admin@haven.local");
    output::print_kv("Landlord", "lena@haven.local");
    output::print_kv("Tenant", "tomas@haven.local");
    output::print_kv("Agent", "amir@haven.local");
    output::print_kv("Investor", "iris@haven.local");

    Ok(())
}

fn demo_user(name: &str, email: &str, role: UserRole, password_hash: &str) -> CreateUser {
    CreateUser {
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        password_hash: password_hash.to_string(),
        role,
        investor_token: None,
    }
}

fn demo_listing(
    owner_id: Uuid,
    title: &str,
    kind: PropertyKind,
    price: i64,
    address: &str,
    is_premium: bool,
) -> CreateProperty {
    CreateProperty {
        owner_id,
        title: title.to_string(),
        description: format!("Demo listing: {}", title),
        kind,
        price,
        address: address.to_string(),
        city: "Harborview".to_string(),
        state: "CA".to_string(),
        bedrooms: Some(3),
        bathrooms: Some(2),
        area_sqm: Some(96),
        is_premium,
    }
}
