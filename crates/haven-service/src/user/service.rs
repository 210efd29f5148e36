//! Registration, login, and profile self-service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::RngExt;
use rand::distr::Alphanumeric;
use tracing::info;

use haven_auth::access::Actor;
use haven_auth::jwt::JwtEncoder;
use haven_auth::password::PasswordHasher;
use haven_core::config::auth::AuthConfig;
use haven_core::error::AppError;
use haven_core::result::AppResult;
use haven_database::store::UserStore;
use haven_entity::user::{CreateUser, UpdateProfile, User, UserRole};

/// Handles account creation, credential checks, and profile edits.
#[derive(Clone)]
pub struct UserService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token issuer.
    jwt: Arc<JwtEncoder>,
    /// Minimum accepted password length.
    password_min_length: usize,
}

/// Registration data.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterUser {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Plain-text password.
    pub password: String,
    /// Requested role.
    pub role: UserRole,
}

/// A successful registration or login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AuthSession {
    /// The authenticated user.
    pub user: User,
    /// Signed bearer token.
    pub token: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        jwt: Arc<JwtEncoder>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            users,
            hasher,
            jwt,
            password_min_length: config.password_min_length,
        }
    }

    /// Registers a new account and signs the user in.
    ///
    /// Admin accounts cannot be self-registered; they are provisioned
    /// through the operator CLI. Investor accounts receive an opaque
    /// investor reference at creation.
    pub async fn register(&self, req: RegisterUser) -> AppResult<AuthSession> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }
        if !req.email.contains('@') || !req.email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }
        if req.password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }
        if !req.role.self_registrable() {
            return Err(AppError::validation(
                "Admin accounts cannot be created through registration",
            ));
        }

        let email = req.email.trim().to_lowercase();
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let investor_token = (req.role == UserRole::Investor).then(generate_investor_token);

        let user = self
            .users
            .create(&CreateUser {
                name: req.name.trim().to_string(),
                email,
                phone: req.phone,
                password_hash,
                role: req.role,
                investor_token,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "User registered");

        self.issue(user)
    }

    /// Authenticates by email and password.
    ///
    /// An unknown email and a wrong password are indistinguishable to
    /// the caller.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        let user = self
            .users
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Invalid email or password"));
        }

        info!(user_id = %user.id, "User logged in");

        self.issue(user)
    }

    /// Gets the actor's fresh profile.
    pub async fn me(&self, actor: &Actor) -> AppResult<User> {
        self.users
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the actor's own profile fields. Role and email are not
    /// touchable here.
    pub async fn update_profile(
        &self,
        actor: &Actor,
        name: Option<String>,
        phone: Option<String>,
    ) -> AppResult<User> {
        if let Some(ref name) = name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Name cannot be empty"));
            }
        }

        let user = self
            .users
            .update_profile(&UpdateProfile {
                id: actor.id,
                name,
                phone,
            })
            .await?;

        info!(user_id = %actor.id, "Profile updated");

        Ok(user)
    }

    fn issue(&self, user: User) -> AppResult<AuthSession> {
        let issued = self.jwt.generate_token(user.id, user.role, &user.name)?;
        Ok(AuthSession {
            user,
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }
}

/// Opaque investor reference: `INV-<millis>-<6 alphanumerics>`.
fn generate_investor_token() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("INV-{}-{}", Utc::now().timestamp_millis(), suffix)
}
