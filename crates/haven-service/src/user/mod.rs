//! User account services.

pub mod admin;
pub mod service;

pub use admin::AdminUserService;
pub use service::{AuthSession, RegisterUser, UserService};
