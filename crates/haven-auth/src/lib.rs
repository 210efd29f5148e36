//! # haven-auth
//!
//! Authentication and authorization for the Haven platform.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation and validation
//! - `password` — Argon2id password hashing
//! - `access` — the access control evaluator and actor identity

pub mod access;
pub mod jwt;
pub mod password;

pub use access::{AccessEvaluator, Actor};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
