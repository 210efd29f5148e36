//! # haven-entity
//!
//! Domain entity models for the Haven marketplace. Every struct in this
//! crate represents a database table row or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! database entities additionally derive `sqlx::FromRow`.

pub mod deal;
pub mod investment;
pub mod notification;
pub mod property;
pub mod user;
