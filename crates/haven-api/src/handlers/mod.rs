//! HTTP request handlers, organized by domain.

pub mod admin;
pub mod auth;
pub mod deal;
pub mod health;
pub mod investment;
pub mod notification;
pub mod property;
pub mod user;
