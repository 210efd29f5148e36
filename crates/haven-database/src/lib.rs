//! # haven-database
//!
//! PostgreSQL connection management, store traits, and concrete
//! repository implementations for all Haven entities.
//!
//! Services program against the traits in [`store`]; the repositories
//! here are the production implementations.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
