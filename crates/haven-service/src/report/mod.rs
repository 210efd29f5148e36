//! Reporting services.

pub mod stats;

pub use stats::{AdminStatsService, PlatformStats};
