//! Admin-only endpoints. Authorization is enforced by the services.

pub mod properties;
pub mod stats;
pub mod users;
