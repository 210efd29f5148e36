//! Property listing management.

pub mod service;

pub use service::{ListingDraft, PropertyService};
