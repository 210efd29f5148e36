//! Deal state machine and workflow service.

pub mod machine;
pub mod service;

pub use machine::Transition;
pub use service::{DealService, DealSummary, OpenDeal};
