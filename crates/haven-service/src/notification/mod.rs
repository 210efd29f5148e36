//! Notification emission and inbox management.

pub mod emitter;
pub mod service;

pub use emitter::{NotificationEmitter, StoreEmitter};
pub use service::NotificationService;
