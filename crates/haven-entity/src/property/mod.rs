//! Property domain entities.

pub mod kind;
pub mod model;
pub mod status;

pub use kind::PropertyKind;
pub use model::{CreateProperty, Property, UpdateProperty};
pub use status::PropertyStatus;
