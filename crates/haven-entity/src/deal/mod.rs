//! Deal domain entities.

pub mod kind;
pub mod model;
pub mod payment;
pub mod status;

pub use kind::DealKind;
pub use model::{CreateDeal, Deal};
pub use payment::PaymentStatus;
pub use status::DealStatus;
