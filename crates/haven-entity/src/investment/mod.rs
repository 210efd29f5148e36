//! Investment domain entities.

pub mod kind;
pub mod model;
pub mod status;

pub use kind::InvestmentKind;
pub use model::{CreateInvestment, Investment, InvestmentReturn};
pub use status::InvestmentStatus;
