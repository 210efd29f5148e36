//! Investment ledger and position management.

pub mod ledger;
pub mod service;

pub use ledger::PortfolioMetrics;
pub use service::{InvestmentService, OpenInvestment, Portfolio};
