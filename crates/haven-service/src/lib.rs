//! # haven-service
//!
//! Business logic service layer for Haven. Each service orchestrates
//! stores, the access evaluator, and authentication to implement
//! application-level use cases: the deal state machine, the investment
//! ledger, property moderation, and notification emission.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references. Stores are consumed through
//! the traits in `haven_database::store`, so every workflow can be
//! exercised against in-memory fakes.

pub mod deal;
pub mod investment;
pub mod notification;
pub mod property;
pub mod report;
pub mod user;

pub use deal::{DealService, DealSummary};
pub use investment::{InvestmentService, PortfolioMetrics};
pub use notification::{NotificationEmitter, NotificationService, StoreEmitter};
pub use property::PropertyService;
pub use report::AdminStatsService;
pub use user::{AdminUserService, UserService};
