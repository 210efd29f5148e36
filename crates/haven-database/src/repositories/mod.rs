//! Repository implementations for all Haven entities.

pub mod deal;
pub mod investment;
pub mod notification;
pub mod property;
pub mod user;

pub use deal::DealRepository;
pub use investment::InvestmentRepository;
pub use notification::NotificationRepository;
pub use property::PropertyRepository;
pub use user::UserRepository;

use haven_core::error::{AppError, ErrorKind};

/// Map a sqlx error to the application taxonomy.
///
/// Pool exhaustion and transport failures are transient and surface as
/// retryable store-unavailable errors; everything else is a database
/// error carrying the given context.
pub(crate) fn storage_error(context: &'static str, e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            AppError::with_source(ErrorKind::StoreUnavailable, context, e)
        }
        _ => AppError::with_source(ErrorKind::Database, context, e),
    }
}
