use thiserror::Error;

use crate::CompanyId;

/// Errors that can occur when interacting with the view store.
#[derive(Debug, Error)]
pub enum ViewStoreError {
    /// The store could not be reached or refused the operation.
    #[error("View store unavailable: {0}")]
    Unavailable(String),

    /// A numeric field does not fit the storage column.
    #[error("Value out of range for {field} of company {company_id}: {value}")]
    ValueOutOfRange {
        company_id: CompanyId,
        field: &'static str,
        value: u64,
    },

    /// A stored row cannot be mapped back to a view.
    #[error("Corrupt view row for company {company_id}: {reason}")]
    Corrupt {
        company_id: CompanyId,
        reason: String,
    },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for ViewStoreError {
    /// Connection-level failures become [`ViewStoreError::Unavailable`]; the
    /// rest stay database errors.
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                ViewStoreError::Unavailable(err.to_string())
            }
            other => ViewStoreError::Database(other),
        }
    }
}

/// Result type for view store operations.
pub type Result<T> = std::result::Result<T, ViewStoreError>;
