//! Projection error types.

use common::CompanyId;
use thiserror::Error;

/// Errors that can occur while projecting events or answering queries.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// An error occurred in the view store.
    #[error("View store error: {0}")]
    ViewStore(#[from] view_store::ViewStoreError),

    /// A mutation event arrived for a company that has no view yet.
    #[error("No view exists for company {0}")]
    ViewNotFound(CompanyId),

    /// Pagination parameters were rejected before reaching the store.
    #[error("Invalid pagination (offset {offset}, page size {page_size}): {reason}")]
    InvalidPagination {
        offset: i64,
        page_size: i64,
        reason: &'static str,
    },
}

/// Result type for projection operations.
pub type Result<T> = std::result::Result<T, ProjectionError>;
