//! Queries answered by the company query service.

use std::num::NonZeroU64;

use common::CompanyId;
use view_store::PageRequest;

use crate::{ProjectionError, Result};

/// Largest page the query service hands out unless configured otherwise.
pub const DEFAULT_MAX_PAGE_SIZE: u64 = 1000;

/// Looks up a single company view by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyByIdQuery {
    pub company_id: CompanyId,
}

impl CompanyByIdQuery {
    pub fn new(company_id: impl Into<CompanyId>) -> Self {
        Self {
            company_id: company_id.into(),
        }
    }
}

/// Lists company views one page at a time.
///
/// `offset` is the zero-based page index and `page_size` the number of views
/// per page. Both are signed so malformed input from callers can be
/// represented and rejected instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindAllCompaniesQuery {
    pub offset: i64,
    pub page_size: i64,
}

impl FindAllCompaniesQuery {
    pub fn new(offset: i64, page_size: i64) -> Self {
        Self { offset, page_size }
    }

    /// Validates the query and converts it into a store page request.
    pub fn to_page_request(&self, max_page_size: u64) -> Result<PageRequest> {
        let invalid = |reason: &'static str| ProjectionError::InvalidPagination {
            offset: self.offset,
            page_size: self.page_size,
            reason,
        };

        let offset =
            u64::try_from(self.offset).map_err(|_| invalid("offset must not be negative"))?;
        let size = u64::try_from(self.page_size)
            .ok()
            .and_then(NonZeroU64::new)
            .ok_or_else(|| invalid("page size must be positive"))?;

        if size.get() > max_page_size {
            return Err(invalid("page size exceeds the maximum"));
        }

        Ok(PageRequest::new(offset, size))
    }
}
