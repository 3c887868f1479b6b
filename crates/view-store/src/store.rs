use async_trait::async_trait;

use crate::{CompanyId, CompanyView, PageRequest, Result};

/// Core trait for view store implementations.
///
/// A view store is durable keyed storage for company views. Each operation
/// touches at most one record (writes) or is a read-only scan, so no
/// multi-record transaction is required. All implementations must be
/// thread-safe (Send + Sync).
#[async_trait]
pub trait ViewStore: Send + Sync {
    /// Inserts or replaces the view keyed by `view.identifier`.
    ///
    /// Writes to the same key are atomic; concurrent writers resolve
    /// last-write-wins in arrival order.
    async fn upsert(&self, view: CompanyView) -> Result<()>;

    /// Retrieves the view for a company.
    ///
    /// Returns None if no view exists for the identifier.
    async fn get_by_identifier(&self, identifier: &CompanyId) -> Result<Option<CompanyView>>;

    /// Retrieves one page of views in store order (ascending identifier).
    ///
    /// Returns at most `page.size()` views; a page past the end is empty.
    async fn scan_page(&self, page: PageRequest) -> Result<Vec<CompanyView>>;

    /// Returns the total number of stored views.
    async fn count(&self) -> Result<u64>;
}
