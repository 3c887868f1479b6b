//! Company query service: answers read queries from the view store.

use view_store::{CompanyView, ViewStore};

use crate::Result;
use crate::query::{CompanyByIdQuery, DEFAULT_MAX_PAGE_SIZE, FindAllCompaniesQuery};

/// Answers company queries by reading from the view store.
///
/// Holds only the store handle and the page size limit; it never writes.
#[derive(Clone)]
pub struct CompanyQueryService<S: ViewStore> {
    store: S,
    max_page_size: u64,
}

impl<S: ViewStore> CompanyQueryService<S> {
    /// Creates a query service reading from `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }

    /// Sets the largest page size a list query may request.
    pub fn with_max_page_size(mut self, max_page_size: u64) -> Self {
        self.max_page_size = max_page_size;
        self
    }

    /// Returns the largest page size a list query may request.
    pub fn max_page_size(&self) -> u64 {
        self.max_page_size
    }

    /// Finds the view for a company.
    ///
    /// An unknown identifier yields `Ok(None)`; only store failures are errors.
    #[tracing::instrument(skip(self), fields(company_id = %query.company_id))]
    pub async fn find_by_id(&self, query: &CompanyByIdQuery) -> Result<Option<CompanyView>> {
        metrics::counter!("company_view_queries", "query" => "by_id").increment(1);
        Ok(self.store.get_by_identifier(&query.company_id).await?)
    }

    /// Lists one page of company views in store order.
    ///
    /// Invalid pagination is rejected before the store is consulted. A page
    /// past the end is empty.
    #[tracing::instrument(skip(self))]
    pub async fn find_all(&self, query: &FindAllCompaniesQuery) -> Result<Vec<CompanyView>> {
        metrics::counter!("company_view_queries", "query" => "find_all").increment(1);
        let page = query.to_page_request(self.max_page_size)?;
        let views = self.store.scan_page(page).await?;
        tracing::debug!(returned = views.len(), "company page scanned");
        Ok(views)
    }

    /// Returns how many company views the store holds.
    pub async fn count_views(&self) -> Result<u64> {
        Ok(self.store.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProjectionError;
    use crate::test_support::{RecordingStore, UnavailableStore};
    use common::CompanyId;
    use view_store::{InMemoryViewStore, ViewStoreError};

    fn test_view(id: &str) -> CompanyView {
        CompanyView::new(CompanyId::from(id), "the-awesome-company", 1337, 42)
    }

    #[tokio::test]
    async fn test_find_by_id_returns_view() {
        let store = InMemoryViewStore::new();
        store.upsert(test_view("C1")).await.unwrap();
        let service = CompanyQueryService::new(store);

        let result = service
            .find_by_id(&CompanyByIdQuery::new("C1"))
            .await
            .unwrap();

        assert_eq!(result, Some(test_view("C1")));
    }

    #[tokio::test]
    async fn test_find_by_id_returns_none_for_unknown_company() {
        let service = CompanyQueryService::new(InMemoryViewStore::new());

        let result = service
            .find_by_id(&CompanyByIdQuery::new("C2"))
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_all_returns_all_views() {
        let store = InMemoryViewStore::new();
        store.upsert(test_view("C1")).await.unwrap();
        let service = CompanyQueryService::new(store);

        let result = service
            .find_all(&FindAllCompaniesQuery::new(0, 50))
            .await
            .unwrap();

        assert_eq!(result, vec![test_view("C1")]);
        assert_eq!(service.count_views().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_all_pages_through_views() {
        let store = InMemoryViewStore::new();
        for id in ["C1", "C2", "C3", "C4", "C5"] {
            store.upsert(test_view(id)).await.unwrap();
        }
        let service = CompanyQueryService::new(store);

        let first = service
            .find_all(&FindAllCompaniesQuery::new(0, 2))
            .await
            .unwrap();
        assert_eq!(first, vec![test_view("C1"), test_view("C2")]);

        let last = service
            .find_all(&FindAllCompaniesQuery::new(2, 2))
            .await
            .unwrap();
        assert_eq!(last, vec![test_view("C5")]);

        let beyond = service
            .find_all(&FindAllCompaniesQuery::new(3, 2))
            .await
            .unwrap();
        assert!(beyond.is_empty());
    }

    #[tokio::test]
    async fn test_find_all_far_past_the_end_is_empty() {
        let store = InMemoryViewStore::new();
        store.upsert(test_view("C1")).await.unwrap();
        let service = CompanyQueryService::new(store);

        for size in [2, 3, DEFAULT_MAX_PAGE_SIZE as i64] {
            let page = service
                .find_all(&FindAllCompaniesQuery::new(i64::MAX, size))
                .await
                .unwrap();
            assert!(page.is_empty(), "size {size}");
        }
    }

    #[tokio::test]
    async fn test_invalid_pagination_never_reaches_store() {
        let store = RecordingStore::new();
        let service = CompanyQueryService::new(store.clone());

        for query in [
            FindAllCompaniesQuery::new(-1, 10),
            FindAllCompaniesQuery::new(0, 0),
            FindAllCompaniesQuery::new(0, -3),
        ] {
            let err = service.find_all(&query).await.unwrap_err();
            assert!(matches!(err, ProjectionError::InvalidPagination { .. }));
        }
        assert_eq!(store.scan_count(), 0);
    }

    #[tokio::test]
    async fn test_configured_max_page_size_is_enforced() {
        let service = CompanyQueryService::new(InMemoryViewStore::new()).with_max_page_size(10);
        assert_eq!(service.max_page_size(), 10);

        assert!(
            service
                .find_all(&FindAllCompaniesQuery::new(0, 10))
                .await
                .is_ok()
        );
        assert!(
            service
                .find_all(&FindAllCompaniesQuery::new(0, 11))
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_store_failures_propagate() {
        let service = CompanyQueryService::new(UnavailableStore);

        let err = service
            .find_by_id(&CompanyByIdQuery::new("C1"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::ViewStore(ViewStoreError::Unavailable(_))
        ));

        let err = service
            .find_all(&FindAllCompaniesQuery::new(0, 50))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::ViewStore(ViewStoreError::Unavailable(_))
        ));
    }
}
