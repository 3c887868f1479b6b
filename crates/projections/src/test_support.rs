//! View store doubles shared by the unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use common::CompanyId;
use view_store::{
    CompanyView, InMemoryViewStore, PageRequest, ViewStore, ViewStoreError,
};

/// Wraps an in-memory store and counts calls per operation.
#[derive(Clone, Default)]
pub struct RecordingStore {
    pub inner: InMemoryViewStore,
    pub upserts: Arc<AtomicUsize>,
    pub scans: Arc<AtomicUsize>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert_count(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }

    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ViewStore for RecordingStore {
    async fn upsert(&self, view: CompanyView) -> view_store::Result<()> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        self.inner.upsert(view).await
    }

    async fn get_by_identifier(
        &self,
        identifier: &CompanyId,
    ) -> view_store::Result<Option<CompanyView>> {
        self.inner.get_by_identifier(identifier).await
    }

    async fn scan_page(&self, page: PageRequest) -> view_store::Result<Vec<CompanyView>> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        self.inner.scan_page(page).await
    }

    async fn count(&self) -> view_store::Result<u64> {
        self.inner.count().await
    }
}

/// A store whose every operation fails as if the backend were unreachable.
#[derive(Clone, Default)]
pub struct UnavailableStore;

fn unavailable() -> ViewStoreError {
    ViewStoreError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl ViewStore for UnavailableStore {
    async fn upsert(&self, _view: CompanyView) -> view_store::Result<()> {
        Err(unavailable())
    }

    async fn get_by_identifier(
        &self,
        _identifier: &CompanyId,
    ) -> view_store::Result<Option<CompanyView>> {
        Err(unavailable())
    }

    async fn scan_page(&self, _page: PageRequest) -> view_store::Result<Vec<CompanyView>> {
        Err(unavailable())
    }

    async fn count(&self) -> view_store::Result<u64> {
        Err(unavailable())
    }
}
