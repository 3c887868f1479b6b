use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    CompanyId, CompanyView, PageRequest, Result,
    store::ViewStore,
};

/// In-memory view store implementation.
///
/// Views are kept in identifier order, which matches the ordering the
/// PostgreSQL implementation uses for page scans.
#[derive(Clone, Default)]
pub struct InMemoryViewStore {
    views: Arc<RwLock<BTreeMap<CompanyId, CompanyView>>>,
}

impl InMemoryViewStore {
    /// Creates a new empty in-memory view store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all views.
    pub async fn clear(&self) {
        self.views.write().await.clear();
    }
}

#[async_trait]
impl ViewStore for InMemoryViewStore {
    async fn upsert(&self, view: CompanyView) -> Result<()> {
        self.views
            .write()
            .await
            .insert(view.identifier.clone(), view);
        Ok(())
    }

    async fn get_by_identifier(&self, identifier: &CompanyId) -> Result<Option<CompanyView>> {
        Ok(self.views.read().await.get(identifier).cloned())
    }

    async fn scan_page(&self, page: PageRequest) -> Result<Vec<CompanyView>> {
        let skip = usize::try_from(page.skip()).unwrap_or(usize::MAX);
        let take = usize::try_from(page.size()).unwrap_or(usize::MAX);

        let views = self.views.read().await;
        Ok(views.values().skip(skip).take(take).cloned().collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.views.read().await.len() as u64)
    }
}
