//! Core projection trait.

use async_trait::async_trait;
use domain::CompanyEvent;

use crate::Result;

/// A projection that processes events and updates a read model.
///
/// Projections are the mechanism by which events are transformed into
/// denormalized read models optimized for queries. Delivery is
/// at-least-once, so `handle` must tolerate seeing the same event twice.
#[async_trait]
pub trait Projection: Send + Sync {
    /// Returns the name of this projection.
    fn name(&self) -> &'static str;

    /// Handles a single event, updating the projection's read model.
    async fn handle(&self, event: &CompanyEvent) -> Result<()>;
}
