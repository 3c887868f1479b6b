//! Projection processor for delivering events to projections.

use domain::{CompanyEvent, DomainEvent};

use crate::Result;
use crate::projection::Projection;

/// Delivers events from the delivery layer to every registered projection.
///
/// The processor supports:
/// - Single event delivery: hands one event to each projection in order
/// - Batch delivery: delivers a backlog of events sequentially
///
/// The first failing projection aborts delivery and its error is returned
/// unchanged, so the delivery layer can decide whether to retry.
#[derive(Default)]
pub struct ProjectionProcessor {
    projections: Vec<Box<dyn Projection>>,
}

impl ProjectionProcessor {
    /// Creates a processor with no projections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a projection with this processor.
    pub fn register(&mut self, projection: Box<dyn Projection>) {
        self.projections.push(projection);
    }

    /// Returns the number of registered projections.
    pub fn projection_count(&self) -> usize {
        self.projections.len()
    }

    /// Delivers a single event to all registered projections.
    #[tracing::instrument(skip(self, event), fields(event_type = event.event_type()))]
    pub async fn process_event(&self, event: &CompanyEvent) -> Result<()> {
        for projection in &self.projections {
            projection.handle(event).await?;
        }
        Ok(())
    }

    /// Delivers a sequence of events in order, stopping at the first failure.
    ///
    /// Returns the number of events delivered.
    #[tracing::instrument(skip(self, events), fields(batch_size = events.len()))]
    pub async fn process_all(&self, events: &[CompanyEvent]) -> Result<u64> {
        let mut delivered: u64 = 0;
        for event in events {
            self.process_event(event).await?;
            delivered += 1;
        }

        tracing::info!(events_processed = delivered, "batch delivery complete");

        Ok(delivered)
    }
}
