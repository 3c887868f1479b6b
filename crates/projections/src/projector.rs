//! Company view projector: folds company lifecycle events into views.

use std::str::FromStr;

use async_trait::async_trait;
use domain::{CompanyEvent, DomainEvent};
use thiserror::Error;
use view_store::{CompanyView, ViewStore};

use crate::projection::Projection;
use crate::{ProjectionError, Result};

/// What a `CompanyCreated` event does when a view for the company already
/// exists (duplicate delivery, or a replay after later mutations).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplayPolicy {
    /// Keep the existing view untouched. Mutations applied before a replayed
    /// creation event survive it; a replay racing a concurrent mutation of
    /// the same company is last-write-wins.
    #[default]
    PreserveExisting,

    /// Replace the existing view with the one described by the creation
    /// event.
    Overwrite,
}

/// Error returned when parsing an unknown replay policy name.
#[derive(Debug, Error)]
#[error("Unknown replay policy: {0} (expected \"preserve\" or \"overwrite\")")]
pub struct UnknownReplayPolicy(pub String);

impl FromStr for ReplayPolicy {
    type Err = UnknownReplayPolicy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" | "preserve_existing" => Ok(ReplayPolicy::PreserveExisting),
            "overwrite" => Ok(ReplayPolicy::Overwrite),
            _ => Err(UnknownReplayPolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReplayPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayPolicy::PreserveExisting => write!(f, "preserve"),
            ReplayPolicy::Overwrite => write!(f, "overwrite"),
        }
    }
}

/// Computes the view that results from applying `event` on top of
/// `existing`.
///
/// This is a pure function of its inputs. Mutation events set absolute
/// values, so applying one twice gives the same view as applying it once.
/// Mutations on a company without a view fail with
/// [`ProjectionError::ViewNotFound`].
pub fn project(
    existing: Option<&CompanyView>,
    event: &CompanyEvent,
    policy: ReplayPolicy,
) -> Result<CompanyView> {
    match event {
        CompanyEvent::CompanyCreated(data) => Ok(match (existing, policy) {
            (Some(view), ReplayPolicy::PreserveExisting) => view.clone(),
            _ => CompanyView::new(
                data.company_id.clone(),
                data.name.clone(),
                data.value,
                data.amount_of_shares,
            ),
        }),
        CompanyEvent::TradeStarted(_) => mutate(existing, event, |view| {
            view.trade_started = true;
        }),
        CompanyEvent::ValueChanged(data) => mutate(existing, event, |view| {
            view.value = data.value;
        }),
        CompanyEvent::SharesIssued(data) => mutate(existing, event, |view| {
            view.amount_of_shares = data.amount_of_shares;
        }),
        CompanyEvent::CompanyRenamed(data) => mutate(existing, event, |view| {
            view.name = data.name.clone();
        }),
    }
}

fn mutate(
    existing: Option<&CompanyView>,
    event: &CompanyEvent,
    change: impl FnOnce(&mut CompanyView),
) -> Result<CompanyView> {
    let mut view = existing
        .cloned()
        .ok_or_else(|| ProjectionError::ViewNotFound(event.company_id().clone()))?;
    change(&mut view);
    Ok(view)
}

/// Projects company lifecycle events into the view store.
///
/// The projector holds nothing but the store handle and its replay policy;
/// every invocation reads the current view, computes the new one with
/// [`project`], and writes it back with a single upsert. Failures are
/// returned to the caller unchanged and never retried here.
#[derive(Clone)]
pub struct CompanyViewProjector<S: ViewStore> {
    store: S,
    replay_policy: ReplayPolicy,
}

impl<S: ViewStore> CompanyViewProjector<S> {
    /// Creates a projector writing to `store` with the default replay policy.
    pub fn new(store: S) -> Self {
        Self {
            store,
            replay_policy: ReplayPolicy::default(),
        }
    }

    /// Sets the policy applied to creation events for existing views.
    pub fn with_replay_policy(mut self, replay_policy: ReplayPolicy) -> Self {
        self.replay_policy = replay_policy;
        self
    }

    /// Returns the configured replay policy.
    pub fn replay_policy(&self) -> ReplayPolicy {
        self.replay_policy
    }

    /// Applies one event to the read model.
    #[tracing::instrument(
        skip(self, event),
        fields(event_type = event.event_type(), company_id = %event.company_id())
    )]
    pub async fn apply(&self, event: &CompanyEvent) -> Result<()> {
        let result = self.apply_inner(event).await;
        let counter = if result.is_ok() {
            "company_view_events_applied"
        } else {
            "company_view_events_failed"
        };
        metrics::counter!(counter, "event_type" => event.event_type()).increment(1);
        result
    }

    async fn apply_inner(&self, event: &CompanyEvent) -> Result<()> {
        let existing = self.store.get_by_identifier(event.company_id()).await?;
        let view = project(existing.as_ref(), event, self.replay_policy)?;

        tracing::debug!(
            existed = existing.is_some(),
            trade_started = view.trade_started,
            "company view projected"
        );

        self.store.upsert(view).await?;
        Ok(())
    }
}

#[async_trait]
impl<S: ViewStore> Projection for CompanyViewProjector<S> {
    fn name(&self) -> &'static str {
        "CompanyViewProjector"
    }

    async fn handle(&self, event: &CompanyEvent) -> Result<()> {
        self.apply(event).await
    }
}
