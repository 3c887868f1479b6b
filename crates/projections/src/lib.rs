//! Read model projection and queries for the CQRS query side.
//!
//! This crate provides the query side of the CQRS pattern for companies:
//! - [`Projection`] trait for processing events into read models
//! - [`CompanyViewProjector`] folding company events into [`CompanyView`]s
//! - [`ProjectionProcessor`] for delivering events to registered projections
//! - [`CompanyQueryService`] answering by-id and paginated list queries

pub mod error;
pub mod processor;
pub mod projection;
pub mod projector;
pub mod query;
pub mod query_service;

pub use error::{ProjectionError, Result};
pub use processor::ProjectionProcessor;
pub use projection::Projection;
pub use projector::{CompanyViewProjector, ReplayPolicy, UnknownReplayPolicy, project};
pub use query::{CompanyByIdQuery, DEFAULT_MAX_PAGE_SIZE, FindAllCompaniesQuery};
pub use query_service::CompanyQueryService;
pub use view_store::CompanyView;

#[cfg(test)]
pub(crate) mod test_support;
