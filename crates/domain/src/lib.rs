//! Domain layer for the company read model.
//!
//! This crate provides the events the query side consumes:
//! - [`DomainEvent`] trait for domain events
//! - [`CompanyEvent`], the closed set of company lifecycle events

pub mod company;
pub mod event;

pub use common::CompanyId;
pub use company::{
    CompanyCreatedData, CompanyEvent, CompanyRenamedData, SharesIssuedData, TradeStartedData,
    ValueChangedData,
};
pub use event::DomainEvent;
