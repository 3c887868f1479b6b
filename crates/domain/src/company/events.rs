//! Company domain events.

use common::CompanyId;
use serde::{Deserialize, Serialize};

use crate::event::DomainEvent;

/// Events that can occur on a company aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CompanyEvent {
    /// Company was created.
    CompanyCreated(CompanyCreatedData),

    /// Trading in the company's shares was opened.
    TradeStarted(TradeStartedData),

    /// Company valuation changed.
    ValueChanged(ValueChangedData),

    /// Outstanding share count changed.
    SharesIssued(SharesIssuedData),

    /// Company was renamed.
    CompanyRenamed(CompanyRenamedData),
}

impl DomainEvent for CompanyEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CompanyEvent::CompanyCreated(_) => "CompanyCreated",
            CompanyEvent::TradeStarted(_) => "TradeStarted",
            CompanyEvent::ValueChanged(_) => "ValueChanged",
            CompanyEvent::SharesIssued(_) => "SharesIssued",
            CompanyEvent::CompanyRenamed(_) => "CompanyRenamed",
        }
    }
}

impl CompanyEvent {
    /// Returns the identifier of the company this event belongs to.
    pub fn company_id(&self) -> &CompanyId {
        match self {
            CompanyEvent::CompanyCreated(data) => &data.company_id,
            CompanyEvent::TradeStarted(data) => &data.company_id,
            CompanyEvent::ValueChanged(data) => &data.company_id,
            CompanyEvent::SharesIssued(data) => &data.company_id,
            CompanyEvent::CompanyRenamed(data) => &data.company_id,
        }
    }
}

/// Data for CompanyCreated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCreatedData {
    /// The identifier assigned to the new company.
    pub company_id: CompanyId,

    /// Company name.
    pub name: String,

    /// Initial valuation.
    pub value: u64,

    /// Initial number of outstanding shares.
    pub amount_of_shares: u64,
}

/// Data for TradeStarted event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeStartedData {
    pub company_id: CompanyId,
}

/// Data for ValueChanged event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueChangedData {
    pub company_id: CompanyId,

    /// The new valuation (absolute, not a delta).
    pub value: u64,
}

/// Data for SharesIssued event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharesIssuedData {
    pub company_id: CompanyId,

    /// Total outstanding shares after the issue (absolute, not a delta).
    pub amount_of_shares: u64,
}

/// Data for CompanyRenamed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRenamedData {
    pub company_id: CompanyId,
    pub name: String,
}

// Convenience constructors for events
impl CompanyEvent {
    /// Creates a CompanyCreated event.
    pub fn company_created(
        company_id: CompanyId,
        name: impl Into<String>,
        value: u64,
        amount_of_shares: u64,
    ) -> Self {
        CompanyEvent::CompanyCreated(CompanyCreatedData {
            company_id,
            name: name.into(),
            value,
            amount_of_shares,
        })
    }

    /// Creates a TradeStarted event.
    pub fn trade_started(company_id: CompanyId) -> Self {
        CompanyEvent::TradeStarted(TradeStartedData { company_id })
    }

    /// Creates a ValueChanged event.
    pub fn value_changed(company_id: CompanyId, value: u64) -> Self {
        CompanyEvent::ValueChanged(ValueChangedData { company_id, value })
    }

    /// Creates a SharesIssued event.
    pub fn shares_issued(company_id: CompanyId, amount_of_shares: u64) -> Self {
        CompanyEvent::SharesIssued(SharesIssuedData {
            company_id,
            amount_of_shares,
        })
    }

    /// Creates a CompanyRenamed event.
    pub fn company_renamed(company_id: CompanyId, name: impl Into<String>) -> Self {
        CompanyEvent::CompanyRenamed(CompanyRenamedData {
            company_id,
            name: name.into(),
        })
    }
}
