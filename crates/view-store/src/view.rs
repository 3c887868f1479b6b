//! The company read-model record.

use common::CompanyId;
use serde::{Deserialize, Serialize};

/// Denormalized, query-optimized view of a single company.
///
/// Exactly one view exists per company identifier. The identifier is the
/// primary key and never changes once the view is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyView {
    pub identifier: CompanyId,
    pub name: String,
    pub value: u64,
    pub amount_of_shares: u64,
    pub trade_started: bool,
}

impl CompanyView {
    /// Creates the view for a freshly created company. Trading has not
    /// started yet.
    pub fn new(
        identifier: CompanyId,
        name: impl Into<String>,
        value: u64,
        amount_of_shares: u64,
    ) -> Self {
        Self {
            identifier,
            name: name.into(),
            value,
            amount_of_shares,
            trade_started: false,
        }
    }
}
