//! Company lifecycle events.

pub mod events;

pub use events::{
    CompanyCreatedData, CompanyEvent, CompanyRenamedData, SharesIssuedData, TradeStartedData,
    ValueChangedData,
};
