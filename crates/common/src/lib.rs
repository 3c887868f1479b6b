//! Shared types for the company read model.

pub mod types;

pub use types::CompanyId;
