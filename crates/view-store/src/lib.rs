pub mod error;
pub mod memory;
pub mod page;
pub mod postgres;
pub mod store;
pub mod view;

pub use common::CompanyId;
pub use error::{Result, ViewStoreError};
pub use memory::InMemoryViewStore;
pub use page::PageRequest;
pub use postgres::PostgresViewStore;
pub use store::ViewStore;
pub use view::CompanyView;
