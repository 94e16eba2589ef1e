//! Domain entities and the CSV-backed dataset store.

pub mod sales_record;
pub mod store;

pub use sales_record::{Month, ParseMonthError, SalesRecord};
pub use store::{SalesStore, StoreError};
