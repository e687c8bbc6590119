mod json_store;
mod interface;

pub use interface::{StoreBackend, LoadOutcome, Result, BackendError};
pub use json_store::{JsonStore, SCHEMA_VERSION};
