pub mod core;
pub mod backend;
pub mod config;
pub mod repl;

pub use crate::core::{Account, AccountNumber, AccountStore, Amount, LedgerError};
pub use crate::config::AppConfig;
pub use crate::repl::Session;
