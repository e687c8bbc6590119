pub mod account;
pub mod error;
pub mod store;

pub use account::{format_amount, Account, AccountNumber, Amount};
pub use error::{LedgerError, LedgerResult};
pub use store::AccountStore;
