use thiserror::Error;

use crate::core::{Amount, AccountNumber};

#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    /// Occurs when an operation references an account number
    /// which is not registered in the store.
    #[error("no such account: {0}")]
    AccountNotFound(AccountNumber),
    /// Occurs when a deposit or withdrawal amount is zero or negative.
    #[error("invalid amount: {0}")]
    InvalidAmount(Amount),
    /// Occurs when a withdrawal asks for more than the account holds.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Amount,
        available: Amount
    },
    /// Occurs when a deposit would push the balance past what
    /// an `Amount` can represent.
    #[error("balance overflow: {balance} + {amount}")]
    BalanceOverflow {
        balance: Amount,
        amount: Amount
    },
    /// Occurs when every five-digit account number is already taken.
    #[error("no free account numbers left")]
    NumberSpaceExhausted
}

pub type LedgerResult<T> = Result<T, LedgerError>;
