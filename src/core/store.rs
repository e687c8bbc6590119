use std::collections::HashMap;
use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;

use crate::core::account::{Account, AccountNumber, Amount};
use crate::core::error::{LedgerError, LedgerResult};

type AccountMap = HashMap<AccountNumber, Account>;

/// All accounts known to the current run, keyed by account number.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountStore {
    accounts: AccountMap,
}

impl AccountStore {
    /// Newly created accounts get a random five-digit number from this range.
    pub const NUMBER_RANGE: RangeInclusive<AccountNumber> = 10000..=99999;

    pub fn new() -> AccountStore {
        return AccountStore { accounts: HashMap::new() };
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn get(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    /// Inserts an already numbered account, e.g. one read back from disk.
    /// Returns false and leaves the store untouched if the number is taken.
    pub fn insert(&mut self, account: Account) -> bool {
        if self.accounts.contains_key(&account.number) {
            return false;
        }
        self.accounts.insert(account.number, account);
        return true;
    }

    pub fn create(&mut self, holder: &str, initial_balance: Amount) -> LedgerResult<AccountNumber> {
        self.create_with_rng(&mut rand::thread_rng(), holder, initial_balance)
    }

    pub fn create_with_rng<R: Rng>(&mut self, rng: &mut R, holder: &str, initial_balance: Amount)
        -> LedgerResult<AccountNumber> {
        if self.free_numbers() == 0 {
            return Err(LedgerError::NumberSpaceExhausted);
        }

        let number = loop {
            let candidate = rng.gen_range(Self::NUMBER_RANGE);
            if !self.accounts.contains_key(&candidate) {
                break candidate;
            }
            debug!("account number {} already taken, retrying", candidate);
        };

        let account = Account::new(holder, number, initial_balance);
        debug!("created {}", account);
        self.accounts.insert(number, account);
        return Ok(number);
    }

    pub fn deposit(&mut self, number: AccountNumber, amount: Amount) -> LedgerResult<Amount> {
        let account = self.get_mut(number)?;
        if amount <= Amount::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }

        account.balance = account.balance.checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow { balance: account.balance, amount })?;
        debug!("deposited {} into {}, balance now {}", amount, number, account.balance);
        return Ok(account.balance);
    }

    pub fn withdraw(&mut self, number: AccountNumber, amount: Amount) -> LedgerResult<Amount> {
        let account = self.get_mut(number)?;
        if amount <= Amount::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if amount > account.balance {
            return Err(LedgerError::InsufficientFunds { requested: amount, available: account.balance });
        }

        account.balance -= amount;
        debug!("withdrew {} from {}, balance now {}", amount, number, account.balance);
        return Ok(account.balance);
    }

    pub fn check_balance(&self, number: AccountNumber) -> LedgerResult<&Account> {
        self.accounts.get(&number).ok_or(LedgerError::AccountNotFound(number))
    }

    /// Every account ordered by number. An empty vector means there is nothing to show.
    pub fn list_all(&self) -> Vec<&Account> {
        let mut all: Vec<&Account> = self.accounts.values().collect();
        all.sort_by_key(|account| account.number);
        return all;
    }

    fn get_mut(&mut self, number: AccountNumber) -> LedgerResult<&mut Account> {
        self.accounts.get_mut(&number).ok_or(LedgerError::AccountNotFound(number))
    }

    fn free_numbers(&self) -> usize {
        let capacity = (Self::NUMBER_RANGE.end() - Self::NUMBER_RANGE.start() + 1) as usize;
        let used = self.accounts.keys()
            .filter(|number| Self::NUMBER_RANGE.contains(*number))
            .count();
        return capacity - used;
    }
}
