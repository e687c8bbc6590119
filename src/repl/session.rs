use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use colored::Colorize;
use log::{debug, warn};

use crate::backend::{LoadOutcome, StoreBackend};
use crate::core::{format_amount, AccountNumber, AccountStore, Amount, LedgerError};
use crate::repl::menu::MenuChoice;

enum Flow {
    Continue,
    Exit
}

enum Input<T> {
    Value(T),
    /// Already reported to the user, back to the menu.
    Rejected,
    Eof
}

/// The interactive menu loop. Owns the store for the duration of the run
/// and hands it to the backend when the user exits or input runs out.
pub struct Session<'a, B: StoreBackend, R: BufRead, W: Write> {
    store: AccountStore,
    backend: &'a B,
    input: R,
    output: W,
    currency: String
}

impl<'a, B: StoreBackend, R: BufRead, W: Write> Session<'a, B, R, W> {
    pub fn new(store: AccountStore, backend: &'a B, input: R, output: W) -> Self {
        Session { store, backend, input, output, currency: crate::config::DEFAULT_CURRENCY_SYMBOL.to_owned() }
    }

    /// Loads the saved accounts through `backend` and tells the user how that went.
    pub fn open(backend: &'a B, input: R, output: W) -> io::Result<Self> {
        let outcome = backend.load();
        let mut session = Session::new(AccountStore::new(), backend, input, output);

        match &outcome {
            LoadOutcome::Restored(store) =>
                session.success(format!("Accounts loaded successfully ({} found).", store.len()))?,
            LoadOutcome::Missing =>
                writeln!(session.output, "No previous accounts found. Starting fresh.")?,
            LoadOutcome::Unreadable(err) =>
                writeln!(session.output, "Could not read previous accounts ({}). Starting fresh.", err)?
        }

        session.store = outcome.into_store();
        return Ok(session);
    }

    pub fn with_currency(mut self, symbol: &str) -> Self {
        self.currency = symbol.to_owned();
        self
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    pub fn into_store(self) -> AccountStore {
        self.store
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    debug!("input closed, exiting");
                    writeln!(self.output)?;
                    return self.exit();
                }
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Create) => self.create_account()?,
                Ok(MenuChoice::Deposit) => self.deposit()?,
                Ok(MenuChoice::Withdraw) => self.withdraw()?,
                Ok(MenuChoice::CheckBalance) => self.check_balance()?,
                Ok(MenuChoice::ListAll) => self.list_all()?,
                Ok(MenuChoice::Exit) => Flow::Exit,
                Err(err) => {
                    debug!("bad menu selection: {}", err);
                    self.failure("Invalid option. Try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                return self.exit();
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "Bank Account System".bold())?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        write!(self.output, "Choose an option: ")?;
        self.output.flush()
    }

    fn create_account(&mut self) -> io::Result<Flow> {
        let holder = match self.prompt("Enter Account Holder's Name")? {
            Some(line) => line.trim().to_owned(),
            None => return Ok(Flow::Exit)
        };
        let initial_balance: Amount = match self.prompt_amount("Enter Initial Deposit")? {
            Input::Value(amount) => amount,
            Input::Rejected => return Ok(Flow::Continue),
            Input::Eof => return Ok(Flow::Exit)
        };

        match self.store.create(&holder, initial_balance) {
            Ok(number) => self.success(format!("Account Created! Account Number: {}", number))?,
            Err(err) => self.report(err)?
        }
        Ok(Flow::Continue)
    }

    fn deposit(&mut self) -> io::Result<Flow> {
        let number = match self.prompt_account()? {
            Input::Value(number) => number,
            Input::Rejected => return Ok(Flow::Continue),
            Input::Eof => return Ok(Flow::Exit)
        };
        let amount: Amount = match self.prompt_amount("Enter Amount to Deposit")? {
            Input::Value(amount) => amount,
            Input::Rejected => return Ok(Flow::Continue),
            Input::Eof => return Ok(Flow::Exit)
        };

        match self.store.deposit(number, amount) {
            Ok(balance) => self.success(format!("Deposit Successful! New Balance: {}", self.money(balance)))?,
            Err(LedgerError::InvalidAmount(_)) => self.failure("Invalid deposit amount.")?,
            Err(LedgerError::BalanceOverflow { .. }) =>
                self.failure("Deposit refused: the balance would exceed the largest supported amount.")?,
            Err(err) => self.report(err)?
        }
        Ok(Flow::Continue)
    }

    fn withdraw(&mut self) -> io::Result<Flow> {
        let number = match self.prompt_account()? {
            Input::Value(number) => number,
            Input::Rejected => return Ok(Flow::Continue),
            Input::Eof => return Ok(Flow::Exit)
        };
        let amount: Amount = match self.prompt_amount("Enter Amount to Withdraw")? {
            Input::Value(amount) => amount,
            Input::Rejected => return Ok(Flow::Continue),
            Input::Eof => return Ok(Flow::Exit)
        };

        match self.store.withdraw(number, amount) {
            Ok(balance) => self.success(format!("Withdrawal Successful! New Balance: {}", self.money(balance)))?,
            Err(LedgerError::InvalidAmount(_)) => self.failure("Invalid withdrawal amount.")?,
            Err(LedgerError::InsufficientFunds { requested, available }) => {
                let msg = format!("Insufficient funds: requested {}, available {}.",
                    self.money(requested), self.money(available));
                self.failure(msg)?
            },
            Err(err) => self.report(err)?
        }
        Ok(Flow::Continue)
    }

    fn check_balance(&mut self) -> io::Result<Flow> {
        let number = match self.prompt_account()? {
            Input::Value(number) => number,
            Input::Rejected => return Ok(Flow::Continue),
            Input::Eof => return Ok(Flow::Exit)
        };

        let line = match self.store.check_balance(number) {
            Ok(account) => format!("Account Holder: {} | Account Number: {} | Balance: {}",
                account.holder, account.number, self.money(account.balance)),
            Err(err) => {
                self.report(err)?;
                return Ok(Flow::Continue);
            }
        };
        writeln!(self.output, "{}", line)?;
        Ok(Flow::Continue)
    }

    fn list_all(&mut self) -> io::Result<Flow> {
        let lines: Vec<String> = self.store.list_all().into_iter()
            .map(|account| format!("Account Holder: {}, Account Number: {}, Balance: {}",
                account.holder, account.number, self.money(account.balance)))
            .collect();

        if lines.is_empty() {
            writeln!(self.output, "No accounts available.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "{}", "All Bank Accounts:".bold())?;
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> io::Result<()> {
        match self.backend.save(&self.store) {
            Ok(()) => self.success("Accounts saved successfully.")?,
            Err(err) => {
                warn!("save failed: {}", err);
                self.failure(format!("Error saving accounts: {}", err))?
            }
        }
        writeln!(self.output, "Exiting... Thank you for using our system!")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_owned()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_parsed<T: FromStr>(&mut self, text: &str, expected: &str) -> io::Result<Input<T>> {
        let line = match self.prompt(text)? {
            Some(line) => line,
            None => return Ok(Input::Eof)
        };
        match line.trim().parse::<T>() {
            Ok(value) => Ok(Input::Value(value)),
            Err(_) => {
                self.failure(format!("Invalid input: expected {}, got {:?}.", expected, line.trim()))?;
                Ok(Input::Rejected)
            }
        }
    }

    /// Amounts are whole cents at most; trailing zeros like `1.500` are fine.
    fn prompt_amount(&mut self, text: &str) -> io::Result<Input<Amount>> {
        let input = self.prompt_parsed::<Amount>(text, "an amount")?;
        if let Input::Value(amount) = input {
            if amount.normalize().scale() > 2 {
                self.failure(format!("Invalid input: amounts have at most two decimal places, got {}.", amount))?;
                return Ok(Input::Rejected);
            }
        }
        Ok(input)
    }

    /// Asks for an account number and makes sure it exists before going on.
    fn prompt_account(&mut self) -> io::Result<Input<AccountNumber>> {
        let input = self.prompt_parsed::<AccountNumber>("Enter Account Number", "an account number")?;
        if let Input::Value(number) = input {
            if self.store.get(number).is_none() {
                self.report(LedgerError::AccountNotFound(number))?;
                return Ok(Input::Rejected);
            }
        }
        Ok(input)
    }

    fn report(&mut self, err: LedgerError) -> io::Result<()> {
        match err {
            LedgerError::AccountNotFound(_) => self.failure("Account not found!"),
            LedgerError::NumberSpaceExhausted => self.failure("No free account numbers left."),
            other => self.failure(format!("Operation failed: {}.", other))
        }
    }

    fn money(&self, amount: Amount) -> String {
        format!("{}{}", self.currency, format_amount(amount))
    }

    fn success(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", msg.to_string().green())
    }

    fn failure(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", msg.to_string().bright_red())
    }
}
