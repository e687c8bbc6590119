use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Deposit,
    Withdraw,
    CheckBalance,
    ListAll,
    Exit
}

#[derive(Debug, Error, PartialEq)]
pub enum MenuError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("no such option: {0}")]
    UnknownOption(u32)
}

impl MenuChoice {
    /// In the order they are shown, numbered from 1.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Create,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::CheckBalance,
        MenuChoice::ListAll,
        MenuChoice::Exit
    ];

    pub fn number(self) -> u32 {
        match self {
            MenuChoice::Create => 1,
            MenuChoice::Deposit => 2,
            MenuChoice::Withdraw => 3,
            MenuChoice::CheckBalance => 4,
            MenuChoice::ListAll => 5,
            MenuChoice::Exit => 6
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Create => "Create Account",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::CheckBalance => "Check Balance",
            MenuChoice::ListAll => "Display All Accounts",
            MenuChoice::Exit => "Exit"
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number: u32 = trimmed.parse()
            .map_err(|_| MenuError::NotANumber(trimmed.to_owned()))?;
        MenuChoice::ALL.into_iter()
            .find(|choice| choice.number() == number)
            .ok_or(MenuError::UnknownOption(number))
    }
}


#[cfg(test)]
mod tests {
    use super::{MenuChoice, MenuError};
    use rstest::rstest;

    #[rstest]
    #[case("1", MenuChoice::Create)]
    #[case("2", MenuChoice::Deposit)]
    #[case(" 3 ", MenuChoice::Withdraw)]
    #[case("4\n", MenuChoice::CheckBalance)]
    #[case("5", MenuChoice::ListAll)]
    #[case("6", MenuChoice::Exit)]
    fn parses_menu_numbers(#[case] input: &str, #[case] expected: MenuChoice) {
        assert_eq!(input.parse::<MenuChoice>(), Ok(expected));
    }

    #[rstest]
    #[case("0", MenuError::UnknownOption(0))]
    #[case("7", MenuError::UnknownOption(7))]
    #[case("two", MenuError::NotANumber("two".to_owned()))]
    #[case("", MenuError::NotANumber("".to_owned()))]
    #[case("-1", MenuError::NotANumber("-1".to_owned()))]
    fn rejects_anything_else(#[case] input: &str, #[case] expected: MenuError) {
        assert_eq!(input.parse::<MenuChoice>(), Err(expected));
    }

    #[test]
    fn displays_numbered_label() {
        assert_eq!(MenuChoice::CheckBalance.to_string(), "4. Check Balance");
    }
}
