use std::fmt;

use rust_decimal::Decimal;

pub type AccountNumber = u32;
pub type Amount = Decimal;

#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    pub holder: String,
    pub number: AccountNumber,
    pub balance: Amount,
}

impl Account {
    pub fn new(holder: &str, number: AccountNumber, balance: Amount) -> Account {
        Account { holder: holder.to_owned(), number, balance }
    }
}

/// Two decimals, or every significant digit when the amount has finer ones.
/// `{:.2}` on a `Decimal` truncates, so it can't be used on its own.
pub fn format_amount(amount: Amount) -> String {
    let normalized = amount.normalize();
    if normalized.scale() > 2 {
        return normalized.to_string();
    }
    format!("{:.2}", normalized)
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account Holder: {}, Account Number: {}, Balance: {}",
            self.holder, self.number, format_amount(self.balance))
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account {} ({}: {})", self.number, self.holder, self.balance)
    }
}


#[cfg(test)]
mod tests {
    use super::{format_amount, Account};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn display_rounds_to_cents() {
        let account = Account::new("Bilbo", 12345, dec!(150));
        assert_eq!(account.to_string(), "Account Holder: Bilbo, Account Number: 12345, Balance: 150.00");
    }

    #[rstest]
    #[case(dec!(150), "150.00")]
    #[case(dec!(2.5), "2.50")]
    #[case(dec!(1.500), "1.50")]
    #[case(dec!(-3.1), "-3.10")]
    #[case(dec!(0.019), "0.019")]
    #[case(dec!(0.0050), "0.005")]
    fn amounts_keep_sub_cent_digits(#[case] amount: rust_decimal::Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[test]
    fn display_shows_sub_cent_balance() {
        let account = Account::new("Bilbo", 12345, dec!(0.005));
        assert_eq!(account.to_string(), "Account Holder: Bilbo, Account Number: 12345, Balance: 0.005");
    }

    #[test]
    fn debug_is_compact() {
        let account = Account::new("Frodo", 54321, dec!(2.5));
        assert_eq!(format!("{:?}", account), "Account 54321 (Frodo: 2.5)");
    }
}
