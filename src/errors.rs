//! Possible errors

use crate::amount::NonPositiveAmountErr;
use std::fmt;
use thiserror::Error;

/// Group errors for account balance
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BalanceErr {
    #[error("insufficient funds available for this operation")]
    InsufficientFunds,
}

/// Fixed deposit term that is decided when the account is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    /// yearly interest in percent
    InterestRate,
    /// duration of the deposit
    TermMonths,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::InterestRate => f.write_str("interest rate"),
            Term::TermMonths => f.write_str("term in months"),
        }
    }
}

/// Group all errors that can occurs within account module
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountErr {
    #[error("invalid amount")]
    Amount(#[from] NonPositiveAmountErr),
    #[error("account is closed")]
    Closed,
    #[error("account money change error")]
    AccMoney(#[from] BalanceErr),
    #[error("account is already closed")]
    AlreadyClosed,
    #[error("{0} can only be set once")]
    AlreadySet(Term),
    #[error("{0} are not allowed for fixed deposit accounts")]
    Unsupported(&'static str),
}

impl AccountErr {
    /// `true` when the operation was rejected because of its input amount or because the
    /// account is closed.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, AccountErr::Amount(_) | AccountErr::Closed)
    }
}

#[cfg(test)]
mod test {
    use super::{AccountErr, BalanceErr, Term};
    use crate::amount::NonPositiveAmountErr;

    #[test]
    fn invalid_operation_groups_amount_and_closed() {
        assert!(AccountErr::from(NonPositiveAmountErr).is_invalid_operation());
        assert!(AccountErr::Closed.is_invalid_operation());

        assert!(!AccountErr::from(BalanceErr::InsufficientFunds).is_invalid_operation());
        assert!(!AccountErr::AlreadyClosed.is_invalid_operation());
        assert!(!AccountErr::AlreadySet(Term::TermMonths).is_invalid_operation());
        assert!(!AccountErr::Unsupported("deposits").is_invalid_operation());
    }

    #[test]
    fn messages() {
        assert_eq!(
            AccountErr::AlreadySet(Term::InterestRate).to_string(),
            "interest rate can only be set once"
        );
        assert_eq!(
            AccountErr::Unsupported("withdrawals").to_string(),
            "withdrawals are not allowed for fixed deposit accounts"
        );
    }
}
