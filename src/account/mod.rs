//! Account traits and structs
use crate::errors::AccountErr;
use chrono::{DateTime, Utc};

pub(crate) mod balance;
pub(crate) mod bank_account;
pub(crate) mod fixed_deposit;
pub(crate) mod number;
pub(crate) mod transactions;

pub use bank_account::BankAccount;
pub use fixed_deposit::{FixedDepositAccount, FixedDepositTerms};
pub use number::AccountNumber;
pub use transactions::{MoneyTrans, Transaction};

/// Represent basic account information, balance and the operations every account kind answers.
///
/// An account is either open or closed. The only transition is open to closed, made by
/// [`Account::close`]. Rejected operations never change balance or history.
pub trait Account {
    /// name of the account holder
    fn holder_name(&self) -> &str;
    /// number assigned when the account was opened
    fn account_number(&self) -> &AccountNumber;
    /// balance reported to the holder
    fn balance(&self) -> f64;
    /// applied transactions, oldest first
    fn transactions(&self) -> &[Transaction];
    /// when the account was opened
    fn created_at(&self) -> DateTime<Utc>;
    /// when the account was closed, `None` while it is open
    fn closed_at(&self) -> Option<DateTime<Utc>>;

    /// is account closed
    fn is_closed(&self) -> bool {
        self.closed_at().is_some()
    }

    /// add `amount` to the balance
    fn deposit(&mut self, amount: f64) -> Result<(), AccountErr>;
    /// take `amount` from the balance
    fn withdraw(&mut self, amount: f64) -> Result<(), AccountErr>;
    /// close account, it can not be reopened
    fn close(&mut self) -> Result<(), AccountErr>;
}
