//! Fixed deposit account.
//!
//! Funds are placed once, when the account is opened. Interest rate and term are decided at
//! the same moment and never change afterwards. Reported balance includes the interest.

use super::bank_account::BankAccount;
use super::number::AccountNumber;
use super::transactions::Transaction;
use super::Account;
use crate::errors::{AccountErr, Term};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Terms of a fixed deposit, chosen when the account is opened.
///
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedDepositTerms {
    /// interest in percent of the principal
    pub interest_rate: f64,
    /// duration of the deposit
    pub term_months: u32,
}

impl FixedDepositTerms {
    /// interest rate used when none is given
    pub const DEFAULT_INTEREST_RATE: f64 = 3.0;
    /// term used when none is given
    pub const DEFAULT_TERM_MONTHS: u32 = 6;

    /// change interest rate
    pub fn interest_rate(mut self, interest_rate: f64) -> Self {
        self.interest_rate = interest_rate;
        self
    }

    /// change term
    pub fn term_months(mut self, term_months: u32) -> Self {
        self.term_months = term_months;
        self
    }
}

impl Default for FixedDepositTerms {
    fn default() -> Self {
        Self {
            interest_rate: Self::DEFAULT_INTEREST_RATE,
            term_months: Self::DEFAULT_TERM_MONTHS,
        }
    }
}

/// Account that holds a principal for a fixed term and reports it with interest
#[derive(Debug, Clone)]
pub struct FixedDepositAccount {
    inner: BankAccount,
    terms: FixedDepositTerms,
}

impl FixedDepositAccount {
    /// Open with default [`FixedDepositTerms`]
    pub fn new(holder_name: impl Into<String>, initial_balance: f64) -> Self {
        Self::with_terms(holder_name, initial_balance, FixedDepositTerms::default())
    }

    /// Open with given interest rate and default term
    pub fn with_interest(
        holder_name: impl Into<String>,
        initial_balance: f64,
        interest_rate: f64,
    ) -> Self {
        let terms = FixedDepositTerms::default().interest_rate(interest_rate);
        Self::with_terms(holder_name, initial_balance, terms)
    }

    /// Open with explicit terms
    pub fn with_terms(
        holder_name: impl Into<String>,
        initial_balance: f64,
        terms: FixedDepositTerms,
    ) -> Self {
        let inner = BankAccount::with_balance(holder_name, initial_balance);
        debug!(
            account = %inner.account_number(),
            interest_rate = terms.interest_rate,
            term_months = terms.term_months,
            "fixed deposit terms set"
        );
        Self { inner, terms }
    }

    /// interest in percent
    pub fn interest_rate(&self) -> f64 {
        self.terms.interest_rate
    }

    /// duration of the deposit in months
    pub fn term_months(&self) -> u32 {
        self.terms.term_months
    }

    /// terms the account was opened with
    pub fn terms(&self) -> FixedDepositTerms {
        self.terms
    }

    /// stored balance, without interest
    pub fn principal(&self) -> f64 {
        self.inner.balance()
    }

    /// Interest rate is set when the account is opened, so this always fails with
    /// [`AccountErr::AlreadySet`] and nothing changes.
    pub fn set_interest_rate(&mut self, _interest_rate: f64) -> Result<(), AccountErr> {
        Err(AccountErr::AlreadySet(Term::InterestRate))
    }

    /// Term is set when the account is opened, so this always fails with
    /// [`AccountErr::AlreadySet`] and nothing changes.
    pub fn set_term_months(&mut self, _term_months: u32) -> Result<(), AccountErr> {
        Err(AccountErr::AlreadySet(Term::TermMonths))
    }
}

impl Account for FixedDepositAccount {
    fn holder_name(&self) -> &str {
        self.inner.holder_name()
    }

    fn account_number(&self) -> &AccountNumber {
        self.inner.account_number()
    }

    /// principal with interest, computed on every read
    fn balance(&self) -> f64 {
        let principal = self.principal();
        principal + principal * self.terms.interest_rate / 100.0
    }

    fn transactions(&self) -> &[Transaction] {
        self.inner.transactions()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at()
    }

    fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.inner.closed_at()
    }

    fn deposit(&mut self, _amount: f64) -> Result<(), AccountErr> {
        Err(AccountErr::Unsupported("deposits"))
    }

    fn withdraw(&mut self, _amount: f64) -> Result<(), AccountErr> {
        Err(AccountErr::Unsupported("withdrawals"))
    }

    fn close(&mut self) -> Result<(), AccountErr> {
        self.inner.close()
    }
}
