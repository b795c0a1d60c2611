use super::balance::Balance;
use super::number::AccountNumber;
use super::transactions::*;
use super::Account;
use crate::{amount::Amount, errors::AccountErr};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Basic account: holder, balance and transactions history
#[derive(Debug, Clone)]
pub struct BankAccount {
    holder_name: String,
    account_number: AccountNumber,
    balance: Balance,
    trans_history: Vec<Transaction>,
    created_at: DateTime<Utc>,
    closed_at: Option<DateTime<Utc>>,
}

impl BankAccount {
    /// Open new empty [`BankAccount`] for `holder_name`
    pub fn new(holder_name: impl Into<String>) -> Self {
        Self::with_balance(holder_name, 0.0)
    }

    /// Open new [`BankAccount`] with `initial_balance`.
    ///
    /// Opening balance is not validated, negative value is accepted.
    pub fn with_balance(holder_name: impl Into<String>, initial_balance: f64) -> Self {
        let acc = Self {
            holder_name: holder_name.into(),
            account_number: AccountNumber::generate(),
            balance: Balance::opening(initial_balance),
            trans_history: Vec::new(),
            created_at: Utc::now(),
            closed_at: None,
        };

        if initial_balance < 0.0 {
            warn!(account = %acc.account_number, initial_balance, "account opened with negative balance");
        }
        debug!(account = %acc.account_number, initial_balance, "account opened");

        acc
    }

    #[cfg(test)]
    /// New account with balance 750.0 and 15 transactions in history
    pub fn new_test_account() -> Self {
        let mut a = BankAccount::new("Test Holder");
        for _ in 0..10 {
            a.deposit(100.0).unwrap();
        }

        for _ in 0..5 {
            a.withdraw(50.0).unwrap();
        }

        assert_eq!(a.balance(), 1000.0 - 250.0);

        a
    }

    fn record_deposit(&mut self, amount: f64) -> Result<(), AccountErr> {
        self.check_open()?;
        let amount = Amount::try_from(amount)?;

        self.balance.deposit(&amount);
        self.record_money_transaction(MoneyTrans::Deposit(amount));
        Ok(())
    }

    fn record_withdraw(&mut self, amount: f64) -> Result<(), AccountErr> {
        self.check_open()?;
        let amount = Amount::try_from(amount)?;

        self.balance.try_withdraw(&amount)?;
        self.record_money_transaction(MoneyTrans::Withdraw(amount));
        Ok(())
    }

    fn record_money_transaction(&mut self, money: MoneyTrans) {
        debug!(
            account = %self.account_number,
            transaction = ?money,
            balance = self.balance.current(),
            "transaction applied"
        );
        self.trans_history.push(Transaction::now(money));
    }

    fn check_open(&self) -> Result<(), AccountErr> {
        if self.closed_at.is_some() {
            Err(AccountErr::Closed)
        } else {
            Ok(())
        }
    }

    fn log_rejected(&self, op: &str, amount: f64, err: &AccountErr) {
        debug!(account = %self.account_number, op, amount, error = %err, "operation rejected");
    }
}

impl Account for BankAccount {
    fn holder_name(&self) -> &str {
        &self.holder_name
    }

    fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    fn balance(&self) -> f64 {
        self.balance.current()
    }

    fn transactions(&self) -> &[Transaction] {
        &self.trans_history
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }

    fn deposit(&mut self, amount: f64) -> Result<(), AccountErr> {
        self.record_deposit(amount)
            .inspect_err(|e| self.log_rejected("deposit", amount, e))
    }

    fn withdraw(&mut self, amount: f64) -> Result<(), AccountErr> {
        self.record_withdraw(amount)
            .inspect_err(|e| self.log_rejected("withdraw", amount, e))
    }

    fn close(&mut self) -> Result<(), AccountErr> {
        if self.closed_at.is_some() {
            return Err(AccountErr::AlreadyClosed);
        }

        self.closed_at = Some(Utc::now());
        debug!(account = %self.account_number, balance = self.balance.current(), "account closed");
        Ok(())
    }
}
