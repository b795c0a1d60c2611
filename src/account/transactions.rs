//! Represents transactions
use crate::amount::Amount;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Represent a single applied account transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    #[serde(flatten)]
    money: MoneyTrans,
    at: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn now(money: MoneyTrans) -> Self {
        Self {
            money,
            at: Utc::now(),
        }
    }

    /// what happened to the balance
    pub fn money(&self) -> &MoneyTrans {
        &self.money
    }

    /// when the transaction was applied
    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, amount) = match &self.money {
            MoneyTrans::Deposit(amount) => ("Deposit", amount),
            MoneyTrans::Withdraw(amount) => ("Withdraw", amount),
        };
        write!(f, "{kind} ${amount} at {}", self.at.to_rfc3339())
    }
}

/// Money transaction represent withdraw or deposit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "amount", rename_all = "lowercase")]
pub enum MoneyTrans {
    /// increase balance
    Deposit(Amount),
    /// decrease balance
    Withdraw(Amount),
}

impl MoneyTrans {
    /// amount moved, always positive
    pub fn amount(&self) -> Amount {
        match self {
            MoneyTrans::Deposit(amount) | MoneyTrans::Withdraw(amount) => *amount,
        }
    }
}
