//! Read-only account snapshot

use crate::account::{Account, AccountNumber};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// summary of account balance and state
#[derive(Debug, Clone, Serialize, PartialEq)]
#[allow(missing_docs)]
pub struct AccountSummary {
    pub holder: String,
    pub number: AccountNumber,
    pub balance: f64,
    pub transactions: usize,
    pub closed: bool,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl<T: Account + ?Sized> From<&T> for AccountSummary {
    fn from(oth: &T) -> Self {
        Self {
            holder: oth.holder_name().to_owned(),
            number: oth.account_number().clone(),
            balance: oth.balance(),
            transactions: oth.transactions().len(),
            closed: oth.is_closed(),
            created_at: oth.created_at(),
            closed_at: oth.closed_at(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::AccountSummary;
    use crate::account::{Account, BankAccount, FixedDepositAccount};

    #[test]
    fn summary_of_bank_account() {
        let mut a = BankAccount::new_test_account();
        a.close().unwrap();

        let s = AccountSummary::from(&a);
        assert_eq!(s.holder, "Test Holder");
        assert_eq!(&s.number, a.account_number());
        assert_eq!(s.balance, 750.0);
        assert_eq!(s.transactions, 15);
        assert!(s.closed);
        assert_eq!(s.closed_at, a.closed_at());
    }

    #[test]
    fn summary_of_trait_objects() {
        let accounts: Vec<Box<dyn Account>> = vec![
            Box::new(BankAccount::with_balance("Ada", 100.0)),
            Box::new(FixedDepositAccount::with_interest("Bob", 100.0, 10.0)),
        ];

        let balances: Vec<f64> = accounts
            .iter()
            .map(|a| AccountSummary::from(a.as_ref()).balance)
            .collect();
        assert_eq!(balances, vec![100.0, 110.0]);
    }

    #[test]
    fn ser_output_format() -> anyhow::Result<()> {
        let a = FixedDepositAccount::new("Ada", 100.0);
        let v = serde_json::to_value(AccountSummary::from(&a))?;

        assert_eq!(v["holder"], "Ada");
        assert_eq!(v["number"], a.account_number().as_str());
        assert_eq!(v["balance"], 103.0);
        assert_eq!(v["transactions"], 0);
        assert_eq!(v["closed"], false);
        assert!(v["closed_at"].is_null());
        Ok(())
    }
}
