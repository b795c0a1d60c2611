use crate::{amount::Amount, errors::BalanceErr};

/// Represents current account balance
#[derive(Debug, Clone, Default)]
pub struct Balance {
    // opening balance is taken as-is, so this can be negative
    current: f64,
}

impl Balance {
    pub fn opening(current: f64) -> Self {
        Self { current }
    }

    pub fn deposit(&mut self, amount: &Amount) {
        self.current += **amount;
    }

    pub fn try_withdraw(&mut self, amount: &Amount) -> Result<(), BalanceErr> {
        // NaN balance never covers a withdraw
        if self.current.is_nan() || self.current < **amount {
            return Err(BalanceErr::InsufficientFunds);
        }

        self.current -= **amount;
        Ok(())
    }

    pub fn current(&self) -> f64 {
        self.current
    }
}

#[cfg(test)]
mod test {
    use super::Balance;
    use crate::{amount::Amount, errors::BalanceErr};

    fn amount(v: f64) -> Amount {
        Amount::try_from(v).unwrap()
    }

    #[test]
    fn withdraw_whole_balance() {
        let mut b = Balance::opening(50.0);
        b.try_withdraw(&amount(50.0)).unwrap();
        assert_eq!(b.current(), 0.0);
    }

    #[test]
    fn preventing_debt_withdraw() {
        let mut b = Balance::default();
        b.deposit(&amount(10.0));

        assert_eq!(
            b.try_withdraw(&amount(10.5)),
            Err(BalanceErr::InsufficientFunds)
        );
        assert_eq!(b.current(), 10.0);
    }

    #[test]
    fn negative_opening_balance_blocks_withdraw() {
        let mut b = Balance::opening(-20.0);
        b.try_withdraw(&amount(1.0)).unwrap_err();

        b.deposit(&amount(25.0));
        b.try_withdraw(&amount(5.0)).unwrap();
        assert_eq!(b.current(), 0.0);
    }

    #[test]
    fn nan_opening_balance_blocks_withdraw() {
        let mut b = Balance::opening(f64::NAN);

        assert_eq!(
            b.try_withdraw(&amount(10.0)),
            Err(BalanceErr::InsufficientFunds)
        );
        assert!(b.current().is_nan());
    }
}
