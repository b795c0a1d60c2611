//! Protect before using non-positive amount for deposits and withdraws.

use std::{borrow::Borrow, fmt, ops::Deref};

use serde::Serialize;
use thiserror::Error;

/// Represent positive, finite amount of money moved by a single transaction
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(into = "f64")]
pub struct Amount(f64);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("amount must be a positive finite number")]
/// represent error when transaction want to operate on zero, negative or not finite amount
pub struct NonPositiveAmountErr;

impl TryFrom<f64> for Amount {
    type Error = NonPositiveAmountErr;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // NaN fails both comparisons
        if value > 0.0 && value.is_finite() {
            Ok(Self(value))
        } else {
            Err(NonPositiveAmountErr)
        }
    }
}

impl From<Amount> for f64 {
    fn from(this: Amount) -> Self {
        this.0
    }
}

impl Borrow<f64> for Amount {
    fn borrow(&self) -> &f64 {
        &self.0
    }
}

impl Deref for Amount {
    type Target = f64;
    fn deref(&self) -> &Self::Target {
        self.borrow()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::{Amount, NonPositiveAmountErr};

    #[test]
    fn accepts_positive() {
        let a = Amount::try_from(0.01).unwrap();
        assert_eq!(*a, 0.01);
    }

    #[test]
    fn rejects_zero_negative_and_nan() {
        for v in [0.0, -0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(Amount::try_from(v), Err(NonPositiveAmountErr), "{v}");
        }
    }

    #[test]
    fn message_names_finite() {
        assert_eq!(
            NonPositiveAmountErr.to_string(),
            "amount must be a positive finite number"
        );
    }

    #[test]
    fn serialize_as_plain_number() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_string(&Amount::try_from(12.5)?)?, "12.5");
        Ok(())
    }
}
